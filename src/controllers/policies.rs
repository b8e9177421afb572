use crate::controllers::collect_values;
use crate::core::client::{ApiClient, ApiRequest};
use crate::core::paginator::Paginator;
use crate::core::{ListEnvelope, ListParams, ListResource, ReadResource};
use crate::models::Policy;
use crate::utils::error::Result;
use async_trait::async_trait;

pub const POLICY_DEFINITIONS_MEDIA_TYPE: &str = "application/api.clumio.policy-definitions=v1+json";

#[derive(Debug, Clone)]
pub struct PoliciesController {
    client: ApiClient,
}

impl PoliciesController {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_policy_definitions(&self, params: &ListParams) -> Result<ListEnvelope<Policy>> {
        self.client.execute(self.list_request(params)).await
    }

    pub fn pages(&self, params: &ListParams) -> Paginator<Policy> {
        Paginator::new(self.client.clone(), self.list_request(params))
    }

    pub async fn read_policy_definition(&self, policy_id: &str) -> Result<Policy> {
        let request = ApiRequest::get("/policies/definitions/{policy_id}")
            .path_param("policy_id", policy_id)
            .accept(POLICY_DEFINITIONS_MEDIA_TYPE);
        self.client.execute(request).await
    }

    fn list_request(&self, params: &ListParams) -> ApiRequest {
        ApiRequest::get("/policies/definitions")
            .list_params(params)
            .accept(POLICY_DEFINITIONS_MEDIA_TYPE)
    }
}

#[async_trait]
impl ListResource for PoliciesController {
    fn resource_name(&self) -> &'static str {
        "policies"
    }

    async fn list_values(
        &self,
        params: &ListParams,
        max_items: Option<usize>,
    ) -> Result<Vec<serde_json::Value>> {
        collect_values(self.pages(params), max_items).await
    }
}

#[async_trait]
impl ReadResource for PoliciesController {
    async fn read_value(&self, id: &str) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.read_policy_definition(id).await?)?)
    }
}
