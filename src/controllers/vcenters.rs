use crate::controllers::collect_values;
use crate::core::client::{ApiClient, ApiRequest};
use crate::core::paginator::Paginator;
use crate::core::{ListEnvelope, ListParams, ListResource, ReadResource};
use crate::models::VCenter;
use crate::utils::error::Result;
use async_trait::async_trait;

pub const VCENTERS_MEDIA_TYPE: &str = "application/api.clumio.vmware-vcenters=v1+json";

#[derive(Debug, Clone)]
pub struct VCentersController {
    client: ApiClient,
}

impl VCentersController {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_vmware_vcenters(&self, params: &ListParams) -> Result<ListEnvelope<VCenter>> {
        self.client.execute(self.list_request(params)).await
    }

    pub fn pages(&self, params: &ListParams) -> Paginator<VCenter> {
        Paginator::new(self.client.clone(), self.list_request(params))
    }

    pub async fn read_vmware_vcenter(&self, vcenter_id: &str) -> Result<VCenter> {
        let request = ApiRequest::get("/datasources/vmware/vcenters/{vcenter_id}")
            .path_param("vcenter_id", vcenter_id)
            .accept(VCENTERS_MEDIA_TYPE);
        self.client.execute(request).await
    }

    fn list_request(&self, params: &ListParams) -> ApiRequest {
        ApiRequest::get("/datasources/vmware/vcenters")
            .list_params(params)
            .accept(VCENTERS_MEDIA_TYPE)
    }
}

#[async_trait]
impl ListResource for VCentersController {
    fn resource_name(&self) -> &'static str {
        "vcenters"
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
impl ReadResource for VCentersController {
    async fn read_value(&self, id: &str) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.read_vmware_vcenter(id).await?)?)
    }
}
