use crate::controllers::collect_values;
use crate::core::client::{ApiClient, ApiRequest};
use crate::core::paginator::Paginator;
use crate::core::{ListEnvelope, ListParams, ListResource, ReadResource};
use crate::models::{CreateOrganizationalUnitRequest, OrganizationalUnit, TaskReference};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const ORGANIZATIONAL_UNITS_MEDIA_TYPE: &str =
    "application/api.clumio.organizational-units=v1+json";

#[derive(Debug, Clone)]
pub struct OrganizationalUnitsController {
    client: ApiClient,
}

impl OrganizationalUnitsController {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_organizational_units(
        &self,
        params: &ListParams,
    ) -> Result<ListEnvelope<OrganizationalUnit>> {
        self.client.execute(self.list_request(params)).await
    }

    pub fn pages(&self, params: &ListParams) -> Paginator<OrganizationalUnit> {
        Paginator::new(self.client.clone(), self.list_request(params))
    }

    pub async fn read_organizational_unit(&self, id: &str) -> Result<OrganizationalUnit> {
        let request = ApiRequest::get("/organizational-units/{id}")
            .path_param("id", id)
            .accept(ORGANIZATIONAL_UNITS_MEDIA_TYPE);
        self.client.execute(request).await
    }

    pub async fn create_organizational_unit(
        &self,
        body: &CreateOrganizationalUnitRequest,
    ) -> Result<OrganizationalUnit> {
        let request = ApiRequest::post("/organizational-units")
            .accept(ORGANIZATIONAL_UNITS_MEDIA_TYPE)
            .json_body(body)?;
        self.client.execute(request).await
    }

    /// 刪除 OU；有子項目需清理時回傳背景工作，否則 (204) 回傳 `None`
    pub async fn delete_organizational_unit(&self, id: &str) -> Result<Option<TaskReference>> {
        let request = ApiRequest::delete("/organizational-units/{id}")
            .path_param("id", id)
            .accept(ORGANIZATIONAL_UNITS_MEDIA_TYPE);
        self.client.execute_optional(request).await
    }

    fn list_request(&self, params: &ListParams) -> ApiRequest {
        ApiRequest::get("/organizational-units")
            .list_params(params)
            .accept(ORGANIZATIONAL_UNITS_MEDIA_TYPE)
    }
}

#[async_trait]
impl ListResource for OrganizationalUnitsController {
    fn resource_name(&self) -> &'static str {
        "organizational-units"
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
impl ReadResource for OrganizationalUnitsController {
    async fn read_value(&self, id: &str) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.read_organizational_unit(id).await?)?)
    }
}
