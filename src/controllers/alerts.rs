use crate::controllers::collect_values;
use crate::core::client::{ApiClient, ApiRequest};
use crate::core::paginator::Paginator;
use crate::core::{ListEnvelope, ListParams, ListResource, ReadResource};
use crate::models::{IndividualAlert, UpdateIndividualAlertRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const INDIVIDUAL_ALERTS_MEDIA_TYPE: &str = "application/api.clumio.individual-alerts=v1+json";

#[derive(Debug, Clone)]
pub struct AlertsController {
    client: ApiClient,
}

impl AlertsController {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_individual_alerts(
        &self,
        params: &ListParams,
    ) -> Result<ListEnvelope<IndividualAlert>> {
        self.client.execute(self.list_request(params)).await
    }

    pub fn pages(&self, params: &ListParams) -> Paginator<IndividualAlert> {
        Paginator::new(self.client.clone(), self.list_request(params))
    }

    pub async fn read_individual_alert(&self, alert_id: &str) -> Result<IndividualAlert> {
        let request = ApiRequest::get("/alerts/individual/{individual_alert_id}")
            .path_param("individual_alert_id", alert_id)
            .accept(INDIVIDUAL_ALERTS_MEDIA_TYPE);
        self.client.execute(request).await
    }

    pub async fn update_individual_alert(
        &self,
        alert_id: &str,
        body: &UpdateIndividualAlertRequest,
    ) -> Result<IndividualAlert> {
        let request = ApiRequest::patch("/alerts/individual/{individual_alert_id}")
            .path_param("individual_alert_id", alert_id)
            .accept(INDIVIDUAL_ALERTS_MEDIA_TYPE)
            .json_body(body)?;
        self.client.execute(request).await
    }

    fn list_request(&self, params: &ListParams) -> ApiRequest {
        ApiRequest::get("/alerts/individual")
            .list_params(params)
            .accept(INDIVIDUAL_ALERTS_MEDIA_TYPE)
    }
}

#[async_trait]
impl ListResource for AlertsController {
    fn resource_name(&self) -> &'static str {
        "alerts"
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
impl ReadResource for AlertsController {
    async fn read_value(&self, id: &str) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.read_individual_alert(id).await?)?)
    }
}
