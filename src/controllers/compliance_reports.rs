use crate::controllers::collect_values;
use crate::core::client::{ApiClient, ApiRequest};
use crate::core::paginator::Paginator;
use crate::core::{ListEnvelope, ListParams, ListResource, ReadResource};
use crate::models::{ComplianceReport, GenerateComplianceReportRequest, TaskReference};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const COMPLIANCE_REPORTS_MEDIA_TYPE: &str = "application/api.clumio.compliance-reports=v1+json";

#[derive(Debug, Clone)]
pub struct ComplianceReportsController {
    client: ApiClient,
}

impl ComplianceReportsController {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 產生報表為背景工作；完成後報表出現在列表中並附下載連結
    pub async fn generate_compliance_report(
        &self,
        body: &GenerateComplianceReportRequest,
    ) -> Result<TaskReference> {
        let request = ApiRequest::post("/reports/compliance")
            .accept(COMPLIANCE_REPORTS_MEDIA_TYPE)
            .json_body(body)?;
        self.client.execute(request).await
    }

    pub async fn list_compliance_reports(
        &self,
        params: &ListParams,
    ) -> Result<ListEnvelope<ComplianceReport>> {
        self.client.execute(self.list_request(params)).await
    }

    pub fn pages(&self, params: &ListParams) -> Paginator<ComplianceReport> {
        Paginator::new(self.client.clone(), self.list_request(params))
    }

    pub async fn read_compliance_report(&self, report_id: &str) -> Result<ComplianceReport> {
        let request = ApiRequest::get("/reports/compliance/{report_id}")
            .path_param("report_id", report_id)
            .accept(COMPLIANCE_REPORTS_MEDIA_TYPE);
        self.client.execute(request).await
    }

    fn list_request(&self, params: &ListParams) -> ApiRequest {
        ApiRequest::get("/reports/compliance")
            .list_params(params)
            .accept(COMPLIANCE_REPORTS_MEDIA_TYPE)
    }
}

#[async_trait]
impl ListResource for ComplianceReportsController {
    fn resource_name(&self) -> &'static str {
        "compliance-reports"
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
impl ReadResource for ComplianceReportsController {
    async fn read_value(&self, id: &str) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.read_compliance_report(id).await?)?)
    }
}
