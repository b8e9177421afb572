use crate::controllers::collect_values;
use crate::core::client::{ApiClient, ApiRequest};
use crate::core::paginator::Paginator;
use crate::core::{ListEnvelope, ListParams, ListResource};
use crate::models::{
    RestoreAwsEbsVolumeRequest, RestoreAwsS3BucketRequest, RestoreFilesRequest, RestoredFile,
    TaskReference,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const RESTORED_S3_BUCKETS_MEDIA_TYPE: &str =
    "application/api.clumio.restored-aws-s3-buckets=v1+json";
pub const RESTORED_EBS_VOLUMES_MEDIA_TYPE: &str =
    "application/api.clumio.restored-aws-ebs-volumes=v1+json";
pub const RESTORED_FILES_MEDIA_TYPE: &str = "application/api.clumio.restored-files=v1+json";

/// 還原請求皆為非同步：回傳 202 與 task_id，進度透過 TasksController 查詢
#[derive(Debug, Clone)]
pub struct RestoresController {
    client: ApiClient,
}

impl RestoresController {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn restore_aws_s3_bucket(&self, body: &RestoreAwsS3BucketRequest) -> Result<TaskReference> {
        let request = ApiRequest::post("/restores/aws/s3-buckets")
            .accept(RESTORED_S3_BUCKETS_MEDIA_TYPE)
            .json_body(body)?;
        self.client.execute(request).await
    }

    pub async fn restore_aws_ebs_volume(
        &self,
        body: &RestoreAwsEbsVolumeRequest,
    ) -> Result<TaskReference> {
        let request = ApiRequest::post("/restores/aws/ebs-volumes")
            .accept(RESTORED_EBS_VOLUMES_MEDIA_TYPE)
            .json_body(body)?;
        self.client.execute(request).await
    }

    pub async fn restore_files(&self, body: &RestoreFilesRequest) -> Result<TaskReference> {
        let request = ApiRequest::post("/restores/files")
            .accept(RESTORED_FILES_MEDIA_TYPE)
            .json_body(body)?;
        self.client.execute(request).await
    }

    pub async fn list_restored_files(&self, params: &ListParams) -> Result<ListEnvelope<RestoredFile>> {
        self.client.execute(self.list_request(params)).await
    }

    pub fn pages(&self, params: &ListParams) -> Paginator<RestoredFile> {
        Paginator::new(self.client.clone(), self.list_request(params))
    }

    fn list_request(&self, params: &ListParams) -> ApiRequest {
        ApiRequest::get("/restores/files")
            .list_params(params)
            .accept(RESTORED_FILES_MEDIA_TYPE)
    }
}

#[async_trait]
impl ListResource for RestoresController {
    fn resource_name(&self) -> &'static str {
        "restored-files"
    }

    async fn list_values(
        &self,
        params: &ListParams,
        max_items: Option<usize>,
    ) -> Result<Vec<serde_json::Value>> {
        collect_values(self.pages(params), max_items).await
    }
}
