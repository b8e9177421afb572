use crate::controllers::collect_values;
use crate::core::client::{ApiClient, ApiRequest};
use crate::core::paginator::Paginator;
use crate::core::{ListEnvelope, ListParams, ListResource, ReadResource};
use crate::models::{S3Bucket, SetBucketPropertiesRequest, SetBucketPropertiesResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const S3_BUCKETS_MEDIA_TYPE: &str = "application/api.clumio.aws-s3-buckets=v1+json";

#[derive(Debug, Clone)]
pub struct S3BucketsController {
    client: ApiClient,
}

impl S3BucketsController {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_aws_s3_buckets(&self, params: &ListParams) -> Result<ListEnvelope<S3Bucket>> {
        self.client.execute(self.list_request(params)).await
    }

    pub fn pages(&self, params: &ListParams) -> Paginator<S3Bucket> {
        Paginator::new(self.client.clone(), self.list_request(params))
    }

    pub async fn read_aws_s3_bucket(&self, bucket_id: &str) -> Result<S3Bucket> {
        let request = ApiRequest::get("/datasources/aws/s3-buckets/{bucket_id}")
            .path_param("bucket_id", bucket_id)
            .accept(S3_BUCKETS_MEDIA_TYPE);
        self.client.execute(request).await
    }

    /// 設定 EventBridge 等桶屬性 (連續備份需要)
    pub async fn set_bucket_properties(
        &self,
        bucket_id: &str,
        body: &SetBucketPropertiesRequest,
    ) -> Result<SetBucketPropertiesResponse> {
        let request = ApiRequest::post("/datasources/aws/s3-buckets/{bucket_id}/properties")
            .path_param("bucket_id", bucket_id)
            .accept(S3_BUCKETS_MEDIA_TYPE)
            .json_body(body)?;
        self.client.execute(request).await
    }

    fn list_request(&self, params: &ListParams) -> ApiRequest {
        ApiRequest::get("/datasources/aws/s3-buckets")
            .list_params(params)
            .accept(S3_BUCKETS_MEDIA_TYPE)
    }
}

#[async_trait]
impl ListResource for S3BucketsController {
    fn resource_name(&self) -> &'static str {
        "s3-buckets"
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
impl ReadResource for S3BucketsController {
    async fn read_value(&self, id: &str) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.read_aws_s3_bucket(id).await?)?)
    }
}
