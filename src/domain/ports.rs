use crate::core::retry::RetryPolicy;
use crate::domain::model::ListParams;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_token(&self) -> Option<&str>;
    fn organizational_unit_context(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
    fn retry_policy(&self) -> RetryPolicy;
}

/// 可列出的資源，回傳未型別化的 JSON 以便 CLI 與匯出共用
#[async_trait]
pub trait ListResource: Send + Sync {
    fn resource_name(&self) -> &'static str;

    async fn list_values(
        &self,
        params: &ListParams,
        max_items: Option<usize>,
    ) -> Result<Vec<serde_json::Value>>;
}

#[async_trait]
pub trait ReadResource: Send + Sync {
    async fn read_value(&self, id: &str) -> Result<serde_json::Value>;
}
