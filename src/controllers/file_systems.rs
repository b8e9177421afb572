use crate::core::client::{ApiClient, ApiRequest};
use crate::core::paginator::Paginator;
use crate::core::{ListEnvelope, ListParams};
use crate::models::FileSystem;
use crate::utils::error::Result;

pub const FILE_SYSTEMS_MEDIA_TYPE: &str = "application/api.clumio.file-systems=v1+json";

/// 備份內的檔案系統，所有操作都以備份 ID 為範圍
#[derive(Debug, Clone)]
pub struct FileSystemsController {
    client: ApiClient,
}

impl FileSystemsController {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_file_systems(
        &self,
        backup_id: &str,
        params: &ListParams,
    ) -> Result<ListEnvelope<FileSystem>> {
        self.client.execute(self.list_request(backup_id, params)).await
    }

    pub fn pages(&self, backup_id: &str, params: &ListParams) -> Paginator<FileSystem> {
        Paginator::new(self.client.clone(), self.list_request(backup_id, params))
    }

    pub async fn read_file_system(&self, backup_id: &str, file_system_id: &str) -> Result<FileSystem> {
        let request = ApiRequest::get("/backups/{backup_id}/file-systems/{file_system_id}")
            .path_param("backup_id", backup_id)
            .path_param("file_system_id", file_system_id)
            .accept(FILE_SYSTEMS_MEDIA_TYPE);
        self.client.execute(request).await
    }

    fn list_request(&self, backup_id: &str, params: &ListParams) -> ApiRequest {
        ApiRequest::get("/backups/{backup_id}/file-systems")
            .path_param("backup_id", backup_id)
            .list_params(params)
            .accept(FILE_SYSTEMS_MEDIA_TYPE)
    }
}
