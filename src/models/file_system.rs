use crate::domain::model::Links;
use serde::{Deserialize, Serialize};

/// 備份中可瀏覽的檔案系統
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSystem {
    pub id: String,
    #[serde(default)]
    pub mount_path: Option<String>,
    #[serde(rename = "type", default)]
    pub filesystem_type: Option<String>,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub free_space: Option<i64>,
    #[serde(default)]
    pub is_supported: Option<bool>,
    #[serde(rename = "_links", default, deserialize_with = "crate::domain::model::null_as_default")]
    pub links: Links,
}

impl FileSystem {
    pub fn used_space(&self) -> Option<i64> {
        match (self.size, self.free_space) {
            (Some(size), Some(free)) => Some(size.saturating_sub(free)),
            _ => None,
        }
    }
}
