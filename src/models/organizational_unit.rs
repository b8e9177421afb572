use crate::domain::model::Links;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationalUnit {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub children_count: Option<i64>,
    #[serde(default)]
    pub user_count: Option<i64>,
    #[serde(default, deserialize_with = "crate::domain::model::null_as_default")]
    pub configured_datasource_types: Vec<String>,
    #[serde(default, deserialize_with = "crate::domain::model::null_as_default")]
    pub descendant_ids: Vec<String>,
    /// 建立時以 202 回應，附帶背景工作 ID
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(rename = "_links", default, deserialize_with = "crate::domain::model::null_as_default")]
    pub links: Links,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrganizationalUnitRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}
