use crate::domain::model::Links;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeUnitParam {
    pub unit: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupSla {
    #[serde(default)]
    pub retention_duration: Option<TimeUnitParam>,
    #[serde(default)]
    pub rpo_frequency: Option<TimeUnitParam>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyOperation {
    #[serde(rename = "type")]
    pub operation_type: String,
    #[serde(default)]
    pub action_setting: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::model::null_as_default")]
    pub slas: Vec<BackupSla>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub activation_status: Option<String>,
    #[serde(default)]
    pub lock_status: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub organizational_unit_id: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::model::null_as_default")]
    pub operations: Vec<PolicyOperation>,
    #[serde(rename = "_links", default, deserialize_with = "crate::domain::model::null_as_default")]
    pub links: Links,
}

impl Policy {
    pub fn operation(&self, operation_type: &str) -> Option<&PolicyOperation> {
        self.operations
            .iter()
            .find(|op| op.operation_type == operation_type)
    }
}
