use crate::domain::model::Links;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEntity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualAlert {
    pub id: String,
    #[serde(rename = "type", default)]
    pub alert_type: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub parent_entity: Option<AlertEntity>,
    #[serde(default)]
    pub primary_entity: Option<AlertEntity>,
    #[serde(default)]
    pub raised_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cleared_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(rename = "_links", default, deserialize_with = "crate::domain::model::null_as_default")]
    pub links: Links,
}

impl IndividualAlert {
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active")
    }
}

/// 更新告警：`action = "clear"` 清除告警，`notes` 覆寫備註
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateIndividualAlertRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl UpdateIndividualAlertRequest {
    pub fn clear() -> Self {
        Self {
            action: Some("clear".to_string()),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
