use crate::domain::model::{AwsTag, Links};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3Bucket {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub account_native_id: Option<String>,
    #[serde(default)]
    pub aws_region: Option<String>,
    #[serde(default)]
    pub environment_id: Option<String>,
    #[serde(default)]
    pub organizational_unit_id: Option<String>,
    #[serde(default)]
    pub creation_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_backup_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub compliance_status: Option<String>,
    #[serde(default)]
    pub protection_status: Option<String>,
    #[serde(default)]
    pub protection_group_count: Option<i64>,
    #[serde(default)]
    pub is_deleted: Option<bool>,
    #[serde(default)]
    pub event_bridge_enabled: Option<bool>,
    #[serde(default)]
    pub object_count: Option<i64>,
    #[serde(default)]
    pub size_bytes: Option<i64>,
    #[serde(default)]
    pub versioning_setting: Option<S3VersioningSetting>,
    #[serde(default)]
    pub encryption_setting: Option<S3EncryptionSetting>,
    #[serde(default, deserialize_with = "crate::domain::model::null_as_default")]
    pub tags: Vec<AwsTag>,
    #[serde(rename = "_links", default, deserialize_with = "crate::domain::model::null_as_default")]
    pub links: Links,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3VersioningSetting {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3EncryptionSetting {
    #[serde(default)]
    pub encryption_type: Option<String>,
    #[serde(default)]
    pub kms_key_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetBucketPropertiesRequest {
    pub event_bridge_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_bridge_notification_disabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetBucketPropertiesResponse {
    #[serde(default)]
    pub event_bridge_enabled: Option<bool>,
    #[serde(default)]
    pub event_bridge_notification_disabled: Option<bool>,
    #[serde(rename = "_links", default, deserialize_with = "crate::domain::model::null_as_default")]
    pub links: Links,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bucket_from_api_json() {
        let bucket: S3Bucket = serde_json::from_value(json!({
            "id": "0b2f1d5e",
            "name": "prod-logs",
            "aws_region": "us-west-2",
            "creation_timestamp": "2023-06-01T12:30:00Z",
            "versioning_setting": {"status": "Enabled"},
            "tags": [{"key": "env", "value": "prod"}],
            "unexpected_field": 1,
            "_links": {"_self": {"href": "/datasources/aws/s3-buckets/0b2f1d5e"}}
        }))
        .unwrap();

        assert_eq!(bucket.name.as_deref(), Some("prod-logs"));
        assert_eq!(bucket.tags[0].value.as_deref(), Some("prod"));
        assert_eq!(
            bucket.creation_timestamp.unwrap().to_rfc3339(),
            "2023-06-01T12:30:00+00:00"
        );
        assert_eq!(
            bucket.links.self_link.unwrap().href,
            "/datasources/aws/s3-buckets/0b2f1d5e"
        );
        assert_eq!(bucket.is_deleted, None);
    }

    #[test]
    fn test_bucket_with_null_tags_and_links() {
        let bucket: S3Bucket =
            serde_json::from_value(json!({"id": "b", "tags": null, "_links": null})).unwrap();
        assert!(bucket.tags.is_empty());
        assert_eq!(bucket.links, Links::default());
    }

    #[test]
    fn test_properties_request_skips_unset_fields() {
        let request = SetBucketPropertiesRequest {
            event_bridge_enabled: true,
            event_bridge_notification_disabled: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"event_bridge_enabled": true})
        );
    }
}
