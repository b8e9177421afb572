use crate::domain::model::{AwsTag, Links};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct S3ObjectFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_classes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3BucketRestoreSource {
    pub backup_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_filters: Option<S3ObjectFilters>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3BucketRestoreTarget {
    pub bucket_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestoreAwsS3BucketRequest {
    pub source: S3BucketRestoreSource,
    pub target: S3BucketRestoreTarget,
}

impl RestoreAwsS3BucketRequest {
    pub fn new(backup_id: impl Into<String>, target_bucket_id: impl Into<String>) -> Self {
        Self {
            source: S3BucketRestoreSource {
                backup_id: backup_id.into(),
                object_filters: None,
            },
            target: S3BucketRestoreTarget {
                bucket_id: target_bucket_id.into(),
                prefix: None,
                overwrite: None,
                storage_class: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EbsRestoreSource {
    pub backup_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EbsRestoreTarget {
    pub environment_id: String,
    pub aws_az: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_native_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<AwsTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestoreAwsEbsVolumeRequest {
    pub source: EbsRestoreSource,
    pub target: EbsRestoreTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRestoreSource {
    pub backup_id: String,
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileRestoreTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restored_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestoreFilesRequest {
    pub source: FileRestoreSource,
    #[serde(default)]
    pub target: FileRestoreTarget,
}

/// 已還原、可下載的檔案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestoredFile {
    pub id: String,
    #[serde(default)]
    pub backup_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub restored_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expiration_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub download_link: Option<String>,
    #[serde(rename = "_links", default, deserialize_with = "crate::domain::model::null_as_default")]
    pub links: Links,
}
