//! Request and response bodies, one module per resource family.

pub mod alert;
pub mod compliance_report;
pub mod file_system;
pub mod organizational_unit;
pub mod policy;
pub mod restore;
pub mod s3_bucket;
pub mod task;
pub mod vcenter;

pub use alert::{AlertEntity, IndividualAlert, UpdateIndividualAlertRequest};
pub use compliance_report::{ComplianceReport, GenerateComplianceReportRequest};
pub use file_system::FileSystem;
pub use organizational_unit::{CreateOrganizationalUnitRequest, OrganizationalUnit};
pub use policy::{BackupSla, Policy, PolicyOperation, TimeUnitParam};
pub use restore::{
    EbsRestoreSource, EbsRestoreTarget, FileRestoreSource, FileRestoreTarget,
    RestoreAwsEbsVolumeRequest, RestoreAwsS3BucketRequest, RestoreFilesRequest,
    RestoredFile, S3BucketRestoreSource, S3BucketRestoreTarget, S3ObjectFilters,
};
pub use s3_bucket::{S3Bucket, SetBucketPropertiesRequest, SetBucketPropertiesResponse};
pub use task::{Task, TaskReference, TaskStatus, UpdateTaskRequest};
pub use vcenter::VCenter;
