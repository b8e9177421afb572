pub mod alerts;
pub mod compliance_reports;
pub mod file_systems;
pub mod organizational_units;
pub mod policies;
pub mod restores;
pub mod s3_buckets;
pub mod tasks;
pub mod vcenters;

pub use alerts::AlertsController;
pub use compliance_reports::ComplianceReportsController;
pub use file_systems::FileSystemsController;
pub use organizational_units::OrganizationalUnitsController;
pub use policies::PoliciesController;
pub use restores::RestoresController;
pub use s3_buckets::S3BucketsController;
pub use tasks::TasksController;
pub use vcenters::VCentersController;

use crate::core::client::ApiClient;
use crate::core::paginator::Paginator;
use crate::core::{ConfigProvider, ListResource, ReadResource};
use crate::utils::error::{ClumioError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 取完所有頁面後轉成 JSON 值，供 CLI 與匯出使用
pub(crate) async fn collect_values<T>(
    paginator: Paginator<T>,
    max_items: Option<usize>,
) -> Result<Vec<serde_json::Value>>
where
    T: DeserializeOwned + Serialize,
{
    paginator
        .collect_items(max_items)
        .await?
        .iter()
        .map(|item| serde_json::to_value(item).map_err(ClumioError::from))
        .collect()
}

/// Resource families that can be listed without extra path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Resource {
    #[cfg_attr(feature = "cli", value(name = "s3-buckets"))]
    S3Buckets,
    Alerts,
    Vcenters,
    Tasks,
    OrganizationalUnits,
    Policies,
    ComplianceReports,
    RestoredFiles,
}

impl Resource {
    pub const ALL: [Resource; 8] = [
        Resource::S3Buckets,
        Resource::Alerts,
        Resource::Vcenters,
        Resource::Tasks,
        Resource::OrganizationalUnits,
        Resource::Policies,
        Resource::ComplianceReports,
        Resource::RestoredFiles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::S3Buckets => "s3-buckets",
            Resource::Alerts => "alerts",
            Resource::Vcenters => "vcenters",
            Resource::Tasks => "tasks",
            Resource::OrganizationalUnits => "organizational-units",
            Resource::Policies => "policies",
            Resource::ComplianceReports => "compliance-reports",
            Resource::RestoredFiles => "restored-files",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = ClumioError;

    fn from_str(s: &str) -> Result<Self> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ClumioError::Unsupported {
                message: format!("unknown resource '{}'", s),
            })
    }
}

/// 所有 controller 的進入點，共用同一個 ApiClient
#[derive(Debug, Clone)]
pub struct ClumioClient {
    client: ApiClient,
}

impl ClumioClient {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Ok(Self::new(ApiClient::from_config(config)?))
    }

    /// 以另一個組織單位 (OU) 的身分呼叫
    pub fn for_organizational_unit(&self, ou: impl Into<String>) -> Self {
        Self::new(self.client.clone().with_organizational_unit(ou))
    }

    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    pub fn s3_buckets(&self) -> S3BucketsController {
        S3BucketsController::new(self.client.clone())
    }

    pub fn file_systems(&self) -> FileSystemsController {
        FileSystemsController::new(self.client.clone())
    }

    pub fn alerts(&self) -> AlertsController {
        AlertsController::new(self.client.clone())
    }

    pub fn vcenters(&self) -> VCentersController {
        VCentersController::new(self.client.clone())
    }

    pub fn restores(&self) -> RestoresController {
        RestoresController::new(self.client.clone())
    }

    pub fn compliance_reports(&self) -> ComplianceReportsController {
        ComplianceReportsController::new(self.client.clone())
    }

    pub fn tasks(&self) -> TasksController {
        TasksController::new(self.client.clone())
    }

    pub fn organizational_units(&self) -> OrganizationalUnitsController {
        OrganizationalUnitsController::new(self.client.clone())
    }

    pub fn policies(&self) -> PoliciesController {
        PoliciesController::new(self.client.clone())
    }

    pub fn lister(&self, resource: Resource) -> Box<dyn ListResource> {
        match resource {
            Resource::S3Buckets => Box::new(self.s3_buckets()),
            Resource::Alerts => Box::new(self.alerts()),
            Resource::Vcenters => Box::new(self.vcenters()),
            Resource::Tasks => Box::new(self.tasks()),
            Resource::OrganizationalUnits => Box::new(self.organizational_units()),
            Resource::Policies => Box::new(self.policies()),
            Resource::ComplianceReports => Box::new(self.compliance_reports()),
            Resource::RestoredFiles => Box::new(self.restores()),
        }
    }

    pub fn reader(&self, resource: Resource) -> Result<Box<dyn ReadResource>> {
        let reader: Box<dyn ReadResource> = match resource {
            Resource::S3Buckets => Box::new(self.s3_buckets()),
            Resource::Alerts => Box::new(self.alerts()),
            Resource::Vcenters => Box::new(self.vcenters()),
            Resource::Tasks => Box::new(self.tasks()),
            Resource::OrganizationalUnits => Box::new(self.organizational_units()),
            Resource::Policies => Box::new(self.policies()),
            Resource::ComplianceReports => Box::new(self.compliance_reports()),
            Resource::RestoredFiles => {
                return Err(ClumioError::Unsupported {
                    message: "restored files can only be listed".to_string(),
                })
            }
        };
        Ok(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(resource.as_str().parse::<Resource>().unwrap(), resource);
        }
        assert!("buckets".parse::<Resource>().is_err());
    }

    #[test]
    fn test_lister_names_match_resources() {
        let client = ClumioClient::new(ApiClient::new("http://localhost", "t").unwrap());
        for resource in Resource::ALL {
            assert_eq!(client.lister(resource).resource_name(), resource.as_str());
        }
        assert!(client.reader(Resource::RestoredFiles).is_err());
    }
}
