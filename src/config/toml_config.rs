use crate::core::client::DEFAULT_BASE_URL;
use crate::core::export::ExportFormat;
use crate::core::retry::RetryPolicy;
use crate::core::ConfigProvider;
use crate::utils::error::{ClumioError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SdkConfig {
    #[serde(default)]
    pub api: ApiConfig,
    pub retry: Option<RetryConfig>,
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub organizational_unit_context: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_attempts: Option<u32>,
    pub initial_delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
    pub multiplier: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: Option<String>,
    pub format: Option<String>,
}

impl SdkConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClumioError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClumioError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CLUMIO_API_TOKEN})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClumioError::Config {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("api.base_url", self.base_url())?;

        if let Some(token) = &self.api.token {
            validation::validate_non_empty_string("api.token", token)?;
            if token.contains("${") {
                return Err(ClumioError::InvalidConfigValue {
                    field: "api.token".to_string(),
                    value: token.clone(),
                    reason: "Environment variable is not set".to_string(),
                });
            }
        }

        if let Some(timeout) = self.api.timeout_seconds {
            validation::validate_range("api.timeout_seconds", timeout, 1, 3600)?;
        }

        if let Some(retry) = &self.retry {
            if let Some(attempts) = retry.max_attempts {
                validation::validate_range("retry.max_attempts", attempts, 1, 10)?;
            }
            if let (Some(initial), Some(max)) = (retry.initial_delay_ms, retry.max_delay_ms) {
                if initial > max {
                    return Err(ClumioError::InvalidConfigValue {
                        field: "retry.initial_delay_ms".to_string(),
                        value: initial.to_string(),
                        reason: format!("Must not exceed retry.max_delay_ms ({})", max),
                    });
                }
            }
        }

        if let Some(export) = &self.export {
            if let Some(path) = &export.output_path {
                validation::validate_path("export.output_path", path)?;
            }
            if let Some(format) = &export.format {
                format.parse::<ExportFormat>()?;
            }
        }

        Ok(())
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        let defaults = RetryPolicy::default();
        let Some(retry) = &self.retry else {
            return defaults;
        };

        RetryPolicy {
            max_attempts: retry.max_attempts.unwrap_or(defaults.max_attempts).max(1),
            initial_delay: retry
                .initial_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.initial_delay),
            max_delay: retry
                .max_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.max_delay),
            multiplier: retry.multiplier.unwrap_or(defaults.multiplier),
        }
    }

    pub fn export_output_path(&self) -> Option<&str> {
        self.export.as_ref().and_then(|e| e.output_path.as_deref())
    }

    pub fn export_format(&self) -> Option<&str> {
        self.export.as_ref().and_then(|e| e.format.as_deref())
    }
}

impl ConfigProvider for SdkConfig {
    fn base_url(&self) -> &str {
        SdkConfig::base_url(self)
    }

    fn api_token(&self) -> Option<&str> {
        self.api.token.as_deref()
    }

    fn organizational_unit_context(&self) -> Option<&str> {
        self.api.organizational_unit_context.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        SdkConfig::timeout_seconds(self)
    }

    fn retry_policy(&self) -> RetryPolicy {
        SdkConfig::retry_policy(self)
    }
}

impl Validate for SdkConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
