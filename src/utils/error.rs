use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClumioError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API responded with {status}: {message}")]
    Api {
        status: u16,
        message: String,
        body: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid filter: {message}")]
    InvalidFilter { message: String },

    #[error("Missing path parameter '{name}' for {template}")]
    MissingPathParameter { name: String, template: String },

    #[error("Timed out: {message}")]
    Timeout { message: String },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },
}

pub type Result<T> = std::result::Result<T, ClumioError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClumioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClumioError::Http(_) | ClumioError::Timeout { .. } => ErrorCategory::Network,
            ClumioError::Api { .. } => ErrorCategory::Api,
            ClumioError::Serialization(_) | ClumioError::Csv(_) | ClumioError::InvalidFilter { .. } => {
                ErrorCategory::Data
            }
            ClumioError::Url(_)
            | ClumioError::Config { .. }
            | ClumioError::MissingConfig { .. }
            | ClumioError::InvalidConfigValue { .. }
            | ClumioError::MissingPathParameter { .. }
            | ClumioError::Unsupported { .. } => ErrorCategory::Configuration,
            ClumioError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClumioError::Http(_) | ClumioError::Timeout { .. } => ErrorSeverity::Medium,
            ClumioError::Api { status, .. } if *status == 429 || *status >= 500 => {
                ErrorSeverity::Medium
            }
            ClumioError::Io(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 連線層級的失敗 (無法建立連線)，HTTP 狀態碼錯誤不算
    pub fn is_connection_error(&self) -> bool {
        matches!(self, ClumioError::Http(e) if e.is_connect())
    }

    /// API 回應的 HTTP 狀態碼 (僅 Api 錯誤有)
    pub fn status(&self) -> Option<u16> {
        match self {
            ClumioError::Api { status, .. } => Some(*status),
            ClumioError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClumioError::Http(e) if e.is_connect() => {
                "Could not connect to the Clumio API".to_string()
            }
            ClumioError::Http(e) if e.is_timeout() => "The request to the Clumio API timed out".to_string(),
            ClumioError::Api { status: 401, .. } => "Authentication failed".to_string(),
            ClumioError::Api { status: 403, .. } => {
                "Not allowed to access this resource".to_string()
            }
            ClumioError::Api { status: 404, .. } => "Resource not found".to_string(),
            ClumioError::Api { message, .. } => format!("Request rejected: {}", message),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClumioError::Http(_) => "Check network connectivity and the configured base URL",
            ClumioError::Timeout { .. } => "Increase the timeout or retry later",
            ClumioError::Api { status: 401, .. } => "Verify the API token (CLUMIO_API_TOKEN)",
            ClumioError::Api { status: 403, .. } => {
                "Check the organizational unit context and token permissions"
            }
            ClumioError::Api { status: 404, .. } => "Verify the resource ID",
            ClumioError::Api { status, .. } if *status == 429 || *status >= 500 => {
                "The service is busy or unavailable, retry later"
            }
            ClumioError::Api { .. } => "Review the request parameters",
            ClumioError::InvalidFilter { .. } => {
                r#"Filters look like {"field": {"$eq": "value"}}"#
            }
            ClumioError::Config { .. }
            | ClumioError::MissingConfig { .. }
            | ClumioError::InvalidConfigValue { .. }
            | ClumioError::Url(_) => "Fix the configuration file or command-line flags",
            ClumioError::MissingPathParameter { .. } => "Supply every path parameter",
            ClumioError::Io(_) | ClumioError::Csv(_) => "Check the output path and permissions",
            ClumioError::Serialization(_) => "The response did not match the expected shape",
            ClumioError::Unsupported { .. } => "Use a different resource or command",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> ClumioError {
        ClumioError::Api {
            status,
            message: "boom".to_string(),
            body: String::new(),
        }
    }

    #[test]
    fn test_api_error_severity_depends_on_status() {
        assert_eq!(api_error(400).severity(), ErrorSeverity::High);
        assert_eq!(api_error(404).severity(), ErrorSeverity::High);
        assert_eq!(api_error(429).severity(), ErrorSeverity::Medium);
        assert_eq!(api_error(503).severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_status_only_for_api_errors() {
        assert_eq!(api_error(409).status(), Some(409));
        let config = ClumioError::Config {
            message: "bad".to_string(),
        };
        assert_eq!(config.status(), None);
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert!(!config.is_connection_error());
    }

    #[test]
    fn test_user_friendly_messages() {
        assert_eq!(api_error(401).user_friendly_message(), "Authentication failed");
        assert_eq!(api_error(404).user_friendly_message(), "Resource not found");
        assert_eq!(api_error(400).user_friendly_message(), "Request rejected: boom");
        assert_eq!(api_error(400).to_string(), "API responded with 400: boom");
    }
}
