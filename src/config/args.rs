use crate::config::toml_config::{SdkConfig, DEFAULT_TIMEOUT_SECONDS};
use crate::controllers::Resource;
use crate::core::client::DEFAULT_BASE_URL;
use crate::core::retry::RetryPolicy;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `task --wait` 最長等待一週
const MAX_WAIT_SECONDS: u64 = 7 * 24 * 3600;

#[derive(Debug, Clone, Parser)]
#[command(name = "clumio")]
#[command(about = "Command-line client for the Clumio backup REST API")]
pub struct CliConfig {
    #[arg(long, env = "CLUMIO_API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    #[arg(long, env = "CLUMIO_API_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    #[arg(long = "ou-context", env = "CLUMIO_OU_CONTEXT", global = true)]
    pub ou_context: Option<String>,

    #[arg(long, global = true, help = "TOML file supplying values the flags leave unset")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, env = "CLUMIO_LOG_JSON", global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,

    #[arg(skip)]
    pub file_config: Option<SdkConfig>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List items of a resource family
    List {
        resource: Resource,
        #[arg(long, help = r#"JSON filter, e.g. {"name": {"$contains": "prod"}}"#)]
        filter: Option<String>,
        #[arg(long, help = "Page size sent to the API")]
        limit: Option<u32>,
        #[arg(long, help = "Follow every next link instead of stopping after --limit items")]
        all: bool,
        #[arg(long)]
        sort: Option<String>,
    },
    /// Read a single item by ID
    Get { resource: Resource, id: String },
    /// Write every item of a resource family to a file
    Export {
        resource: Resource,
        #[arg(long)]
        format: Option<String>,
        #[arg(long)]
        output_path: Option<String>,
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show a background task, optionally waiting for it to finish
    Task {
        id: String,
        #[arg(long)]
        wait: bool,
        #[arg(long, default_value = "600")]
        timeout_seconds: u64,
        #[arg(long, default_value = "5")]
        poll_seconds: u64,
    },
}

impl CliConfig {
    /// 載入 `--config` 指定的 TOML 檔 (若有)
    pub fn load_file_config(&mut self) -> Result<()> {
        if let Some(path) = &self.config {
            let file_config = SdkConfig::from_file(path)?;
            file_config.validate()?;
            self.file_config = Some(file_config);
        }
        Ok(())
    }

    pub fn export_output_path(&self) -> String {
        self.file_config
            .as_ref()
            .and_then(|c| c.export_output_path())
            .unwrap_or("./output")
            .to_string()
    }

    pub fn export_format(&self) -> Option<&str> {
        self.file_config.as_ref().and_then(|c| c.export_format())
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .or_else(|| self.file_config.as_ref().and_then(|c| c.api.base_url.as_deref()))
            .unwrap_or(DEFAULT_BASE_URL)
    }

    fn api_token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .or_else(|| self.file_config.as_ref().and_then(|c| c.api.token.as_deref()))
    }

    fn organizational_unit_context(&self) -> Option<&str> {
        self.ou_context.as_deref().or_else(|| {
            self.file_config
                .as_ref()
                .and_then(|c| c.api.organizational_unit_context.as_deref())
        })
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout
            .or_else(|| self.file_config.as_ref().and_then(|c| c.api.timeout_seconds))
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn retry_policy(&self) -> RetryPolicy {
        self.file_config
            .as_ref()
            .map(|c| c.retry_policy())
            .unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", self.base_url())?;

        let token = self.api_token();
        let token =
            validation::validate_required_field("token (--token or CLUMIO_API_TOKEN)", &token)?;
        validation::validate_non_empty_string("token", token)?;

        if let Some(timeout) = self.timeout {
            validation::validate_range("timeout", timeout, 1, 3600)?;
        }

        match &self.command {
            Command::List {
                limit: Some(limit), ..
            } => validation::validate_range("limit", *limit, 1, 1000)?,
            Command::Task {
                poll_seconds,
                timeout_seconds,
                ..
            } => {
                validation::validate_positive_number("poll_seconds", *poll_seconds, 1)?;
                validation::validate_range("timeout_seconds", *timeout_seconds, 1, MAX_WAIT_SECONDS)?;
            }
            _ => {}
        }

        Ok(())
    }
}
