//! Client library for the Clumio backup and recovery REST API.
//!
//! Each resource family has a controller (`controllers::*`) that builds the
//! request, sends it through the shared [`ApiClient`] and decodes the typed
//! model from `models::*`. List endpoints also expose a [`Paginator`] that
//! follows the `_links._next` link of every page.

pub mod config;
pub mod controllers;
pub mod core;
pub mod domain;
pub mod models;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::SdkConfig};
pub use controllers::{ClumioClient, Resource};
pub use core::{
    client::{ApiClient, ApiRequest},
    export::{ExportFormat, Exporter},
    filter::Filter,
    paginator::Paginator,
    retry::RetryPolicy,
};
pub use domain::model::{ListEnvelope, ListParams};
pub use utils::error::{ClumioError, Result};
