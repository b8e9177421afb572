pub mod client;
pub mod export;
pub mod filter;
pub mod paginator;
pub mod retry;

pub use crate::domain::model::{Links, ListEnvelope, ListParams};
pub use crate::domain::ports::{ConfigProvider, ListResource, ReadResource, Storage};
pub use crate::utils::error::Result;
