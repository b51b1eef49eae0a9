//! Translation-provider normalization gateway
//!
//! Accepts a uniform translate request over HTTP, forwards it to one of
//! several heterogeneous upstream translation providers, and reduces the
//! result to a single stable response contract regardless of which provider
//! answered.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod providers;
pub mod server;

// Re-export key types for convenience
pub use crate::core::config::GatewayConfig;
pub use crate::core::errors::{GatewayError, ProviderError, ValidationError};
pub use crate::core::gateway::Gateway;
pub use crate::core::models::{
    NormalizedResult, ProviderCredentials, TranslatePayload, TranslateRequest,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
