//! Adapter registry and selection policy

use tracing::warn;

use crate::core::config::GatewayConfig;
use crate::core::errors::GatewayError;
use crate::providers::form::FormAdapter;
use crate::providers::html_json::HtmlJsonAdapter;
use crate::providers::ProviderAdapter;

/// Ordered, immutable set of configured adapters keyed by selection token.
///
/// Swapping the active adapter is a configuration change, not a code
/// change.
pub struct AdapterRegistry {
    adapters: Vec<Box<dyn ProviderAdapter>>,
    default_token: String,
}

impl AdapterRegistry {
    /// Build the registry from configuration, one adapter per supported
    /// provider.
    pub fn from_config(config: &GatewayConfig) -> Self {
        let registry = Self {
            adapters: vec![
                Box::new(HtmlJsonAdapter::new(config.html_endpoint.clone())),
                Box::new(FormAdapter::new(config.form_endpoint.clone())),
            ],
            default_token: config.default_provider.clone(),
        };

        if registry.find(&registry.default_token).is_none() {
            warn!(
                default = %registry.default_token,
                "configured default provider matches no registered adapter"
            );
        }

        registry
    }

    /// Resolve a selection token; `None` selects the configured default.
    pub fn select(&self, token: Option<&str>) -> Result<&dyn ProviderAdapter, GatewayError> {
        let token = token.unwrap_or(&self.default_token);
        self.find(token).ok_or_else(|| GatewayError::UnknownProvider {
            token: token.to_string(),
        })
    }

    /// Registered selection tokens, in registration order.
    pub fn tokens(&self) -> Vec<&'static str> {
        self.adapters.iter().map(|a| a.name()).collect()
    }

    fn find(&self, token: &str) -> Option<&dyn ProviderAdapter> {
        self.adapters
            .iter()
            .find(|a| a.name() == token)
            .map(|a| a.as_ref())
    }
}
