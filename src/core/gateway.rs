//! Gateway orchestrator
//!
//! Drives one translate request end to end: validation, adapter selection,
//! the single upstream call, response normalization. No retries; a failed
//! upstream call fails the request.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::core::config::GatewayConfig;
use crate::core::errors::{GatewayError, Result};
use crate::core::models::{NormalizedResult, TranslatePayload, UpstreamBody, UpstreamRequest};
use crate::core::validate;
use crate::providers::registry::AdapterRegistry;

/// The orchestrator. Holds only immutable state plus a pooled HTTP client,
/// so one instance is shared across all concurrent requests.
pub struct Gateway {
    client: reqwest::Client,
    config: Arc<GatewayConfig>,
    registry: AdapterRegistry,
}

impl Gateway {
    /// Create a gateway from an explicit configuration value.
    ///
    /// The upstream client carries a bounded timeout; an unresponsive
    /// provider fails the request instead of hanging it.
    pub fn new(config: GatewayConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        let registry = AdapterRegistry::from_config(&config);

        Ok(Self {
            client,
            config: Arc::new(config),
            registry,
        })
    }

    /// Create a gateway from environment configuration.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(GatewayConfig::from_env()?)
    }

    /// Translate one payload.
    ///
    /// Validation runs before anything else, so malformed input performs
    /// zero outbound calls. Exactly one upstream attempt is made per
    /// request.
    pub async fn translate(&self, payload: &TranslatePayload) -> Result<NormalizedResult> {
        let request = validate::validate(payload, &self.config)?;
        let adapter = self.registry.select(payload.provider.as_deref())?;
        let credentials = self.config.credentials()?;

        let upstream = adapter.build_request(&request, &credentials)?;

        debug!(
            provider = adapter.name(),
            url = %upstream.url,
            target = %request.target_lang,
            "forwarding translate request"
        );

        let (status, body) = self.send(upstream).await?;

        debug!(
            provider = adapter.name(),
            status,
            body = %String::from_utf8_lossy(&body),
            "upstream responded"
        );

        let result = adapter.parse_response(status, &body, &request.target_lang)?;
        Ok(result)
    }

    /// Execute the outbound call described by an adapter.
    async fn send(&self, upstream: UpstreamRequest) -> Result<(u16, Vec<u8>)> {
        let mut builder = self.client.request(upstream.method, &upstream.url);

        for (name, value) in &upstream.headers {
            builder = builder.header(*name, value.as_str());
        }

        builder = match &upstream.body {
            UpstreamBody::Json(value) => builder.json(value),
            UpstreamBody::Form(fields) => builder.form(fields),
        };

        let response = builder.send().await.map_err(|e| GatewayError::Network {
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| GatewayError::Network {
            message: e.to_string(),
        })?;

        Ok((status, body.to_vec()))
    }
}
