//! Core data model for the gateway

use serde::{Deserialize, Serialize};

/// Inbound translate payload exactly as received on the wire.
///
/// `q` and `target` are fixed by the public contract. `source` and
/// `provider` are optional; the validator fills in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslatePayload {
    /// Text to translate.
    pub q: Option<String>,
    /// Target language code.
    pub target: Option<String>,
    /// Source language code.
    pub source: Option<String>,
    /// Adapter selection token.
    pub provider: Option<String>,
}

impl TranslatePayload {
    /// Create a payload with the two required fields set.
    pub fn new(q: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            target: Some(target.into()),
            source: None,
            provider: None,
        }
    }

    /// Set the source language.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the adapter selection token.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}

/// Validated translation request. Only the validator constructs this; it is
/// immutable afterwards and discarded once the response is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    /// Text to translate, preserved byte for byte from the payload.
    pub text: String,
    /// Target language code.
    pub target_lang: String,
    /// Source language code, defaulted from configuration when absent.
    pub source_lang: String,
}

/// Upstream provider credentials, loaded once at startup and read-only for
/// the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    /// API key sent with every upstream call.
    pub key: String,
    /// Host identifier the provider expects alongside the key.
    pub host: String,
}

/// The single success shape returned to callers, identical regardless of
/// which adapter produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedResult {
    /// The translated text, taken verbatim from the upstream response.
    pub translated_text: String,
    /// Target language the translation was requested for.
    pub target_lang: String,
}

/// Body encoding for an outbound provider call.
#[derive(Debug, Clone)]
pub enum UpstreamBody {
    /// JSON document.
    Json(serde_json::Value),
    /// URL-form-encoded fields.
    Form(Vec<(&'static str, String)>),
}

/// Outbound request description produced by an adapter. The orchestrator
/// executes it; adapters never touch the network themselves.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    /// HTTP method.
    pub method: reqwest::Method,
    /// Fully qualified provider URL.
    pub url: String,
    /// Provider-specific headers, auth included.
    pub headers: Vec<(&'static str, String)>,
    /// Encoded request body.
    pub body: UpstreamBody,
}
