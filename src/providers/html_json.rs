//! HTML translator adapter (JSON request body)

use serde_json::json;

use crate::core::errors::ProviderError;
use crate::core::models::{
    ProviderCredentials, TranslateRequest, UpstreamBody, UpstreamRequest,
};
use crate::providers::ProviderAdapter;

/// Adapter for the HTML translator endpoint.
///
/// The provider accepts marked-up text, so the input rides through in the
/// `html` field unaltered; JSON string escaping is the only encoding
/// applied.
#[derive(Debug, Clone)]
pub struct HtmlJsonAdapter {
    endpoint: String,
}

impl HtmlJsonAdapter {
    /// Create an adapter targeting the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ProviderAdapter for HtmlJsonAdapter {
    fn name(&self) -> &'static str {
        "html"
    }

    fn build_request(
        &self,
        request: &TranslateRequest,
        credentials: &ProviderCredentials,
    ) -> Result<UpstreamRequest, ProviderError> {
        if credentials.key.trim().is_empty() || credentials.host.trim().is_empty() {
            return Err(ProviderError::InvalidCredentials);
        }

        let body = json!({
            "from": request.source_lang,
            "to": request.target_lang,
            "html": request.text,
        });

        Ok(UpstreamRequest {
            method: reqwest::Method::POST,
            url: self.endpoint.clone(),
            headers: vec![
                ("content-type", "application/json".to_string()),
                ("X-RapidAPI-Key", credentials.key.clone()),
                ("X-RapidAPI-Host", credentials.host.clone()),
            ],
            body: UpstreamBody::Json(body),
        })
    }
}
