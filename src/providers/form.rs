//! Form-encoded translator adapter

use crate::core::errors::ProviderError;
use crate::core::models::{
    ProviderCredentials, TranslateRequest, UpstreamBody, UpstreamRequest,
};
use crate::providers::ProviderAdapter;

/// Adapter for the v2 translator endpoint, which takes URL-form-encoded
/// fields and documents an `Accept-Encoding: application/gzip` hint on
/// every call.
#[derive(Debug, Clone)]
pub struct FormAdapter {
    endpoint: String,
}

impl FormAdapter {
    /// Create an adapter targeting the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ProviderAdapter for FormAdapter {
    fn name(&self) -> &'static str {
        "form"
    }

    fn build_request(
        &self,
        request: &TranslateRequest,
        credentials: &ProviderCredentials,
    ) -> Result<UpstreamRequest, ProviderError> {
        if credentials.key.trim().is_empty() || credentials.host.trim().is_empty() {
            return Err(ProviderError::InvalidCredentials);
        }

        Ok(UpstreamRequest {
            method: reqwest::Method::POST,
            url: self.endpoint.clone(),
            headers: vec![
                ("Accept-Encoding", "application/gzip".to_string()),
                ("X-RapidAPI-Key", credentials.key.clone()),
                ("X-RapidAPI-Host", credentials.host.clone()),
            ],
            body: UpstreamBody::Form(vec![
                ("q", request.text.clone()),
                ("target", request.target_lang.clone()),
                ("source", request.source_lang.clone()),
            ]),
        })
    }
}
