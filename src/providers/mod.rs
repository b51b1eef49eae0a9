//! Provider adapters
//!
//! Each adapter encapsulates one upstream translator: how to build its
//! request and how to reduce its response to the one stable result shape.

pub mod form;
pub mod html_json;
pub mod registry;

use serde_json::Value;

use crate::core::errors::ProviderError;
use crate::core::models::{
    NormalizedResult, ProviderCredentials, TranslateRequest, UpstreamRequest,
};

/// One upstream translation provider: request construction on one side,
/// response normalization on the other. The orchestrator performs the
/// network call and never learns provider-specific shapes.
pub trait ProviderAdapter: Send + Sync {
    /// Selection token, also the registry key.
    fn name(&self) -> &'static str;

    /// Build the outbound HTTP request for this provider.
    fn build_request(
        &self,
        request: &TranslateRequest,
        credentials: &ProviderCredentials,
    ) -> Result<UpstreamRequest, ProviderError>;

    /// Reduce a raw upstream response to the normalized result.
    ///
    /// The default probes the known response shapes in a fixed priority
    /// order, independent of provider identity. A new provider with a new
    /// schema adds a probe; the orchestrator stays untouched.
    fn parse_response(
        &self,
        status: u16,
        body: &[u8],
        target_lang: &str,
    ) -> Result<NormalizedResult, ProviderError> {
        normalize_response(status, body, target_lang)
    }
}

/// Shared response normalization used by every adapter.
///
/// A non-2xx status fails immediately; provider error bodies are not
/// translation payloads and are never inspected for one.
pub(crate) fn normalize_response(
    status: u16,
    body: &[u8],
    target_lang: &str,
) -> Result<NormalizedResult, ProviderError> {
    if !(200..300).contains(&status) {
        return Err(ProviderError::UpstreamHttp { status });
    }

    let parsed: Value =
        serde_json::from_slice(body).map_err(|_| ProviderError::UnparsableBody {
            raw: String::from_utf8_lossy(body).into_owned(),
        })?;

    match extract_translation(&parsed) {
        Some(translated_text) => Ok(NormalizedResult {
            translated_text,
            target_lang: target_lang.to_string(),
        }),
        None => Err(ProviderError::MissingTranslationField { raw: parsed }),
    }
}

/// Probe the known upstream shapes in fixed priority order; the first
/// structurally present one wins.
fn extract_translation(parsed: &Value) -> Option<String> {
    // Shape 1: { data: { translations: [ { translatedText } ] } }
    if let Some(text) = parsed
        .pointer("/data/translations/0/translatedText")
        .and_then(Value::as_str)
    {
        return Some(text.to_owned());
    }

    // Shape 2: { trans: <string> } or { trans: { title, short_text } }
    match parsed.get("trans") {
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Object(trans)) => trans
            .get("title")
            .and_then(Value::as_str)
            .or_else(|| trans.get("short_text").and_then(Value::as_str))
            .map(str::to_owned),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize_ok(body: &Value) -> NormalizedResult {
        normalize_response(200, body.to_string().as_bytes(), "es").unwrap()
    }

    fn normalize_err(body: &Value) -> ProviderError {
        normalize_response(200, body.to_string().as_bytes(), "es").unwrap_err()
    }

    #[test]
    fn test_shape_one_extraction() {
        let body = json!({"data": {"translations": [{"translatedText": "Hola"}]}});
        let result = normalize_ok(&body);

        assert_eq!(result.translated_text, "Hola");
        assert_eq!(result.target_lang, "es");
    }

    #[test]
    fn test_shape_one_is_byte_exact() {
        // Markup and entities must survive untouched.
        let body = json!({"data": {"translations": [{"translatedText": "<b>Hola&nbsp;</b>"}]}});
        assert_eq!(normalize_ok(&body).translated_text, "<b>Hola&nbsp;</b>");
    }

    #[test]
    fn test_shape_two_plain_string() {
        let body = json!({"trans": "Hallo"});
        assert_eq!(normalize_ok(&body).translated_text, "Hallo");
    }

    #[test]
    fn test_shape_two_title() {
        let body = json!({"trans": {"title": "Bonjour"}});
        assert_eq!(normalize_ok(&body).translated_text, "Bonjour");
    }

    #[test]
    fn test_shape_two_short_text_fallback() {
        let body = json!({"trans": {"short_text": "Ciao"}});
        assert_eq!(normalize_ok(&body).translated_text, "Ciao");
    }

    #[test]
    fn test_shape_two_prefers_title_over_short_text() {
        let body = json!({"trans": {"title": "Bonjour", "short_text": "Salut"}});
        assert_eq!(normalize_ok(&body).translated_text, "Bonjour");
    }

    #[test]
    fn test_shape_one_wins_when_both_present() {
        let body = json!({
            "data": {"translations": [{"translatedText": "Hola"}]},
            "trans": "should not be used"
        });
        assert_eq!(normalize_ok(&body).translated_text, "Hola");
    }

    #[test]
    fn test_trans_object_without_known_fields_fails() {
        let body = json!({"trans": {"detail": "nothing usable"}});
        let err = normalize_err(&body);

        assert!(matches!(err, ProviderError::MissingTranslationField { .. }));
    }

    #[test]
    fn test_unrelated_document_fails_with_missing_translation() {
        let body = json!({"message": "You are not subscribed to this API."});
        let err = normalize_err(&body);

        match err {
            ProviderError::MissingTranslationField { raw } => {
                assert_eq!(raw["message"], "You are not subscribed to this API.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_fails_with_unparsable() {
        let err = normalize_response(200, b"<html>oops</html>", "es").unwrap_err();

        match err {
            ProviderError::UnparsableBody { raw } => assert_eq!(raw, "<html>oops</html>"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_2xx_status_fails_regardless_of_body() {
        // Even a well-formed translation body is not trusted on an error
        // status.
        let body = json!({"data": {"translations": [{"translatedText": "Hola"}]}});
        let err = normalize_response(503, body.to_string().as_bytes(), "es").unwrap_err();

        assert!(matches!(err, ProviderError::UpstreamHttp { status: 503 }));
    }

    #[test]
    fn test_non_2xx_status_with_empty_body() {
        let err = normalize_response(503, b"", "es").unwrap_err();
        assert!(matches!(err, ProviderError::UpstreamHttp { status: 503 }));
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let body = json!({"trans": {"title": "Bonjour"}});
        assert_eq!(normalize_ok(&body), normalize_ok(&body));
    }
}
