//! Inbound request validation
//!
//! Runs strictly before any network I/O, so malformed input never costs an
//! upstream call and callers get fast feedback.

use crate::core::config::GatewayConfig;
use crate::core::errors::ValidationError;
use crate::core::models::{TranslatePayload, TranslateRequest};

/// Check a raw payload and produce a validated [`TranslateRequest`].
///
/// `q` and `target` must be present and non-empty after trimming; emptiness
/// is judged on the trimmed value but the original text is preserved byte
/// for byte. Credentials are checked here as well, so a misconfigured
/// process rejects the request before building an upstream call.
pub fn validate(
    payload: &TranslatePayload,
    config: &GatewayConfig,
) -> Result<TranslateRequest, ValidationError> {
    let text = required_field(payload.q.as_deref(), "q")?;
    let target = required_field(payload.target.as_deref(), "target")?;

    config.credentials()?;

    let source_lang = payload
        .source
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(&config.source_lang);

    Ok(TranslateRequest {
        text: text.to_string(),
        target_lang: target.trim().to_string(),
        source_lang: source_lang.to_string(),
    })
}

/// Reject absent or blank required fields, returning the original value.
fn required_field<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> GatewayConfig {
        GatewayConfig {
            rapidapi_key: Some("test-key".to_string()),
            rapidapi_host: Some("translator.test".to_string()),
            ..GatewayConfig::default()
        }
    }

    #[test]
    fn test_valid_payload() {
        let payload = TranslatePayload::new("Hello", "es");
        let request = validate(&payload, &configured()).unwrap();

        assert_eq!(request.text, "Hello");
        assert_eq!(request.target_lang, "es");
        assert_eq!(request.source_lang, "en");
    }

    #[test]
    fn test_missing_text() {
        let payload = TranslatePayload {
            target: Some("es".to_string()),
            ..TranslatePayload::default()
        };

        let err = validate(&payload, &configured()).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "q" }));
    }

    #[test]
    fn test_empty_text() {
        let payload = TranslatePayload::new("", "es");

        let err = validate(&payload, &configured()).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "q" }));
    }

    #[test]
    fn test_whitespace_text() {
        let payload = TranslatePayload::new("   ", "es");

        let err = validate(&payload, &configured()).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "q" }));
    }

    #[test]
    fn test_missing_target() {
        let payload = TranslatePayload {
            q: Some("Hello".to_string()),
            ..TranslatePayload::default()
        };

        let err = validate(&payload, &configured()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField { field: "target" }
        ));
    }

    #[test]
    fn test_missing_credentials() {
        let payload = TranslatePayload::new("Hello", "es");

        let err = validate(&payload, &GatewayConfig::default()).unwrap_err();
        assert!(matches!(err, ValidationError::MissingCredentials { .. }));
    }

    #[test]
    fn test_text_is_not_trimmed() {
        // Markup often carries meaningful surrounding whitespace; only the
        // emptiness check trims.
        let payload = TranslatePayload::new("  <b>Hello</b>  ", "es");
        let request = validate(&payload, &configured()).unwrap();

        assert_eq!(request.text, "  <b>Hello</b>  ");
    }

    #[test]
    fn test_explicit_source_overrides_default() {
        let payload = TranslatePayload::new("Hallo", "en").with_source("de");
        let request = validate(&payload, &configured()).unwrap();

        assert_eq!(request.source_lang, "de");
    }

    #[test]
    fn test_blank_source_falls_back_to_default() {
        let payload = TranslatePayload::new("Hello", "es").with_source("  ");
        let request = validate(&payload, &configured()).unwrap();

        assert_eq!(request.source_lang, "en");
    }
}
