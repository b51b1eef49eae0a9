//! Configuration management
//!
//! All settings are read once at startup. Credentials are optional at load
//! time: a misconfigured process still serves `/health`, and the gap
//! surfaces per request instead of crashing the gateway.

use crate::core::errors::ValidationError;
use crate::core::models::ProviderCredentials;

/// Default endpoint for the HTML translator provider (variant A).
const DEFAULT_HTML_ENDPOINT: &str =
    "https://google-translate113.p.rapidapi.com/api/v1/translator/html";

/// Default endpoint for the form-encoded translator provider (variant B).
const DEFAULT_FORM_ENDPOINT: &str =
    "https://google-translate1.p.rapidapi.com/language/translate/v2";

/// Process-wide gateway configuration, immutable after startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Upstream API key, absent when the process is misconfigured.
    pub rapidapi_key: Option<String>,
    /// Upstream host identifier, sent as a header with every call.
    pub rapidapi_host: Option<String>,
    /// Selection token of the adapter used when the caller names none.
    pub default_provider: String,
    /// Fixed source language applied when the caller names none.
    pub source_lang: String,
    /// Endpoint for the HTML translator provider.
    pub html_endpoint: String,
    /// Endpoint for the form-encoded translator provider.
    pub form_endpoint: String,
    /// Deadline for the outbound upstream call, in milliseconds.
    pub timeout_ms: u64,
    /// Bind address for the HTTP server.
    pub host: String,
    /// Listen port for the HTTP server.
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            rapidapi_key: None,
            rapidapi_host: None,
            default_provider: "html".to_string(),
            source_lang: "en".to_string(),
            html_endpoint: DEFAULT_HTML_ENDPOINT.to_string(),
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            timeout_ms: 30_000,
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let rapidapi_key = env_nonempty("RAPIDAPI_KEY");
        let rapidapi_host = env_nonempty("RAPIDAPI_HOST");

        let default_provider =
            std::env::var("TRANSLATE_PROVIDER").unwrap_or_else(|_| "html".to_string());

        let source_lang = std::env::var("SOURCE_LANG").unwrap_or_else(|_| "en".to_string());

        let html_endpoint = std::env::var("HTML_TRANSLATOR_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_HTML_ENDPOINT.to_string());

        let form_endpoint = std::env::var("FORM_TRANSLATOR_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_FORM_ENDPOINT.to_string());

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse::<u64>()?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()?;

        Ok(Self {
            rapidapi_key,
            rapidapi_host,
            default_provider,
            source_lang,
            html_endpoint,
            form_endpoint,
            timeout_ms,
            host,
            port,
        })
    }

    /// Resolve the provider credentials for one request.
    ///
    /// Absence of either field is a per-request configuration error, not a
    /// crash.
    pub fn credentials(&self) -> std::result::Result<ProviderCredentials, ValidationError> {
        let key = self
            .rapidapi_key
            .clone()
            .ok_or(ValidationError::MissingCredentials {
                name: "RAPIDAPI_KEY",
            })?;
        let host = self
            .rapidapi_host
            .clone()
            .ok_or(ValidationError::MissingCredentials {
                name: "RAPIDAPI_HOST",
            })?;
        Ok(ProviderCredentials { key, host })
    }

    /// Validate configuration invariants that would make the gateway
    /// inoperable for every request.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.default_provider.trim().is_empty() {
            return Err(anyhow::anyhow!("TRANSLATE_PROVIDER must not be empty"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("REQUEST_TIMEOUT_MS must be greater than 0"));
        }

        if self.html_endpoint.is_empty() || self.form_endpoint.is_empty() {
            return Err(anyhow::anyhow!("provider endpoints must not be empty"));
        }

        Ok(())
    }
}

/// Read an environment variable, treating blank values as unset.
fn env_nonempty(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GatewayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_provider, "html");
        assert_eq!(config.source_lang, "en");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_credentials_missing_key() {
        let config = GatewayConfig {
            rapidapi_host: Some("translator.test".to_string()),
            ..GatewayConfig::default()
        };

        let err = config.credentials().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingCredentials {
                name: "RAPIDAPI_KEY"
            }
        ));
    }

    #[test]
    fn test_credentials_missing_host() {
        let config = GatewayConfig {
            rapidapi_key: Some("k".to_string()),
            ..GatewayConfig::default()
        };

        let err = config.credentials().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingCredentials {
                name: "RAPIDAPI_HOST"
            }
        ));
    }

    #[test]
    fn test_credentials_present() {
        let config = GatewayConfig {
            rapidapi_key: Some("k".to_string()),
            rapidapi_host: Some("h".to_string()),
            ..GatewayConfig::default()
        };

        let creds = config.credentials().unwrap();
        assert_eq!(creds.key, "k");
        assert_eq!(creds.host, "h");
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = GatewayConfig {
            timeout_ms: 0,
            ..GatewayConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_default_provider() {
        let config = GatewayConfig {
            default_provider: "  ".to_string(),
            ..GatewayConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
