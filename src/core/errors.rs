//! Error taxonomy for the gateway

use thiserror::Error;

/// Inbound request validation failures. These are raised before any network
/// I/O and never cost an upstream call.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required request field is absent or empty after trimming.
    #[error("missing required field: {field}")]
    MissingField {
        /// Wire name of the offending field.
        field: &'static str,
    },

    /// Provider credentials are not present in process configuration.
    #[error("missing provider credentials: {name}")]
    MissingCredentials {
        /// Environment variable that was not set.
        name: &'static str,
    },
}

/// Failures attributable to a specific upstream provider. The raw context
/// rides along for diagnostics but is never surfaced as a success payload.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Credentials are present but unusable (blank key or host).
    #[error("provider credentials are unusable")]
    InvalidCredentials,

    /// Upstream answered with a non-2xx status. The body is not inspected
    /// for a translation in this case.
    #[error("upstream returned HTTP {status}")]
    UpstreamHttp {
        /// Status code as received from the provider.
        status: u16,
    },

    /// Upstream body could not be parsed as a structured document.
    #[error("upstream body is not structured data")]
    UnparsableBody {
        /// The raw body text, kept for diagnostics.
        raw: String,
    },

    /// Upstream body parsed but carried no recognizable translation field.
    #[error("upstream response carries no translation")]
    MissingTranslationField {
        /// The parsed document, kept for diagnostics.
        raw: serde_json::Value,
    },
}

/// Top-level failure surfaced by the orchestrator. Every failure path ends
/// in one of these; nothing is silently swallowed.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A caller-specified selection token matched no registered adapter.
    #[error("unknown provider: {token}")]
    UnknownProvider {
        /// The token as supplied by the caller.
        token: String,
    },

    /// Request validation failed before any upstream contact.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The selected provider failed to produce a usable translation.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The outbound call itself failed (connect error, timeout).
    #[error("network failure: {message}")]
    Network {
        /// Transport-level error description.
        message: String,
    },
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
