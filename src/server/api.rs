//! HTTP API server implementation
//!
//! Thin transport boundary: JSON in, JSON out. All translation semantics
//! live in the gateway orchestrator; this layer only maps results and
//! errors onto the wire contract.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::core::errors::{GatewayError, ProviderError, ValidationError};
use crate::core::gateway::Gateway;
use crate::core::models::TranslatePayload;

/// Application state
#[derive(Clone)]
pub struct AppState {
    gateway: Arc<Gateway>,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Successful translation response
#[derive(Serialize)]
pub struct TranslateResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The normalized translation.
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// Error envelope: `error` is the stable summary, `message` carries
/// diagnostics such as the raw upstream body. Raw upstream content never
/// appears as a success payload.
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Stable, client-facing failure summary.
    pub error: String,
    /// Optional diagnostic detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Wrapper giving [`GatewayError`] an HTTP rendering.
pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(error: GatewayError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = render_error(&self.0);
        (status, Json(body)).into_response()
    }
}

/// Map a gateway failure to an HTTP status and error envelope.
///
/// Client mistakes are 4xx; provider and network failures are 5xx. A
/// missing-credentials failure is the server's misconfiguration, not the
/// caller's, and maps to 500.
fn render_error(error: &GatewayError) -> (StatusCode, ErrorResponse) {
    let status = match error {
        GatewayError::Validation(ValidationError::MissingField { .. }) => StatusCode::BAD_REQUEST,
        GatewayError::Validation(ValidationError::MissingCredentials { .. }) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        GatewayError::UnknownProvider { .. } => StatusCode::BAD_REQUEST,
        GatewayError::Provider(_) | GatewayError::Network { .. } => StatusCode::BAD_GATEWAY,
    };

    let message = match error {
        GatewayError::Provider(provider_error) => provider_diagnostic(provider_error),
        GatewayError::Network { message } => Some(message.clone()),
        _ => None,
    };

    (
        status,
        ErrorResponse {
            error: error.to_string(),
            message,
        },
    )
}

/// Diagnostic detail for a provider failure. Raw upstream content is
/// confined to this field.
fn provider_diagnostic(error: &ProviderError) -> Option<String> {
    match error {
        ProviderError::InvalidCredentials => None,
        ProviderError::UpstreamHttp { status } => Some(format!("upstream status {status}")),
        ProviderError::UnparsableBody { raw } => Some(raw.clone()),
        ProviderError::MissingTranslationField { raw } => Some(raw.to_string()),
    }
}

/// Health check handler. Independent of credentials: a misconfigured
/// process still reports liveness.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslatePayload>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let result = state.gateway.translate(&payload).await.map_err(|e| {
        warn!(error = %e, "translate request failed");
        ApiError(e)
    })?;

    Ok(Json(TranslateResponse {
        success: true,
        translated_text: result.translated_text,
    }))
}

/// Build the router. Exposed separately so tests can bind it to an
/// ephemeral port.
pub fn router(gateway: Arc<Gateway>) -> Router {
    let state = Arc::new(AppState { gateway });

    Router::new()
        .route("/health", get(health))
        .route("/translate", post(translate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(gateway: Gateway, host: &str, port: u16) -> anyhow::Result<()> {
    let app = router(Arc::new(gateway));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("starting gateway on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
