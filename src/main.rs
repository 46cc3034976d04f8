//! Inbox triage server binary.
//!
//! Wires configuration, the model client, the analysis pipeline, and the
//! HTTP layer together, then serves until shutdown.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use inbox_triage::adapters::ai::{OpenAICompatibleClient, OpenAICompatibleConfig};
use inbox_triage::adapters::http::{triage_router, TriageAppState};
use inbox_triage::application::AnalysisPipeline;
use inbox_triage::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let model_config = OpenAICompatibleConfig::new(
        config.model.api_key.clone().unwrap_or_default(),
    )
    .with_model(&config.model.model)
    .with_base_url(&config.model.base_url)
    .with_timeout(config.model.timeout());
    let model_client = Arc::new(OpenAICompatibleClient::new(model_config));

    let pipeline = Arc::new(AnalysisPipeline::new(model_client));
    let state = TriageAppState::new(pipeline);

    let app = triage_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, model = %config.model.model, "inbox triage server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the CORS layer: configured origins, or permissive when none are
/// set (local development against an arbitrary frontend).
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    }
}
