pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::{health, tts::TtsController, voices};
use crate::infrastructure::config::Config;
use crate::infrastructure::synthesizer::SpeechSynthesizer;
use request_id::request_id_middleware;

/// Assemble the application router with all routes and middleware.
pub fn build_router(
    synthesizer: Arc<dyn SpeechSynthesizer>,
    tts_controller: Arc<TtsController>,
) -> Router {
    // Generation route
    let generate_routes = Router::new()
        .route("/generate", post(TtsController::generate))
        .with_state(tts_controller);

    // Metadata and health routes
    let health_routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .with_state(synthesizer);

    // The service sits behind browser clients on arbitrary origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health_routes)
        .merge(generate_routes)
        .route("/voices", get(voices::list_voices))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(synthesizer, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
