use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kokoro_tts_api::controllers::tts::TtsController;
use kokoro_tts_api::domain::tts::TtsService;
use kokoro_tts_api::infrastructure::config::{Config, LogFormat};
use kokoro_tts_api::infrastructure::http::start_http_server;
use kokoro_tts_api::infrastructure::synthesizer::{
    KokoroInvoker, KokoroLocator, SpeechSynthesizer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting Kokoro TTS API on {}:{}",
        config.host,
        config.port
    );

    // The shared output directory must exist before the first request
    tokio::fs::create_dir_all(&config.output_dir).await?;
    tracing::info!("Output directory ready at {}", config.output_dir.display());

    let locator = KokoroLocator::new(config.kokoro_search_paths.clone());
    report_tool_status(&locator);

    // === DEPENDENCY INJECTION SETUP ===
    let synthesizer: Arc<dyn SpeechSynthesizer> = Arc::new(KokoroInvoker::new(
        locator,
        config.output_dir.clone(),
        Duration::from_secs(config.synthesis_timeout_secs),
        config.max_concurrent_syntheses,
    ));
    let tts_service = Arc::new(TtsService::new(synthesizer.clone()));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    let config = Arc::new(config);

    // Start HTTP server with all routes
    start_http_server(config, synthesizer, tts_controller).await?;

    Ok(())
}

/// Log whether the external tool and its bundled data files are in place.
/// Missing files are warnings, not fatal: the tool may appear after deploy.
fn report_tool_status(locator: &KokoroLocator) {
    match locator.locate() {
        Some(script) => {
            tracing::info!("Kokoro TTS script found at {}", script.display());

            if let Some(dir) = script.parent() {
                for data_file in ["kokoro-v1.0.onnx", "voices-v1.0.bin"] {
                    if dir.join(data_file).is_file() {
                        tracing::info!("Found {}", data_file);
                    } else {
                        tracing::warn!("{} not found in {}", data_file, dir.display());
                    }
                }
            }
        }
        None => tracing::warn!("Kokoro TTS script not found in any search path"),
    }
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "kokoro_tts_api=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "kokoro_tts_api=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
