use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Ordered candidate directories for the kokoro-tts executable.
    pub kokoro_search_paths: Vec<PathBuf>,
    /// Directory the external tool writes audio files into.
    pub output_dir: PathBuf,
    pub synthesis_timeout_secs: u64,
    pub max_concurrent_syntheses: usize,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            kokoro_search_paths: env::var("KOKORO_SEARCH_PATHS")
                .map(|raw| {
                    raw.split(':')
                        .filter(|s| !s.is_empty())
                        .map(PathBuf::from)
                        .collect()
                })
                .unwrap_or_else(|_| default_search_paths()),
            output_dir: env::var("TTS_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/tmp/tts_output")),
            synthesis_timeout_secs: env::var("SYNTHESIS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()?,
            max_concurrent_syntheses: env::var("MAX_CONCURRENT_SYNTHESES")
                .unwrap_or_else(|_| "4".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }
}

/// Search order recovered from the original Render deployment: deployment
/// locations first, generic fallbacks last.
fn default_search_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/opt/render/project/src/kokoro-tts"),
        PathBuf::from("/opt/render/project/src"),
        PathBuf::from("."),
        PathBuf::from("./kokoro-tts"),
    ]
}
