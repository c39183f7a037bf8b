use anyhow::Result;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

use kokoro_tts_api::controllers::tts::TtsController;
use kokoro_tts_api::domain::tts::TtsService;
use kokoro_tts_api::infrastructure::http::build_router;
use kokoro_tts_api::infrastructure::synthesizer::{
    KokoroInvoker, KokoroLocator, SpeechSynthesizer,
};


use api_client::TestClient;

/// Stub kokoro-tts used by default: copies the input text into the output
/// file so responses carry real bytes.
const STUB_TOOL: &str = "#!/bin/sh\ncp \"$1\" \"$2\"\n";

pub struct TestContext {
    pub client: TestClient,
    tool_dir: TempDir,
    output_dir: TempDir,
}

impl TestContext {
    /// Start the app with a working stub synthesizer installed.
    pub async fn new() -> Result<Self> {
        let ctx = Self::start().await?;
        ctx.install_tool(STUB_TOOL)?;
        Ok(ctx)
    }

    /// Start the app with no synthesizer installed anywhere.
    pub async fn without_tool() -> Result<Self> {
        Self::start().await
    }

    async fn start() -> Result<Self> {
        let tool_dir = TempDir::new()?;
        let output_dir = TempDir::new()?;

        let locator = KokoroLocator::new(vec![tool_dir.path().to_path_buf()]);
        let synthesizer: Arc<dyn SpeechSynthesizer> = Arc::new(KokoroInvoker::new(
            locator,
            output_dir.path().to_path_buf(),
            Duration::from_secs(30),
            2,
        ));
        let tts_service = Arc::new(TtsService::new(synthesizer.clone()));
        let tts_controller = Arc::new(TtsController::new(tts_service));
        let app = build_router(synthesizer, tts_controller);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            client: TestClient::new(&format!("http://{}", addr)),
            tool_dir,
            output_dir,
        })
    }

    /// Install (or replace) the stub synthesizer script.
    pub fn install_tool(&self, body: &str) -> Result<()> {
        let path = self.tool_dir.path().join("kokoro-tts");
        fs::write(&path, body)?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(())
    }

    /// Audio files currently present in the output directory.
    pub fn output_files(&self) -> Vec<PathBuf> {
        fs::read_dir(self.output_dir.path())
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.path())
                    .collect()
            })
            .unwrap_or_default()
    }
}
