use super::locator::KokoroLocator;
use super::SpeechSynthesizer;
use crate::domain::tts::{SynthesisError, SynthesisSpec};
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;
use tokio::sync::Semaphore;
use uuid::Uuid;

/// Runs the external kokoro-tts tool: one child process per request, a hard
/// wall-clock timeout, and a bounded number of concurrent children.
///
/// Each invocation writes the text to a uniquely named temp file, points the
/// tool at a uniquely named output path, and classifies the outcome. The temp
/// input file is removed on every exit path, including timeout.
pub struct KokoroInvoker {
    locator: KokoroLocator,
    output_dir: PathBuf,
    timeout: Duration,
    permits: Semaphore,
}

impl KokoroInvoker {
    pub fn new(
        locator: KokoroLocator,
        output_dir: PathBuf,
        timeout: Duration,
        max_concurrent: usize,
    ) -> Self {
        Self {
            locator,
            output_dir,
            timeout,
            permits: Semaphore::new(max_concurrent),
        }
    }

    fn output_path(&self, spec: &SynthesisSpec) -> PathBuf {
        let id = Uuid::new_v4().simple().to_string();
        self.output_dir
            .join(format!("tts_{}.{}", &id[..8], spec.format.extension()))
    }
}

#[async_trait]
impl SpeechSynthesizer for KokoroInvoker {
    async fn synthesize(&self, spec: &SynthesisSpec) -> Result<PathBuf, SynthesisError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| SynthesisError::Io(std::io::Error::other("synthesis queue closed")))?;

        let script = self.locator.locate().ok_or(SynthesisError::ToolNotFound)?;

        // The tool resolves its model files relative to its own directory.
        let workdir = script.parent().unwrap_or(Path::new(".")).to_path_buf();

        let mut input = tempfile::Builder::new()
            .prefix("kokoro_input_")
            .suffix(".txt")
            .tempfile()?;
        input.write_all(spec.text.as_bytes())?;
        input.flush()?;

        let output_path = self.output_path(spec);

        let mut command = Command::new(&script);
        command
            .arg(input.path())
            .arg(&output_path)
            .arg(format!("--voice={}", spec.voice))
            .arg(format!("--speed={}", spec.speed))
            .arg(format!("--format={}", spec.format))
            .current_dir(&workdir)
            .kill_on_drop(true);

        tracing::info!(
            script = %script.display(),
            output = %output_path.display(),
            "Running kokoro-tts"
        );

        let result = tokio::time::timeout(self.timeout, command.output()).await;

        // kill_on_drop has already reaped the child on the timeout path.
        let outcome = match result {
            Err(_) => Err(SynthesisError::Timeout(self.timeout.as_secs())),
            Ok(Err(e)) => Err(SynthesisError::Io(e)),
            Ok(Ok(output)) if !output.status.success() => {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                Err(SynthesisError::ToolExecutionFailed(stderr))
            }
            Ok(Ok(_)) if !output_path.is_file() => Err(SynthesisError::OutputMissing),
            Ok(Ok(_)) => Ok(output_path),
        };

        // Unconditional cleanup of the input file, success or failure.
        if let Err(e) = input.close() {
            tracing::warn!(error = %e, "Failed to remove temp input file");
        }

        match &outcome {
            Ok(path) => tracing::info!(path = %path.display(), "TTS generation successful"),
            Err(e) => tracing::error!(error = %e, "TTS generation failed"),
        }

        outcome
    }

    fn availability(&self) -> Option<PathBuf> {
        self.locator.locate()
    }
}
