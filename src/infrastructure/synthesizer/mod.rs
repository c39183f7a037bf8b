pub mod kokoro;
pub mod locator;

pub use kokoro::KokoroInvoker;
pub use locator::KokoroLocator;

use crate::domain::tts::{SynthesisError, SynthesisSpec};
use async_trait::async_trait;
use std::path::PathBuf;

/// Backend that turns text into an audio file on disk.
/// Abstracts the external synthesis tool so the service layer and tests can
/// swap in their own implementation.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Run one complete synthesis attempt and return the produced audio file.
    /// Never retries; every failure is terminal for that request.
    async fn synthesize(&self, spec: &SynthesisSpec) -> Result<PathBuf, SynthesisError>;

    /// Where the external tool currently resolves to, if anywhere.
    fn availability(&self) -> Option<PathBuf>;
}
