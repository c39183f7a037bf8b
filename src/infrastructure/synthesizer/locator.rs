use std::path::PathBuf;

/// Name of the external synthesizer executable.
pub const KOKORO_BIN: &str = "kokoro-tts";

/// Finds the kokoro-tts executable among an ordered list of candidate
/// directories. First match wins, so deployment-specific locations belong
/// earlier in the list than generic fallbacks.
#[derive(Debug, Clone)]
pub struct KokoroLocator {
    search_paths: Vec<PathBuf>,
}

impl KokoroLocator {
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Return the full path of the first kokoro-tts script found. No
    /// recursive search, no guessing outside the configured list.
    pub fn locate(&self) -> Option<PathBuf> {
        self.search_paths
            .iter()
            .map(|dir| dir.join(KOKORO_BIN))
            .find(|candidate| candidate.is_file())
    }
}
