use super::DEFAULT_VOICE;
use serde::Serialize;
use std::collections::BTreeMap;

/// Response for GET /voices
#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: BTreeMap<&'static str, VoiceSet>,
    pub default: &'static str,
    pub note: &'static str,
}

/// Voice identifiers for one locale, grouped by gender.
#[derive(Debug, Serialize)]
pub struct VoiceSet {
    pub female: Vec<&'static str>,
    pub male: Vec<&'static str>,
}

/// Static catalog of the voices bundled with the kokoro-tts model. The tool
/// itself is opaque, so this list is maintained by hand.
pub fn voice_catalog() -> VoicesResponse {
    let mut voices = BTreeMap::new();
    voices.insert(
        "en-us",
        VoiceSet {
            female: vec!["af_sarah", "af_nova", "af_alloy", "af_echo"],
            male: vec!["am_adam", "am_onyx", "am_fable"],
        },
    );
    voices.insert(
        "en-gb",
        VoiceSet {
            female: vec!["bf_emma", "bf_charlotte"],
            male: vec!["bm_brian", "bm_daniel"],
        },
    );
    voices.insert(
        "ja",
        VoiceSet {
            female: vec!["jf_alpha"],
            male: vec!["jm_kumo"],
        },
    );

    VoicesResponse {
        voices,
        default: DEFAULT_VOICE,
        note: "Use voice codes like 'af_sarah' in your requests",
    }
}
