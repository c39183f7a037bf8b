// End-to-end integration tests for the Kokoro TTS API
//
// Each test spins up the full axum application on an ephemeral port with its
// own temporary output directory and, where needed, a stub kokoro-tts script
// in a private search path. No state is shared between tests, so they run in
// parallel without conflicts.

mod helpers;
mod test_generate;
