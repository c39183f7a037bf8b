use crate::helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn it_should_generate_audio_for_valid_text() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/generate",
            &json!({
                "text": "Hello world",
                "voice": "af_sarah",
                "speed": 1.0,
                "format": "mp3"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.header("content-type").unwrap(), "audio/mpeg");

    // Stub tool copies the input text, so the body is exactly the text
    assert_eq!(response.body_bytes, b"Hello world");

    let disposition = response.header("content-disposition").unwrap();
    assert!(disposition.contains("tts_"));
    assert!(disposition.contains(".mp3"));
}

#[tokio::test]
async fn it_should_serve_wav_with_matching_content_type() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/generate", &json!({"text": "Hello", "format": "wav"}))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.header("content-type").unwrap(), "audio/wav");
    assert!(response
        .header("content-disposition")
        .unwrap()
        .contains(".wav"));
}

#[tokio::test]
async fn it_should_reject_empty_text() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/generate", &json!({"text": "", "voice": "af_sarah"}))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("empty");
}

#[tokio::test]
async fn it_should_reject_whitespace_only_text() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/generate", &json!({"text": "   \n\t  "}))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("empty");
}

#[tokio::test]
async fn it_should_reject_text_over_5000_characters() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/generate", &json!({"text": "a".repeat(5001)}))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("too long");
}

#[tokio::test]
async fn it_should_reject_unsupported_formats() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/generate", &json!({"text": "Hello", "format": "ogg"}))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Unsupported audio format");
}

#[tokio::test]
async fn it_should_fail_when_the_tool_is_missing() {
    let ctx = TestContext::without_tool().await.unwrap();

    let response = ctx
        .client
        .post("/generate", &json!({"text": "Hello world"}))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("not found");
}

#[tokio::test]
async fn it_should_surface_tool_stderr_on_failure() {
    let ctx = TestContext::new().await.unwrap();
    ctx.install_tool("#!/bin/sh\necho 'voice pack corrupted' >&2\nexit 1\n")
        .unwrap();

    let response = ctx
        .client
        .post("/generate", &json!({"text": "Hello world"}))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("voice pack corrupted");
}

#[tokio::test]
async fn it_should_fail_when_tool_produces_no_output() {
    let ctx = TestContext::new().await.unwrap();
    ctx.install_tool("#!/bin/sh\nexit 0\n").unwrap();

    let response = ctx
        .client
        .post("/generate", &json!({"text": "Hello world"}))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("output file is missing");
}

#[tokio::test]
async fn it_should_remove_the_served_audio_file() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post("/generate", &json!({"text": "Hello world"}))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert!(ctx.output_files().is_empty());
}
