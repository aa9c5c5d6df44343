//! Generate Handler - 合成请求中转

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::ports::{Pitch, SynthesisRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 合成请求体
///
/// 除 text 外的字段不做校验，原样透传给上游
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio_type: Option<String>,
    #[serde(default)]
    pub voice_name: Option<String>,
    #[serde(default)]
    pub download: Option<bool>,
    #[serde(default)]
    pub pitch: Option<Pitch>,
}

/// POST /generate
///
/// 校验 text 非空后调用上游合成，整体缓冲音频字节并以 audio/mpeg 返回。
/// 上游失败或网络错误统一由 ApiError 转为 500 纯文本响应，不做重试
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Response, ApiError> {
    let text = match req.text {
        Some(text) if !text.is_empty() => text,
        _ => {
            return Err(ApiError::BadRequest(
                "Text parameter is required".to_string(),
            ))
        }
    };

    let request = SynthesisRequest {
        text,
        audio_type: req.audio_type,
        voice_name: req.voice_name,
        download: req.download.unwrap_or(false),
        pitch: req.pitch,
    };

    let audio_data = state.tts_engine.synthesize(request).await?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "audio/mpeg")
        .header(header::CONTENT_LENGTH, audio_data.len())
        .body(Body::from(audio_data))
        .unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use tower::util::ServiceExt;

    use crate::application::ports::TtsEnginePort;
    use crate::infrastructure::adapters::FakeTtsClient;

    fn create_test_app(engine: Arc<FakeTtsClient>) -> Router {
        let state = Arc::new(AppState::new(engine.clone() as Arc<dyn TtsEnginePort>));
        Router::new()
            .route("/generate", post(generate))
            .with_state(state)
    }

    fn json_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/generate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_missing_text_returns_400_without_upstream_call() {
        let engine = Arc::new(FakeTtsClient::with_audio(vec![1, 2, 3]));
        let app = create_test_app(engine.clone());

        let response = app.oneshot(json_request("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Text parameter is required");
        assert_eq!(engine.request_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_text_returns_400_without_upstream_call() {
        let engine = Arc::new(FakeTtsClient::with_audio(vec![1, 2, 3]));
        let app = create_test_app(engine.clone());

        let response = app.oneshot(json_request(r#"{"text":""}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Text parameter is required");
        assert_eq!(engine.request_count(), 0);
    }

    #[tokio::test]
    async fn test_success_relays_exact_bytes_as_audio_mpeg() {
        let engine = Arc::new(FakeTtsClient::with_audio(vec![0x01, 0x02, 0x03]));
        let app = create_test_app(engine.clone());

        let response = app
            .oneshot(json_request(r#"{"text":"hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "audio/mpeg"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], &[0x01, 0x02, 0x03]);

        let recorded = engine.recorded_requests();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].text, "hello");
        assert!(recorded[0].audio_type.is_none());
        assert!(recorded[0].voice_name.is_none());
        assert!(!recorded[0].download);
        assert!(recorded[0].pitch.is_none());
    }

    #[tokio::test]
    async fn test_optional_fields_forwarded() {
        let engine = Arc::new(FakeTtsClient::with_audio(b"mp3-bytes".to_vec()));
        let app = create_test_app(engine.clone());

        let body = r#"{"text":"你好","audioType":"mp3","voiceName":"xiaoyun","download":true,"pitch":1.5}"#;
        let response = app.oneshot(json_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let recorded = engine.recorded_requests();
        assert_eq!(recorded[0].text, "你好");
        assert_eq!(recorded[0].audio_type.as_deref(), Some("mp3"));
        assert_eq!(recorded[0].voice_name.as_deref(), Some("xiaoyun"));
        assert!(recorded[0].download);
        assert_eq!(recorded[0].pitch.as_ref().unwrap().to_string(), "1.5");
    }

    #[tokio::test]
    async fn test_pitch_accepts_string_form() {
        let engine = Arc::new(FakeTtsClient::with_audio(vec![0]));
        let app = create_test_app(engine.clone());

        let response = app
            .oneshot(json_request(r#"{"text":"hi","pitch":"2"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            engine.recorded_requests()[0].pitch.as_ref().unwrap().to_string(),
            "2"
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_returns_500_with_prefix() {
        let engine = Arc::new(FakeTtsClient::with_failure());
        let app = create_test_app(engine);

        let response = app
            .oneshot(json_request(r#"{"text":"hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.starts_with("Error processing request: "));
    }

    #[tokio::test]
    async fn test_binary_payload_relayed_unmodified() {
        // 任意字节内容都原样返回，包括非法 UTF-8 序列
        let payload: Vec<u8> = (0..=255).collect();
        let engine = Arc::new(FakeTtsClient::with_audio(payload.clone()));
        let app = create_test_app(engine);

        let response = app
            .oneshot(json_request(r#"{"text":"hello"}"#))
            .await
            .unwrap();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], &payload[..]);
    }
}
