//! TTS Handler - 即时合成
//!
//! `GET /tts?text=<string>&lang=<code>&slow=<bool>`

use axum::{
    body::Body,
    extract::{Query, State},
    response::Response,
};
use http::{header, StatusCode};
use std::sync::Arc;

use crate::application::RenderSpeech;
use crate::infrastructure::http::dto::TtsQuery;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 响应中的下载文件名
const DOWNLOAD_NAME: &str = "tts.mp3";

pub async fn render_tts(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let query = TtsQuery::from_pairs(pairs);
    let command = RenderSpeech {
        slow: query.slow_flag(),
        text: query.text,
        lang: query.lang.unwrap_or_else(|| state.default_lang.clone()),
    };

    let rendered = state.render_handler.handle(command).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, rendered.content_type)
        .header(header::CONTENT_LENGTH, rendered.audio_data.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", DOWNLOAD_NAME),
        )
        .body(Body::from(rendered.audio_data))
        .map_err(|e| ApiError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SpeechEnginePort;
    use crate::infrastructure::adapters::{FakeTtsClient, FakeTtsClientConfig};
    use crate::infrastructure::http::server::build_router;
    use http::Request;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn app_with(engine: Arc<dyn SpeechEnginePort>, default_lang: &str) -> axum::Router {
        build_router(Arc::new(AppState::new(engine, default_lang)))
    }

    fn app() -> axum::Router {
        app_with(
            Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default())),
            "he",
        )
    }

    async fn get(app: axum::Router, uri: &str) -> Response {
        let request = Request::builder()
            .uri(uri)
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_text_returns_400() {
        for uri in ["/tts", "/tts?text=", "/tts?lang=en&slow=true"] {
            let response = get(app(), uri).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(
                json_body(response).await,
                json!({"error": "missing text parameter"})
            );
        }
    }

    #[tokio::test]
    async fn test_render_returns_audio() {
        let response = get(app(), "/tts?text=hello").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "inline; filename=\"tts.mp3\""
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(!bytes.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_text_uses_first_value() {
        let response = get(app(), "/tts?text=a&text=b").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");
    }

    #[tokio::test]
    async fn test_repeated_lang_uses_first_value() {
        let response = get(app(), "/tts?text=hi&lang=en&lang=fr").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get(app(), "/tts?text=hi&lang=xx&lang=en").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await["details"],
            "Language not supported: xx"
        );
    }

    #[tokio::test]
    async fn test_render_hebrew_slow() {
        let engine = Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default()));
        let app = app_with(engine.clone(), "he");

        let response = get(app, "/tts?text=%D7%A9%D7%9C%D7%95%D7%9D&slow=yes").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(engine.call_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_language_returns_500() {
        let response = get(app(), "/tts?text=hello&lang=xx-invalid").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"], "tts failed");
        assert_eq!(body["details"], "Language not supported: xx-invalid");
    }

    #[tokio::test]
    async fn test_engine_failure_returns_500_with_details() {
        let app = app_with(Arc::new(FakeTtsClient::failing("upstream unavailable")), "he");

        let response = get(app, "/tts?text=hello").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"], "tts failed");
        assert!(body["details"]
            .as_str()
            .unwrap()
            .contains("upstream unavailable"));
    }

    #[tokio::test]
    async fn test_default_language_applied() {
        let app = app_with(
            Arc::new(FakeTtsClient::new(FakeTtsClientConfig::default())),
            "xx",
        );

        let body = json_body(get(app, "/tts?text=hello").await).await;
        assert_eq!(body["details"], "Language not supported: xx");
    }

    #[tokio::test]
    async fn test_cors_headers_on_every_response() {
        for uri in ["/tts?text=hello", "/tts", "/tts?text=hi&lang=xx"] {
            let response = get(app(), uri).await;
            assert_eq!(
                response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
                "*",
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/tts?text=hello")
            .header(header::ORIGIN, "https://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_ping() {
        let body = json_body(get(app(), "/ping").await).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["engine"], "fake");
    }
}
