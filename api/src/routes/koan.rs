use std::time::Instant;

use axum::extract::State;
use axum::{Json, Router, routing::post};

use koan_core::compose::{KoanRequest, KoanResponse, generate_koan_response};
use koan_core::error::ApiError;

use crate::error::AppError;
use crate::extract::ClientAddr;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/koan/generate", post(generate_koan))
}

/// Generate a contemplative-practice response for free-text input
///
/// Throttles by peer IP before any other work. The crisis filter inside the
/// composer overrides template selection entirely when it fires. Logs carry
/// only duration and input length, never the text itself.
#[utoipa::path(
    post,
    path = "/koan/generate",
    request_body = KoanRequest,
    responses(
        (status = 200, description = "Composed practice response", body = KoanResponse),
        (status = 429, description = "Rate limit exceeded", body = ApiError),
        (status = 500, description = "Internal error", body = ApiError)
    ),
    tag = "koan"
)]
pub async fn generate_koan(
    State(state): State<AppState>,
    ClientAddr(peer): ClientAddr,
    Json(request): Json<KoanRequest>,
) -> Result<Json<KoanResponse>, AppError> {
    if !state.limiter.check(peer).await {
        return Err(AppError::RateLimited);
    }

    let start = Instant::now();
    let response = generate_koan_response(&request.user_text, &request.hints);

    tracing::info!(
        duration_ms = start.elapsed().as_millis() as u64,
        input_chars = request.user_text.chars().count(),
        "request processed"
    );

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::extract::ConnectInfo;
    use axum::http::{Request, StatusCode, header};
    use std::net::SocketAddr;
    use tower::ServiceExt;

    use crate::state::AppState;

    fn app() -> Router {
        crate::app(AppState::new())
    }

    fn post_koan(body: &str, peer: SocketAddr) -> Request<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri("/koan/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        request.extensions_mut().insert(ConnectInfo(peer));
        request
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn peer(n: u8) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, n], 52000))
    }

    #[tokio::test]
    async fn returns_hinted_template() {
        let request = post_koan(
            r#"{"user_text": "我总是想要得到更多，心里很不安", "hints": ["seeking"]}"#,
            peer(1),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["koan"], "未起求心前，谁在要？");
        assert_eq!(json["micro_practice"], "只数三息；起评判即从一再来。");
        assert_eq!(json["quote"], "念起即觉。");
        assert_eq!(json["policy_note"], "此为引导练习，非悟境评判。");
    }

    #[tokio::test]
    async fn defaults_to_scattered_without_hints() {
        let request = post_koan(r#"{"user_text": "心里有点乱"}"#, peer(2));
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["koan"], "念与念间，谁在知？");
        assert_eq!(json["micro_practice"], "数息至三，失数即从一。");
        assert!(json.get("quote").is_none());
        assert!(json["mirror"].as_str().unwrap().starts_with("你说："));
    }

    #[tokio::test]
    async fn crisis_input_gets_safety_response() {
        let request = post_koan(
            r#"{"user_text": "我很绝望", "hints": ["seeking"]}"#,
            peer(3),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["koan"], "");
        assert!(
            json["policy_note"]
                .as_str()
                .unwrap()
                .contains("400-161-9995")
        );
    }

    #[tokio::test]
    async fn sixty_first_request_in_window_is_throttled() {
        let app = app();
        for _ in 0..60 {
            let response = app
                .clone()
                .oneshot(post_koan(r#"{"user_text": "嗯"}"#, peer(4)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .clone()
            .oneshot(post_koan(r#"{"user_text": "嗯"}"#, peer(4)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        let json = body_json(response).await;
        assert_eq!(json["error"], "rate_limited");
        assert!(json["request_id"].as_str().is_some());

        // Another client is unaffected.
        let response = app
            .oneshot(post_koan(r#"{"user_text": "嗯"}"#, peer(5)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_peer_address_is_internal_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/koan/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"user_text": "嗯"}"#))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "internal_error");
        assert_eq!(json["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn health_reports_healthy_with_numeric_timestamp() {
        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert!(json["timestamp"].as_i64().unwrap() > 0);
    }
}
