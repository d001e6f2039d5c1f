pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::contact::handlers::handle_contact;
use crate::page::handlers::handle_page;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Pursuit images and other public files; missing files are plain 404s.
    let assets = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route("/", get(handle_page))
        .route("/health", get(health::health_handler))
        .route("/api/contact", post(handle_contact))
        .fallback_service(assets)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, MailSettings, RateLimitSettings};
    use crate::contact::mailer::testing::RecordingMailer;
    use crate::contact::rate_limit::RateLimiter;
    use crate::pursuits::seed::seed_pursuits;

    fn state() -> AppState {
        let rate_limit = RateLimitSettings {
            max_requests: 5,
            window: Duration::from_secs(600),
            trust_forwarded_for: false,
        };
        AppState {
            config: Arc::new(Config {
                port: 0,
                rust_log: "info".to_string(),
                public_dir: "does-not-exist".to_string(),
                mail: MailSettings::default(),
                rate_limit,
            }),
            mailer: Arc::new(RecordingMailer::default()),
            limiter: Arc::new(RateLimiter::new(rate_limit)),
            pursuits: seed_pursuits().into(),
        }
    }

    async fn get_text(uri: &str) -> (StatusCode, String) {
        let response = build_router(state())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_text("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn test_home_renders_closed_widget() {
        let (status, body) = get_text("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Victorian Cast Iron Restoration"));
        assert!(!body.contains("role=\"dialog\""));
        assert!(!body.contains("<body style="));
    }

    #[tokio::test]
    async fn test_pursuit_query_opens_overlay() {
        let (status, body) = get_text("/?pursuit=victorian-cast-iron-restoration").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("role=\"dialog\""));
        assert!(body.contains("<body style=\"overflow: hidden\">"));
    }

    #[tokio::test]
    async fn test_unknown_pursuit_renders_closed() {
        let (status, body) = get_text("/?pursuit=nope").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("role=\"dialog\""));
        assert!(!body.contains("<body style="));
    }

    #[tokio::test]
    async fn test_missing_asset_is_404() {
        let (status, _) = get_text("/pursuits/missing.jpg").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
