#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tate_api::config::{ReportConfig, ServerConfig};
use tate_api::router::build_app_router;
use tate_api::state::AppState;
use tate_core::filter::JobFilter;
use tate_core::report::ReportPage;
use tate_db::PoolSettings;
use tower::ServiceExt;

/// Port 1 is reserved and never listening, so every acquire fails fast.
pub const UNREACHABLE_DATABASE_URL: &str = "mysql://root@127.0.0.1:1/tate";

/// Build a test `ServerConfig` with safe defaults and a short acquire timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        pool: PoolSettings {
            max_connections: 1,
            acquire_timeout: Duration::from_secs(1),
        },
        report: ReportConfig {
            database_url: UNREACHABLE_DATABASE_URL.to_string(),
            page: ReportPage::default(),
            filter: JobFilter::default(),
        },
    }
}

/// Build the full application router against a database that cannot be
/// reached. Must be called inside a tokio runtime.
pub fn build_test_app() -> Router {
    let config = test_config();
    let pool = tate_db::create_pool(&config.report.database_url, &config.pool).unwrap();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
