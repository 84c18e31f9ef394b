pub mod health;
pub mod job_records;
pub mod report;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /job-records                                     list (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/job-records", job_records::router())
}
