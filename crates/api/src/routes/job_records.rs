use axum::routing::get;
use axum::Router;

use crate::handlers::job_records;
use crate::state::AppState;

/// Routes mounted at `/job-records`.
///
/// ```text
/// GET    /                -> list_job_records
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(job_records::list_job_records))
}
