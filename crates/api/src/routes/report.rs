use axum::routing::get;
use axum::Router;

use crate::handlers::report;
use crate::state::AppState;

/// Report page at the root, not under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(report::report_page))
}
