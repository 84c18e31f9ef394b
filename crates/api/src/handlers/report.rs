//! Handler for the HTML report page.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use tate_core::report::render_document;

use crate::error::AppResult;
use crate::query::ReportQuery;
use crate::report;
use crate::state::AppState;

/// GET /
///
/// Render the job report as HTML. Malformed or invalid overrides get a
/// 400 JSON error. Responds 503 with the truncated
/// `Connection failed:` page when the database cannot be reached; an empty
/// or failed query still renders the page with the no-results notice.
pub async fn report_page(
    State(state): State<AppState>,
    params: Result<Query<ReportQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let filter = params.resolve(&state.config.report.filter)?;
    // A dedicated connection per request, so a failure reports the
    // driver's error instead of a pool timeout.
    let outcome = report::run_with_options(&state.pool.connect_options(), &filter).await;

    tracing::info!(
        testbed = %filter.testbed,
        sw_ver = %filter.sw_ver_pattern,
        rows = outcome.row_count(),
        "Rendered job report",
    );

    let status = if outcome.is_connection_failure() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    Ok((status, Html(render_document(&state.config.report.page, &outcome))))
}
