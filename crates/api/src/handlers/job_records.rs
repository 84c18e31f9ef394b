//! Handlers for the `/job-records` resource.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use tate_db::repositories::JobRecordRepo;

use crate::error::AppResult;
use crate::query::ReportQuery;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/job-records
///
/// The report rows as JSON, newest first. Accepts the same overrides as
/// the HTML page. Unlike the page, a failing query is an error here.
pub async fn list_job_records(
    State(state): State<AppState>,
    params: Result<Query<ReportQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let filter = params.resolve(&state.config.report.filter)?;

    let mut conn = state.pool.acquire().await?;
    let records = JobRecordRepo::list_filtered(&mut conn, &filter).await?;

    Ok(Json(DataResponse { data: records }))
}
