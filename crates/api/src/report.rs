//! The report pipeline: connect, run the query, shape rows, disconnect.
//!
//! Connection failures are the only hard failure and carry the driver's
//! error. A failing query is logged and reported the same way as an empty
//! result.

use sqlx::mysql::MySqlConnectOptions;
use sqlx::{Connection, MySqlConnection};
use tate_core::filter::JobFilter;
use tate_core::report::ReportOutcome;
use tate_db::models::job_record::JobRecord;
use tate_db::repositories::JobRecordRepo;

/// Run the report against the database at `database_url`.
///
/// A malformed URL counts as a connection failure.
pub async fn run(database_url: &str, filter: &JobFilter) -> ReportOutcome {
    match database_url.parse::<MySqlConnectOptions>() {
        Ok(options) => run_with_options(&options, filter).await,
        Err(err) => {
            tracing::error!(error = %err, "Invalid database URL");
            ReportOutcome::ConnectionFailed(err.to_string())
        }
    }
}

/// Run the report on a dedicated connection opened for this call.
///
/// One connection attempt, no retries. The connection is closed before
/// returning.
pub async fn run_with_options(options: &MySqlConnectOptions, filter: &JobFilter) -> ReportOutcome {
    let mut conn = match tate_db::connect(options).await {
        Ok(conn) => conn,
        Err(err) => {
            tracing::error!(error = %err, "Database connection failed");
            return ReportOutcome::ConnectionFailed(err.to_string());
        }
    };

    let outcome = run_on_connection(&mut conn, filter).await;

    if let Err(err) = conn.close().await {
        tracing::warn!(error = %err, "Failed to close database connection cleanly");
    }

    outcome
}

/// Run the report on an already established connection.
pub async fn run_on_connection(conn: &mut MySqlConnection, filter: &JobFilter) -> ReportOutcome {
    match JobRecordRepo::list_filtered(conn, filter).await {
        Ok(records) => {
            ReportOutcome::from_rows(records.into_iter().map(JobRecord::into_cells).collect())
        }
        Err(err) => {
            tracing::error!(
                error = %err,
                testbed = %filter.testbed,
                "Report query failed, rendering empty report",
            );
            ReportOutcome::NoResults
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn unreachable_database_carries_driver_error() {
        let outcome = run("mysql://root@127.0.0.1:1/tate", &JobFilter::default()).await;

        assert_matches!(
            outcome,
            ReportOutcome::ConnectionFailed(msg) if !msg.is_empty() && !msg.contains("pool timed out")
        );
    }

    #[tokio::test]
    async fn malformed_url_is_a_connection_failure() {
        let outcome = run("not a database url", &JobFilter::default()).await;
        assert!(outcome.is_connection_failure());
    }
}
