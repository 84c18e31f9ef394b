//! Repository for the `jobs` table, read side only.

use sqlx::MySqlConnection;
use tate_core::filter::JobFilter;

use crate::models::job_record::JobRecord;

/// Column list for report queries. Each column is rendered as text by the
/// server so the model never depends on the underlying column types.
const COLUMNS: &str = "\
    CAST(testbed AS CHAR) AS testbed, \
    CAST(sw_ver AS CHAR) AS sw_ver, \
    CAST(duration AS CHAR) AS duration, \
    CAST(started AS CHAR) AS started, \
    CAST(pass AS CHAR) AS pass, \
    CAST(fail AS CHAR) AS fail";

/// Predicates shared by every report query. Binds, in order:
/// lookback months, testbed, sw_ver pattern.
const WHERE_CLAUSE: &str = "\
    started >= CURDATE() - INTERVAL ? MONTH \
    AND testbed = ? \
    AND sw_ver LIKE ?";

/// Read access to job records.
pub struct JobRecordRepo;

impl JobRecordRepo {
    /// Fetch every record matching `filter`, newest `started` first.
    pub async fn list_filtered(
        conn: &mut MySqlConnection,
        filter: &JobFilter,
    ) -> Result<Vec<JobRecord>, sqlx::Error> {
        let limit = filter.effective_limit();
        let query = build_select(limit.is_some());

        let mut q = sqlx::query_as::<_, JobRecord>(&query)
            .bind(filter.lookback_months)
            .bind(&filter.testbed)
            .bind(&filter.sw_ver_pattern);
        if let Some(limit) = limit {
            q = q.bind(limit);
        }

        let records = q.fetch_all(conn).await?;
        tracing::debug!(
            testbed = %filter.testbed,
            sw_ver = %filter.sw_ver_pattern,
            lookback_months = filter.lookback_months,
            rows = records.len(),
            "Fetched job records",
        );
        Ok(records)
    }
}

fn build_select(with_limit: bool) -> String {
    let mut query =
        format!("SELECT {COLUMNS} FROM jobs WHERE ({WHERE_CLAUSE}) ORDER BY started DESC");
    if with_limit {
        query.push_str(" LIMIT ?");
    }
    query
}
