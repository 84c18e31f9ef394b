//! Job record model for the report query.

use serde::Serialize;
use sqlx::FromRow;

/// One row of the `jobs` table, as selected by the report.
///
/// Every column is converted to text by the query itself, so values reach
/// the page exactly as the server prints them. `None` is SQL `NULL`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct JobRecord {
    pub testbed: Option<String>,
    pub sw_ver: Option<String>,
    pub duration: Option<String>,
    pub started: Option<String>,
    pub pass: Option<String>,
    pub fail: Option<String>,
}

impl JobRecord {
    /// Cell values in column order
    /// (testbed, sw_ver, duration, started, pass, fail), with `NULL` as an
    /// empty string.
    pub fn into_cells(self) -> Vec<String> {
        [
            self.testbed,
            self.sw_ver,
            self.duration,
            self.started,
            self.pass,
            self.fail,
        ]
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect()
    }
}
