//! Query parameters shared by the report page and the JSON listing.

use serde::Deserialize;
use tate_core::error::CoreError;
use tate_core::filter::JobFilter;

/// Per-request overrides of the configured filter
/// (`?testbed=&sw_ver=&lookback_months=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub testbed: Option<String>,
    /// `LIKE` pattern for the software version.
    pub sw_ver: Option<String>,
    pub lookback_months: Option<u32>,
    pub limit: Option<i64>,
}

impl ReportQuery {
    /// Layer the overrides over `base` and validate the result.
    pub fn resolve(self, base: &JobFilter) -> Result<JobFilter, CoreError> {
        let filter = JobFilter {
            testbed: self.testbed.unwrap_or_else(|| base.testbed.clone()),
            sw_ver_pattern: self.sw_ver.unwrap_or_else(|| base.sw_ver_pattern.clone()),
            lookback_months: self.lookback_months.unwrap_or(base.lookback_months),
            limit: self.limit.or(base.limit),
        };
        filter.validate()?;
        Ok(filter)
    }
}
