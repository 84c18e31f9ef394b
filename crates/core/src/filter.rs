//! Row filter for the `jobs` report.
//!
//! A [`JobFilter`] carries the three predicates of the report query
//! (testbed, software version pattern, lookback window) plus an optional
//! row cap. Defaults reproduce the long-standing report for the
//! `Edgecore-pc3026` testbed on the `develop.8.0.0_5` line.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Testbed the report targets when none is configured.
pub const DEFAULT_TESTBED: &str = "Edgecore-pc3026";

/// `LIKE` pattern matched against `sw_ver` when none is configured.
pub const DEFAULT_SW_VER_PATTERN: &str = "develop.8.0.0_5%";

/// One year, expressed in months.
pub const DEFAULT_LOOKBACK_MONTHS: u32 = 12;

/// Upper bound for `lookback_months` (ten years).
pub const MAX_LOOKBACK_MONTHS: u32 = 120;

/// Upper bound for the optional row cap.
pub const MAX_LIMIT: i64 = 10_000;

/// Column width of `testbed` / `sw_ver` in the `jobs` schema.
pub const MAX_TEXT_LENGTH: usize = 255;

/// Predicates applied to the `jobs` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilter {
    /// Exact testbed name.
    pub testbed: String,
    /// SQL `LIKE` pattern; `%` and `_` keep their wildcard meaning.
    pub sw_ver_pattern: String,
    /// Only rows with `started` within this many months of today.
    pub lookback_months: u32,
    /// Optional row cap. `None` returns every matching row.
    pub limit: Option<i64>,
}

impl Default for JobFilter {
    fn default() -> Self {
        Self {
            testbed: DEFAULT_TESTBED.to_string(),
            sw_ver_pattern: DEFAULT_SW_VER_PATTERN.to_string(),
            lookback_months: DEFAULT_LOOKBACK_MONTHS,
            limit: None,
        }
    }
}

impl JobFilter {
    /// Check every field, returning the first violation.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_text("testbed", &self.testbed)?;
        validate_text("sw_ver", &self.sw_ver_pattern)?;

        if self.lookback_months == 0 || self.lookback_months > MAX_LOOKBACK_MONTHS {
            return Err(CoreError::Validation(format!(
                "lookback_months must be between 1 and {MAX_LOOKBACK_MONTHS}, got {}",
                self.lookback_months
            )));
        }

        Ok(())
    }

    /// The row cap clamped to `1..=MAX_LIMIT`, or `None` when uncapped.
    pub fn effective_limit(&self) -> Option<i64> {
        self.limit.map(|l| l.clamp(1, MAX_LIMIT))
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {MAX_TEXT_LENGTH} characters"
        )));
    }
    if value.contains('\0') {
        return Err(CoreError::Validation(format!(
            "{field} contains null bytes"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_filter_is_valid() {
        let filter = JobFilter::default();
        assert_eq!(filter.testbed, "Edgecore-pc3026");
        assert_eq!(filter.sw_ver_pattern, "develop.8.0.0_5%");
        assert_eq!(filter.lookback_months, 12);
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn empty_testbed_rejected() {
        let filter = JobFilter {
            testbed: "   ".to_string(),
            ..JobFilter::default()
        };
        assert_matches!(filter.validate(), Err(CoreError::Validation(msg)) if msg.contains("testbed"));
    }

    #[test]
    fn oversized_pattern_rejected() {
        let filter = JobFilter {
            sw_ver_pattern: "x".repeat(MAX_TEXT_LENGTH + 1),
            ..JobFilter::default()
        };
        assert_matches!(filter.validate(), Err(CoreError::Validation(msg)) if msg.contains("sw_ver"));
    }

    #[test]
    fn null_byte_rejected() {
        let filter = JobFilter {
            testbed: "bed\0".to_string(),
            ..JobFilter::default()
        };
        assert!(filter.validate().is_err());
    }

    #[test]
    fn lookback_bounds() {
        let zero = JobFilter {
            lookback_months: 0,
            ..JobFilter::default()
        };
        assert!(zero.validate().is_err());

        let max = JobFilter {
            lookback_months: MAX_LOOKBACK_MONTHS,
            ..JobFilter::default()
        };
        assert!(max.validate().is_ok());

        let over = JobFilter {
            lookback_months: MAX_LOOKBACK_MONTHS + 1,
            ..JobFilter::default()
        };
        assert!(over.validate().is_err());
    }

    #[test]
    fn limit_is_clamped() {
        let mut filter = JobFilter::default();
        assert_eq!(filter.effective_limit(), None);

        filter.limit = Some(0);
        assert_eq!(filter.effective_limit(), Some(1));

        filter.limit = Some(-5);
        assert_eq!(filter.effective_limit(), Some(1));

        filter.limit = Some(25);
        assert_eq!(filter.effective_limit(), Some(25));

        filter.limit = Some(MAX_LIMIT * 2);
        assert_eq!(filter.effective_limit(), Some(MAX_LIMIT));
    }
}
