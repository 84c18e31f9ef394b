use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use tate_core::error::CoreError;
use tate_core::filter::JobFilter;
use tate_core::report::ReportPage;
use tate_db::PoolSettings;

/// Raised when an environment variable is present but unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid report filter: {0}")]
    Filter(#[from] CoreError),
}

/// What to report on and where to read it from.
///
/// Shared by the HTTP service and the one-shot `tate-report` binary.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// MySQL connection URL (default: `mysql://root@localhost:3306/tate`).
    pub database_url: String,
    /// Page title and heading.
    pub page: ReportPage,
    /// Filter applied when a request does not override it.
    pub filter: JobFilter,
}

impl ReportConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names.
    ///
    /// | Env Var                  | Default                             |
    /// |--------------------------|-------------------------------------|
    /// | `DATABASE_URL`           | `mysql://root@localhost:3306/tate`  |
    /// | `REPORT_TITLE`           | `MySQL Testing`                     |
    /// | `REPORT_HEADING`         | `MySQL Working Around !!!`          |
    /// | `REPORT_TESTBED`         | `Edgecore-pc3026`                   |
    /// | `REPORT_SW_VER_PATTERN`  | `develop.8.0.0_5%`                  |
    /// | `REPORT_LOOKBACK_MONTHS` | `12`                                |
    /// | `REPORT_LIMIT`           | unset                               |
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "mysql://root@localhost:3306/tate".into());

        let defaults = ReportPage::default();
        let page = ReportPage {
            title: lookup("REPORT_TITLE").unwrap_or(defaults.title),
            heading: lookup("REPORT_HEADING").unwrap_or(defaults.heading),
        };

        let defaults = JobFilter::default();
        let filter = JobFilter {
            testbed: lookup("REPORT_TESTBED").unwrap_or(defaults.testbed),
            sw_ver_pattern: lookup("REPORT_SW_VER_PATTERN").unwrap_or(defaults.sw_ver_pattern),
            lookback_months: parse_or(
                &lookup,
                "REPORT_LOOKBACK_MONTHS",
                defaults.lookback_months,
                "number of months",
            )?,
            limit: parse_optional(&lookup, "REPORT_LIMIT", "row count")?,
        };
        filter.validate()?;

        Ok(Self {
            database_url,
            page,
            filter,
        })
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Connection pool sizing.
    pub pool: PoolSettings,
    pub report: ReportConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `5000`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `DB_MAX_CONNECTIONS`      | `5`                     |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                     |
    ///
    /// Report settings are read by [`ReportConfig::from_lookup`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or(&lookup, "PORT", 5000, "u16")?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    key: "CORS_ORIGINS",
                    value: origin.to_string(),
                    expected: "origin header value",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30, "u64")?;

        let defaults = PoolSettings::default();
        let pool = PoolSettings {
            max_connections: parse_or(
                &lookup,
                "DB_MAX_CONNECTIONS",
                defaults.max_connections,
                "u32",
            )?,
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
                "u64",
            )?),
        };

        let report = ReportConfig::from_lookup(&lookup)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            pool,
            report,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match parse_optional(lookup, key, expected)? {
        Some(value) => Ok(value),
        None => Ok(default),
    }
}

fn parse_optional<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid {
            key,
            value: raw,
            expected,
        })
}
