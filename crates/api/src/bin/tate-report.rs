//! Render the job report once and write it to stdout.
//!
//! Exits with status 1 when the database cannot be reached; the document
//! written in that case ends with the `Connection failed:` diagnostic.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use tate_api::config::ReportConfig;
use tate_api::{report, telemetry};
use tate_core::report::render_document;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    telemetry::init_tracing("tate_report=info,tate_api=info,tate_db=info");

    let config = ReportConfig::from_env().context("Failed to load configuration")?;

    let outcome = report::run(&config.database_url, &config.filter).await;

    tracing::info!(
        testbed = %config.filter.testbed,
        rows = outcome.row_count(),
        "Rendered job report",
    );

    let document = render_document(&config.page, &outcome);
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(document.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write report to stdout")?;

    Ok(if outcome.is_connection_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
