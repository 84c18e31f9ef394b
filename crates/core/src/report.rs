//! HTML rendering of a job report.
//!
//! Rendering is a pure function of the [`ReportOutcome`]: the same rows
//! always produce the same document. Cell values are written in the order
//! the query returned them, one `<td>` per column.

use std::borrow::Cow;
use std::fmt::Write;

/// Notice emitted in place of a table when there is nothing to show.
pub const NO_RESULTS_NOTICE: &str = "No results found.";

/// Prefix of the diagnostic emitted when the database cannot be reached.
pub const CONNECTION_FAILED_PREFIX: &str = "Connection failed: ";

pub const DEFAULT_TITLE: &str = "MySQL Testing";
pub const DEFAULT_HEADING: &str = "MySQL Working Around !!!";

/// Static page chrome around the report body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    pub title: String,
    pub heading: String,
}

impl Default for ReportPage {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            heading: DEFAULT_HEADING.to_string(),
        }
    }
}

/// Result of one run of the report pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// At least one row; each inner vector is one row's cells in column order.
    Rows(Vec<Vec<String>>),
    /// The query returned nothing or failed.
    NoResults,
    /// The connection could not be established. Carries the driver message.
    ConnectionFailed(String),
}

impl ReportOutcome {
    /// Build an outcome from query rows, collapsing an empty set to
    /// [`ReportOutcome::NoResults`].
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        if rows.is_empty() {
            Self::NoResults
        } else {
            Self::Rows(rows)
        }
    }

    /// Number of table rows this outcome renders.
    pub fn row_count(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            _ => 0,
        }
    }

    pub fn is_connection_failure(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_))
    }
}

/// Render the full HTML document for `outcome`.
///
/// On [`ReportOutcome::ConnectionFailed`] the document stops right after
/// the diagnostic: no closing `</body>`/`</html>` is written.
pub fn render_document(page: &ReportPage, outcome: &ReportOutcome) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(&page.title));
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(&page.heading));
    out.push('\n');

    match outcome {
        ReportOutcome::ConnectionFailed(msg) => {
            out.push_str(CONNECTION_FAILED_PREFIX);
            out.push_str(&escape_html(msg));
            return out;
        }
        ReportOutcome::Rows(rows) if !rows.is_empty() => {
            render_table(&mut out, rows);
        }
        _ => out.push_str(NO_RESULTS_NOTICE),
    }

    out.push_str("\n</body>\n</html>\n");
    out
}

/// Append a `<table>` with one `<tr>` per row and one `<td>` per cell.
pub fn render_table(out: &mut String, rows: &[Vec<String>]) {
    out.push_str("<table>");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str("<td>");
            out.push_str(&escape_html(cell));
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</table>");
}

/// Escape the five HTML-significant characters.
///
/// Borrows the input unchanged when it contains none of them, so plain
/// values pass through byte-for-byte.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn one_tr_per_row_in_given_order() {
        let outcome = ReportOutcome::from_rows(vec![
            row(&["Edgecore-pc3026", "develop.8.0.0_52", "120", "2026-10-01", "10", "0"]),
            row(&["Edgecore-pc3026", "develop.8.0.0_51", "95", "2026-09-12", "8", "2"]),
        ]);
        let html = render_document(&ReportPage::default(), &outcome);

        assert_eq!(html.matches("<tr>").count(), 2);
        assert_eq!(html.matches("<td>").count(), 12);
        let first = html.find("develop.8.0.0_52").unwrap();
        let second = html.find("develop.8.0.0_51").unwrap();
        assert!(first < second);
        assert!(html.contains(
            "<tr><td>Edgecore-pc3026</td><td>develop.8.0.0_52</td><td>120</td>\
             <td>2026-10-01</td><td>10</td><td>0</td></tr>"
        ));
        assert!(!html.contains(NO_RESULTS_NOTICE));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn empty_rows_render_notice() {
        let outcome = ReportOutcome::from_rows(Vec::new());
        assert_eq!(outcome, ReportOutcome::NoResults);

        let html = render_document(&ReportPage::default(), &outcome);
        assert!(html.contains("No results found."));
        assert!(!html.contains("<table>"));
        assert!(html.contains("<h1>MySQL Working Around !!!</h1>"));
        assert!(html.contains("<title>MySQL Testing</title>"));
    }

    #[test]
    fn rows_variant_with_no_rows_still_renders_notice() {
        let html = render_document(&ReportPage::default(), &ReportOutcome::Rows(Vec::new()));
        assert!(html.contains(NO_RESULTS_NOTICE));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn connection_failure_halts_document() {
        let outcome = ReportOutcome::ConnectionFailed("Access denied for user 'root'".into());
        let html = render_document(&ReportPage::default(), &outcome);

        assert!(html.contains("Connection failed: Access denied for user &#39;root&#39;"));
        assert!(html.ends_with("&#39;root&#39;"));
        assert!(!html.contains("</body>"));
        assert!(!html.contains(NO_RESULTS_NOTICE));
    }

    #[test]
    fn rendering_is_deterministic() {
        let outcome = ReportOutcome::from_rows(vec![row(&["a", "b", "", "d", "1", "2"])]);
        let page = ReportPage::default();
        assert_eq!(
            render_document(&page, &outcome),
            render_document(&page, &outcome)
        );
    }

    #[test]
    fn cells_are_escaped() {
        let mut out = String::new();
        render_table(&mut out, &[row(&["<script>alert(1)</script>", "a&b"])]);
        assert_eq!(
            out,
            "<table><tr><td>&lt;script&gt;alert(1)&lt;/script&gt;</td><td>a&amp;b</td></tr></table>"
        );
    }

    #[test]
    fn escape_borrows_plain_values() {
        assert!(matches!(escape_html("develop.8.0.0_5"), Cow::Borrowed(_)));
        assert_eq!(escape_html("\"x\""), "&quot;x&quot;");
    }

    #[test]
    fn row_count_and_failure_flag() {
        assert_eq!(ReportOutcome::NoResults.row_count(), 0);
        assert_eq!(
            ReportOutcome::from_rows(vec![row(&["x"]), row(&["y"])]).row_count(),
            2
        );
        assert!(ReportOutcome::ConnectionFailed(String::new()).is_connection_failure());
        assert!(!ReportOutcome::NoResults.is_connection_failure());
    }
}
