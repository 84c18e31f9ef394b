//! Domain types for the Tate job report.
//!
//! Holds the row filter, the shared error type, and the HTML rendering of a
//! report outcome. Nothing here touches the database.

pub mod error;
pub mod filter;
pub mod report;
