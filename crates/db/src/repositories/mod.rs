//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&mut MySqlConnection` as the first argument, so they run
//! equally on a pooled or a dedicated connection.

pub mod job_record_repo;

pub use job_record_repo::JobRecordRepo;
