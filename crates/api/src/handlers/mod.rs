pub mod job_records;
pub mod report;
