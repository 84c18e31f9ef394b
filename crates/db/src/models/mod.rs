//! Row models.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! columns its repository selects.

pub mod job_record;
