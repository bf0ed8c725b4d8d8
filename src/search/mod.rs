pub mod batch;
pub mod duplicates;
pub mod query_log;
