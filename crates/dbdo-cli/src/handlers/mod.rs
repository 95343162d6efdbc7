pub mod query;
pub mod tables;
