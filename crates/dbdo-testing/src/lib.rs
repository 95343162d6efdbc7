//! Testing infrastructure for dbdo integration tests.
//!
//! This crate provides:
//! - `fixtures`: a sample SQLite database with one column per known type
//! - `TestWorld`: an isolated directory holding databases, scripts and config
//!   files, plus a runner for the `dbdo` binary

pub mod fixtures;
pub mod world;

pub use fixtures::SampleDatabase;
pub use world::{CliResult, TestWorld};
