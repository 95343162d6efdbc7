// dbdo: run a SQL script, look at the answer.
//
// Layering:
// - dbdo-driver talks to the database and hands back raw typed cells
// - presentation turns cells into row-groups of Records (all decoding and
//   type resolution happens here, before anything is written)
// - dbdo-engine lays the row-groups out for the terminal
//
// A run is a single batch render: no paging, no live UI.

mod args;
mod commands;
pub mod config;
mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::run;
