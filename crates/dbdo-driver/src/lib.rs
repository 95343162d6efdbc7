// SQLite-backed execution layer
// Runs user scripts and reads the schema catalog; rows come back untyped
// (type name + raw value) so presentation rules stay in the CLI layer.

mod db;
mod error;
mod result;
mod target;

// Public API
pub use db::{ColumnInfo, ConnectOptions, Database};
pub use error::{Error, Result};
pub use result::{Cell, ResultSet, Row};
pub use target::Target;
