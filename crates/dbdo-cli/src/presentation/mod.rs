//! Turns driver output into row-groups of Records.
//!
//! Every value is classified and decoded here, before the layout engine
//! writes anything, so an unknown column type fails the run with no grid
//! on screen.

mod query;
mod schema;

pub use query::build_query_row_groups;
pub use schema::{TableDefinition, build_schema_row_groups, describe_column, schema_header};
