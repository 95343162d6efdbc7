use crate::context::ExecutionContext;
use crate::presentation::{TableDefinition, build_schema_row_groups, schema_header};
use anyhow::Result;
use dbdo_driver::Database;
use dbdo_engine::render;
use std::io::Write;
use tracing::debug;

/// Print every schema's header followed by a grid of its tables.
pub fn handle<W: Write>(ctx: &ExecutionContext, db: &Database, out: &mut W) -> Result<()> {
    for schema in db.list_schemas()? {
        let tables = db
            .list_tables(&schema)?
            .into_iter()
            .map(|name| -> Result<TableDefinition> {
                let columns = db.list_columns(&schema, &name)?;
                Ok(TableDefinition {
                    schema: schema.clone(),
                    name,
                    columns,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(%schema, tables = tables.len(), "listing schema");
        let groups = build_schema_row_groups(&tables)?;

        write!(out, "\n\n{}\n", schema_header(&ctx.palette, &schema))?;
        if !groups.is_empty() {
            render(&groups, ctx.width, &ctx.palette, out)?;
        }
    }

    out.flush()?;
    Ok(())
}
