use crate::context::ExecutionContext;
use crate::presentation::build_query_row_groups;
use anyhow::Result;
use dbdo_driver::Database;
use dbdo_engine::render;
use std::io::Write;
use tracing::info;

pub fn handle<W: Write>(
    ctx: &ExecutionContext,
    db: &Database,
    sql: &str,
    out: &mut W,
) -> Result<()> {
    let groups = match db.run_script(sql)? {
        Some(result) => {
            info!(rows = result.len(), columns = result.columns.len(), "script returned rows");
            build_query_row_groups(&result)?
        }
        None => {
            info!("script returned no result set");
            Vec::new()
        }
    };

    render(&groups, ctx.width, &ctx.palette, out)?;
    Ok(())
}
