use crate::args::Cli;
use crate::config::Config;
use crate::context::ExecutionContext;
use crate::handlers;
use crate::logging;
use anyhow::{Result, anyhow};
use std::io;
use tracing::warn;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::load(cli.config.as_deref())?;
    let ctx = ExecutionContext::resolve(&cli, config);

    if !cli.tables && cli.script.is_none() {
        warn!("nothing to do: pass --tables and/or -s <script>");
        return Ok(());
    }

    // Read the script up front so a bad path fails before any output
    let sql = cli
        .script
        .as_deref()
        .map(|path| {
            std::fs::read_to_string(path)
                .map_err(|e| anyhow!("Failed to read script {}: {}", path.display(), e))
        })
        .transpose()?;

    let db = ctx.open_database()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.tables {
        handlers::tables::handle(&ctx, &db, &mut out)?;
    }

    if let Some(sql) = sql {
        handlers::query::handle(&ctx, &db, &sql, &mut out)?;
    }

    Ok(())
}
