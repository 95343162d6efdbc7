use crate::types::{ColorChoice, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dbdo")]
#[command(about = "Run a SQL script against a database and print the result as a colored grid")]
#[command(
    long_about = "Run a SQL script against a database and print the result as a colored grid.\n\n\
    Every statement of the script is executed in order; the rows of the last statement \
    that returns columns are printed. With --tables, every table of every schema is \
    listed with its column definitions first."
)]
#[command(after_help = "Examples:\n  \
    dbdo -d app.db -s report.sql\n  \
    dbdo -d sqlite://data/app.db --tables\n  \
    dbdo -d :memory: -s scratch.sql --color never")]
#[command(version)]
pub struct Cli {
    /// Database URL: a file path, sqlite://<path>, file:<path> or :memory:
    #[arg(short = 'd', long = "database", value_name = "URL")]
    pub database: Option<String>,

    /// Database user (accepted for compatibility; SQLite has no authentication)
    #[arg(short = 'u', long = "user", value_name = "USER")]
    pub user: Option<String>,

    /// Database password (accepted for compatibility; SQLite has no authentication)
    #[arg(short = 'p', long = "password", value_name = "PASSWORD")]
    pub password: Option<String>,

    /// SQL script to execute
    #[arg(short = 's', long = "script", value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// List every table and its column definitions
    #[arg(long)]
    pub tables: bool,

    /// When to color the output; `always` ignores NO_COLOR, `auto` honors it
    /// [default: auto, or display.color from the config file]
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Render for this many terminal columns instead of detecting the width
    #[arg(long, value_name = "COLS", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Config file [default: $DBDO_CONFIG, then <config dir>/dbdo/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}
