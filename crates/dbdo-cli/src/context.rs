use crate::args::Cli;
use crate::config::Config;
use crate::types::ColorChoice;
use anyhow::{Result, anyhow};
use dbdo_driver::{ConnectOptions, Database};
use dbdo_engine::{Palette, TerminalSize};
use is_terminal::IsTerminal;

/// Everything a run needs, resolved once from flags and config.
/// Command-line flags win over the config file.
pub struct ExecutionContext {
    connect: Option<ConnectOptions>,
    pub palette: Palette,
    pub width: usize,
}

impl ExecutionContext {
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        let Config {
            connection,
            display,
        } = config;

        let connect = cli
            .database
            .clone()
            .or(connection.url)
            .map(|url| ConnectOptions {
                url,
                user: cli.user.clone().or(connection.user),
                password: cli.password.clone().or(connection.password),
            });

        let color = cli.color.or(display.color).unwrap_or_default();

        // Terminal width is read once and held for the whole run
        let width = cli
            .width
            .or(display.width)
            .map(usize::from)
            .unwrap_or_else(|| TerminalSize::detect().width);

        tracing::debug!(%color, width, "resolved display settings");

        Self {
            connect,
            palette: palette_for(color),
            width,
        }
    }

    pub fn open_database(&self) -> Result<Database> {
        let options = self.connect.as_ref().ok_or_else(|| {
            anyhow!("No database given: pass -d <url> or set connection.url in the config file")
        })?;
        Ok(Database::connect(options)?)
    }
}

fn palette_for(choice: ColorChoice) -> Palette {
    match choice {
        ColorChoice::Always => Palette::ansi(),
        ColorChoice::Never => Palette::plain(),
        ColorChoice::Auto => {
            if std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none() {
                Palette::ansi()
            } else {
                Palette::plain()
            }
        }
    }
}
