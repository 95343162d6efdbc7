use crossterm::Command;
use crossterm::style::ResetColor;
use dbdo_types::Color;

/// Immutable table from color role to the escape sequence that selects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    escapes: [String; Color::ALL.len()],
}

impl Palette {
    /// 24-bit ANSI colors, regardless of `NO_COLOR`.
    ///
    /// Foreground escapes are formatted directly: crossterm's
    /// `SetForegroundColor` writes nothing while `NO_COLOR` is set.
    pub fn ansi() -> Self {
        Self {
            escapes: Color::ALL.map(|color| match rgb(color) {
                Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m", r, g, b),
                None => ansi_escape(ResetColor),
            }),
        }
    }

    /// No escapes at all, for pipes and `--color never`
    pub fn plain() -> Self {
        Self {
            escapes: Color::ALL.map(|_| String::new()),
        }
    }

    pub fn escape(&self, color: Color) -> &str {
        &self.escapes[color.index()]
    }

    pub fn reset(&self) -> &str {
        self.escape(Color::Default)
    }

    /// Wrap `text` in the escape for `color` followed by a reset
    pub fn paint(&self, color: Color, text: &str) -> String {
        format!("{}{}{}", self.escape(color), text, self.reset())
    }
}

fn rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Default => None,
        Color::Null => Some((38, 38, 38)),
        Color::Numeric => Some((214, 75, 200)),
        Color::Textual => Some((75, 214, 84)),
        Color::Temporal => Some((214, 75, 75)),
        Color::Boolean => Some((33, 129, 219)),
        Color::Other => Some((194, 194, 194)),
        Color::Title => Some((51, 56, 189)),
        Color::Schema => Some((137, 49, 140)),
    }
}

fn ansi_escape(command: impl Command) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = command.write_ansi(&mut out);
    out
}
