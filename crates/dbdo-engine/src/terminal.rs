use terminal_size::{Height, Width, terminal_size};

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;

/// Size of the attached terminal, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub width: usize,
    pub height: usize,
}

impl TerminalSize {
    /// Query the terminal once. Falls back to 80x24 when stdout is not a
    /// terminal or the size cannot be read.
    pub fn detect() -> Self {
        match terminal_size() {
            Some((Width(w), Height(h))) if w > 0 => Self {
                width: w as usize,
                height: h as usize,
            },
            _ => Self::default(),
        }
    }
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}
