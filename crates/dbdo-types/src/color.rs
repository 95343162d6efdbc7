/// Presentation role of a piece of rendered text.
///
/// These are roles, not concrete colors: the escape sequence for each role
/// lives in the engine's palette so the types layer never deals with ANSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Terminal default (a reset)
    Default,
    /// NULL values, in every column type
    Null,
    Numeric,
    Textual,
    Temporal,
    Boolean,
    Other,
    /// Table title rows in the schema listing
    Title,
    /// Schema header lines in the schema listing
    Schema,
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Default,
        Color::Null,
        Color::Numeric,
        Color::Textual,
        Color::Temporal,
        Color::Boolean,
        Color::Other,
        Color::Title,
        Color::Schema,
    ];

    /// Position of this role in [`Color::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}
