use crate::{Color, RawValue, ValueType};

/// One renderable cell: a label, its final display text and its type.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    value_type: ValueType,
    label: String,
    display_text: String,
    label_color: Option<Color>,
    value_color: Option<Color>,
}

/// One logical row: a result row, or a table title followed by its columns.
pub type RowGroup = Vec<Record>;

impl Record {
    /// Line breaks in `label` and `display_text` are replaced by spaces so
    /// every record prints on exactly one line.
    pub fn new(
        value_type: ValueType,
        label: impl Into<String>,
        display_text: impl Into<String>,
    ) -> Self {
        Self {
            value_type,
            label: single_line(label.into()),
            display_text: single_line(display_text.into()),
            label_color: None,
            value_color: None,
        }
    }

    /// Build a record from a raw driver value using the type's decoding rule.
    pub fn decode(value_type: ValueType, label: impl Into<String>, raw: &RawValue) -> Self {
        Self::new(value_type, label, value_type.decode(raw))
    }

    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = Some(color);
        self
    }

    pub fn with_value_color(mut self, color: Color) -> Self {
        self.value_color = Some(color);
        self
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn label_color_override(&self) -> Option<Color> {
        self.label_color
    }

    pub fn value_color_override(&self) -> Option<Color> {
        self.value_color
    }

    /// Label color, falling back to the terminal default
    pub fn label_color(&self) -> Color {
        self.label_color.unwrap_or(Color::Default)
    }

    /// Value color, falling back to the type registry's choice
    pub fn value_color(&self) -> Color {
        self.value_color
            .unwrap_or_else(|| self.value_type.color_for(&self.display_text))
    }
}

fn single_line(text: String) -> String {
    if !text.contains(['\n', '\r']) {
        return text;
    }
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
