// Engine layer - turns row-groups of records into the multi-column grid.
// Knows nothing about databases; the CLI layer builds the records.

pub mod layout;
pub mod palette;
pub mod terminal;

pub use layout::{fit_to_width, partition, render, Geometry, GridView, NO_RESULTS, VALUE_GAP};
pub use palette::Palette;
pub use terminal::{TerminalSize, DEFAULT_HEIGHT, DEFAULT_WIDTH};
