pub mod color;
pub mod error;
pub mod record;
pub mod value;
pub mod value_type;

pub use color::Color;
pub use error::{Error, Result};
pub use record::{Record, RowGroup};
pub use value::RawValue;
pub use value_type::{Family, TypeName, ValueType};
