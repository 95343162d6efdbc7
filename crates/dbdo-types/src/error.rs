use std::fmt;

/// Result type for dbdo-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A column type name outside the known catalog
    UnknownType(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownType(name) => write!(
                f,
                "Unknown column type '{}': dbdo does not know how to display it yet",
                name
            ),
        }
    }
}

impl std::error::Error for Error {}
