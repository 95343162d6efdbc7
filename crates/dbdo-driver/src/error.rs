use std::fmt;

/// Result type for dbdo-driver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the driver layer
#[derive(Debug)]
pub enum Error {
    /// The database could not be opened
    Open {
        target: String,
        source: rusqlite::Error,
    },

    /// Statement preparation or execution failed
    Database(rusqlite::Error),

    /// The connection string names a backend dbdo cannot talk to
    UnsupportedUrl(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Open { target, source } => {
                write!(f, "Failed to open database '{}': {}", target, source)
            }
            Error::Database(err) => write!(f, "Database error: {}", err),
            Error::UnsupportedUrl(url) => write!(
                f,
                "Unsupported database url '{}': expected a file path, 'sqlite://<path>' or ':memory:'",
                url
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open { source, .. } => Some(source),
            Error::Database(err) => Some(err),
            Error::UnsupportedUrl(_) => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_names_the_target() {
        let err = Error::Open {
            target: "/missing/db.sqlite".to_string(),
            source: rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(14),
                Some("unable to open database file".to_string()),
            ),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to open database '/missing/db.sqlite'"));
        assert!(msg.contains("unable to open database file"));
    }

    #[test]
    fn test_unsupported_url_message() {
        let err = Error::UnsupportedUrl("postgresql://localhost/db".to_string());
        assert!(err.to_string().contains("postgresql://localhost/db"));
        assert!(std::error::Error::source(&err).is_none());
    }
}
