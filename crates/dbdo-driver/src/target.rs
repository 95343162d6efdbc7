use crate::{Error, Result};
use std::fmt;
use std::path::PathBuf;

/// Where a connection string points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Memory,
    File(PathBuf),
}

impl Target {
    /// Accepts `:memory:`, `sqlite::memory:`, `sqlite://<path>`,
    /// `sqlite:<path>`, `file:<path>`, an optional `jdbc:` prefix on any of
    /// those, or a bare filesystem path.
    pub fn parse(url: &str) -> Result<Target> {
        let url = url.trim();
        let rest = url.strip_prefix("jdbc:").unwrap_or(url);

        if rest.is_empty() {
            return Err(Error::UnsupportedUrl(url.to_string()));
        }

        if rest == ":memory:" || rest == "sqlite::memory:" {
            return Ok(Target::Memory);
        }

        for prefix in ["sqlite://", "sqlite:", "file://", "file:"] {
            if let Some(path) = rest.strip_prefix(prefix) {
                if path.is_empty() {
                    return Err(Error::UnsupportedUrl(url.to_string()));
                }
                return Ok(Target::File(PathBuf::from(path)));
            }
        }

        // Any other scheme (postgresql://, mysql://, ...) is a different backend
        if let Some((scheme, _)) = rest.split_once("://")
            && !scheme.is_empty()
            && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+')
        {
            return Err(Error::UnsupportedUrl(url.to_string()));
        }

        Ok(Target::File(PathBuf::from(rest)))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Memory => write!(f, ":memory:"),
            Target::File(path) => write!(f, "{}", path.display()),
        }
    }
}
