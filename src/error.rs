//! Crate-level error types.

use std::fmt;

/// Errors produced by the globenav crate.
///
/// Navigation and input dispatch never fail; only option presets touch
/// the filesystem.
#[derive(Debug)]
pub enum GlobenavError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for GlobenavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GlobenavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for GlobenavError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_and_source() {
        let io = GlobenavError::from(std::io::Error::other("disk gone"));
        assert_eq!(io.to_string(), "I/O error: disk gone");
        assert!(io.source().is_some());

        let parse = GlobenavError::OptionsParse(String::from("bad key"));
        assert_eq!(parse.to_string(), "options parse error: bad key");
        assert!(parse.source().is_none());
    }
}
