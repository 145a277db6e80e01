use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the fnt2fontdef converter
#[derive(Debug)]
pub enum Error {
    /// IO operations errors not tied to a conversion file
    Io(io::Error),
    /// The input .fnt file could not be read
    Read { path: PathBuf, source: io::Error },
    /// The output .fontdef file could not be written
    Write { path: PathBuf, source: io::Error },
    /// Invalid file or directory path
    InvalidPath(PathBuf),
    /// Configuration errors
    Config(String),
    /// Batch processing errors
    Batch(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Read { source, .. } | Error::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Read { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            Error::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            Error::InvalidPath(path) => write!(f, "Invalid path: {}", path.display()),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Batch(msg) => write!(f, "Batch processing error: {}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type alias for fnt2fontdef operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_read_error_mentions_path() {
        let err = Error::Read {
            path: PathBuf::from("fonts/missing.fnt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let message = err.to_string();
        assert!(message.contains("fonts/missing.fnt"));
        assert!(message.starts_with("Failed to read"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_converts() {
        let err: Error = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "IO error: boom");
    }
}
