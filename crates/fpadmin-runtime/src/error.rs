use std::fmt;

/// Result type for fpadmin-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Store layer error (not found, validation, snapshot)
    Store(fpadmin_store::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// A list request named a field, flag or page size that does not exist
    InvalidRequest(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::InvalidRequest(_) => None,
        }
    }
}

impl Error {
    /// Validation report carried by this error, if it is one
    pub fn validation_report(&self) -> Option<&fpadmin_engine::ValidationReport> {
        match self {
            Error::Store(fpadmin_store::Error::Validation(report)) => Some(report),
            _ => None,
        }
    }
}

impl From<fpadmin_store::Error> for Error {
    fn from(err: fpadmin_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
