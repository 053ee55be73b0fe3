use std::fmt;

/// Result type for fpadmin-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A status label or key did not name any known variant
    UnknownLabel { kind: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownLabel { kind, value } => {
                write!(f, "Unknown {} value: '{}'", kind, value)
            }
        }
    }
}

impl std::error::Error for Error {}
