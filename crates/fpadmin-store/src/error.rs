use fpadmin_engine::ValidationReport;
use fpadmin_types::EntityKind;
use std::fmt;

/// Result type for fpadmin-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// No record with this id in the collection
    NotFound { kind: EntityKind, id: String },

    /// Two records share an id (seed list or snapshot)
    DuplicateId { kind: EntityKind, id: String },

    /// A submitted draft failed validation
    Validation(ValidationReport),

    /// Submit was called with no record open
    SurfaceClosed,

    /// Snapshot could not be encoded or decoded
    Snapshot(serde_json::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { kind, id } => write!(f, "{} not found: {}", kind, id),
            Error::DuplicateId { kind, id } => write!(f, "Duplicate {} id: {}", kind, id),
            Error::Validation(report) => write!(f, "{}", report),
            Error::SurfaceClosed => write!(f, "Nothing is open for editing"),
            Error::Snapshot(err) => write!(f, "Snapshot error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(report) => Some(report),
            Error::Snapshot(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::NotFound { .. } | Error::DuplicateId { .. } | Error::SurfaceClosed => None,
        }
    }
}

impl From<ValidationReport> for Error {
    fn from(report: ValidationReport) -> Self {
        Error::Validation(report)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Snapshot(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl Error {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fpadmin_engine::ViolationKind;

    #[test]
    fn test_not_found_message() {
        let err = Error::not_found(EntityKind::Fp, "FP099");
        assert_eq!(err.to_string(), "fp not found: FP099");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_keeps_report_as_source() {
        let mut report = ValidationReport::default();
        report.push("email", ViolationKind::Required);
        let err = Error::from(report);

        assert_eq!(err.to_string(), "Validation failed: email is required");
        assert!(std::error::Error::source(&err).is_some());
    }
}
