//! Error handling for SeatKit
//!
//! Layout mutations report declined placements through the designer's own
//! error type; this module covers the project-level failures shared by
//! every crate (file formats, I/O, serialization).
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Project file error type
///
/// Represents problems reading or interpreting a saved project or venue file.
#[derive(Error, Debug, Clone)]
pub enum ProjectError {
    /// The file declares a format version this build cannot read
    #[error("Unsupported project format version {found} (expected {expected})")]
    UnsupportedVersion {
        /// The version found in the file.
        found: String,
        /// The version this build writes.
        expected: String,
    },

    /// A required section is missing from the document
    #[error("Missing section '{section}' in project file")]
    MissingSection {
        /// The name of the missing section.
        section: String,
    },

    /// The document parsed but its contents are inconsistent
    #[error("Invalid project contents: {reason}")]
    InvalidContents {
        /// What was wrong.
        reason: String,
    },
}

/// Main error type for SeatKit
///
/// Wraps the specific error families so callers can use a single
/// `Result` alias across crate boundaries.
#[derive(Error, Debug)]
pub enum Error {
    /// Project file error
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_error_display() {
        let err = ProjectError::UnsupportedVersion {
            found: "9.0".to_string(),
            expected: "2.1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported project format version 9.0 (expected 2.1)"
        );

        let err = ProjectError::MissingSection {
            section: "venue".to_string(),
        };
        assert_eq!(err.to_string(), "Missing section 'venue' in project file");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = ProjectError::InvalidContents {
            reason: "duplicate seat id".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Project(_)));
        assert_eq!(err.to_string(), "Invalid project contents: duplicate seat id");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json.into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
