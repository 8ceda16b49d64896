//! Error types for the seam CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for seam operations.
///
/// Each variant maps to a specific exit code. A missing entry file in a
/// candidate unit directory is deliberately *not* represented here: it is
/// expected control flow (the directory is simply not a template unit),
/// not a failure.
#[derive(Error, Debug)]
pub enum SeamError {
    /// User provided invalid arguments, named an unknown unit, or the
    /// configuration file is invalid.
    #[error("{0}")]
    UserError(String),

    /// A template, include target, or directory could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    ReadError {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An output artifact could not be written.
    #[error("failed to write '{}': {reason}", path.display())]
    WriteError {
        /// The path that could not be written.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
    },

    /// Full enumeration finished with zero valid template units.
    #[error("no template units built (missing {templates_dir}/*/{entry_file})")]
    NoUnitsBuilt {
        /// The templates root that was scanned, as shown to the user.
        templates_dir: String,
        /// The entry file name expected inside each unit directory.
        entry_file: String,
    },
}

impl SeamError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SeamError::UserError(_) => exit_codes::USER_ERROR,
            SeamError::ReadError { .. } => exit_codes::IO_FAILURE,
            SeamError::WriteError { .. } => exit_codes::IO_FAILURE,
            SeamError::NoUnitsBuilt { .. } => exit_codes::NO_UNITS_BUILT,
        }
    }

    /// Build a `ReadError` from a path and an I/O error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SeamError::ReadError {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for seam operations.
pub type Result<T> = std::result::Result<T, SeamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = SeamError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn read_error_has_correct_exit_code() {
        let err = SeamError::read(
            "templates/intro.md",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn write_error_has_correct_exit_code() {
        let err = SeamError::WriteError {
            path: PathBuf::from("skills/demo/SKILL.md"),
            reason: "disk full".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn no_units_built_has_correct_exit_code() {
        let err = SeamError::NoUnitsBuilt {
            templates_dir: "src/skills".to_string(),
            entry_file: "SKILL.template.md".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::NO_UNITS_BUILT);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = SeamError::NoUnitsBuilt {
            templates_dir: "src/skills".to_string(),
            entry_file: "SKILL.template.md".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no template units built (missing src/skills/*/SKILL.template.md)"
        );

        let err = SeamError::read(
            "a/b.md",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("a/b.md"));
        assert!(err.to_string().contains("not found"));
    }
}
