// Central Error Type for the Probe

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{EventMask, FailureKind};

/// Probe-level error type
///
/// Every variant ends the run with exit status 1; the variant only decides
/// which `FailureKind` is reported in diagnostics.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Cannot open probe source {}: {source}", .path.display())]
    Environment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Poll facility error: {0}")]
    Facility(#[source] std::io::Error),

    #[error("Poll reported {observed:?}, expected exactly {requested:?}")]
    SemanticMismatch {
        requested: EventMask,
        observed: EventMask,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProbeError {
    /// Classify this error into the flat failure taxonomy
    pub fn kind(&self) -> FailureKind {
        match self {
            ProbeError::Environment { .. } | ProbeError::Config(_) => FailureKind::Environment,
            ProbeError::Facility(_) => FailureKind::Facility,
            ProbeError::SemanticMismatch { .. } => FailureKind::SemanticMismatch,
        }
    }
}

/// Result type alias using ProbeError
pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let env = ProbeError::Environment {
            path: PathBuf::from("/nonexistent/main.rs"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(env.kind(), FailureKind::Environment);
        assert!(env.to_string().contains("/nonexistent/main.rs"));

        let facility = ProbeError::Facility(std::io::Error::from_raw_os_error(22));
        assert_eq!(facility.kind(), FailureKind::Facility);

        let mismatch = ProbeError::SemanticMismatch {
            requested: EventMask::READABLE,
            observed: EventMask::READABLE | EventMask::HANGUP,
        };
        assert_eq!(mismatch.kind(), FailureKind::SemanticMismatch);

        assert_eq!(
            ProbeError::Config("bad timeout".to_string()).kind(),
            FailureKind::Environment
        );
    }
}
