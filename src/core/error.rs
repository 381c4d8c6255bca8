//! Error types for the probe harness

use thiserror::Error;

/// Errors that can occur while driving the interaction loop or the harness
#[derive(Error, Debug)]
pub enum ProbeError {
    /// A directive referenced a tool that is not in the registry
    #[error("Tool not found: {0}")]
    UnknownTool(String),

    /// The loop controller ran out of iterations without reaching a final answer
    #[error("Iteration budget exhausted after {0} steps")]
    IterationBudget(usize),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset read/write error
    #[error("Dataset error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl ProbeError {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        ProbeError::Other(msg.into())
    }
}

/// Result type alias for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProbeError::UnknownTool("frobnicate".into());
        assert_eq!(err.to_string(), "Tool not found: frobnicate");

        let err = ProbeError::IterationBudget(6);
        assert_eq!(err.to_string(), "Iteration budget exhausted after 6 steps");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let probe_err: ProbeError = io_err.into();
        assert!(matches!(probe_err, ProbeError::Io(_)));
    }
}
