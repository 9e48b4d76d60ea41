use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the engine can report.
///
/// Errors are raised at the point of detection and never retried; a shape or
/// configuration problem always surfaces before any weight is mutated.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid topology, hyperparameter out of range, unusable config file.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A vector or row length disagrees with the network or dataset.
    #[error("shape mismatch for {what}: expected {expected}, got {got}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// A persisted record could not be written or read back.
    #[error("codec error: {message}")]
    Codec {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Error {
        Error::Configuration(message.into())
    }

    pub(crate) fn shape(what: &'static str, expected: usize, got: usize) -> Error {
        Error::ShapeMismatch { what, expected, got }
    }

    pub(crate) fn codec(message: impl Into<String>) -> Error {
        Error::Codec { message: message.into(), source: None }
    }

    pub(crate) fn io(message: impl Into<String>, source: std::io::Error) -> Error {
        Error::Codec { message: message.into(), source: Some(source) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn shape_mismatch_message_names_both_lengths() {
        let err = Error::shape("input vector", 3, 2);
        assert_eq!(err.to_string(), "shape mismatch for input vector: expected 3, got 2");
    }

    #[test]
    fn io_failures_keep_their_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err = Error::io("reading network record", cause);
        assert!(err.source().is_some());
        assert!(Error::codec("bad field").source().is_none());
    }
}
