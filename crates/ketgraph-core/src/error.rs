/// Errors raised by the bounded engine entry point.
///
/// The unbounded facade never fails: a graph without a perfect matching simply
/// produces an empty list. These variants only appear when a caller opts into
/// limits through [`crate::engine::EngineConfig`].
use std::fmt;
use std::time::Duration;

/// A configured engine limit was hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The graph has more distinct nodes than allowed. Checked before any
    /// searching starts.
    TooManyNodes {
        /// Distinct nodes in the input.
        nodes: usize,
        /// Configured maximum.
        limit: usize,
    },
    /// Painting would produce more colored matchings than allowed.
    TooManyMatchings {
        /// Configured maximum.
        limit: usize,
    },
    /// The search deadline passed before enumeration finished.
    DeadlineExceeded {
        /// Time spent before giving up.
        elapsed: Duration,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyNodes { nodes, limit } => {
                write!(f, "graph has {nodes} nodes, limit is {limit}")
            }
            Self::TooManyMatchings { limit } => {
                write!(f, "more than {limit} colored matchings")
            }
            Self::DeadlineExceeded { elapsed } => {
                write!(
                    f,
                    "search deadline exceeded after {} ms",
                    elapsed.as_millis()
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_the_numbers() {
        let msg = EngineError::TooManyNodes {
            nodes: 40,
            limit: 24,
        }
        .to_string();
        assert!(msg.contains("40"));
        assert!(msg.contains("24"));

        let msg = EngineError::TooManyMatchings { limit: 1000 }.to_string();
        assert!(msg.contains("1000"));

        let msg = EngineError::DeadlineExceeded {
            elapsed: Duration::from_millis(250),
        }
        .to_string();
        assert!(msg.contains("250 ms"));
    }
}
