use thiserror::Error;

use crate::ParseError;

/// An error returned when a getter cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// No attribute path or key was given; holds the getter name.
    #[error("{0} expected at least one target, got none")]
    NoTargets(&'static str),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
