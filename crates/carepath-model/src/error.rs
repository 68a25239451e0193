use thiserror::Error;

use crate::journey::{JourneyEvent, JourneyStep};

/// Text that does not name any variant of a model enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    /// Name of the enum being parsed (e.g. "role").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// A journey event that has no transition from the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("journey event {event} is not allowed from step {from}")]
pub struct IllegalTransition {
    pub from: JourneyStep,
    pub event: JourneyEvent,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Parse(#[from] ParseEnumError),
    #[error(transparent)]
    Transition(#[from] IllegalTransition),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

/// Normalize user-facing enum text: trim, uppercase, `-`/space to `_`.
pub(crate) fn normalize_token(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}
