use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Result of applying a single operation to the session state.
///
/// Rejected and ignored operations never mutate state; they are only reported so callers can observe them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Status {
    /// The operation produced the new state
    Applied,
    /// The operation was well-formed but refused by a policy
    Rejected(RejectReason),
    /// The operation was dropped before reaching the engine
    Ignored(IgnoreReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// A translated vertex would leave the boundary rectangle
    OutOfBounds,
    /// A transformed vertex would no longer be a finite coordinate
    Overflow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The command text could not be parsed as a (finite) number
    MalformedInput,
    /// The reflection axis was not recognized
    InvalidAxis,
    /// The command has no meaning for the text anchor
    NotInTextMode,
}

impl Status {
    pub fn is_applied(&self) -> bool {
        matches!(self, Status::Applied)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Applied => write!(f, "applied"),
            Status::Rejected(RejectReason::OutOfBounds) => write!(f, "rejected (out of bounds)"),
            Status::Rejected(RejectReason::Overflow) => write!(f, "rejected (overflow)"),
            Status::Ignored(IgnoreReason::MalformedInput) => write!(f, "ignored (malformed input)"),
            Status::Ignored(IgnoreReason::InvalidAxis) => write!(f, "ignored (invalid axis)"),
            Status::Ignored(IgnoreReason::NotInTextMode) => write!(f, "ignored (not in text mode)"),
        }
    }
}
