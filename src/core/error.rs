//! Error types for the interaction core.
//!
//! Only group-protocol violations and configuration problems ever leave the
//! core. Feedback failures have their own enum because the notifier logs and
//! drops them.

use thiserror::Error;

use crate::domain::BodyId;
use crate::systems::constraints::ConstraintGroup;

/// How a suspend/resume/insert call broke the membership protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupViolation {
    /// `resume` for a group the body never left.
    NotSuspended,
    /// `suspend` for a group the body is not a member of.
    AlreadySuspended,
    /// Fresh insert of a group the body already belongs to.
    DuplicateMembership,
}

impl std::fmt::Display for GroupViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupViolation::NotSuspended => write!(f, "resume without matching suspend"),
            GroupViolation::AlreadySuspended => write!(f, "suspend of a group the body already left"),
            GroupViolation::DuplicateMembership => write!(f, "duplicate group membership"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("invalid group state for body {body} in {group:?}: {violation}")]
    InvalidGroupState {
        body: BodyId,
        group: ConstraintGroup,
        violation: GroupViolation,
    },

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Failures reported by the external feedback engine.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FeedbackError {
    #[error("feedback engine unavailable")]
    Unavailable,

    #[error("feedback engine failed to start: {0}")]
    EngineStart(String),

    #[error("feedback engine failed to stop: {0}")]
    EngineStop(String),

    #[error("feedback pattern rejected: {0}")]
    Pattern(String),

    #[error("feedback playback failed: {0}")]
    Playback(String),
}
