//! Gesture Coordinator - one session per (body, gesture kind)
//!
//! Sessions exist from `Began` to `Ended`/`Cancelled`. The coordinator only
//! tracks sessions and the per-body gravity hold; group edits and
//! transforms are applied by the simulation, which owns the other systems.

mod arbiter;
mod session;
pub mod transform;

pub use arbiter::should_recognize_simultaneously;
pub use session::{BeginOutcome, EndOutcome, GestureCoordinator, GestureSession};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureKind {
    Pan,
    Pinch,
    Rotate,
    LongPress,
}

impl GestureKind {
    /// Pan, pinch and rotate run over many events and suspend physics
    pub fn is_continuous(self) -> bool {
        !matches!(self, GestureKind::LongPress)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

pub const PHASE_BEGAN: u8 = 0;
pub const PHASE_CHANGED: u8 = 1;
pub const PHASE_ENDED: u8 = 2;
pub const PHASE_CANCELLED: u8 = 3;

impl GesturePhase {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            PHASE_BEGAN => Some(GesturePhase::Began),
            PHASE_CHANGED => Some(GesturePhase::Changed),
            PHASE_ENDED => Some(GesturePhase::Ended),
            PHASE_CANCELLED => Some(GesturePhase::Cancelled),
            _ => None,
        }
    }

    /// `Cancelled` cleans up exactly like `Ended`
    pub fn is_terminal(self) -> bool {
        matches!(self, GesturePhase::Ended | GesturePhase::Cancelled)
    }
}

/// What a gesture event did.
///
/// After `Applied` or `Rejected` the host resets the recognizer's cumulative
/// value to neutral (zero translation, scale 1, angle 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureOutcome {
    /// Unknown/vanished target, or an event out of sequence
    Ignored,
    Began,
    /// Change consumed; host must reset the recognizer's cumulative value
    Applied,
    /// Pinch out of bounds, size kept; host must still reset the recognizer
    Rejected,
    Ended,
    /// Long-press took the body out of the simulation
    Dismissed,
}

impl GestureOutcome {
    pub fn as_u8(self) -> u8 {
        match self {
            GestureOutcome::Ignored => 0,
            GestureOutcome::Began => 1,
            GestureOutcome::Applied => 2,
            GestureOutcome::Rejected => 3,
            GestureOutcome::Ended => 4,
            GestureOutcome::Dismissed => 5,
        }
    }
}
