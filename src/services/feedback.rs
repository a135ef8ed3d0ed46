//! Feedback engine contract
//!
//! Patterns are lists of timed, parametrized events, in the shape the
//! platform haptic engine consumes them.

use serde::{Deserialize, Serialize};

use crate::core::error::FeedbackError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    HapticTransient,
    AudioContinuous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterId {
    AudioPitch,
    AudioVolume,
    DecayTime,
    Sustained,
    HapticSharpness,
    HapticIntensity,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventParameter {
    pub id: ParameterId,
    pub value: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    pub kind: EventKind,
    /// Seconds from pattern start
    pub relative_time: f32,
    pub parameters: Vec<EventParameter>,
}

impl FeedbackEvent {
    pub fn parameter(&self, id: ParameterId) -> Option<f32> {
        self.parameters.iter().find(|p| p.id == id).map(|p| p.value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackPattern {
    pub events: Vec<FeedbackEvent>,
}

impl FeedbackPattern {
    pub fn event(&self, kind: EventKind) -> Option<&FeedbackEvent> {
        self.events.iter().find(|e| e.kind == kind)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Why the engine stopped. Every reason means "start again before next use".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    IdleTimeout,
    Interrupted,
    Backgrounded,
    SystemError,
    Destroyed,
}

impl StopReason {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(StopReason::IdleTimeout),
            1 => Some(StopReason::Interrupted),
            2 => Some(StopReason::Backgrounded),
            3 => Some(StopReason::SystemError),
            4 => Some(StopReason::Destroyed),
            _ => None,
        }
    }
}

pub trait FeedbackEngine {
    fn start(&mut self) -> Result<(), FeedbackError>;

    fn stop(&mut self) -> Result<(), FeedbackError>;

    /// Start playback immediately. Callers never wait for completion.
    fn play(&mut self, pattern: &FeedbackPattern) -> Result<(), FeedbackError>;

    /// One-shot heavy impact, used when a body is dismissed
    fn pulse(&mut self) -> Result<(), FeedbackError>;
}
