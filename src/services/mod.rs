//! Services - contracts of the platform collaborators the core drives
//!
//! The core never integrates, collides or vibrates anything itself. It talks
//! to a rigid-body solver, a haptic/audio feedback engine and a motion
//! sensor through these traits, so hosts (and tests) plug in their own.

pub mod feedback;
pub mod js_feedback;
pub mod motion;
pub mod solver;

pub use feedback::{
    EventKind, EventParameter, FeedbackEngine, FeedbackEvent, FeedbackPattern, ParameterId,
    StopReason,
};
pub use js_feedback::JsFeedbackEngine;
pub use motion::{motion_channel, MotionReceiver, MotionSample, MotionSender, MotionService};
pub use solver::{ContactEvent, MaterialParams, PhysicsSolver, QueuedSolver, SolverCommand};
