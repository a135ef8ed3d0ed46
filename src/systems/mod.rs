//! Systems - the interaction core proper
//!
//! - registry:    authoritative list of live bodies
//! - constraints: group membership + the simulation driver
//! - gestures:    per-gesture sessions and transform math
//! - feedback:    contact velocity -> haptic/audio pattern

pub mod constraints;
pub mod feedback;
pub mod gestures;
pub mod registry;
