//! Collision Notifier - turns contact speed into a feedback pattern
//!
//! Feedback is best-effort. Nothing here returns an error to the caller;
//! every engine failure is logged and counted.

mod notifier;
mod pattern;

pub use notifier::{CollisionNotifier, FeedbackOutcome};
pub use pattern::{lerp, normalized_magnitude, pattern_for_magnitude, AUDIO_PITCH};
