use crate::core::error::FeedbackError;
use crate::domain::{PlaygroundConfig, Vec2};
use crate::services::feedback::{FeedbackEngine, StopReason};

use super::pattern::{normalized_magnitude, pattern_for_magnitude};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackOutcome {
    Played,
    /// No haptics on this device, or the contact target vanished
    Skipped,
    /// Engine restart or playback failed; logged and dropped
    Failed,
}

pub struct CollisionNotifier {
    max_velocity: f32,
    supports_haptics: bool,
    engine_needs_start: bool,
}

fn failure_level(err: &FeedbackError) -> log::Level {
    match err {
        FeedbackError::Unavailable => log::Level::Debug,
        FeedbackError::EngineStart(_) => log::Level::Error,
        _ => log::Level::Warn,
    }
}

fn log_failure(context: &str, err: &FeedbackError) {
    log::log!(failure_level(err), "{context}: {err}");
}

impl CollisionNotifier {
    pub fn new(config: &PlaygroundConfig) -> Self {
        Self {
            max_velocity: config.max_contact_velocity,
            supports_haptics: config.supports_haptics,
            engine_needs_start: true,
        }
    }

    pub fn engine_needs_start(&self) -> bool {
        self.engine_needs_start
    }

    /// Play the contact pattern for a body moving at `velocity`.
    /// Fire and forget: the result is informational only.
    pub fn notify<F: FeedbackEngine>(&mut self, velocity: Vec2, engine: &mut F) -> FeedbackOutcome {
        if !self.supports_haptics {
            return FeedbackOutcome::Skipped;
        }
        if let Err(err) = self.ensure_started(engine) {
            // Only this attempt is dropped; the next contact retries the start
            log_failure("feedback engine restart failed", &err);
            return FeedbackOutcome::Failed;
        }

        let magnitude = normalized_magnitude(velocity, self.max_velocity);
        let pattern = pattern_for_magnitude(magnitude);
        match engine.play(&pattern) {
            Ok(()) => FeedbackOutcome::Played,
            Err(err) => {
                log_failure("feedback playback error", &err);
                FeedbackOutcome::Failed
            }
        }
    }

    /// One-shot impact for a dismissed body
    pub fn pulse<F: FeedbackEngine>(&mut self, engine: &mut F) -> FeedbackOutcome {
        match engine.pulse() {
            Ok(()) => FeedbackOutcome::Played,
            Err(err) => {
                log_failure("impact pulse failed", &err);
                FeedbackOutcome::Failed
            }
        }
    }

    fn ensure_started<F: FeedbackEngine>(&mut self, engine: &mut F) -> Result<(), FeedbackError> {
        if self.engine_needs_start {
            engine.start()?;
            self.engine_needs_start = false;
        }
        Ok(())
    }

    /// Engine reported a stop; whatever the reason, restart before next use
    pub fn engine_stopped(&mut self, reason: StopReason) {
        log::info!("feedback engine stopped: {:?}", reason);
        self.engine_needs_start = true;
    }

    /// Foreground: try to bring the engine back eagerly
    pub fn resume_engine<F: FeedbackEngine>(&mut self, engine: &mut F) {
        if !self.supports_haptics {
            return;
        }
        match engine.start() {
            Ok(()) => self.engine_needs_start = false,
            Err(err) => {
                log_failure("feedback engine start failed", &err);
                self.engine_needs_start = true;
            }
        }
    }

    /// Background: stop the engine, it must restart before next use
    pub fn suspend_engine<F: FeedbackEngine>(&mut self, engine: &mut F) {
        if let Err(err) = engine.stop() {
            log_failure("feedback engine stop failed", &err);
        }
        self.engine_needs_start = true;
    }
}
