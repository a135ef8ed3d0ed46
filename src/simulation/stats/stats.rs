use wasm_bindgen::prelude::*;

use crate::services::feedback::FeedbackEngine;
use crate::services::solver::PhysicsSolver;
use crate::systems::feedback::FeedbackOutcome;

use super::PlaygroundCore;

/// Counters since the core was created
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaygroundStats {
    pub(super) bodies_spawned: u32,
    pub(super) bodies_removed: u32,
    pub(super) live_bodies: u32,
    pub(super) gestures_applied: u32,
    pub(super) resizes_rejected: u32,
    pub(super) feedback_played: u32,
    pub(super) feedback_skipped: u32,
    pub(super) feedback_failed: u32,
    pub(super) tolerated_violations: u32,
    pub(super) frame: u32,
}

#[wasm_bindgen]
impl PlaygroundStats {
    #[wasm_bindgen(getter)]
    pub fn bodies_spawned(&self) -> u32 { self.bodies_spawned }
    #[wasm_bindgen(getter)]
    pub fn bodies_removed(&self) -> u32 { self.bodies_removed }
    #[wasm_bindgen(getter)]
    pub fn live_bodies(&self) -> u32 { self.live_bodies }
    #[wasm_bindgen(getter)]
    pub fn gestures_applied(&self) -> u32 { self.gestures_applied }
    #[wasm_bindgen(getter)]
    pub fn resizes_rejected(&self) -> u32 { self.resizes_rejected }
    #[wasm_bindgen(getter)]
    pub fn feedback_played(&self) -> u32 { self.feedback_played }
    #[wasm_bindgen(getter)]
    pub fn feedback_skipped(&self) -> u32 { self.feedback_skipped }
    #[wasm_bindgen(getter)]
    pub fn feedback_failed(&self) -> u32 { self.feedback_failed }
    #[wasm_bindgen(getter)]
    pub fn tolerated_violations(&self) -> u32 { self.tolerated_violations }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 { self.frame }
}

impl PlaygroundStats {
    pub(super) fn record_feedback(&mut self, outcome: FeedbackOutcome) {
        match outcome {
            FeedbackOutcome::Played => self.feedback_played += 1,
            FeedbackOutcome::Skipped => self.feedback_skipped += 1,
            FeedbackOutcome::Failed => self.feedback_failed += 1,
        }
    }
}

pub(super) fn snapshot<S: PhysicsSolver, F: FeedbackEngine>(core: &PlaygroundCore<S, F>) -> PlaygroundStats {
    PlaygroundStats {
        live_bodies: core.registry.body_count() as u32,
        tolerated_violations: core.groups.tolerated_violations().min(u32::MAX as u64) as u32,
        frame: core.driver.frame().min(u32::MAX as u64) as u32,
        ..core.stats
    }
}
