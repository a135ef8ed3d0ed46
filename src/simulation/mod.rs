//! Playground - interaction & physics coordination core
//!
//! PlaygroundCore only orchestrates; each concern lives in its own system:
//! - Body Registry owns the shapes
//! - Constraint Groups + Simulation Driver own solver membership
//! - Gesture Coordinator owns gesture sessions
//! - Collision Notifier owns feedback
//!
//! Everything here runs on one logical timeline: input callbacks, contact
//! callbacks and `tick` are never interleaved. Motion samples are the only
//! cross-thread input and are applied from `tick`.

use crate::core::error::PlaygroundError;
use crate::domain::{BodyId, Color, PlaygroundConfig, ShapeKind, Vec2, Viewport};
use crate::services::feedback::{FeedbackEngine, StopReason};
use crate::services::motion::{MotionReceiver, MotionSender, MotionService};
use crate::services::solver::{ContactEvent, PhysicsSolver};
use crate::systems::constraints::{ConstraintGroups, GroupSet, SimulationDriver};
use crate::systems::feedback::{CollisionNotifier, FeedbackOutcome};
use crate::systems::gestures::{GestureCoordinator, GestureOutcome, GesturePhase};
use crate::systems::registry::{Body, BodyRegistry};

#[path = "init/init.rs"]
mod init;
#[path = "commands/commands.rs"]
mod commands;
#[path = "input/gestures.rs"]
mod gestures;
#[path = "input/contacts.rs"]
mod contacts;
#[path = "step/step.rs"]
mod step;
#[path = "lifecycle/lifecycle.rs"]
mod lifecycle;
#[path = "view/view_events.rs"]
mod view_events;
#[path = "stats/stats.rs"]
mod stats;
mod facade;

pub use facade::Playground;
pub use stats::PlaygroundStats;
pub use view_events::ViewEvent;

/// The interaction core of one playground screen
pub struct PlaygroundCore<S: PhysicsSolver, F: FeedbackEngine> {
    config: PlaygroundConfig,
    viewport: Viewport,

    registry: BodyRegistry,
    groups: ConstraintGroups,
    driver: SimulationDriver<S>,
    gestures: GestureCoordinator,
    notifier: CollisionNotifier,
    feedback: F,

    // Motion hand-off (worker -> tick)
    motion_rx: Option<MotionReceiver>,
    motion_tx: Option<MotionSender>,

    // Outboxes / scratch
    view_events: Vec<ViewEvent>,
    contact_buffer: Vec<ContactEvent>,

    stats: PlaygroundStats,
    rng_state: u32,
}

impl<S: PhysicsSolver, F: FeedbackEngine> PlaygroundCore<S, F> {
    /// Create a core with the default configuration
    pub fn new(viewport: Viewport, solver: S, feedback: F) -> Result<Self, PlaygroundError> {
        Self::with_config(viewport, PlaygroundConfig::default(), solver, feedback)
    }

    pub fn with_config(
        viewport: Viewport,
        config: PlaygroundConfig,
        solver: S,
        feedback: F,
    ) -> Result<Self, PlaygroundError> {
        init::create_core(viewport, config, solver, feedback)
    }

    pub fn config(&self) -> &PlaygroundConfig { &self.config }

    pub fn viewport(&self) -> Viewport { self.viewport }

    /// Change the reference bounds (rotation, split view). Existing bodies keep their size.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), PlaygroundError> {
        commands::set_viewport(self, viewport)
    }

    pub fn solver(&self) -> &S { self.driver.solver() }

    pub fn solver_mut(&mut self) -> &mut S { self.driver.solver_mut() }

    pub fn feedback(&self) -> &F { &self.feedback }

    pub fn feedback_mut(&mut self) -> &mut F { &mut self.feedback }

    // === BODY REGISTRY ===

    /// Tap: spawn a random shape with a random color centered on `point`
    pub fn on_tap(&mut self, point: Vec2) -> Result<BodyId, PlaygroundError> {
        commands::on_tap(self, point)
    }

    /// Spawn a body of `kind` and `color` centered on `at`
    pub fn spawn_body(&mut self, at: Vec2, kind: ShapeKind, color: Color) -> Result<BodyId, PlaygroundError> {
        commands::spawn_body(self, at, kind, color)
    }

    /// Remove a body. Unknown or already-removed ids return false.
    pub fn remove_body(&mut self, id: BodyId) -> bool {
        commands::remove_body(self, id, true)
    }

    /// Remove every body without fading
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Active body, `None` when unknown, dismissed or removed
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.registry.get(id)
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.registry.active()
    }

    /// Bodies in the registry, fading ones included
    pub fn body_count(&self) -> usize {
        self.registry.body_count()
    }

    pub fn membership(&self, id: BodyId) -> GroupSet {
        self.groups.membership(id)
    }

    pub fn groups(&self) -> &ConstraintGroups { &self.groups }

    // === GESTURES ===

    pub fn on_pan_event(&mut self, id: BodyId, phase: GesturePhase, translation: Vec2) -> Result<GestureOutcome, PlaygroundError> {
        gestures::on_pan_event(self, id, phase, translation)
    }

    pub fn on_pinch_event(&mut self, id: BodyId, phase: GesturePhase, scale: f32) -> Result<GestureOutcome, PlaygroundError> {
        gestures::on_pinch_event(self, id, phase, scale)
    }

    pub fn on_rotate_event(&mut self, id: BodyId, phase: GesturePhase, angle: f32) -> Result<GestureOutcome, PlaygroundError> {
        gestures::on_rotate_event(self, id, phase, angle)
    }

    /// Long-press: dismiss the body (terminal)
    pub fn on_long_press(&mut self, id: BodyId, point: Vec2) -> GestureOutcome {
        gestures::on_long_press(self, id, point)
    }

    pub fn gestures(&self) -> &GestureCoordinator { &self.gestures }

    // === CONTACTS ===

    pub fn on_boundary_contact(&mut self, id: BodyId, point: Vec2) -> FeedbackOutcome {
        contacts::on_boundary_contact(self, id, point)
    }

    pub fn on_body_contact(&mut self, a: BodyId, b: BodyId, point: Vec2) -> FeedbackOutcome {
        contacts::on_body_contact(self, a, b, point)
    }

    // === SIMULATION DRIVER ===

    /// Register/unregister every group with the solver. False if unchanged.
    pub fn set_simulation_running(&mut self, running: bool) -> bool {
        lifecycle::set_simulation_running(self, running)
    }

    pub fn is_running(&self) -> bool { self.driver.is_running() }

    pub fn gravity(&self) -> Vec2 { self.driver.gravity() }

    pub fn set_gravity_direction(&mut self, direction: Vec2) {
        self.driver.set_gravity_direction(direction);
    }

    pub fn frame(&self) -> u64 { self.driver.frame() }

    /// Per-frame boundary: motion, solver step, contacts, fades
    pub fn tick(&mut self, dt: f32) {
        step::tick(self, dt);
    }

    // === LIFECYCLE ===

    pub fn on_appear(&mut self) {
        lifecycle::on_appear(self)
    }

    pub fn on_disappear(&mut self) {
        lifecycle::on_disappear(self)
    }

    pub fn on_background(&mut self) {
        lifecycle::on_background(self)
    }

    pub fn on_foreground(&mut self) {
        lifecycle::on_foreground(self)
    }

    pub fn on_engine_stopped(&mut self, reason: StopReason) {
        self.notifier.engine_stopped(reason);
    }

    /// Sender for motion samples; the channel is created on first use
    pub fn motion_sender(&mut self) -> MotionSender {
        lifecycle::motion_sender(self)
    }

    /// Start `service` streaming into this core
    pub fn attach_motion<M: MotionService>(&mut self, service: &mut M) {
        lifecycle::attach_motion(self, service)
    }

    pub fn detach_motion<M: MotionService>(&mut self, service: &mut M) {
        lifecycle::detach_motion(self, service)
    }

    // === OUTPUT ===

    /// Drain pending view updates
    pub fn drain_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.view_events)
    }

    pub fn stats(&self) -> PlaygroundStats {
        stats::snapshot(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
