use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::domain::{BodyId, PlaygroundConfig, Vec2, Viewport};
use crate::services::feedback::StopReason;
use crate::services::js_feedback::JsFeedbackEngine;
use crate::services::motion::{MotionSample, MotionSender};
use crate::services::solver::{ContactEvent, QueuedSolver};
use crate::systems::gestures::{GestureOutcome, GesturePhase};

use super::stats::PlaygroundStats;
use super::view_events;
use super::PlaygroundCore;

type WasmCore = PlaygroundCore<QueuedSolver, JsFeedbackEngine>;

/// JS entry point. The physics solver lives on the JS side and is driven
/// through the queued command list.
#[wasm_bindgen]
pub struct Playground {
    core: WasmCore,
    motion: MotionSender,
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_phase(phase: u8) -> Result<GesturePhase, JsValue> {
    GesturePhase::from_u8(phase).ok_or_else(|| JsValue::from_str(&format!("unknown gesture phase {phase}")))
}

impl Playground {
    fn build(viewport: Viewport, config: PlaygroundConfig) -> Result<Playground, JsValue> {
        let mut core = WasmCore::with_config(viewport, config, QueuedSolver::new(), JsFeedbackEngine::new())
            .map_err(to_js)?;
        let motion = core.motion_sender();
        Ok(Self { core, motion })
    }
}

#[wasm_bindgen]
impl Playground {
    /// Create a playground for a viewport of `width` x `height` points
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<Playground, JsValue> {
        Self::build(Viewport::new(width, height), PlaygroundConfig::default())
    }

    /// Same as `new`, overriding defaults from a JSON config object
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(width: f32, height: f32, json: String) -> Result<Playground, JsValue> {
        let config = PlaygroundConfig::from_json(&json).map_err(to_js)?;
        Self::build(Viewport::new(width, height), config)
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core.set_viewport(Viewport::new(width, height)).map_err(to_js)
    }

    // === BODIES ===

    /// Spawn a random shape at (x, y). Returns the body id.
    pub fn on_tap(&mut self, x: f32, y: f32) -> Result<u32, JsValue> {
        self.core.on_tap(Vec2::new(x, y)).map(|id| id.0).map_err(to_js)
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(BodyId(id))
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 {
        self.core.body_count() as u32
    }

    // === GESTURES ===
    // Outcomes are `GestureOutcome` codes. Reset the recognizer after
    // Applied (2) or Rejected (3).

    pub fn on_pan_event(&mut self, id: u32, phase: u8, dx: f32, dy: f32) -> Result<u8, JsValue> {
        let phase = parse_phase(phase)?;
        self.core
            .on_pan_event(BodyId(id), phase, Vec2::new(dx, dy))
            .map(GestureOutcome::as_u8)
            .map_err(to_js)
    }

    pub fn on_pinch_event(&mut self, id: u32, phase: u8, scale: f32) -> Result<u8, JsValue> {
        let phase = parse_phase(phase)?;
        self.core
            .on_pinch_event(BodyId(id), phase, scale)
            .map(GestureOutcome::as_u8)
            .map_err(to_js)
    }

    pub fn on_rotate_event(&mut self, id: u32, phase: u8, angle: f32) -> Result<u8, JsValue> {
        let phase = parse_phase(phase)?;
        self.core
            .on_rotate_event(BodyId(id), phase, angle)
            .map(GestureOutcome::as_u8)
            .map_err(to_js)
    }

    pub fn on_long_press(&mut self, id: u32, x: f32, y: f32) -> u8 {
        self.core.on_long_press(BodyId(id), Vec2::new(x, y)).as_u8()
    }

    // === SOLVER BRIDGE ===

    pub fn set_simulation_running(&mut self, running: bool) -> bool {
        self.core.set_simulation_running(running)
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.core.is_running()
    }

    /// Drain queued solver commands as a JSON array
    pub fn take_solver_commands_json(&mut self) -> String {
        self.core.solver_mut().take_commands_json()
    }

    pub fn report_velocity(&mut self, id: u32, vx: f32, vy: f32) {
        self.core.solver_mut().report_velocity(BodyId(id), Vec2::new(vx, vy));
    }

    /// Queue a boundary contact; it is handled on the next `tick`
    pub fn report_boundary_contact(&mut self, id: u32, x: f32, y: f32) {
        self.core.solver_mut().report_contact(ContactEvent::Boundary {
            body: BodyId(id),
            point: Vec2::new(x, y),
        });
    }

    pub fn report_body_contact(&mut self, a: u32, b: u32, x: f32, y: f32) {
        self.core.solver_mut().report_contact(ContactEvent::Body {
            a: BodyId(a),
            b: BodyId(b),
            point: Vec2::new(x, y),
        });
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity_direction(Vec2::new(x, y));
    }

    // === FEEDBACK BRIDGE ===

    /// `play` receives the pattern as a JSON string; the others take no arguments
    pub fn set_feedback_handlers(&mut self, play: Function, start: Function, stop: Function, pulse: Function) {
        self.core.feedback_mut().set_handlers(play, start, stop, pulse);
    }

    pub fn on_engine_stopped(&mut self, reason: u8) {
        // Unknown codes still mean the engine is gone
        let reason = StopReason::from_u8(reason).unwrap_or(StopReason::SystemError);
        self.core.on_engine_stopped(reason);
    }

    // === MOTION & LIFECYCLE ===

    /// Device gravity sample (y up); applied on the next `tick`
    pub fn push_motion_sample(&mut self, x: f32, y: f32) {
        self.motion.send(MotionSample { gravity: Vec2::new(x, y) });
    }

    pub fn on_appear(&mut self) {
        self.core.on_appear();
    }

    pub fn on_disappear(&mut self) {
        self.core.on_disappear();
    }

    pub fn on_background(&mut self) {
        self.core.on_background();
    }

    pub fn on_foreground(&mut self) {
        self.core.on_foreground();
    }

    pub fn tick(&mut self, dt: f32) {
        self.core.tick(dt);
    }

    // === OUTPUT ===

    /// Drain view updates as a JSON array
    pub fn take_view_events_json(&mut self) -> String {
        let events = self.core.drain_view_events();
        view_events::to_json(&events)
    }

    pub fn stats(&self) -> PlaygroundStats {
        self.core.stats()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }
}
