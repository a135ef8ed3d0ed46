//! Shape Dynamics - interaction & physics coordination core
//!
//! Decides which physical effects apply to each shape of a touch-driven
//! playground, and how gestures suspend and resume them. The rigid-body
//! solver, the feedback engine and the motion sensor are external services
//! behind traits.
//!
//! Architecture:
//! - core/        - Errors, group-protocol checks, logging, RNG
//! - domain/      - Geometry, shapes, configuration
//! - services/    - Solver / feedback / motion contracts
//! - systems/     - Registry, constraint groups, gestures, collision feedback
//! - simulation/  - Orchestration + wasm API

pub mod core;
pub mod domain;
pub mod services;
pub mod simulation;
pub mod systems;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize logging and the panic hook
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_console_logger();
    log::info!("shape-dynamics {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::{FeedbackError, GroupViolation, PlaygroundError};
pub use domain::{BodyId, Color, PlaygroundConfig, ShapeKind, Size, Vec2, Viewport};
pub use simulation::{Playground, PlaygroundCore, PlaygroundStats, ViewEvent};
pub use systems::constraints::{ConstraintGroup, GroupSet};
pub use systems::feedback::FeedbackOutcome;
pub use systems::gestures::{should_recognize_simultaneously, GestureKind, GestureOutcome, GesturePhase};

// Export gesture phase codes for JS
#[wasm_bindgen]
pub fn phase_began() -> u8 { systems::gestures::PHASE_BEGAN }
#[wasm_bindgen]
pub fn phase_changed() -> u8 { systems::gestures::PHASE_CHANGED }
#[wasm_bindgen]
pub fn phase_ended() -> u8 { systems::gestures::PHASE_ENDED }
#[wasm_bindgen]
pub fn phase_cancelled() -> u8 { systems::gestures::PHASE_CANCELLED }
