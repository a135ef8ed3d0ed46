use crate::domain::{BodyId, PlaygroundConfig, Vec2};
use crate::services::solver::{ContactEvent, MaterialParams, PhysicsSolver};
use crate::systems::registry::Body;

use super::group::ConstraintGroup;

/// Run/stop switch and frame boundary in front of the external solver.
///
/// Passed explicitly to whoever needs the solver; there is no shared
/// animator instance.
pub struct SimulationDriver<S: PhysicsSolver> {
    solver: S,
    running: bool,
    gravity: Vec2,
    frame: u64,
}

impl<S: PhysicsSolver> SimulationDriver<S> {
    /// Wrap `solver`, tune the material groups and set the initial gravity.
    /// The driver starts stopped.
    pub fn new(mut solver: S, config: &PlaygroundConfig) -> Self {
        solver.configure_group(
            ConstraintGroup::Elasticity,
            MaterialParams {
                elasticity: Some(config.elasticity),
                resistance: Some(config.resistance),
                density: Some(config.density),
            },
        );
        solver.configure_group(
            ConstraintGroup::Density,
            MaterialParams {
                density: Some(config.density),
                ..MaterialParams::default()
            },
        );
        solver.set_gravity_direction(config.initial_gravity);

        Self {
            solver,
            running: false,
            gravity: config.initial_gravity,
            frame: 0,
        }
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    pub fn solver_mut(&mut self) -> &mut S {
        &mut self.solver
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Register (true) or unregister (false) every group with the solver.
    /// Returns false when already in the requested state.
    pub fn set_running(&mut self, running: bool) -> bool {
        if self.running == running {
            return false;
        }
        for group in ConstraintGroup::ALL {
            self.solver.set_group_active(group, running);
        }
        self.running = running;
        log::info!("simulation {}", if running { "started" } else { "stopped" });
        true
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn set_gravity_direction(&mut self, direction: Vec2) {
        self.gravity = direction;
        self.solver.set_gravity_direction(direction);
    }

    pub(crate) fn add_member(&mut self, group: ConstraintGroup, body: &Body) {
        self.solver.add_to_group(group, body);
    }

    pub(crate) fn remove_member(&mut self, group: ConstraintGroup, id: BodyId) {
        self.solver.remove_from_group(group, id);
    }

    /// Tell the solver a body was moved out-of-band
    pub fn resync(&mut self, body: &Body) {
        self.solver.sync_body(body);
    }

    pub fn linear_velocity(&self, id: BodyId) -> Vec2 {
        self.solver.linear_velocity(id)
    }

    /// Step the solver if running; contacts land in `contacts`
    pub fn step(&mut self, dt: f32, contacts: &mut Vec<ContactEvent>) {
        if self.running {
            self.solver.step(dt, contacts);
        }
    }

    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}
