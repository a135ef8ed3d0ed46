//! Physics solver contract
//!
//! The solver owns integration, collision detection and constraint solving.
//! The core only tells it which bodies belong to which behavior, when a body
//! was moved by hand, and whether the behaviors are registered at all.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{BodyId, Vec2};
use crate::systems::constraints::ConstraintGroup;
use crate::systems::registry::{Body, BodySnapshot};

/// Contact reported by the solver at the start of a collision
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContactEvent {
    Boundary { body: BodyId, point: Vec2 },
    Body { a: BodyId, b: BodyId, point: Vec2 },
}

/// Per-behavior material tuning (unset fields keep the solver default)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    pub elasticity: Option<f32>,
    pub resistance: Option<f32>,
    pub density: Option<f32>,
}

pub trait PhysicsSolver {
    /// Tune a behavior's material once, before any body joins it
    fn configure_group(&mut self, group: ConstraintGroup, params: MaterialParams);

    /// Register or unregister a whole behavior with the animator
    fn set_group_active(&mut self, group: ConstraintGroup, active: bool);

    fn add_to_group(&mut self, group: ConstraintGroup, body: &Body);

    fn remove_from_group(&mut self, group: ConstraintGroup, id: BodyId);

    /// Re-read the body's transform and drop cached velocity/angular momentum
    fn sync_body(&mut self, body: &Body);

    fn set_gravity_direction(&mut self, direction: Vec2);

    /// Current linear velocity, zero for bodies the solver does not track
    fn linear_velocity(&self, id: BodyId) -> Vec2;

    /// Advance one frame, appending contacts that began during it
    fn step(&mut self, dt: f32, contacts: &mut Vec<ContactEvent>);
}

/// Command recorded by `QueuedSolver` for an out-of-process solver
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op")]
pub enum SolverCommand {
    Configure { group: ConstraintGroup, params: MaterialParams },
    Activate { group: ConstraintGroup, active: bool },
    Add { group: ConstraintGroup, body: BodySnapshot },
    Remove { group: ConstraintGroup, id: BodyId },
    Sync { body: BodySnapshot },
    Gravity { direction: Vec2 },
    Step { dt: f32 },
}

/// Solver proxy that queues commands for a solver living elsewhere (the JS
/// side of the wasm build). Velocities and contacts flow back through
/// `report_velocity` / `report_contact`.
///
/// Contacts are only accepted while every group is registered; a stopped
/// simulation has no collisions to report.
#[derive(Default)]
pub struct QueuedSolver {
    commands: Vec<SolverCommand>,
    velocities: HashMap<BodyId, Vec2>,
    reported: Vec<ContactEvent>,
    /// Group memberships per body
    memberships: HashMap<BodyId, u32>,
    active_groups: u8,
}

impl QueuedSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[SolverCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<SolverCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn take_commands_json(&mut self) -> String {
        let commands = self.take_commands();
        serde_json::to_string(&commands).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn report_velocity(&mut self, id: BodyId, velocity: Vec2) {
        self.velocities.insert(id, velocity);
    }

    /// Queue a contact for the next `step`. Dropped while stopped.
    pub fn report_contact(&mut self, contact: ContactEvent) {
        if !self.is_active() {
            log::debug!("dropping contact reported while stopped: {:?}", contact);
            return;
        }
        self.reported.push(contact);
    }

    pub fn is_active(&self) -> bool {
        self.active_groups as usize == ConstraintGroup::ALL.len()
    }

    pub fn pending_contacts(&self) -> usize {
        self.reported.len()
    }

    /// Bodies with a cached velocity
    pub fn tracked_velocities(&self) -> usize {
        self.velocities.len()
    }
}

impl PhysicsSolver for QueuedSolver {
    fn configure_group(&mut self, group: ConstraintGroup, params: MaterialParams) {
        self.commands.push(SolverCommand::Configure { group, params });
    }

    fn set_group_active(&mut self, group: ConstraintGroup, active: bool) {
        if active {
            self.active_groups = self.active_groups.saturating_add(1);
        } else {
            self.active_groups = self.active_groups.saturating_sub(1);
            self.reported.clear();
        }
        self.commands.push(SolverCommand::Activate { group, active });
    }

    fn add_to_group(&mut self, group: ConstraintGroup, body: &Body) {
        *self.memberships.entry(body.id).or_insert(0) += 1;
        self.commands.push(SolverCommand::Add { group, body: body.snapshot() });
    }

    fn remove_from_group(&mut self, group: ConstraintGroup, id: BodyId) {
        if let Some(count) = self.memberships.get_mut(&id) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.memberships.remove(&id);
                self.velocities.remove(&id);
            }
        }
        self.commands.push(SolverCommand::Remove { group, id });
    }

    fn sync_body(&mut self, body: &Body) {
        // Manual moves discard whatever velocity the solver last reported
        self.velocities.remove(&body.id);
        self.commands.push(SolverCommand::Sync { body: body.snapshot() });
    }

    fn set_gravity_direction(&mut self, direction: Vec2) {
        self.commands.push(SolverCommand::Gravity { direction });
    }

    fn linear_velocity(&self, id: BodyId) -> Vec2 {
        self.velocities.get(&id).copied().unwrap_or_default()
    }

    fn step(&mut self, dt: f32, contacts: &mut Vec<ContactEvent>) {
        self.commands.push(SolverCommand::Step { dt });
        contacts.append(&mut self.reported);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Color, ShapeKind, Size};

    fn body(id: u32) -> Body {
        Body::new(
            BodyId(id),
            ShapeKind::Ellipse,
            Vec2::new(50.0, 60.0),
            Size::new(100.0, 100.0),
            Color::new(1, 2, 3, 255),
        )
    }

    #[test]
    fn commands_serialize_with_op_tag() {
        let mut solver = QueuedSolver::new();
        solver.add_to_group(ConstraintGroup::Gravity, &body(3));
        solver.remove_from_group(ConstraintGroup::Gravity, BodyId(3));

        let json = solver.take_commands_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["op"], "Add");
        assert_eq!(value[0]["group"], "Gravity");
        assert_eq!(value[0]["body"]["id"], 3);
        assert_eq!(value[1]["op"], "Remove");
        assert!(solver.commands().is_empty());
    }

    #[test]
    fn sync_forgets_reported_velocity() {
        let mut solver = QueuedSolver::new();
        solver.report_velocity(BodyId(3), Vec2::new(100.0, 0.0));
        assert_eq!(solver.linear_velocity(BodyId(3)), Vec2::new(100.0, 0.0));
        solver.sync_body(&body(3));
        assert_eq!(solver.linear_velocity(BodyId(3)), Vec2::zero());
    }

    fn activate(solver: &mut QueuedSolver, active: bool) {
        for group in ConstraintGroup::ALL {
            solver.set_group_active(group, active);
        }
    }

    #[test]
    fn reported_contacts_surface_on_step() {
        let mut solver = QueuedSolver::new();
        activate(&mut solver, true);
        solver.report_contact(ContactEvent::Boundary { body: BodyId(1), point: Vec2::zero() });
        let mut contacts = Vec::new();
        solver.step(1.0 / 60.0, &mut contacts);
        assert_eq!(contacts.len(), 1);
        solver.step(1.0 / 60.0, &mut contacts);
        assert_eq!(contacts.len(), 1);
    }

    #[test]
    fn contacts_are_dropped_while_stopped() {
        let mut solver = QueuedSolver::new();
        for _ in 0..1000 {
            solver.report_contact(ContactEvent::Boundary { body: BodyId(1), point: Vec2::zero() });
        }
        assert_eq!(solver.pending_contacts(), 0);

        activate(&mut solver, true);
        solver.report_contact(ContactEvent::Boundary { body: BodyId(1), point: Vec2::zero() });
        assert_eq!(solver.pending_contacts(), 1);

        // Stopping discards what the last running frame left behind
        activate(&mut solver, false);
        assert_eq!(solver.pending_contacts(), 0);
        let mut contacts = Vec::new();
        solver.step(1.0 / 60.0, &mut contacts);
        assert!(contacts.is_empty());
    }

    #[test]
    fn velocity_is_forgotten_once_a_body_leaves_every_group() {
        let mut solver = QueuedSolver::new();
        let b = body(7);
        solver.add_to_group(ConstraintGroup::Gravity, &b);
        solver.add_to_group(ConstraintGroup::BoundaryCollision, &b);
        solver.report_velocity(b.id, Vec2::new(0.0, 250.0));

        solver.remove_from_group(ConstraintGroup::Gravity, b.id);
        assert_eq!(solver.linear_velocity(b.id), Vec2::new(0.0, 250.0));

        solver.remove_from_group(ConstraintGroup::BoundaryCollision, b.id);
        assert_eq!(solver.linear_velocity(b.id), Vec2::zero());
        assert_eq!(solver.tracked_velocities(), 0);
    }
}
