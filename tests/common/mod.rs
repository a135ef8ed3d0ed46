#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};

use shape_dynamics::core::error::FeedbackError;
use shape_dynamics::services::{ContactEvent, FeedbackEngine, FeedbackPattern, MaterialParams, PhysicsSolver};
use shape_dynamics::systems::registry::Body;
use shape_dynamics::{BodyId, ConstraintGroup, GroupSet, PlaygroundCore, Vec2, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    Added(ConstraintGroup, BodyId),
    Removed(ConstraintGroup, BodyId),
    Synced(BodyId),
    Active(ConstraintGroup, bool),
    Gravity(Vec2),
    Stepped,
}

/// Solver double that records every membership transition
#[derive(Default)]
pub struct FakeSolver {
    pub membership: BTreeMap<BodyId, GroupSet>,
    pub log: Vec<Transition>,
    pub params: HashMap<ConstraintGroup, MaterialParams>,
    pub velocities: HashMap<BodyId, Vec2>,
    pub pending: Vec<ContactEvent>,
    /// Adds of a group the body was already in
    pub duplicate_adds: u32,
    /// Syncs issued while the solver could still push the body
    pub synced_while_constrained: u32,
}

impl FakeSolver {
    pub fn groups_of(&self, id: BodyId) -> GroupSet {
        self.membership.get(&id).copied().unwrap_or_default()
    }

    pub fn set_velocity(&mut self, id: BodyId, v: Vec2) {
        self.velocities.insert(id, v);
    }

    pub fn queue_contact(&mut self, contact: ContactEvent) {
        self.pending.push(contact);
    }

    pub fn is_active(&self, group: ConstraintGroup) -> bool {
        self.log
            .iter()
            .rev()
            .find_map(|t| match t {
                Transition::Active(g, on) if *g == group => Some(*on),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl PhysicsSolver for FakeSolver {
    fn configure_group(&mut self, group: ConstraintGroup, params: MaterialParams) {
        self.params.insert(group, params);
    }

    fn set_group_active(&mut self, group: ConstraintGroup, active: bool) {
        self.log.push(Transition::Active(group, active));
    }

    fn add_to_group(&mut self, group: ConstraintGroup, body: &Body) {
        let set = self.membership.entry(body.id).or_default();
        if set.contains(group) {
            self.duplicate_adds += 1;
        }
        *set = set.with(group);
        self.log.push(Transition::Added(group, body.id));
    }

    fn remove_from_group(&mut self, group: ConstraintGroup, id: BodyId) {
        if let Some(set) = self.membership.get_mut(&id) {
            *set = set.without(group);
        }
        self.log.push(Transition::Removed(group, id));
    }

    fn sync_body(&mut self, body: &Body) {
        let set = self.groups_of(body.id);
        if set.contains(ConstraintGroup::BoundaryCollision) || set.material_count() > 0 {
            self.synced_while_constrained += 1;
        }
        self.velocities.remove(&body.id);
        self.log.push(Transition::Synced(body.id));
    }

    fn set_gravity_direction(&mut self, direction: Vec2) {
        self.log.push(Transition::Gravity(direction));
    }

    fn linear_velocity(&self, id: BodyId) -> Vec2 {
        self.velocities.get(&id).copied().unwrap_or_default()
    }

    fn step(&mut self, _dt: f32, contacts: &mut Vec<ContactEvent>) {
        self.log.push(Transition::Stepped);
        contacts.append(&mut self.pending);
    }
}

/// Feedback double with switchable failures
#[derive(Default)]
pub struct FakeFeedback {
    pub starts: u32,
    pub stops: u32,
    pub pulses: u32,
    pub played: Vec<FeedbackPattern>,
    pub fail_start: bool,
    pub fail_play: bool,
    pub fail_pulse: bool,
}

impl FeedbackEngine for FakeFeedback {
    fn start(&mut self) -> Result<(), FeedbackError> {
        self.starts += 1;
        if self.fail_start {
            return Err(FeedbackError::EngineStart("audio session busy".into()));
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), FeedbackError> {
        self.stops += 1;
        Ok(())
    }

    fn play(&mut self, pattern: &FeedbackPattern) -> Result<(), FeedbackError> {
        if self.fail_play {
            return Err(FeedbackError::Playback("player invalidated".into()));
        }
        self.played.push(pattern.clone());
        Ok(())
    }

    fn pulse(&mut self) -> Result<(), FeedbackError> {
        self.pulses += 1;
        if self.fail_pulse {
            return Err(FeedbackError::Playback("impact generator gone".into()));
        }
        Ok(())
    }
}

pub type Core = PlaygroundCore<FakeSolver, FakeFeedback>;

pub fn phone() -> Viewport {
    Viewport::new(390.0, 844.0)
}

pub fn core() -> Core {
    PlaygroundCore::new(phone(), FakeSolver::default(), FakeFeedback::default()).unwrap()
}
