use std::collections::BTreeMap;

use crate::core::error::{GroupViolation, PlaygroundError};
use crate::core::protocol::enforce;
use crate::domain::BodyId;
use crate::services::solver::PhysicsSolver;
use crate::systems::registry::Body;

use super::driver::SimulationDriver;
use super::group::{ConstraintGroup, GroupSet};

/// Membership table mirrored into the solver
#[derive(Default)]
pub struct ConstraintGroups {
    members: BTreeMap<BodyId, GroupSet>,
    tolerated: u64,
}

impl ConstraintGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn membership(&self, id: BodyId) -> GroupSet {
        self.members.get(&id).copied().unwrap_or_default()
    }

    pub fn contains(&self, id: BodyId, group: ConstraintGroup) -> bool {
        self.membership(id).contains(group)
    }

    /// Bodies currently in `group`, in id order
    pub fn members(&self, group: ConstraintGroup) -> Vec<BodyId> {
        self.members
            .iter()
            .filter(|(_, set)| set.contains(group))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Violations swallowed by release builds
    pub fn tolerated_violations(&self) -> u64 {
        self.tolerated
    }

    /// First membership of a new body
    pub fn insert<S: PhysicsSolver>(
        &mut self,
        body: &Body,
        groups: GroupSet,
        driver: &mut SimulationDriver<S>,
    ) -> Result<(), PlaygroundError> {
        let current = self.membership(body.id);
        for group in groups.intersection(current).iter() {
            enforce(body.id, group, GroupViolation::DuplicateMembership)?;
            self.tolerated += 1;
        }
        let added = groups.difference(current);
        for group in added.iter() {
            driver.add_member(group, body);
        }
        self.members.insert(body.id, current.union(added));
        Ok(())
    }

    /// Take `id` out of each group in `groups`.
    ///
    /// Either every group is removed or, on a debug-build violation, none is.
    /// Returns the groups actually left.
    pub fn suspend<S: PhysicsSolver>(
        &mut self,
        id: BodyId,
        groups: GroupSet,
        driver: &mut SimulationDriver<S>,
    ) -> Result<GroupSet, PlaygroundError> {
        let current = self.membership(id);
        for group in groups.difference(current).iter() {
            enforce(id, group, GroupViolation::AlreadySuspended)?;
            self.tolerated += 1;
        }
        let removed = groups.intersection(current);
        for group in removed.iter() {
            driver.remove_member(group, id);
        }
        if let Some(set) = self.members.get_mut(&id) {
            *set = current.difference(removed);
        }
        Ok(removed)
    }

    /// Put `body` back into each group in `groups`. Must follow a `suspend`
    /// of the same groups; resuming a group the body never left is a
    /// violation. Returns the groups actually rejoined.
    pub fn resume<S: PhysicsSolver>(
        &mut self,
        body: &Body,
        groups: GroupSet,
        driver: &mut SimulationDriver<S>,
    ) -> Result<GroupSet, PlaygroundError> {
        let current = self.membership(body.id);
        for group in groups.intersection(current).iter() {
            enforce(body.id, group, GroupViolation::NotSuspended)?;
            self.tolerated += 1;
        }
        let added = groups.difference(current);
        for group in added.iter() {
            driver.add_member(group, body);
        }
        self.members.insert(body.id, current.union(added));
        Ok(added)
    }

    /// Drop `id` from every group, no pairing rules. Returns what it left.
    pub fn evict<S: PhysicsSolver>(&mut self, id: BodyId, driver: &mut SimulationDriver<S>) -> GroupSet {
        let removed = self.members.remove(&id).unwrap_or_default();
        for group in removed.iter() {
            driver.remove_member(group, id);
        }
        removed
    }

    pub fn clear<S: PhysicsSolver>(&mut self, driver: &mut SimulationDriver<S>) {
        let ids: Vec<BodyId> = self.members.keys().copied().collect();
        for id in ids {
            self.evict(id, driver);
        }
    }
}
