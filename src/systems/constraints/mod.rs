//! Constraint Groups - which physical effects apply to which body
//!
//! Membership is the only lever the core has over the solver: leaving
//! `Gravity` stops a body from falling, leaving `BoundaryCollision` and its
//! material group stops the solver from pushing it while the user edits it.
//!
//! Every group edit goes through `ConstraintGroups` so the local membership
//! table and the solver never disagree.

mod driver;
mod group;
mod groups;

pub use driver::SimulationDriver;
pub use group::{
    material_group, ConstraintGroup, GroupSet, GROUP_BOUNDARY_COLLISION, GROUP_DENSITY,
    GROUP_ELASTICITY, GROUP_GRAVITY,
};
pub use groups::ConstraintGroups;
