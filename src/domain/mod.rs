//! Domain - plain data shared by all systems

pub mod config;
pub mod geometry;
pub mod shape;

pub use config::PlaygroundConfig;
pub use geometry::{Size, Vec2, Viewport};
pub use shape::{derive_color, Color, ShapeKind};

use serde::{Deserialize, Serialize};

/// Identifier of a live body. Never reused within one core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub u32);

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
