use serde::{Deserialize, Serialize};

use crate::domain::{BodyId, Color, ShapeKind, Size, Vec2};
use crate::systems::constraints::{material_group, ConstraintGroup};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lifecycle {
    /// Simulated and reachable by gestures
    Active,
    /// Dismissed by long-press, fading before removal
    FadingOut { elapsed: f32, duration: f32 },
    /// Removed from the registry
    Dead,
}

/// A live shape
#[derive(Clone, Debug)]
pub struct Body {
    pub id: BodyId,
    /// Center point in view coordinates
    pub center: Vec2,
    pub size: Size,
    /// Accumulated rotation (radians)
    pub rotation: f32,
    pub color: Color,
    /// View opacity, 1.0 until dismissed
    pub alpha: f32,
    pub lifecycle: Lifecycle,
    kind: ShapeKind,
    material: ConstraintGroup,
}

impl Body {
    pub fn new(id: BodyId, kind: ShapeKind, center: Vec2, size: Size, color: Color) -> Self {
        Self {
            id,
            center,
            size,
            rotation: 0.0,
            color,
            alpha: 1.0,
            lifecycle: Lifecycle::Active,
            kind,
            // Chosen once; resizing never moves a body between material groups
            material: material_group(kind),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// `Elasticity` for ellipses, `Density` for rectangles
    pub fn material(&self) -> ConstraintGroup {
        self.material
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    pub fn is_alive(&self) -> bool {
        !matches!(self.lifecycle, Lifecycle::Dead)
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            id: self.id,
            kind: self.kind,
            center: self.center,
            size: self.size,
            rotation: self.rotation,
        }
    }
}

/// Geometry handed to the solver and the view layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub kind: ShapeKind,
    pub center: Vec2,
    pub size: Size,
    pub rotation: f32,
}
