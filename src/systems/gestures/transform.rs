//! Geometric deltas applied by gestures

use crate::domain::{Size, Vec2};

/// Open interval a pinched dimension must stay inside
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeBounds {
    pub min: f32,
    pub max: Size,
}

impl SizeBounds {
    pub fn admits(&self, size: Size) -> bool {
        size.width > self.min
            && size.height > self.min
            && size.width < self.max.width
            && size.height < self.max.height
    }
}

pub fn translate(center: Vec2, delta: Vec2) -> Vec2 {
    center + delta
}

/// Candidate size after scaling, or `None` when it leaves the bounds
pub fn scaled_size(current: Size, factor: f32, bounds: SizeBounds) -> Option<Size> {
    let candidate = current.scaled(factor);
    if bounds.admits(candidate) {
        Some(candidate)
    } else {
        None
    }
}

/// Rotation composes onto the current orientation
pub fn compose_rotation(current: f32, delta: f32) -> f32 {
    current + delta
}
