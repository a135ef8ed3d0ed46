//! Playground configuration
//!
//! Defaults are the tuned values the playground ships with. A host may
//! override any subset from JSON; missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::core::error::PlaygroundError;

use super::geometry::{Size, Vec2, Viewport};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Spawned body width
    pub item_width: f32,
    /// Spawned body height
    pub item_height: f32,
    /// Exclusive lower bound for either dimension during a pinch
    pub min_dimension: f32,
    /// Dimensions must stay below `viewport - viewport_margin`
    pub viewport_margin: f32,
    /// Contact speed that maps to full feedback magnitude
    pub max_contact_velocity: f32,
    /// Motion-sensor gravity multiplier
    pub gravity_scale: f32,
    pub elasticity: f32,
    pub resistance: f32,
    pub density: f32,
    /// Long-press fade-out duration
    pub fade_out_secs: f32,
    pub color_seed_min: u64,
    pub color_seed_max: u64,
    pub rng_seed: u32,
    pub supports_haptics: bool,
    /// Gravity direction before any motion sample arrives
    pub initial_gravity: Vec2,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            item_width: 100.0,
            item_height: 100.0,
            min_dimension: 10.0,
            viewport_margin: 50.0,
            max_contact_velocity: 500.0,
            gravity_scale: 5.0,
            elasticity: 1.0,
            resistance: 0.0,
            density: 2.0,
            fade_out_secs: 0.2,
            color_seed_min: 1000,
            color_seed_max: 100_000_000,
            rng_seed: 12345,
            supports_haptics: true,
            initial_gravity: Vec2::new(0.0, 1.0),
        }
    }
}

impl PlaygroundConfig {
    pub fn from_json(json: &str) -> Result<Self, PlaygroundError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn item_size(&self) -> Size {
        Size::new(self.item_width, self.item_height)
    }

    /// Largest dimension (exclusive) a body may take on each axis
    pub fn max_size(&self, viewport: Viewport) -> Size {
        Size::new(
            viewport.width - self.viewport_margin,
            viewport.height - self.viewport_margin,
        )
    }

    /// Check the config against the viewport it will run in
    pub fn validate(&self, viewport: Viewport) -> Result<(), PlaygroundError> {
        let invalid = |msg: String| Err(PlaygroundError::InvalidConfig(msg));

        if !(self.item_width > 0.0 && self.item_height > 0.0) {
            return invalid(format!(
                "item size must be positive, got {}x{}",
                self.item_width, self.item_height
            ));
        }
        if !(self.min_dimension >= 0.0) {
            return invalid(format!("min_dimension must not be negative, got {}", self.min_dimension));
        }
        if !(self.viewport_margin >= 0.0) {
            return invalid(format!("viewport_margin must not be negative, got {}", self.viewport_margin));
        }
        if self.item_width <= self.min_dimension || self.item_height <= self.min_dimension {
            return invalid(format!(
                "item size {}x{} must exceed min_dimension {}",
                self.item_width, self.item_height, self.min_dimension
            ));
        }
        let max = self.max_size(viewport);
        if self.item_width >= max.width || self.item_height >= max.height {
            return invalid(format!(
                "item size {}x{} does not fit viewport {}x{} with margin {}",
                self.item_width, self.item_height, viewport.width, viewport.height, self.viewport_margin
            ));
        }
        if !(self.max_contact_velocity > 0.0) {
            return invalid(format!(
                "max_contact_velocity must be positive, got {}",
                self.max_contact_velocity
            ));
        }
        if self.fade_out_secs < 0.0 {
            return invalid(format!("fade_out_secs must not be negative, got {}", self.fade_out_secs));
        }
        if self.color_seed_min > self.color_seed_max {
            return invalid(format!(
                "color seed range is empty: {}..={}",
                self.color_seed_min, self.color_seed_max
            ));
        }
        if self.rng_seed == 0 {
            return invalid("rng_seed must be non-zero".to_string());
        }
        Ok(())
    }
}
