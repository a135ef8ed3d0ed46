use crate::domain::{BodyId, Color, ShapeKind, Size, Vec2};

use super::body::{Body, Lifecycle};

/// Per-tick result of a long-press fade
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeProgress {
    pub id: BodyId,
    pub alpha: f32,
    pub finished: bool,
}

/// Manages all bodies of one playground
pub struct BodyRegistry {
    bodies: Vec<Body>,
    next_id: u32,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a body centered on `center`
    pub fn spawn(&mut self, kind: ShapeKind, center: Vec2, size: Size, color: Color) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.bodies.push(Body::new(id, kind, center, size, color));
        id
    }

    /// Active body by id. `None` for unknown, fading or removed bodies.
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id && b.is_active())
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id && b.is_active())
    }

    /// Any body still in the registry, fading ones included
    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.iter().any(|b| b.id == id)
    }

    /// Move an active body into its fade-out. False if it is not active.
    pub fn begin_fade(&mut self, id: BodyId, duration: f32) -> bool {
        match self.get_mut(id) {
            Some(body) => {
                body.lifecycle = Lifecycle::FadingOut { elapsed: 0.0, duration };
                true
            }
            None => false,
        }
    }

    /// Advance every fade by `dt` seconds
    pub fn advance_fades(&mut self, dt: f32) -> Vec<FadeProgress> {
        let mut progress = Vec::new();
        for body in self.bodies.iter_mut() {
            let Lifecycle::FadingOut { elapsed, duration } = body.lifecycle else {
                continue;
            };
            let elapsed = elapsed + dt.max(0.0);
            let finished = elapsed >= duration;
            let alpha = if finished { 0.0 } else { 1.0 - elapsed / duration };
            body.alpha = alpha;
            body.lifecycle = Lifecycle::FadingOut { elapsed, duration };
            progress.push(FadeProgress { id: body.id, alpha, finished });
        }
        progress
    }

    /// Remove a body. Unknown or already-removed ids are a no-op.
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.bodies.iter().position(|b| b.id == id)?;
        let mut body = self.bodies.swap_remove(idx);
        body.lifecycle = Lifecycle::Dead;
        Some(body)
    }

    /// Remove every body, returning their ids
    pub fn clear(&mut self) -> Vec<BodyId> {
        let ids = self.bodies.iter().map(|b| b.id).collect();
        self.bodies.clear();
        ids
    }

    /// Bodies still in the registry (fading ones included)
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn active(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.is_active())
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_one(reg: &mut BodyRegistry, kind: ShapeKind) -> BodyId {
        reg.spawn(kind, Vec2::new(100.0, 100.0), Size::new(100.0, 100.0), Color::new(0, 0, 0, 255))
    }

    #[test]
    fn ids_are_unique_and_start_at_one() {
        let mut reg = BodyRegistry::new();
        let a = spawn_one(&mut reg, ShapeKind::Ellipse);
        let b = spawn_one(&mut reg, ShapeKind::Rectangle);
        assert_eq!(a, BodyId(1));
        assert_eq!(b, BodyId(2));
        reg.remove(a);
        assert_eq!(spawn_one(&mut reg, ShapeKind::Ellipse), BodyId(3));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut reg = BodyRegistry::new();
        let id = spawn_one(&mut reg, ShapeKind::Ellipse);
        let removed = reg.remove(id).unwrap();
        assert_eq!(removed.lifecycle, Lifecycle::Dead);
        assert!(reg.remove(id).is_none());
        assert!(reg.remove(BodyId(99)).is_none());
        assert!(reg.get(id).is_none());
    }

    #[test]
    fn fading_bodies_are_hidden_from_get() {
        let mut reg = BodyRegistry::new();
        let id = spawn_one(&mut reg, ShapeKind::Rectangle);
        assert!(reg.begin_fade(id, 0.2));
        assert!(reg.get(id).is_none());
        assert!(reg.contains(id));
        assert!(!reg.begin_fade(id, 0.2));
    }

    #[test]
    fn fade_runs_to_zero_alpha() {
        let mut reg = BodyRegistry::new();
        let id = spawn_one(&mut reg, ShapeKind::Ellipse);
        reg.begin_fade(id, 0.2);

        let p = reg.advance_fades(0.1);
        assert_eq!(p.len(), 1);
        assert!(!p[0].finished);
        assert!((p[0].alpha - 0.5).abs() < 1e-5);

        let p = reg.advance_fades(0.1);
        assert!(p[0].finished);
        assert_eq!(p[0].alpha, 0.0);
    }

    #[test]
    fn zero_duration_fade_finishes_on_first_advance() {
        let mut reg = BodyRegistry::new();
        let id = spawn_one(&mut reg, ShapeKind::Ellipse);
        reg.begin_fade(id, 0.0);
        let p = reg.advance_fades(0.0);
        assert!(p[0].finished);
    }

    #[test]
    fn material_follows_kind() {
        use crate::systems::constraints::ConstraintGroup;

        let mut reg = BodyRegistry::new();
        let e = spawn_one(&mut reg, ShapeKind::Ellipse);
        let r = spawn_one(&mut reg, ShapeKind::Rectangle);
        assert_eq!(reg.get(e).unwrap().material(), ConstraintGroup::Elasticity);
        assert_eq!(reg.get(r).unwrap().material(), ConstraintGroup::Density);
    }
}
