use crate::domain::{BodyId, Vec2};

use super::{GestureKind, GesturePhase};

/// Ephemeral state of one recognizer invocation
#[derive(Clone, Debug, PartialEq)]
pub struct GestureSession {
    pub body: BodyId,
    pub kind: GestureKind,
    pub phase: GesturePhase,
    /// Last value consumed from the recognizer; the host-side reset is not mirrored here
    pub last_translation: Vec2,
    pub last_scale: f32,
    pub last_rotation: f32,
    /// Number of `Changed` events handled
    pub changes: u32,
}

impl GestureSession {
    fn new(body: BodyId, kind: GestureKind) -> Self {
        Self {
            body,
            kind,
            phase: GesturePhase::Began,
            last_translation: Vec2::zero(),
            last_scale: 1.0,
            last_rotation: 0.0,
            changes: 0,
        }
    }

    pub fn record_translation(&mut self, translation: Vec2) {
        self.phase = GesturePhase::Changed;
        self.last_translation = translation;
        self.changes += 1;
    }

    pub fn record_scale(&mut self, scale: f32) {
        self.phase = GesturePhase::Changed;
        self.last_scale = scale;
        self.changes += 1;
    }

    pub fn record_rotation(&mut self, angle: f32) {
        self.phase = GesturePhase::Changed;
        self.last_rotation = angle;
        self.changes += 1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeginOutcome {
    /// First continuous session on this body: gravity must be suspended
    First,
    /// Another session already holds the body
    Joined,
    /// Session for this (body, kind) already running
    Duplicate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndOutcome {
    /// Last session on this body ended: gravity must be resumed
    Last,
    StillHeld,
    NoSession,
}

/// Active sessions across all bodies
#[derive(Default)]
pub struct GestureCoordinator {
    sessions: Vec<GestureSession>,
}

impl GestureCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, body: BodyId, kind: GestureKind) -> BeginOutcome {
        if self.session(body, kind).is_some() {
            return BeginOutcome::Duplicate;
        }
        let held = self.holds(body) > 0;
        self.sessions.push(GestureSession::new(body, kind));
        if held {
            BeginOutcome::Joined
        } else {
            BeginOutcome::First
        }
    }

    pub fn session(&self, body: BodyId, kind: GestureKind) -> Option<&GestureSession> {
        self.sessions.iter().find(|s| s.body == body && s.kind == kind)
    }

    pub fn session_mut(&mut self, body: BodyId, kind: GestureKind) -> Option<&mut GestureSession> {
        self.sessions.iter_mut().find(|s| s.body == body && s.kind == kind)
    }

    /// Close the (body, kind) session
    pub fn end(&mut self, body: BodyId, kind: GestureKind) -> EndOutcome {
        let Some(idx) = self.sessions.iter().position(|s| s.body == body && s.kind == kind) else {
            return EndOutcome::NoSession;
        };
        self.sessions.swap_remove(idx);
        if self.holds(body) == 0 {
            EndOutcome::Last
        } else {
            EndOutcome::StillHeld
        }
    }

    /// Number of sessions on `body`
    pub fn holds(&self, body: BodyId) -> usize {
        self.sessions.iter().filter(|s| s.body == body).count()
    }

    pub fn any_active(&self) -> bool {
        !self.sessions.is_empty()
    }

    /// Forget every session of a body that left the registry
    pub fn drop_body(&mut self, body: BodyId) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.body != body);
        before - self.sessions.len()
    }

    pub fn clear(&mut self) {
        self.sessions.clear();
    }

    pub fn sessions(&self) -> &[GestureSession] {
        &self.sessions
    }
}
