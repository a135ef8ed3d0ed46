use crate::core::error::PlaygroundError;
use crate::domain::{BodyId, Vec2};
use crate::services::feedback::FeedbackEngine;
use crate::services::solver::PhysicsSolver;
use crate::systems::constraints::GroupSet;
use crate::systems::gestures::transform::{compose_rotation, scaled_size, translate, SizeBounds};
use crate::systems::gestures::{BeginOutcome, EndOutcome, GestureKind, GestureOutcome, GesturePhase};
use crate::systems::registry::Body;

use super::view_events::ViewEvent;
use super::PlaygroundCore;

pub(super) fn on_pan_event<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    id: BodyId,
    phase: GesturePhase,
    translation: Vec2,
) -> Result<GestureOutcome, PlaygroundError> {
    match phase {
        GesturePhase::Began => begin_session(core, id, GestureKind::Pan),
        GesturePhase::Changed => {
            let outcome = apply_change(core, id, GestureKind::Pan, |body| {
                body.center = translate(body.center, translation);
                true
            })?;
            if consumed(outcome) {
                if let Some(session) = core.gestures.session_mut(id, GestureKind::Pan) {
                    session.record_translation(translation);
                }
            }
            Ok(outcome)
        }
        GesturePhase::Ended | GesturePhase::Cancelled => end_session(core, id, GestureKind::Pan),
    }
}

pub(super) fn on_pinch_event<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    id: BodyId,
    phase: GesturePhase,
    scale: f32,
) -> Result<GestureOutcome, PlaygroundError> {
    match phase {
        GesturePhase::Began => begin_session(core, id, GestureKind::Pinch),
        GesturePhase::Changed => {
            let bounds = SizeBounds {
                min: core.config.min_dimension,
                max: core.config.max_size(core.viewport),
            };
            let outcome = apply_change(core, id, GestureKind::Pinch, |body| {
                match scaled_size(body.size, scale, bounds) {
                    Some(size) => {
                        body.size = size;
                        true
                    }
                    None => false,
                }
            })?;
            if outcome == GestureOutcome::Rejected {
                core.stats.resizes_rejected += 1;
                log::debug!("pinch on {id} rejected: scale {scale} leaves bounds");
            }
            // Reset happens for rejected resizes too
            if consumed(outcome) {
                if let Some(session) = core.gestures.session_mut(id, GestureKind::Pinch) {
                    session.record_scale(scale);
                }
            }
            Ok(outcome)
        }
        GesturePhase::Ended | GesturePhase::Cancelled => end_session(core, id, GestureKind::Pinch),
    }
}

pub(super) fn on_rotate_event<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    id: BodyId,
    phase: GesturePhase,
    angle: f32,
) -> Result<GestureOutcome, PlaygroundError> {
    match phase {
        GesturePhase::Began => begin_session(core, id, GestureKind::Rotate),
        GesturePhase::Changed => {
            let outcome = apply_change(core, id, GestureKind::Rotate, |body| {
                body.rotation = compose_rotation(body.rotation, angle);
                true
            })?;
            if consumed(outcome) {
                if let Some(session) = core.gestures.session_mut(id, GestureKind::Rotate) {
                    session.record_rotation(angle);
                }
            }
            Ok(outcome)
        }
        GesturePhase::Ended | GesturePhase::Cancelled => end_session(core, id, GestureKind::Rotate),
    }
}

/// Dismiss a body: out of every group, moved under the finger, pulsed,
/// then faded and destroyed from `tick`.
pub(super) fn on_long_press<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    id: BodyId,
    point: Vec2,
) -> GestureOutcome {
    if core.gestures.any_active() {
        log::debug!("long-press on {id} ignored: another gesture is active");
        return GestureOutcome::Ignored;
    }
    if core.registry.get(id).is_none() {
        log::debug!("long-press target {id} vanished");
        return GestureOutcome::Ignored;
    }

    // No matching resume: the body never rejoins a group
    core.groups.evict(id, &mut core.driver);

    if let Some(body) = core.registry.get_mut(id) {
        body.center = point;
        core.view_events.push(ViewEvent::Transform { body: body.snapshot() });
    }
    core.registry.begin_fade(id, core.config.fade_out_secs);

    let outcome = core.notifier.pulse(&mut core.feedback);
    core.stats.record_feedback(outcome);
    log::debug!("dismissed {id}");
    GestureOutcome::Dismissed
}

fn consumed(outcome: GestureOutcome) -> bool {
    matches!(outcome, GestureOutcome::Applied | GestureOutcome::Rejected)
}

fn begin_session<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    id: BodyId,
    kind: GestureKind,
) -> Result<GestureOutcome, PlaygroundError> {
    if core.registry.get(id).is_none() {
        log::debug!("{:?} target {id} vanished before begin", kind);
        return Ok(GestureOutcome::Ignored);
    }
    match core.gestures.begin(id, kind) {
        BeginOutcome::Duplicate => Ok(GestureOutcome::Ignored),
        BeginOutcome::Joined => Ok(GestureOutcome::Began),
        BeginOutcome::First => {
            if let Err(err) = core.groups.suspend(id, GroupSet::GRAVITY, &mut core.driver) {
                core.gestures.end(id, kind);
                return Err(err);
            }
            Ok(GestureOutcome::Began)
        }
    }
}

fn end_session<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    id: BodyId,
    kind: GestureKind,
) -> Result<GestureOutcome, PlaygroundError> {
    match core.gestures.end(id, kind) {
        EndOutcome::NoSession => Ok(GestureOutcome::Ignored),
        EndOutcome::StillHeld => Ok(GestureOutcome::Ended),
        EndOutcome::Last => {
            if let Some(body) = core.registry.get(id) {
                core.groups.resume(body, GroupSet::GRAVITY, &mut core.driver)?;
            }
            Ok(GestureOutcome::Ended)
        }
    }
}

/// Run `edit` on a body taken out of its contact groups.
///
/// `edit` returns whether it changed the body. A changed body is resynced
/// with the solver and re-published to the view before it rejoins.
fn apply_change<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    id: BodyId,
    kind: GestureKind,
    edit: impl FnOnce(&mut Body) -> bool,
) -> Result<GestureOutcome, PlaygroundError> {
    if core.gestures.session(id, kind).is_none() {
        return Ok(GestureOutcome::Ignored);
    }
    let Some(material) = core.registry.get(id).map(Body::material) else {
        core.gestures.drop_body(id);
        log::debug!("{:?} target {id} vanished mid-gesture", kind);
        return Ok(GestureOutcome::Ignored);
    };

    let contact = GroupSet::contact(material);
    core.groups.suspend(id, contact, &mut core.driver)?;

    let Some(body) = core.registry.get_mut(id) else {
        return Ok(GestureOutcome::Ignored);
    };
    let changed = edit(&mut *body);
    if changed {
        core.driver.resync(body);
        core.view_events.push(ViewEvent::Transform { body: body.snapshot() });
    }
    core.groups.resume(body, contact, &mut core.driver)?;

    if changed {
        core.stats.gestures_applied += 1;
        Ok(GestureOutcome::Applied)
    } else {
        Ok(GestureOutcome::Rejected)
    }
}
