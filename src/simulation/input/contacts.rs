use crate::domain::{BodyId, Vec2};
use crate::services::feedback::FeedbackEngine;
use crate::services::solver::{ContactEvent, PhysicsSolver};
use crate::systems::feedback::FeedbackOutcome;

use super::PlaygroundCore;

pub(super) fn on_boundary_contact<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    id: BodyId,
    _point: Vec2,
) -> FeedbackOutcome {
    notify_for(core, id)
}

/// Body-body contact; the first body's speed drives the feedback
pub(super) fn on_body_contact<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    a: BodyId,
    _b: BodyId,
    _point: Vec2,
) -> FeedbackOutcome {
    notify_for(core, a)
}

pub(super) fn dispatch<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    contact: ContactEvent,
) -> FeedbackOutcome {
    match contact {
        ContactEvent::Boundary { body, point } => on_boundary_contact(core, body, point),
        ContactEvent::Body { a, b, point } => on_body_contact(core, a, b, point),
    }
}

fn notify_for<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    id: BodyId,
) -> FeedbackOutcome {
    let outcome = if core.registry.get(id).is_some() {
        let velocity = core.driver.linear_velocity(id);
        core.notifier.notify(velocity, &mut core.feedback)
    } else {
        log::debug!("contact for vanished body {id}");
        FeedbackOutcome::Skipped
    };
    core.stats.record_feedback(outcome);
    outcome
}
