use crate::domain::Vec2;
use crate::services::feedback::FeedbackEngine;
use crate::services::solver::PhysicsSolver;

use super::commands::remove_body;
use super::contacts::dispatch;
use super::view_events::ViewEvent;
use super::PlaygroundCore;

pub(super) fn tick<S: PhysicsSolver, F: FeedbackEngine>(core: &mut PlaygroundCore<S, F>, dt: f32) {
    apply_motion(core);

    // Reuse the contact buffer across frames
    let mut contacts = std::mem::take(&mut core.contact_buffer);
    contacts.clear();
    core.driver.step(dt, &mut contacts);
    for contact in contacts.drain(..) {
        dispatch(core, contact);
    }
    core.contact_buffer = contacts;

    advance_fades(core, dt);
    core.driver.advance_frame();
}

/// Latest queued sample wins; device y points up, view y points down
fn apply_motion<S: PhysicsSolver, F: FeedbackEngine>(core: &mut PlaygroundCore<S, F>) {
    let Some(sample) = core.motion_rx.as_ref().and_then(|rx| rx.latest()) else {
        return;
    };
    let scale = core.config.gravity_scale;
    core.driver
        .set_gravity_direction(Vec2::new(sample.gravity.x * scale, -sample.gravity.y * scale));
}

fn advance_fades<S: PhysicsSolver, F: FeedbackEngine>(core: &mut PlaygroundCore<S, F>, dt: f32) {
    for progress in core.registry.advance_fades(dt) {
        core.view_events.push(ViewEvent::Opacity { id: progress.id, alpha: progress.alpha });
        if progress.finished {
            // Already faded out, detach without animation
            remove_body(core, progress.id, false);
        }
    }
}
