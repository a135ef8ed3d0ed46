use crate::services::feedback::FeedbackEngine;
use crate::services::motion::{motion_channel, MotionSender, MotionService};
use crate::services::solver::PhysicsSolver;

use super::PlaygroundCore;

pub(super) fn set_simulation_running<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    running: bool,
) -> bool {
    core.driver.set_running(running)
}

pub(super) fn on_appear<S: PhysicsSolver, F: FeedbackEngine>(core: &mut PlaygroundCore<S, F>) {
    set_simulation_running(core, true);
    core.notifier.resume_engine(&mut core.feedback);
}

pub(super) fn on_disappear<S: PhysicsSolver, F: FeedbackEngine>(core: &mut PlaygroundCore<S, F>) {
    set_simulation_running(core, false);
}

pub(super) fn on_background<S: PhysicsSolver, F: FeedbackEngine>(core: &mut PlaygroundCore<S, F>) {
    core.notifier.suspend_engine(&mut core.feedback);
}

pub(super) fn on_foreground<S: PhysicsSolver, F: FeedbackEngine>(core: &mut PlaygroundCore<S, F>) {
    core.notifier.resume_engine(&mut core.feedback);
}

pub(super) fn motion_sender<S: PhysicsSolver, F: FeedbackEngine>(core: &mut PlaygroundCore<S, F>) -> MotionSender {
    if let Some(tx) = &core.motion_tx {
        return tx.clone();
    }
    let (tx, rx) = motion_channel();
    core.motion_tx = Some(tx.clone());
    core.motion_rx = Some(rx);
    tx
}

pub(super) fn attach_motion<S: PhysicsSolver, F: FeedbackEngine, M: MotionService>(
    core: &mut PlaygroundCore<S, F>,
    service: &mut M,
) {
    let sink = motion_sender(core);
    service.start(sink);
    log::debug!("motion updates attached");
}

pub(super) fn detach_motion<S: PhysicsSolver, F: FeedbackEngine, M: MotionService>(
    core: &mut PlaygroundCore<S, F>,
    service: &mut M,
) {
    service.stop();
    // Samples still queued are stale once the service stops
    if let Some(rx) = &core.motion_rx {
        let _ = rx.latest();
    }
    log::debug!("motion updates detached");
}
