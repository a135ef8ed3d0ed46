use crate::core::error::PlaygroundError;
use crate::domain::{PlaygroundConfig, Viewport};
use crate::services::feedback::FeedbackEngine;
use crate::services::solver::PhysicsSolver;
use crate::systems::constraints::{ConstraintGroups, SimulationDriver};
use crate::systems::feedback::CollisionNotifier;
use crate::systems::gestures::GestureCoordinator;
use crate::systems::registry::BodyRegistry;

use super::stats::PlaygroundStats;
use super::PlaygroundCore;

pub(super) fn create_core<S: PhysicsSolver, F: FeedbackEngine>(
    viewport: Viewport,
    config: PlaygroundConfig,
    solver: S,
    feedback: F,
) -> Result<PlaygroundCore<S, F>, PlaygroundError> {
    config.validate(viewport)?;

    let driver = SimulationDriver::new(solver, &config);
    let notifier = CollisionNotifier::new(&config);
    let rng_state = config.rng_seed;

    log::debug!(
        "playground core created: viewport {}x{}, item {}x{}",
        viewport.width,
        viewport.height,
        config.item_width,
        config.item_height
    );

    Ok(PlaygroundCore {
        config,
        viewport,
        registry: BodyRegistry::new(),
        groups: ConstraintGroups::new(),
        driver,
        gestures: GestureCoordinator::new(),
        notifier,
        feedback,
        motion_rx: None,
        motion_tx: None,
        view_events: Vec::with_capacity(64),
        contact_buffer: Vec::with_capacity(32),
        stats: PlaygroundStats::default(),
        rng_state,
    })
}
