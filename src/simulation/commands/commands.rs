use crate::core::error::PlaygroundError;
use crate::core::random::range_inclusive;
use crate::domain::{derive_color, BodyId, Color, ShapeKind, Vec2, Viewport};
use crate::services::feedback::FeedbackEngine;
use crate::services::solver::PhysicsSolver;
use crate::systems::constraints::GroupSet;

use super::view_events::ViewEvent;
use super::PlaygroundCore;

pub(super) fn on_tap<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    point: Vec2,
) -> Result<BodyId, PlaygroundError> {
    let draw = range_inclusive(&mut core.rng_state, 0, ShapeKind::ALL.len() as u64 - 1);
    let kind = ShapeKind::from_draw(draw as u32);
    let seed = range_inclusive(
        &mut core.rng_state,
        core.config.color_seed_min,
        core.config.color_seed_max,
    );
    spawn_body(core, point, kind, derive_color(seed))
}

pub(super) fn spawn_body<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    at: Vec2,
    kind: ShapeKind,
    color: Color,
) -> Result<BodyId, PlaygroundError> {
    let id = core.registry.spawn(kind, at, core.config.item_size(), color);
    let Some(body) = core.registry.get(id) else {
        return Ok(id);
    };

    let groups = GroupSet::spawned(body.material());
    if let Err(err) = core.groups.insert(body, groups, &mut core.driver) {
        core.registry.remove(id);
        return Err(err);
    }

    core.view_events.push(ViewEvent::Attach { body: body.snapshot(), color });
    core.stats.bodies_spawned += 1;
    log::debug!("spawned {:?} {} at ({}, {})", kind, id, at.x, at.y);
    Ok(id)
}

/// Drop a body from the registry, every group and every gesture session
pub(super) fn remove_body<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    id: BodyId,
    animated: bool,
) -> bool {
    if core.registry.remove(id).is_none() {
        return false;
    }
    core.groups.evict(id, &mut core.driver);
    core.gestures.drop_body(id);
    core.view_events.push(ViewEvent::Detach { id, animated });
    core.stats.bodies_removed += 1;
    true
}

pub(super) fn clear<S: PhysicsSolver, F: FeedbackEngine>(core: &mut PlaygroundCore<S, F>) {
    core.groups.clear(&mut core.driver);
    core.gestures.clear();
    let ids = core.registry.clear();
    core.stats.bodies_removed += ids.len() as u32;
    core.view_events
        .extend(ids.into_iter().map(|id| ViewEvent::Detach { id, animated: false }));
}

pub(super) fn set_viewport<S: PhysicsSolver, F: FeedbackEngine>(
    core: &mut PlaygroundCore<S, F>,
    viewport: Viewport,
) -> Result<(), PlaygroundError> {
    core.config.validate(viewport)?;
    core.viewport = viewport;
    Ok(())
}
