use serde::Serialize;

use crate::domain::{BodyId, Color};
use crate::systems::registry::BodySnapshot;

/// Update for the view layer, drained once per frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ViewEvent {
    /// New shape: create its view
    Attach { body: BodySnapshot, color: Color },
    /// Position, size or rotation changed by a gesture
    Transform { body: BodySnapshot },
    Opacity { id: BodyId, alpha: f32 },
    /// Tear the view down, animating out when `animated`
    Detach { id: BodyId, animated: bool },
}

impl ViewEvent {
    pub fn body_id(&self) -> BodyId {
        match self {
            ViewEvent::Attach { body, .. } | ViewEvent::Transform { body } => body.id,
            ViewEvent::Opacity { id, .. } | ViewEvent::Detach { id, .. } => *id,
        }
    }
}

pub(super) fn to_json(events: &[ViewEvent]) -> String {
    serde_json::to_string(events).unwrap_or_else(|err| {
        log::error!("view events not serializable: {err}");
        "[]".to_string()
    })
}
