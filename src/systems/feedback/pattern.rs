use crate::domain::Vec2;
use crate::services::feedback::{
    EventKind, EventParameter, FeedbackEvent, FeedbackPattern, ParameterId,
};

pub const AUDIO_PITCH: f32 = -0.15;

const VOLUME: (f32, f32) = (0.1, 0.4);
const DECAY: (f32, f32) = (0.0, 0.1);
// Inverted: harder hits sound duller
const SHARPNESS: (f32, f32) = (0.9, 0.5);
const INTENSITY: (f32, f32) = (0.375, 1.0);

#[inline]
pub fn lerp(alpha: f32, min: f32, max: f32) -> f32 {
    min + alpha * (max - min)
}

/// Speed / `max_velocity`, clamped to [0, 1]
pub fn normalized_magnitude(velocity: Vec2, max_velocity: f32) -> f32 {
    let m = velocity.length() / max_velocity;
    if m.is_nan() {
        return 0.0;
    }
    m.clamp(0.0, 1.0)
}

/// One continuous audio event plus one transient haptic, both at t=0
pub fn pattern_for_magnitude(magnitude: f32) -> FeedbackPattern {
    let param = |id, value| EventParameter { id, value };

    let audio = FeedbackEvent {
        kind: EventKind::AudioContinuous,
        relative_time: 0.0,
        parameters: vec![
            param(ParameterId::AudioPitch, AUDIO_PITCH),
            param(ParameterId::AudioVolume, lerp(magnitude, VOLUME.0, VOLUME.1)),
            param(ParameterId::DecayTime, lerp(magnitude, DECAY.0, DECAY.1)),
            param(ParameterId::Sustained, 0.0),
        ],
    };

    let haptic = FeedbackEvent {
        kind: EventKind::HapticTransient,
        relative_time: 0.0,
        parameters: vec![
            param(ParameterId::HapticSharpness, lerp(magnitude, SHARPNESS.0, SHARPNESS.1)),
            param(ParameterId::HapticIntensity, lerp(magnitude, INTENSITY.0, INTENSITY.1)),
        ],
    };

    FeedbackPattern { events: vec![audio, haptic] }
}
