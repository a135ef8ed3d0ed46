mod common;

use std::sync::{Mutex, OnceLock};

use common::{core, phone, FakeFeedback, FakeSolver};
use log::{Level, LevelFilter, Log, Metadata, Record};
use shape_dynamics::domain::derive_color;
use shape_dynamics::services::{ContactEvent, EventKind, FeedbackPattern, ParameterId, StopReason};
use shape_dynamics::{BodyId, FeedbackOutcome, PlaygroundConfig, PlaygroundCore, ShapeKind, Vec2};

struct CaptureLogger;

static LOGS: OnceLock<Mutex<Vec<String>>> = OnceLock::new();
static LOGGER: CaptureLogger = CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(logs) = LOGS.get() {
            let mut guard = logs.lock().expect("log lock");
            guard.push(format!("{}", record.args()));
        }
    }

    fn flush(&self) {}
}

fn init_logger() -> &'static Mutex<Vec<String>> {
    let logs = LOGS.get_or_init(|| Mutex::new(Vec::new()));
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Info);
    logs
}

fn param(pattern: &FeedbackPattern, kind: EventKind, id: ParameterId) -> f32 {
    pattern.event(kind).and_then(|e| e.parameter(id)).unwrap()
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn spawn(pg: &mut common::Core) -> BodyId {
    pg.spawn_body(Vec2::new(150.0, 150.0), ShapeKind::Ellipse, derive_color(31_337)).unwrap()
}

#[test]
fn contact_speed_maps_onto_pattern_parameters() {
    let mut pg = core();
    let id = spawn(&mut pg);

    pg.solver_mut().set_velocity(id, Vec2::new(300.0, 400.0));
    assert_eq!(pg.on_boundary_contact(id, Vec2::zero()), FeedbackOutcome::Played);
    pg.solver_mut().set_velocity(id, Vec2::zero());
    assert_eq!(pg.on_boundary_contact(id, Vec2::zero()), FeedbackOutcome::Played);
    pg.solver_mut().set_velocity(id, Vec2::new(0.0, -250.0));
    assert_eq!(pg.on_body_contact(id, BodyId(999), Vec2::zero()), FeedbackOutcome::Played);

    let played = &pg.feedback().played;
    let (hard, still, half) = (&played[0], &played[1], &played[2]);

    assert!(approx(param(hard, EventKind::HapticTransient, ParameterId::HapticIntensity), 1.0));
    assert!(approx(param(hard, EventKind::HapticTransient, ParameterId::HapticSharpness), 0.5));
    assert!(approx(param(hard, EventKind::AudioContinuous, ParameterId::AudioVolume), 0.4));
    assert!(approx(param(hard, EventKind::AudioContinuous, ParameterId::DecayTime), 0.1));

    assert!(approx(param(still, EventKind::HapticTransient, ParameterId::HapticIntensity), 0.375));
    assert!(approx(param(still, EventKind::HapticTransient, ParameterId::HapticSharpness), 0.9));
    assert!(approx(param(still, EventKind::AudioContinuous, ParameterId::AudioVolume), 0.1));

    assert!(approx(param(half, EventKind::HapticTransient, ParameterId::HapticSharpness), 0.7));
    for p in played {
        assert!(approx(param(p, EventKind::AudioContinuous, ParameterId::AudioPitch), -0.15));
    }
}

#[test]
fn speeds_beyond_the_ceiling_clamp_to_full_magnitude() {
    let mut pg = core();
    let id = spawn(&mut pg);
    pg.solver_mut().set_velocity(id, Vec2::new(5000.0, 5000.0));
    pg.on_boundary_contact(id, Vec2::zero());
    let p = &pg.feedback().played[0];
    assert!(approx(param(p, EventKind::HapticTransient, ParameterId::HapticIntensity), 1.0));
}

#[test]
fn playback_failure_is_logged_and_swallowed() {
    let logs = init_logger();
    let mut pg = core();
    let id = spawn(&mut pg);
    pg.feedback_mut().fail_play = true;

    assert_eq!(pg.on_boundary_contact(id, Vec2::zero()), FeedbackOutcome::Failed);
    assert_eq!(pg.stats().feedback_failed(), 1);

    let logs = logs.lock().expect("log lock");
    assert!(logs.iter().any(|line| line.contains("player invalidated")));
}

#[test]
fn failed_restart_aborts_only_one_attempt() {
    let mut pg = core();
    let id = spawn(&mut pg);
    pg.feedback_mut().fail_start = true;
    assert_eq!(pg.on_boundary_contact(id, Vec2::zero()), FeedbackOutcome::Failed);
    assert!(pg.feedback().played.is_empty());

    pg.feedback_mut().fail_start = false;
    assert_eq!(pg.on_boundary_contact(id, Vec2::zero()), FeedbackOutcome::Played);
    assert_eq!(pg.feedback().starts, 2);
}

#[test]
fn every_stop_reason_means_restart_before_next_use() {
    let mut pg = core();
    let id = spawn(&mut pg);
    pg.on_boundary_contact(id, Vec2::zero());

    let reasons = [
        StopReason::IdleTimeout,
        StopReason::Interrupted,
        StopReason::Backgrounded,
        StopReason::SystemError,
        StopReason::Destroyed,
    ];
    for (n, reason) in reasons.into_iter().enumerate() {
        pg.on_engine_stopped(reason);
        pg.on_boundary_contact(id, Vec2::zero());
        assert_eq!(pg.feedback().starts, n as u32 + 2);
    }
}

#[test]
fn devices_without_haptics_skip_contact_feedback() {
    let config = PlaygroundConfig { supports_haptics: false, ..PlaygroundConfig::default() };
    let mut pg = PlaygroundCore::with_config(phone(), config, FakeSolver::default(), FakeFeedback::default()).unwrap();
    let id = spawn(&mut pg);

    assert_eq!(pg.on_boundary_contact(id, Vec2::zero()), FeedbackOutcome::Skipped);
    assert_eq!(pg.on_body_contact(id, id, Vec2::zero()), FeedbackOutcome::Skipped);
    assert_eq!(pg.feedback().starts, 0);

    // Dismissal pulse is still attempted
    pg.on_long_press(id, Vec2::zero());
    assert_eq!(pg.feedback().pulses, 1);
}

#[test]
fn pulse_failure_does_not_block_dismissal() {
    let mut pg = core();
    let id = spawn(&mut pg);
    pg.feedback_mut().fail_pulse = true;
    assert_eq!(pg.on_long_press(id, Vec2::zero()), shape_dynamics::GestureOutcome::Dismissed);
    assert!(pg.body(id).is_none());
    assert_eq!(pg.stats().feedback_failed(), 1);
}

#[test]
fn solver_contacts_are_dispatched_from_tick() {
    let mut pg = core();
    let a = spawn(&mut pg);
    let b = spawn(&mut pg);
    pg.set_simulation_running(true);
    pg.solver_mut().queue_contact(ContactEvent::Boundary { body: a, point: Vec2::zero() });
    pg.solver_mut().queue_contact(ContactEvent::Body { a, b, point: Vec2::zero() });
    pg.solver_mut().queue_contact(ContactEvent::Boundary { body: BodyId(404), point: Vec2::zero() });

    pg.tick(1.0 / 60.0);
    assert_eq!(pg.feedback().played.len(), 2);
    assert_eq!(pg.stats().feedback_skipped(), 1);
}
