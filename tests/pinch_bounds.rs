mod common;

use common::{core, phone};
use shape_dynamics::core::random::xorshift32;
use shape_dynamics::domain::derive_color;
use shape_dynamics::systems::gestures::transform::{scaled_size, SizeBounds};
use shape_dynamics::{ConstraintGroup, GestureOutcome, GesturePhase, ShapeKind, Size, Vec2};

fn inside(size: Size, min: f32, max: Size) -> bool {
    size.width > min && size.height > min && size.width < max.width && size.height < max.height
}

#[test]
fn random_pinch_sequences_never_leave_bounds() {
    let mut pg = core();
    let max = pg.config().max_size(phone());
    let min = pg.config().min_dimension;
    let mut rng = 0xC0FFEE_u32;

    for kind in ShapeKind::ALL {
        let id = pg.spawn_body(Vec2::new(195.0, 300.0), kind, derive_color(90_210)).unwrap();
        let material = pg.body(id).unwrap().material();
        pg.on_pinch_event(id, GesturePhase::Began, 1.0).unwrap();

        for _ in 0..500 {
            // factors in [0.05, 4.0)
            let factor = 0.05 + (xorshift32(&mut rng) % 3950) as f32 / 1000.0;
            let prev = pg.body(id).unwrap().size;

            match pg.on_pinch_event(id, GesturePhase::Changed, factor).unwrap() {
                GestureOutcome::Applied => assert_eq!(pg.body(id).unwrap().size, prev.scaled(factor)),
                GestureOutcome::Rejected => assert_eq!(pg.body(id).unwrap().size, prev),
                other => panic!("unexpected outcome {other:?}"),
            }
            assert!(inside(pg.body(id).unwrap().size, min, max));
            assert_eq!(pg.body(id).unwrap().material(), material);
        }

        pg.on_pinch_event(id, GesturePhase::Ended, 1.0).unwrap();
        assert!(pg.membership(id).contains(material));
        assert_eq!(pg.membership(id).material_count(), 1);
        assert!(pg.membership(id).contains(ConstraintGroup::Gravity));
    }
}

#[test]
fn growth_to_ten_points_short_of_the_edge_is_rejected() {
    let mut pg = core();
    let id = pg.spawn_body(Vec2::new(195.0, 300.0), ShapeKind::Rectangle, derive_color(5000)).unwrap();
    pg.on_pinch_event(id, GesturePhase::Began, 1.0).unwrap();

    let factor = (phone().width - 10.0) / 100.0;
    assert_eq!(pg.on_pinch_event(id, GesturePhase::Changed, factor).unwrap(), GestureOutcome::Rejected);
    assert_eq!(pg.body(id).unwrap().size, Size::new(100.0, 100.0));
    assert_eq!(pg.gestures().session(id, shape_dynamics::GestureKind::Pinch).unwrap().last_scale, factor);
}

#[test]
fn bounds_are_exclusive() {
    let bounds = SizeBounds { min: 10.0, max: Size::new(340.0, 794.0) };
    assert!(scaled_size(Size::new(100.0, 100.0), 0.1, bounds).is_none());
    assert!(scaled_size(Size::new(100.0, 100.0), 3.4, bounds).is_none());
    assert_eq!(scaled_size(Size::new(100.0, 100.0), 0.5, bounds), Some(Size::new(50.0, 50.0)));
}
