use super::GestureKind;

/// Whether two recognizers may fire together.
///
/// Pan, pinch and rotate combine freely (also on the same body). Long-press
/// never runs alongside anything, anywhere.
pub fn should_recognize_simultaneously(a: GestureKind, b: GestureKind) -> bool {
    a != GestureKind::LongPress && b != GestureKind::LongPress
}
