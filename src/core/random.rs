/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform-ish draw in `[lo, hi]` (modulo bias is fine for spawn colors)
#[inline]
pub fn range_inclusive(state: &mut u32, lo: u64, hi: u64) -> u64 {
    if hi <= lo {
        return lo;
    }
    let raw = ((xorshift32(state) as u64) << 32) | xorshift32(state) as u64;
    match (hi - lo).checked_add(1) {
        Some(span) => lo + raw % span,
        // Full u64 range
        None => raw,
    }
}
