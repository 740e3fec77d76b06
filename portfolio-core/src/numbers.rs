//! Numeric conversion helpers centralizing the casts used by display code.

use num_traits::cast::cast;

/// Floor a f64 and clamp it to the i64 range, returning 0 for non-finite values.
#[must_use]
pub fn floor_f64_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let min = cast::<i64, f64>(i64::MIN).unwrap_or(f64::MIN);
    let max = cast::<i64, f64>(i64::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).floor();
    cast::<f64, i64>(clamped).unwrap_or(0)
}

/// Convert a step count to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Milliseconds as the `i32` timeout browser timer APIs expect, saturating.
#[must_use]
pub fn millis_to_timeout(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
