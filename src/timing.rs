//! Tap pulse debounce conversions (`PD` register).
//!
//! The debounce count is an affine function of time: count `1` is the
//! shortest non-zero window and every further count adds one step. Count `0`
//! is the hardware minimum and is reported as the same duration as count `1`.

/// Debounce duration represented by the minimum count, in milliseconds.
pub const DEBOUNCE_MIN_MS: f32 = 0.52;
/// Duration added by each count above one, in milliseconds.
pub const DEBOUNCE_STEP_MS: f32 = 0.26;

/// Converts a debounce duration in milliseconds to a `PD` register count.
///
/// Durations shorter than [`DEBOUNCE_MIN_MS`] saturate at `0`, and durations
/// past the register range saturate at `255`.
pub fn ms_to_register(ms: f32) -> u8 {
    let steps = libm::roundf((ms - DEBOUNCE_MIN_MS) / DEBOUNCE_STEP_MS) + 1.0;
    if steps <= 0.0 {
        0
    } else if steps >= u8::MAX as f32 {
        u8::MAX
    } else {
        steps as u8
    }
}

/// Converts a `PD` register count to a debounce duration in milliseconds.
pub fn register_to_ms(count: u8) -> f32 {
    if count == 0 {
        DEBOUNCE_MIN_MS
    } else {
        (count - 1) as f32 * DEBOUNCE_STEP_MS + DEBOUNCE_MIN_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_is_minimum_debounce() {
        assert_eq!(register_to_ms(0), 0.52);
        assert_eq!(register_to_ms(1), 0.52);
    }

    #[test]
    fn every_nonzero_count_survives_a_roundtrip() {
        for count in 1..=u8::MAX {
            assert_eq!(ms_to_register(register_to_ms(count)), count, "count {count}");
        }
    }

    #[test]
    fn minimum_duration_maps_to_count_one() {
        assert_eq!(ms_to_register(register_to_ms(0)), 1);
    }

    #[test]
    fn rounds_to_the_nearest_step() {
        // 10 ms sits 36.46 steps above the minimum.
        assert_eq!(ms_to_register(10.0), 37);
        assert_eq!(ms_to_register(0.52 + 0.26 * 2.4), 3);
        assert_eq!(ms_to_register(0.52 + 0.26 * 2.6), 4);
    }

    #[test]
    fn saturates_outside_the_register_range() {
        assert_eq!(ms_to_register(0.0), 0);
        assert_eq!(ms_to_register(-5.0), 0);
        assert_eq!(ms_to_register(1_000.0), u8::MAX);
    }
}
