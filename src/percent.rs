//! Percentage helpers for feeding gauges.
//!
//! All helpers treat a zero `current` and a zero `maximum` the same way and
//! return `0`, so "nothing done yet" and "nothing to do" both show an empty
//! gauge. Results are truncated, never rounded, and always land in `[0, 100]`.
//!
//! ```rust
//! use progress_grid::percent::{perc_float, perc_i64, perc_int};
//!
//! assert_eq!(perc_int(1, 3), 33);
//! assert_eq!(perc_i64(3_000_000_000, 6_000_000_000), 50);
//! assert_eq!(perc_float(0.25, 1.0), 25);
//! assert_eq!(perc_int(7, 0), 0);
//! ```

/// Percentage of `current` over `maximum` for `i32` counters.
pub fn perc_int(current: i32, maximum: i32) -> u8 {
    if current == 0 || maximum == 0 {
        return 0;
    }

    clamp(i128::from(current) * 100 / i128::from(maximum))
}

/// Percentage of `current` over `maximum` for `i64` counters, such as byte
/// counts.
pub fn perc_i64(current: i64, maximum: i64) -> u8 {
    if current == 0 || maximum == 0 {
        return 0;
    }

    clamp(i128::from(current) * 100 / i128::from(maximum))
}

/// Percentage of `current` over `maximum` for floating point progress.
///
/// The scaled ratio is truncated toward zero. A `NaN` ratio yields `0`.
pub fn perc_float(current: f64, maximum: f64) -> u8 {
    if current == 0.0 || maximum == 0.0 {
        return 0;
    }

    let ratio = (current * 100.0 / maximum).trunc();
    if ratio.is_nan() {
        return 0;
    }
    ratio.clamp(0.0, 100.0) as u8
}

fn clamp(value: i128) -> u8 {
    value.clamp(0, 100) as u8
}
