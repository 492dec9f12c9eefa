//! Rounding and ratio helpers shared by the transforms
//!
//! Rounding is half-up (`floor(x + 0.5)`), so `-2.5` rounds to `-2` rather
//! than away from zero as `f64::round` would.

/// Round half-up to the nearest integer
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round half-up to a fixed number of decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    round_half_up(value * scale) / scale
}

/// Round half-up and convert to an integer
pub fn round_i64(value: f64) -> i64 {
    round_half_up(value) as i64
}

/// `part / total` or zero when the total is zero
pub fn ratio(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total
    }
}

/// Whole-number share of `total`, zero for an empty total
pub fn percentage(count: usize, total: usize) -> i64 {
    round_i64(ratio(count as f64, total as f64) * 100.0)
}

/// Mean of `values` over an explicit divisor, zero when the divisor is zero
pub fn mean_over<I>(values: I, divisor: usize) -> f64
where
    I: IntoIterator<Item = f64>,
{
    ratio(values.into_iter().sum(), divisor as f64)
}

/// Mean of `values`, zero for an empty iterator
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    ratio(sum, count as f64)
}
