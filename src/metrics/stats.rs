//! Ratio and averaging primitives with defined results for empty or zero input.

/// Rounds to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Relative change from `previous` to `current`, in percent rounded to one decimal.
///
/// A zero baseline never divides: growth from zero reports 100, a drop from
/// zero reports -100 and no movement reports 0.
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous.abs() < f64::EPSILON {
        return if current > 0.0 {
            100.0
        } else if current < 0.0 {
            -100.0
        } else {
            0.0
        };
    }
    round_to((current - previous) / previous * 100.0, 1)
}

/// Arithmetic mean; 0 for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().fold(0.0, |total, value| total + value) / values.len() as f64
}

/// `part / whole` as a whole-number percentage; 0 when `whole` is 0.
pub fn completion_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part.min(whole) as f64 / whole as f64 * 100.0).round() as u32
}
