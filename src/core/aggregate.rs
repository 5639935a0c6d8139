//! Numeric aggregation over committed column values.

use super::Value;

/// Arithmetic mean of `values`.
///
/// Returns `None` for an empty input instead of a NaN sentinel, leaving the
/// caller to decide how an empty aggregation surfaces.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Value>,
{
    let mut count: u64 = 0;
    let mut sum: i128 = 0;
    for value in values {
        sum += i128::from(value);
        count += 1;
    }

    if count == 0 {
        return None;
    }
    Some(sum as f64 / count as f64)
}
