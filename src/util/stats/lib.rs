/* ************************************************************************ **
** This file is part of cmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Summary statistics over `&[f64]`.
//!
//! None of these functions reorder or otherwise modify their input.
//! Anything that is undefined for an empty slice returns `None`.

#[cfg(test)]
#[macro_use] extern crate cmat_assert_close;

use ::itertools::{Itertools, MinMaxResult};
use ::ordered_float::OrderedFloat;

pub fn sum(values: &[f64]) -> f64
{ values.iter().sum() }

pub fn mean(values: &[f64]) -> Option<f64> {
    match values.len() {
        0 => None,
        n => Some(sum(values) / n as f64),
    }
}

/// The middle value, or the mean of the two middle values.
///
/// Ordering follows `OrderedFloat`, which places NaN above everything else.
pub fn median(values: &[f64]) -> Option<f64> {
    let sorted = values.iter().cloned().map(OrderedFloat).sorted().collect::<Vec<_>>();
    let n = sorted.len();
    match n {
        0 => None,
        _ if n % 2 == 0 => Some((sorted[n / 2 - 1].0 + sorted[n / 2].0) / 2.0),
        _ => Some(sorted[n / 2].0),
    }
}

pub fn min(values: &[f64]) -> Option<f64>
{ min_max(values).map(|(lo, _)| lo) }

pub fn max(values: &[f64]) -> Option<f64>
{ min_max(values).map(|(_, hi)| hi) }

/// Both extremes in a single pass.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    match values.iter().cloned().map(OrderedFloat).minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(x) => Some((x.0, x.0)),
        MinMaxResult::MinMax(lo, hi) => Some((lo.0, hi.0)),
    }
}

/// Sample standard deviation (`n - 1` in the denominator).
pub fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let sq_diffs: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
    Some((sq_diffs / (values.len() - 1) as f64).sqrt())
}

/// Everything at once, for logging.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Summary {
    pub len: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// `None` for fewer than two values.
    pub std_dev: Option<f64>,
}

impl Summary {
    pub fn of(values: &[f64]) -> Option<Summary> {
        let (min, max) = min_max(values)?;
        Some(Summary {
            len: values.len(),
            sum: sum(values),
            mean: mean(values)?,
            median: median(values)?,
            min, max,
            std_dev: std_dev(values),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(mean(&[]), None);
        assert_eq!(median(&[]), None);
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
        assert_eq!(std_dev(&[]), None);
        assert_eq!(Summary::of(&[]), None);
    }

    #[test]
    fn single() {
        assert_eq!(median(&[4.0]), Some(4.0));
        assert_eq!(min_max(&[4.0]), Some((4.0, 4.0)));
        assert_eq!(std_dev(&[4.0]), None);
    }

    #[test]
    fn median_does_not_reorder() {
        let values = vec![3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(median(&values), Some(3.0));
        assert_eq!(values, vec![3.0, 1.0, 4.0, 1.0, 5.0]);

        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn spread() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(min_max(&values), Some((2.0, 9.0)));
        assert_close!(mean(&values).unwrap(), 5.0);
        // population sd is 2; sample sd is sqrt(32 / 7)
        assert_close!(std_dev(&values).unwrap(), (32.0f64 / 7.0).sqrt());

        let summary = Summary::of(&values).unwrap();
        assert_eq!(summary.len, 8);
        assert_eq!(summary.median, 4.5);
        assert_close!(summary.sum, 40.0);
    }
}
