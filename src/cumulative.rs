//! Prefix sums over integer weights.

use alloy_primitives::U256;

use crate::error::SampleError;

/// Running totals of `weights`: `out[i] == weights[0] + ... + weights[i]`.
///
/// The last entry is the total mass. Empty input gives empty output.
///
/// # Errors
/// [`SampleError::ArithmeticOverflow`] if a partial sum exceeds `U256::MAX`.
pub fn cumulative_sum(weights: &[U256]) -> Result<Vec<U256>, SampleError> {
    weights
        .iter()
        .scan(Some(U256::ZERO), |acc, &w| {
            *acc = acc.and_then(|total| total.checked_add(w));
            Some(acc.ok_or(SampleError::ArithmeticOverflow))
        })
        .collect()
}

/// Index of the first entry smaller than its predecessor, if any.
pub(crate) fn first_decrease(cumulative: &[U256]) -> Option<usize> {
    cumulative
        .windows(2)
        .position(|pair| pair[1] < pair[0])
        .map(|i| i + 1)
}
