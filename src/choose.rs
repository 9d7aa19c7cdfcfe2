//! `k` draws with replacement, uniform or weighted.
//!
//! Each call fixes a transaction hash and a salt base; draw `i` uses salt
//! `salt_base + i`, so a call is fully reproducible from its inputs while
//! every draw within it hashes a distinct preimage.

use alloy_primitives::U256;
use tracing::{debug, trace};

use crate::{
    IndexSampler,
    cumulative::cumulative_sum,
    entropy::EntropySource,
    error::SampleError,
    sampler::{CumulativeSampler, UniformSampler},
};

enum Mode {
    Uniform(UniformSampler),
    Weighted(CumulativeSampler),
}

impl Mode {
    /// Validation order matters: the first failing check wins.
    fn resolve(n: usize, weights: &[U256], cumulative: &[U256]) -> Result<Self, SampleError> {
        if !weights.is_empty() && !cumulative.is_empty() {
            return Err(SampleError::ConflictingWeightSpecification);
        }
        let cumulative = if cumulative.is_empty() {
            cumulative_sum(weights)?
        } else {
            cumulative.to_vec()
        };
        if cumulative.is_empty() {
            return Ok(Mode::Uniform(UniformSampler::new(n)));
        }
        if cumulative.len() != n {
            return Err(SampleError::WeightLengthMismatch {
                expected: n,
                found: cumulative.len(),
            });
        }
        CumulativeSampler::new(cumulative).map(Mode::Weighted)
    }
}

/// Run `k` draws against `sampler`, salting draw `i` with `salt_base + i`.
pub(crate) fn draw_indices<S: IndexSampler + ?Sized>(
    sampler: &S,
    k: usize,
    transaction_hash: U256,
    salt_base: U256,
) -> Result<Vec<usize>, SampleError> {
    (0..k)
        .map(|draw| {
            let salt = salt_base
                .checked_add(U256::from(draw))
                .ok_or(SampleError::ArithmeticOverflow)?;
            let index = sampler.sample_index(salt, transaction_hash)?;
            trace!(draw, %salt, index, "drew index");
            Ok(index)
        })
        .collect()
}

/// Draw `k` population indices.
///
/// Supply at most one of `weights` and `cumulative_weights`; with both
/// empty every index is equally likely. `k == 0` returns an empty vector
/// once the inputs have been validated.
///
/// # Errors
/// Checked in this order:
/// 1. [`SampleError::ConflictingWeightSpecification`] if both weight forms are non-empty.
/// 2. [`SampleError::ArithmeticOverflow`] if summing `weights` overflows.
/// 3. [`SampleError::WeightLengthMismatch`] if the weights do not cover `n` items.
/// 4. [`SampleError::ZeroWeightSum`] if the total mass is zero.
/// 5. [`SampleError::NonMonotonicCumulativeWeights`] if supplied cumulative weights decrease.
///
/// During drawing, [`SampleError::DivisionByZero`] for a uniform draw over
/// `n == 0`, and [`SampleError::ArithmeticOverflow`] if `salt_base + draw` overflows.
pub fn choose_indices(
    n: usize,
    weights: &[U256],
    cumulative_weights: &[U256],
    k: usize,
    transaction_hash: U256,
    salt_base: U256,
) -> Result<Vec<usize>, SampleError> {
    let mode = Mode::resolve(n, weights, cumulative_weights)
        .inspect_err(|e| debug!(n, k, error = %e, "rejected sample request"))?;
    match &mode {
        Mode::Uniform(sampler) => {
            debug!(n, k, "uniform sample");
            draw_indices(sampler, k, transaction_hash, salt_base)
        }
        Mode::Weighted(sampler) => {
            debug!(n, k, total = %sampler.total(), "weighted sample");
            draw_indices(sampler, k, transaction_hash, salt_base)
        }
    }
}

/// Draw `k` items from `population` **by reference**.
///
/// Reads the transaction hash and the timestamp from `entropy` once; the
/// timestamp becomes the salt base. See [`choose_indices`] for errors.
///
/// # Examples
/// ```
/// use alloy_primitives::U256;
/// use seedpick::{FixedEntropy, choose};
///
/// let entropy = FixedEntropy::new(U256::from(0xabcdu64), U256::from(1_700_000_000u64));
/// let weights = [U256::from(1u64), U256::from(3u64)];
/// let picks = choose(&["a", "b"], &weights, &[], 4, &entropy).unwrap();
/// assert_eq!(picks.len(), 4);
/// ```
pub fn choose<'a, T, E>(
    population: &'a [T],
    weights: &[U256],
    cumulative_weights: &[U256],
    k: usize,
    entropy: &E,
) -> Result<Vec<&'a T>, SampleError>
where
    E: EntropySource + ?Sized,
{
    let indices = choose_indices(
        population.len(),
        weights,
        cumulative_weights,
        k,
        entropy.transaction_hash(),
        entropy.timestamp(),
    )?;
    Ok(indices.into_iter().map(|i| &population[i]).collect())
}

/// Draw `k` items **by value** (clones each chosen element).
///
/// Prefer [`choose`] if you don’t need ownership.
pub fn choose_owned<T, E>(
    population: &[T],
    weights: &[U256],
    cumulative_weights: &[U256],
    k: usize,
    entropy: &E,
) -> Result<Vec<T>, SampleError>
where
    T: Clone,
    E: EntropySource + ?Sized,
{
    choose(population, weights, cumulative_weights, k, entropy)
        .map(|picks| picks.into_iter().cloned().collect())
}
