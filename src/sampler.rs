use alloy_primitives::U256;

use crate::{
    IndexSampler,
    bisect::bisect_right,
    cumulative::{cumulative_sum, first_decrease},
    entropy::bounded_random,
    error::SampleError,
};

/// Uniform index sampler: maps a seed into `0..n` by modulo reduction.
///
/// Sampling from `n == 0` fails with [`SampleError::DivisionByZero`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformSampler {
    n: usize,
}

impl UniformSampler {
    pub const fn new(n: usize) -> Self {
        Self { n }
    }
}

impl IndexSampler for UniformSampler {
    #[inline]
    fn len(&self) -> usize {
        self.n
    }

    fn sample_index(&self, salt: U256, transaction_hash: U256) -> Result<usize, SampleError> {
        let r = bounded_random(salt, transaction_hash, U256::from(self.n))?;
        usize::try_from(r).map_err(|_| SampleError::ArithmeticOverflow)
    }
}

/// Inverse-CDF sampler over a validated cumulative distribution.
///
/// A draw reduces the seed into `0..total` and bisects for the first
/// bucket whose running total exceeds it. Zero-weight entries own an empty
/// bucket and are never returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeSampler {
    cumulative: Vec<U256>,
}

impl CumulativeSampler {
    /// Wrap a caller-supplied cumulative distribution.
    ///
    /// # Errors
    /// * [`SampleError::EmptyPopulation`] if `cumulative` is empty.
    /// * [`SampleError::ZeroWeightSum`] if the last entry is zero.
    /// * [`SampleError::NonMonotonicCumulativeWeights`] if it ever decreases.
    pub fn new(cumulative: Vec<U256>) -> Result<Self, SampleError> {
        let Some(&total) = cumulative.last() else {
            return Err(SampleError::EmptyPopulation);
        };
        if total.is_zero() {
            return Err(SampleError::ZeroWeightSum);
        }
        if let Some(index) = first_decrease(&cumulative) {
            return Err(SampleError::NonMonotonicCumulativeWeights { index });
        }
        Ok(Self { cumulative })
    }

    /// Build from per-item weights.
    ///
    /// # Errors
    /// As [`CumulativeSampler::new`], plus [`SampleError::ArithmeticOverflow`]
    /// if the weights do not fit in 256 bits.
    pub fn from_weights(weights: &[U256]) -> Result<Self, SampleError> {
        Self::new(cumulative_sum(weights)?)
    }

    /// Total weight mass.
    pub fn total(&self) -> U256 {
        // non-empty by construction
        self.cumulative.last().copied().unwrap_or_default()
    }

    pub fn cumulative(&self) -> &[U256] {
        &self.cumulative
    }
}

impl IndexSampler for CumulativeSampler {
    #[inline]
    fn len(&self) -> usize {
        self.cumulative.len()
    }

    fn sample_index(&self, salt: U256, transaction_hash: U256) -> Result<usize, SampleError> {
        let target = bounded_random(salt, transaction_hash, self.total())?;
        let last = self.cumulative.len() - 1;
        let index = bisect_right(&self.cumulative, &target, 0, Some(last));
        debug_assert!(index <= last);
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(values: &[u64]) -> Vec<U256> {
        values.iter().copied().map(U256::from).collect()
    }

    #[test]
    fn rejects_bad_distributions() {
        assert_eq!(CumulativeSampler::new(vec![]), Err(SampleError::EmptyPopulation));
        assert_eq!(
            CumulativeSampler::new(w(&[0, 0])),
            Err(SampleError::ZeroWeightSum)
        );
        assert_eq!(
            CumulativeSampler::new(w(&[3, 1, 4])),
            Err(SampleError::NonMonotonicCumulativeWeights { index: 1 })
        );
        assert_eq!(
            CumulativeSampler::from_weights(&[U256::MAX, U256::from(1u64)]),
            Err(SampleError::ArithmeticOverflow)
        );
    }

    #[test]
    fn zero_weight_items_are_never_drawn() {
        let s = CumulativeSampler::from_weights(&w(&[0, 5, 0, 3, 0])).unwrap();
        assert_eq!(s.total(), U256::from(8u64));
        let hash = U256::from(99u64);
        for salt in 0u64..2_000 {
            let i = s.sample_index(U256::from(salt), hash).unwrap();
            assert!(i == 1 || i == 3, "salt={salt} i={i}");
        }
    }

    #[test]
    fn degenerate_singleton() {
        let s = CumulativeSampler::from_weights(&w(&[5])).unwrap();
        for salt in 0u64..1_000 {
            assert_eq!(s.sample_index(U256::from(salt), U256::ZERO), Ok(0));
        }
    }

    #[test]
    fn uniform_stays_in_range() {
        let s = UniformSampler::new(3);
        assert_eq!(s.len(), 3);
        for salt in 0u64..1_000 {
            assert!(s.sample_index(U256::from(salt), U256::from(1u64)).unwrap() < 3);
        }
    }

    #[test]
    fn uniform_over_nothing_divides_by_zero() {
        assert_eq!(
            UniformSampler::new(0).sample_index(U256::ZERO, U256::ZERO),
            Err(SampleError::DivisionByZero)
        );
    }
}
