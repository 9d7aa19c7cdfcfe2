//! # seedpick
//!
//! Deterministic weighted sampling **with replacement**, seeded from a
//! transaction hash and a timestamp instead of a stateful RNG.
//!
//! Every draw hashes `(transaction_hash, timestamp + draw_index)` with
//! Keccak-256, reduces the digest modulo either the population size
//! (uniform) or the total weight mass (weighted), and, for weighted draws,
//! bisects a cumulative distribution to find the bucket. The same inputs
//! always produce the same picks, so a draw made on-chain can be replayed
//! and audited off-chain.
//!
//! There are three ways in:
//!
//! 1. **One-shot** with [`choose`] / [`choose_owned`], taking either
//!    per-item weights or pre-accumulated cumulative weights.
//! 2. **Reusable tables** with [`DrawTable::from_pairs`].
//! 3. **Compile-time enums** with the [`WeightedEnum`] derive macro (from the
//!    companion `seedpick_macros` crate).
//!
//! ## Quick start
//!
//! ```rust
//! use alloy_primitives::U256;
//! use seedpick::{DrawTable, FixedEntropy};
//!
//! # fn main() -> Result<(), seedpick::SampleError> {
//! let table = DrawTable::from_pairs([
//!     ("common", 60u64),
//!     ("uncommon", 30),
//!     ("rare", 9),
//!     ("legendary", 1),
//! ])?;
//!
//! let entropy = FixedEntropy::new(U256::from(0xfeedu64), U256::from(1_700_000_000u64));
//! let tiers = table.draw(3, &entropy)?; // Vec<&&str>
//! assert_eq!(tiers.len(), 3);
//! # Ok(()) }
//! ```
//!
//! ## Enum + macro
//!
//! ```rust,ignore
//! use seedpick::WeightedEnum;
//!
//! #[derive(Copy, Clone, Debug, WeightedEnum)]
//! enum Loot {
//!     #[weight(60)] Common,
//!     #[weight(30)] Uncommon,
//!     #[weight(9)]  Rare,
//!     #[weight(1)]  Legendary,
//! }
//!
//! let table = Loot::draw_table()?;
//! ```
//!
//! ## Performance
//! * **Build**: O(n) prefix sums.
//! * **Sample**: one Keccak-256 per draw plus O(log n) bisection.
//!
//! ## Gotchas
//! * Weights are unsigned integers (`U256`); their sum must be non-zero and
//!   fit in 256 bits.
//! * Modulo reduction keeps a tiny bias toward low values. This is not a
//!   source of cryptographic randomness: anyone who knows the inputs knows
//!   the picks.
//!
//! ## Auditing a draw
//! [`derive_seed`] and [`bounded_random`] are exported so a recorded draw can
//! be recomputed step by step: draw `i` of a call reduces
//! `derive_seed(timestamp + i, transaction_hash)` and, when weighted,
//! resolves it with [`bisect_right`] over the cumulative weights.

mod bisect;
mod choose;
mod cumulative;
mod entropy;
mod error;
mod sampler;

use alloy_primitives::{U256, ruint::UintTryFrom};
use tracing::debug;

/// A minimal interface for “index samplers”.
/// Implemented by `CumulativeSampler` (weighted) and `UniformSampler` (equal odds).
///
/// A sampler is a pure function of `(salt, transaction_hash)`.
#[allow(clippy::len_without_is_empty)]
pub trait IndexSampler {
    fn len(&self) -> usize;
    fn sample_index(&self, salt: U256, transaction_hash: U256) -> Result<usize, SampleError>;
}

pub use bisect::bisect_right;
pub use choose::{choose, choose_indices, choose_owned};
pub use cumulative::cumulative_sum;
pub use entropy::{EntropySource, FixedEntropy, bounded_random, derive_seed};
pub use error::SampleError;
pub use sampler::{CumulativeSampler, UniformSampler};

/// Derive macro imported from `seedpick_macros`.
/// See the crate-level example for usage.
pub use seedpick_macros::WeightedEnum;

/// Items paired with a cumulative weight distribution, ready to draw from
/// many times.
///
/// A table built from `(item, weight)` pairs draws exactly what [`choose`]
/// draws for the same items, weights and entropy.
#[derive(Debug, Clone)]
pub struct DrawTable<T> {
    sampler: CumulativeSampler,
    items: Vec<T>,
}

/// Trait implemented by the `WeightedEnum` derive macro.
///
/// Each variant and its integer weight is exposed via
/// [`WeightedEnum::ENTRIES`], which enables building a ready-to-draw
/// [`DrawTable`].
///
/// Weights are `u64` constants, so an expression that goes negative is
/// rejected at compile time rather than wrapping:
///
/// ```compile_fail
/// use seedpick::WeightedEnum;
///
/// #[derive(Copy, Clone, WeightedEnum)]
/// enum Broken {
///     #[weight(1 - 2)]
///     Wrapped,
///     #[weight(1)]
///     One,
/// }
/// ```
///
/// A float constant is a type error for the same reason:
///
/// ```compile_fail
/// use seedpick::WeightedEnum;
///
/// const HALF: f64 = 0.5;
///
/// #[derive(Copy, Clone, WeightedEnum)]
/// enum Broken {
///     #[weight(HALF)]
///     Half,
/// }
/// ```
pub trait WeightedEnum: Sized + 'static {
    /// All `(variant, weight)` pairs for the enum.
    const ENTRIES: &'static [(Self, u64)];

    /// Convenience constructor that builds a [`DrawTable`] from the enum entries.
    ///
    /// # Errors
    /// See [`DrawTable::from_pairs`]: no variants or all-zero weights will error.
    fn draw_table() -> Result<DrawTable<Self>, SampleError>
    where
        Self: Copy,
    {
        DrawTable::from_pairs(Self::ENTRIES.iter().copied())
    }
}

impl<T> DrawTable<T> {
    /// Build from any `(item, weight)` iterator.
    ///
    /// # Errors
    /// * [`SampleError::EmptyPopulation`] if there are no items.
    /// * [`SampleError::ZeroWeightSum`] if every weight is zero.
    /// * [`SampleError::ArithmeticOverflow`] if the weights sum past `U256::MAX`.
    ///
    /// # Panics
    /// If a signed weight is negative.
    pub fn from_pairs<I, W>(pairs: I) -> Result<Self, SampleError>
    where
        I: IntoIterator<Item = (T, W)>,
        U256: UintTryFrom<W>,
    {
        let (items, weights): (Vec<T>, Vec<U256>) =
            pairs.into_iter().map(|(t, w)| (t, U256::from(w))).unzip();
        let sampler = CumulativeSampler::from_weights(&weights)?;
        debug!(n = items.len(), total = %sampler.total(), "built draw table");
        Ok(Self { sampler, items })
    }

    /// Draw `k` items **by reference** (no `Clone` bound).
    ///
    /// The salt schedule matches [`choose`]: draw `i` is salted with
    /// `entropy.timestamp() + i`.
    ///
    /// # Errors
    /// [`SampleError::ArithmeticOverflow`] if the salt schedule overflows.
    pub fn draw<'a, E>(&'a self, k: usize, entropy: &E) -> Result<Vec<&'a T>, SampleError>
    where
        E: EntropySource + ?Sized,
    {
        let indices =
            choose::draw_indices(&self.sampler, k, entropy.transaction_hash(), entropy.timestamp())?;
        Ok(indices.into_iter().map(|i| &self.items[i]).collect())
    }

    /// Draw `k` items **by value** (clones each chosen element).
    ///
    /// Prefer [`draw`](Self::draw) if you don’t need ownership.
    pub fn draw_owned<E>(&self, k: usize, entropy: &E) -> Result<Vec<T>, SampleError>
    where
        T: Clone,
        E: EntropySource + ?Sized,
    {
        self.draw(k, entropy)
            .map(|picks| picks.into_iter().cloned().collect())
    }

    /// Total weight mass.
    pub fn total(&self) -> U256 {
        self.sampler.total()
    }

    /// Number of items in the table.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for a constructed table; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entropy() -> FixedEntropy {
        FixedEntropy::new(U256::from(31337u64), U256::from(1_650_000_000u64))
    }

    #[test]
    fn smoke_pairs() {
        let dt = DrawTable::from_pairs([("a", 1u64), ("b", 3)]).unwrap();
        assert_eq!(dt.len(), 2);
        assert_eq!(dt.total(), U256::from(4u64));
        assert_eq!(dt.draw(5, &entropy()).unwrap().len(), 5);
    }

    #[test]
    fn accepts_plain_integer_weights() {
        let from_u64 = DrawTable::from_pairs([("a", 2u64), ("b", 5u64)]).unwrap();
        let from_u32 = DrawTable::from_pairs([("a", 2u32), ("b", 5u32)]).unwrap();
        let from_u256 =
            DrawTable::from_pairs([("a", U256::from(2u64)), ("b", U256::from(5u64))]).unwrap();
        assert_eq!(from_u64.total(), U256::from(7u64));
        assert_eq!(
            from_u64.draw(16, &entropy()).unwrap(),
            from_u32.draw(16, &entropy()).unwrap()
        );
        assert_eq!(
            from_u64.draw(16, &entropy()).unwrap(),
            from_u256.draw(16, &entropy()).unwrap()
        );
    }

    #[test]
    fn rejects_bad_tables() {
        let empty: [(&str, u64); 0] = [];
        assert!(matches!(
            DrawTable::from_pairs(empty),
            Err(SampleError::EmptyPopulation)
        ));
        assert!(matches!(
            DrawTable::from_pairs([("a", 0u64), ("b", 0)]),
            Err(SampleError::ZeroWeightSum)
        ));
        assert!(matches!(
            DrawTable::from_pairs([("a", U256::MAX), ("b", U256::from(1u64))]),
            Err(SampleError::ArithmeticOverflow)
        ));
    }

    #[test]
    fn table_matches_choose() {
        let items = ["w", "x", "y", "z"];
        let weights = [5u64, 0, 2, 9];
        let dt = DrawTable::from_pairs(items.iter().copied().zip(weights)).unwrap();
        let w: Vec<U256> = weights.iter().copied().map(U256::from).collect();
        assert_eq!(
            dt.draw_owned(40, &entropy()).unwrap(),
            choose_owned(&items, &w, &[], 40, &entropy()).unwrap()
        );
    }
}
