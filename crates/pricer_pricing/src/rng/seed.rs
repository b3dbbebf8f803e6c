//! Per-task seed derivation.
//!
//! Every unit of work in a grid evaluation gets its own generator. Seeds are
//! derived from one base seed and the task's submission index through the
//! SplitMix64 finaliser, so neighbouring indices map to unrelated streams
//! and a given `(base_seed, index)` pair always reproduces the same stream
//! whichever worker runs it.

/// SplitMix64 golden-ratio increment.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(GOLDEN_GAMMA);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Derives the seed of task `task_index` from `base_seed`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::derive_task_seed;
///
/// assert_eq!(derive_task_seed(42, 3), derive_task_seed(42, 3));
/// assert_ne!(derive_task_seed(42, 3), derive_task_seed(42, 4));
/// ```
#[inline]
pub fn derive_task_seed(base_seed: u64, task_index: usize) -> u64 {
    splitmix64(base_seed ^ splitmix64((task_index as u64).wrapping_mul(GOLDEN_GAMMA)))
}
