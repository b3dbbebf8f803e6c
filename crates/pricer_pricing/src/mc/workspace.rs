//! Path ensemble buffers for the Monte Carlo kernel.
//!
//! This module provides [`PathEnsemble`], the per-path state the kernel
//! advances one time step at a time.
//!
//! # Memory Layout
//!
//! Three contiguous buffers of length `paths`:
//! - `prices`: current price of each trajectory
//! - `sums`: running sum of post-step prices (for the arithmetic average)
//! - `randoms`: the normal draws of the current step
//!
//! Only the current step is held, so memory is O(paths) whatever the
//! number of days.

use crate::rng::NormalSource;

/// Capacity beyond this multiple of the requested paths is released on reset.
const SHRINK_FACTOR: usize = 4;

/// Pre-allocated per-path state, reusable across kernel runs.
///
/// All allocations happen in [`reset`](Self::reset), which grows buffers
/// when needed and shrinks them once they hold more than four times the
/// requested paths, so one large run does not pin its memory for the life
/// of a long-lived worker thread.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PathEnsemble;
/// use pricer_pricing::rng::PricerRng;
///
/// let mut ensemble = PathEnsemble::new(4);
/// ensemble.reset(4, 100.0);
///
/// let mut rng = PricerRng::from_seed(1);
/// ensemble.advance(1.0, 0.0, &mut rng);
///
/// assert_eq!(ensemble.prices(), &[100.0; 4]);
/// assert_eq!(ensemble.sums(), &[100.0; 4]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathEnsemble {
    prices: Vec<f64>,
    sums: Vec<f64>,
    randoms: Vec<f64>,
    /// Logical number of paths.
    size: usize,
}

impl PathEnsemble {
    /// Creates an ensemble with room for `paths` trajectories.
    pub fn new(paths: usize) -> Self {
        Self {
            prices: Vec::with_capacity(paths),
            sums: Vec::with_capacity(paths),
            randoms: Vec::with_capacity(paths),
            size: 0,
        }
    }

    /// Starts `paths` trajectories at `spot` with zero running sums.
    pub fn reset(&mut self, paths: usize, spot: f64) {
        if self.prices.capacity() > paths.saturating_mul(SHRINK_FACTOR) {
            for buffer in [&mut self.prices, &mut self.sums, &mut self.randoms] {
                buffer.clear();
                buffer.shrink_to(paths);
            }
        }

        self.prices.clear();
        self.prices.resize(paths, spot);
        self.sums.clear();
        self.sums.resize(paths, 0.0);
        self.randoms.clear();
        self.randoms.resize(paths, 0.0);
        self.size = paths;
    }

    /// Advances every trajectory by one step.
    ///
    /// Draws one normal per path, then applies
    /// `S ← S · drift_factor · exp(diffusion · z)` and adds the new price to
    /// the path's running sum.
    #[inline]
    pub fn advance<R: NormalSource>(&mut self, drift_factor: f64, diffusion: f64, source: &mut R) {
        source.fill_standard_normal(&mut self.randoms);

        for ((price, sum), &z) in self
            .prices
            .iter_mut()
            .zip(self.sums.iter_mut())
            .zip(self.randoms.iter())
        {
            *price *= drift_factor * (diffusion * z).exp();
            *sum += *price;
        }
    }

    /// Current prices (terminal prices once all steps have run).
    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices[..self.size]
    }

    /// Running sums of post-step prices.
    #[inline]
    pub fn sums(&self) -> &[f64] {
        &self.sums[..self.size]
    }

    /// Number of trajectories.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` before the first [`reset`](Self::reset).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Allocated capacity in paths.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.prices.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws, one step at a time.
    struct Scripted(Vec<f64>);

    impl NormalSource for Scripted {
        fn fill_standard_normal(&mut self, buffer: &mut [f64]) {
            let n = buffer.len();
            buffer.copy_from_slice(&self.0[..n]);
            self.0.drain(..n);
        }
    }

    #[test]
    fn test_reset_initialises_state() {
        let mut ensemble = PathEnsemble::new(2);
        ensemble.reset(3, 50.0);
        assert_eq!(ensemble.len(), 3);
        assert_eq!(ensemble.prices(), &[50.0, 50.0, 50.0]);
        assert_eq!(ensemble.sums(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_advance_applies_growth_per_path() {
        let mut ensemble = PathEnsemble::new(2);
        ensemble.reset(2, 100.0);

        let mut source = Scripted(vec![1.0, -1.0, 0.0, 2.0]);
        ensemble.advance(1.01, 0.1, &mut source);

        let p0 = 100.0 * (1.01 * (0.1_f64).exp());
        let p1 = 100.0 * (1.01 * (-0.1_f64).exp());
        assert_eq!(ensemble.prices(), &[p0, p1]);
        assert_eq!(ensemble.sums(), &[p0, p1]);

        ensemble.advance(1.01, 0.1, &mut source);
        let q0 = p0 * 1.01;
        let q1 = p1 * (1.01 * (0.2_f64).exp());
        assert_eq!(ensemble.prices(), &[q0, q1]);
        assert_eq!(ensemble.sums(), &[p0 + q0, p1 + q1]);
    }

    #[test]
    fn test_reset_reuses_allocation() {
        let mut ensemble = PathEnsemble::new(1000);
        ensemble.reset(1000, 1.0);
        let capacity = ensemble.capacity();
        ensemble.reset(400, 1.0);
        assert_eq!(ensemble.len(), 400);
        assert_eq!(ensemble.capacity(), capacity);
    }

    #[test]
    fn test_reset_releases_oversized_buffers() {
        let mut ensemble = PathEnsemble::new(0);
        ensemble.reset(100_000, 1.0);
        assert!(ensemble.capacity() >= 100_000);

        ensemble.reset(10, 2.0);
        assert!(ensemble.capacity() < 100_000);
        assert!(ensemble.capacity() >= 10);
        assert_eq!(ensemble.prices(), &[2.0; 10]);
        assert_eq!(ensemble.sums(), &[0.0; 10]);
    }
}
