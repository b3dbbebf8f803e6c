//! Seeded pseudo-random number generator for Monte Carlo simulations.
//!
//! This module provides [`PricerRng`], a seeded PRNG wrapper that offers
//! reproducible random number generation with efficient batch operations.

use super::source::NormalSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Monte Carlo simulation random number generator.
///
/// Provides seeded, reproducible random number generation with efficient
/// batch operations for uniform and normal distributions. Each grid cell
/// owns one instance, so there is no shared generator state between
/// workers.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
///
/// // Single value generation
/// let u: f64 = rng.gen_uniform();
/// let n: f64 = rng.gen_normal();
///
/// // Batch generation (zero allocation)
/// let mut buffer = vec![0.0; 100];
/// rng.fill_uniform(&mut buffer);
/// rng.fill_normal(&mut buffer);
/// ```
#[derive(Clone, Debug)]
pub struct PricerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl PricerRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of random numbers.
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let mut rng1 = PricerRng::from_seed(12345);
    /// let mut rng2 = PricerRng::from_seed(12345);
    /// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniform random value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// Uses the ZIGNOR Ziggurat algorithm via `rand_distr::StandardNormal`.
    ///
    /// # Algorithm Reference
    ///
    /// - Marsaglia, G. & Tsang, W. W. (2000). "The Ziggurat Method for
    ///   Generating Random Variables". Journal of Statistical Software.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with uniform random values in [0, 1).
    ///
    /// Empty buffers are handled gracefully (no operation).
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.inner.gen();
        }
    }

    /// Fills the buffer with standard normal (mean=0, std=1) variates.
    ///
    /// This is a zero-allocation operation; the buffer must be pre-allocated
    /// by the caller.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

impl NormalSource for PricerRng {
    #[inline]
    fn fill_standard_normal(&mut self, buffer: &mut [f64]) {
        self.fill_normal(buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PricerRng::from_seed(7);
        let mut b = PricerRng::from_seed(7);
        let mut buf_a = vec![0.0; 64];
        let mut buf_b = vec![0.0; 64];
        a.fill_normal(&mut buf_a);
        b.fill_normal(&mut buf_b);
        assert_eq!(buf_a, buf_b);
    }

    #[test]
    fn test_different_seed_different_sequence() {
        let mut a = PricerRng::from_seed(1);
        let mut b = PricerRng::from_seed(2);
        assert_ne!(a.gen_normal(), b.gen_normal());
    }

    #[test]
    fn test_uniform_range() {
        let mut rng = PricerRng::from_seed(42);
        let mut buffer = vec![0.0; 1000];
        rng.fill_uniform(&mut buffer);
        assert!(buffer.iter().all(|&u| (0.0..1.0).contains(&u)));
    }

    #[test]
    fn test_normal_moments() {
        let mut rng = PricerRng::from_seed(42);
        let samples = rng.draw_standard_normal(200_000);
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        assert!(mean.abs() < 0.01, "mean = {}", mean);
        assert!((var - 1.0).abs() < 0.02, "variance = {}", var);
    }

    #[test]
    fn test_seed_accessor() {
        assert_eq!(PricerRng::from_seed(99).seed(), 99);
    }

    #[test]
    fn test_empty_buffer() {
        let mut rng = PricerRng::from_seed(0);
        let mut buffer: Vec<f64> = Vec::new();
        rng.fill_normal(&mut buffer);
        assert!(buffer.is_empty());
    }
}
