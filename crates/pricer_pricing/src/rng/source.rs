//! Random source interface consumed by the pricing kernel.

/// A source of independent standard normal variates.
///
/// The kernel is generic over this trait (static dispatch), so tests can
/// inject a scripted sequence and production code a seeded [`PricerRng`].
///
/// [`PricerRng`]: super::PricerRng
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::NormalSource;
///
/// /// Emits the same value forever.
/// struct Constant(f64);
///
/// impl NormalSource for Constant {
///     fn fill_standard_normal(&mut self, buffer: &mut [f64]) {
///         buffer.fill(self.0);
///     }
/// }
///
/// let draws = Constant(0.5).draw_standard_normal(3);
/// assert_eq!(draws, vec![0.5, 0.5, 0.5]);
/// ```
pub trait NormalSource {
    /// Overwrites every element of `buffer` with a fresh N(0, 1) draw.
    fn fill_standard_normal(&mut self, buffer: &mut [f64]);

    /// Returns `count` fresh N(0, 1) draws.
    fn draw_standard_normal(&mut self, count: usize) -> Vec<f64> {
        let mut draws = vec![0.0; count];
        self.fill_standard_normal(&mut draws);
        draws
    }
}

impl<S: NormalSource + ?Sized> NormalSource for &mut S {
    #[inline]
    fn fill_standard_normal(&mut self, buffer: &mut [f64]) {
        (**self).fill_standard_normal(buffer);
    }
}
