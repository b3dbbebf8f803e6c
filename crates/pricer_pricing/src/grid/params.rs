//! The (strike, volatility) parameter grid.

use super::error::GridError;
use pricer_core::types::SimulationParams;

/// Returns `n` evenly spaced points from `start` to `stop`, both included.
///
/// `n == 1` yields `[start]`; `n == 0` yields an empty vector.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::grid::linspace;
///
/// assert_eq!(linspace(90.0, 110.0, 5), vec![90.0, 95.0, 100.0, 105.0, 110.0]);
/// assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|k| if k == n - 1 { stop } else { start + step * k as f64 })
                .collect()
        }
    }
}

/// Strikes × volatilities with the parameters shared by every cell.
///
/// Cell `(i, j)` prices `strikes[i]` at volatility `sigmas[j]` and is
/// submitted with index `i * sigmas.len() + j`.
///
/// Shared parameters default to S = 100, r = 0.05, 260 days and 10,000
/// paths, and are not validated here; an invalid value surfaces as a
/// per-cell failure when the grid is evaluated.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::grid::ParameterGrid;
///
/// let grid = ParameterGrid::new(vec![90.0, 100.0, 110.0], vec![0.1, 0.3])
///     .unwrap()
///     .with_paths(1_000);
///
/// assert_eq!(grid.shape(), (3, 2));
/// assert_eq!(grid.index_of(2, 1), 5);
/// assert_eq!(grid.coordinates(3), (1, 1));
///
/// let params = grid.cell_params(2, 0);
/// assert_eq!((params.strike, params.volatility), (110.0, 0.1));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParameterGrid {
    strikes: Vec<f64>,
    sigmas: Vec<f64>,
    spot: f64,
    rate: f64,
    days: usize,
    paths: usize,
}

impl ParameterGrid {
    /// Creates a grid over the given axes with default shared parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyAxis`] if either axis is empty.
    pub fn new(strikes: Vec<f64>, sigmas: Vec<f64>) -> Result<Self, GridError> {
        if strikes.is_empty() {
            return Err(GridError::EmptyAxis { axis: "strike" });
        }
        if sigmas.is_empty() {
            return Err(GridError::EmptyAxis { axis: "sigma" });
        }
        let defaults = SimulationParams::default();
        Ok(Self {
            strikes,
            sigmas,
            spot: defaults.spot,
            rate: defaults.rate,
            days: defaults.days,
            paths: defaults.paths,
        })
    }

    /// Takes spot, rate, days and paths from `base`.
    pub fn with_base(self, base: &SimulationParams) -> Self {
        Self {
            spot: base.spot,
            rate: base.rate,
            days: base.days,
            paths: base.paths,
            ..self
        }
    }

    /// Sets the initial price.
    pub fn with_spot(mut self, spot: f64) -> Self {
        self.spot = spot;
        self
    }

    /// Sets the risk-free rate.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the number of time steps.
    pub fn with_days(mut self, days: usize) -> Self {
        self.days = days;
        self
    }

    /// Sets the number of paths per cell.
    pub fn with_paths(mut self, paths: usize) -> Self {
        self.paths = paths;
        self
    }

    /// Strike axis.
    #[inline]
    pub fn strikes(&self) -> &[f64] {
        &self.strikes
    }

    /// Volatility axis.
    #[inline]
    pub fn sigmas(&self) -> &[f64] {
        &self.sigmas
    }

    /// Shared initial price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Shared risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Shared number of steps.
    #[inline]
    pub fn days(&self) -> usize {
        self.days
    }

    /// Shared number of paths.
    #[inline]
    pub fn paths(&self) -> usize {
        self.paths
    }

    /// `(strikes, sigmas)` counts.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.strikes.len(), self.sigmas.len())
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.strikes.len() * self.sigmas.len()
    }

    /// Always `false`: construction rejects empty axes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major submission index of cell `(row, col)`.
    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.sigmas.len() + col
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        let cols = self.sigmas.len();
        (index / cols, index % cols)
    }

    /// Checks that `(row, col)` lies inside the grid.
    pub fn check_cell(&self, row: usize, col: usize) -> Result<(), GridError> {
        let (rows, cols) = self.shape();
        if row < rows && col < cols {
            Ok(())
        } else {
            Err(GridError::CellOutOfRange {
                row,
                col,
                rows,
                cols,
            })
        }
    }

    /// Kernel parameters of cell `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of range.
    pub fn cell_params(&self, row: usize, col: usize) -> SimulationParams {
        SimulationParams {
            spot: self.spot,
            strike: self.strikes[row],
            volatility: self.sigmas[col],
            rate: self.rate,
            days: self.days,
            paths: self.paths,
        }
    }
}
