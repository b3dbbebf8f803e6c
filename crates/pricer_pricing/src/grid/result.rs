//! Assembled grid results.

use crate::mc::KernelEstimate;
use pricer_core::types::{OptionKind, OptionPrices};

/// One cell of a [`ResultGrid`] with its coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCellResult {
    /// Strike index.
    pub row: usize,
    /// Volatility index.
    pub col: usize,
    /// Strike of the cell.
    pub strike: f64,
    /// Volatility of the cell.
    pub sigma: f64,
    /// Kernel output for the cell.
    pub estimate: KernelEstimate,
}

/// N × M kernel estimates with their axes.
///
/// `get(i, j)` is the estimate for `(strikes[i], sigmas[j])`.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionKind;
/// use pricer_pricing::dispatch::SequentialExecutor;
/// use pricer_pricing::grid::{GridEvaluator, ParameterGrid};
///
/// let grid = ParameterGrid::new(vec![95.0, 105.0], vec![0.2, 0.3])
///     .unwrap()
///     .with_days(12)
///     .with_paths(500);
/// let result = GridEvaluator::new(SequentialExecutor).evaluate(&grid).unwrap();
///
/// let surface = result.surface(OptionKind::EuropeanCall);
/// assert_eq!(surface.len(), 2);
/// assert_eq!(surface[1][0], result.prices(1, 0).unwrap().euro_call);
/// ```
///
/// Serialisation is one-way: a grid is only ever built by
/// [`from_cells`](Self::from_cells), which checks its shape.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResultGrid {
    strikes: Vec<f64>,
    sigmas: Vec<f64>,
    /// Row-major cells.
    cells: Vec<KernelEstimate>,
}

impl ResultGrid {
    /// Builds a grid from row-major cells.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != strikes.len() * sigmas.len()`.
    pub fn from_cells(strikes: Vec<f64>, sigmas: Vec<f64>, cells: Vec<KernelEstimate>) -> Self {
        assert_eq!(
            cells.len(),
            strikes.len() * sigmas.len(),
            "cell count must match grid shape"
        );
        Self {
            strikes,
            sigmas,
            cells,
        }
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

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.strikes.len(), self.sigmas.len())
    }

    /// Estimate of cell `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<&KernelEstimate> {
        if row < self.strikes.len() && col < self.sigmas.len() {
            self.cells.get(row * self.sigmas.len() + col)
        } else {
            None
        }
    }

    /// Prices of cell `(row, col)`.
    pub fn prices(&self, row: usize, col: usize) -> Option<OptionPrices> {
        self.get(row, col).map(|estimate| estimate.prices)
    }

    /// One option's prices as `rows × cols`, ready for a contour plot.
    pub fn surface(&self, kind: OptionKind) -> Vec<Vec<f64>> {
        if self.sigmas.is_empty() {
            return vec![Vec::new(); self.strikes.len()];
        }
        self.cells
            .chunks(self.sigmas.len())
            .map(|row| row.iter().map(|e| e.prices.get(kind)).collect())
            .collect()
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = GridCellResult> + '_ {
        let cols = self.sigmas.len();
        self.cells.iter().enumerate().map(move |(index, estimate)| {
            let (row, col) = (index / cols, index % cols);
            GridCellResult {
                row,
                col,
                strike: self.strikes[row],
                sigma: self.sigmas[col],
                estimate: *estimate,
            }
        })
    }
}
