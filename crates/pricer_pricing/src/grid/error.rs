//! Grid evaluation errors.

use pricer_core::types::KernelError;
use thiserror::Error;

/// Errors raised while building or evaluating a parameter grid.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::KernelError;
/// use pricer_pricing::grid::GridError;
///
/// let err = GridError::TaskFailed {
///     row: 1,
///     col: 0,
///     strike: 100.0,
///     sigma: 0.1,
///     source: KernelError::invalid("days", "must be at least 1"),
/// };
/// assert_eq!(err.coordinate(), Some((1, 0)));
/// assert!(err.to_string().contains("strike=100"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// An axis has no points.
    #[error("Empty {axis} axis: a grid needs at least one point per axis")]
    EmptyAxis {
        /// `"strike"` or `"sigma"`.
        axis: &'static str,
    },

    /// A cell index outside the grid was requested.
    #[error("Cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    CellOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of strikes.
        rows: usize,
        /// Number of volatilities.
        cols: usize,
    },

    /// The kernel failed for one cell.
    #[error("Grid cell ({row}, {col}) failed at strike={strike}, sigma={sigma}: {source}")]
    TaskFailed {
        /// Strike index.
        row: usize,
        /// Volatility index.
        col: usize,
        /// Strike of the failing cell.
        strike: f64,
        /// Volatility of the failing cell.
        sigma: f64,
        /// Underlying kernel error.
        #[source]
        source: KernelError,
    },

    /// Evaluation was cancelled before every cell ran.
    #[error("Grid evaluation cancelled after {completed} of {total} cells")]
    Cancelled {
        /// Cells that finished.
        completed: usize,
        /// Cells in the grid.
        total: usize,
    },
}

impl GridError {
    /// `(row, col)` of the failing cell for [`TaskFailed`](Self::TaskFailed).
    pub fn coordinate(&self) -> Option<(usize, usize)> {
        match self {
            Self::TaskFailed { row, col, .. } => Some((*row, *col)),
            _ => None,
        }
    }

    /// Returns `true` for [`Cancelled`](Self::Cancelled).
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}
