//! # Heat-Map Aggregation
//!
//! Builds the 5×5 likelihood × impact grid consumed by the risk dashboard.
//! The grid is pure derived state: rebuilt on every call, never persisted.
//!
//! ## Orientation
//!
//! The row order is inverted so the highest impact renders at the top,
//! matching conventional heat-map presentation:
//!
//! ```text
//! grid[row][col].impact     == 5 - row   (impact 5 in row 0)
//! grid[row][col].likelihood == col + 1   (likelihood 1 in column 0)
//! ```
//!
//! This orientation is part of the grid's contract — consumers index into
//! it positionally and must see high impact at row 0.

use serde::{Deserialize, Serialize};

use crate::record::{RiskRecord, RiskView};
use crate::severity::SeverityBand;

/// Grid dimension along both axes.
pub const GRID_DIM: usize = 5;

/// A single cell of the heat map: one (likelihood, impact) position and
/// the records that landed there under the selected view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatMapCell {
    /// Likelihood axis value of this position, in [1, 5].
    pub likelihood: i32,
    /// Impact axis value of this position, in [1, 5].
    pub impact: i32,
    /// Records whose selected axes land on this cell.
    pub risks: Vec<RiskRecord>,
}

impl HeatMapCell {
    fn empty(likelihood: i32, impact: i32) -> Self {
        Self {
            likelihood,
            impact,
            risks: Vec::new(),
        }
    }

    /// Severity score of this position: likelihood × impact.
    pub fn score(&self) -> i32 {
        self.likelihood * self.impact
    }

    /// Display severity band of this position.
    pub fn band(&self) -> SeverityBand {
        SeverityBand::from_score(self.score())
    }

    /// Number of records on this cell.
    pub fn count(&self) -> usize {
        self.risks.len()
    }
}

/// The complete 5×5 heat-map grid for one view of a risk register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatMapGrid {
    /// The view the grid was aggregated under.
    pub view: RiskView,
    /// Cells in presentation order: row 0 is impact 5, column 0 is
    /// likelihood 1.
    pub cells: [[HeatMapCell; GRID_DIM]; GRID_DIM],
}

impl HeatMapGrid {
    /// Aggregate a risk register into the 5×5 grid for the given view.
    ///
    /// Records with a zero selected axis, or whose computed position falls
    /// outside the grid, are skipped — malformed upstream data must not
    /// crash the dashboard this feeds. The returned grid is always
    /// complete, including for an empty register.
    pub fn build(risks: &[RiskRecord], view: RiskView) -> Self {
        let mut cells: [[HeatMapCell; GRID_DIM]; GRID_DIM] = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                HeatMapCell::empty(col as i32 + 1, GRID_DIM as i32 - row as i32)
            })
        });

        for risk in risks {
            let (l, i) = risk.axes(view);
            if l == 0 || i == 0 {
                tracing::debug!(view = %view, likelihood = l, impact = i, "skipping risk with missing axis");
                continue;
            }
            let row = GRID_DIM as i32 - i;
            let col = l - 1;
            if !(0..GRID_DIM as i32).contains(&row) || !(0..GRID_DIM as i32).contains(&col) {
                tracing::debug!(view = %view, likelihood = l, impact = i, "skipping risk outside the 5-point scale");
                continue;
            }
            cells[row as usize][col as usize].risks.push(risk.clone());
        }

        Self { view, cells }
    }

    /// The cell at presentation position (row, col), or `None` outside
    /// the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&HeatMapCell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Total number of records placed on the grid (out-of-range records
    /// excluded).
    pub fn total_risks(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .map(|cell| cell.risks.len())
            .sum()
    }

    /// Per-cell record counts in presentation order, for tabular rendering.
    pub fn counts(&self) -> [[usize; GRID_DIM]; GRID_DIM] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.cells[row][col].risks.len()))
    }
}
