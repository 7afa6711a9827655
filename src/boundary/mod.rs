//! Edge conditions and the policy that stamps them onto a grid.

mod edges;

pub use edges::*;

use crate::domain::Grid;

/// Stamps the edge rules onto a grid.
/// Only the outer layer of cells is ever written by `apply_boundaries`.
#[derive(Clone, Debug, Default)]
pub struct BoundaryPolicy<Edges: EdgeRules = MixedEdges> {
    edges: Edges,
}

impl<Edges: EdgeRules> BoundaryPolicy<Edges> {
    pub fn new(edges: Edges) -> Self {
        BoundaryPolicy { edges }
    }

    /// Set every cell, boundary included, from the initial condition.
    pub fn apply_initial_condition(&self, grid: &mut Grid, chunk_size: usize) {
        let xs = grid.xs().to_vec();
        let ys = grid.ys().to_vec();
        let edges = &self.edges;
        grid.par_set_values(
            |coord| edges.initial(xs[coord[1] as usize], ys[coord[0] as usize]),
            chunk_size,
        );
    }

    /// Stamp the four edges in a fixed order: left, right, top, bottom.
    /// Later edges win at the corners.
    ///
    /// The left edge walks down the rows, replacing each value with the
    /// one in the next row of the same column, so it only ever reads
    /// the edge itself and never the interior.
    pub fn apply_boundaries(&self, grid: &mut Grid) {
        let rows = grid.rows();
        let cols = grid.cols();
        if rows == 0 || cols == 0 {
            return;
        }
        let last_row = rows - 1;
        let last_col = cols - 1;

        for row in 0..last_row {
            let y = grid.ys()[row];
            let below = grid.get(row + 1, 0);
            grid.set(row, 0, self.edges.left(y, below));
        }

        for row in 0..rows {
            let y = grid.ys()[row];
            grid.set(row, last_col, self.edges.right(y));
        }

        for col in 0..cols {
            let x = grid.xs()[col];
            grid.set(0, col, self.edges.top(x));
        }

        for col in 0..cols {
            let x = grid.xs()[col];
            grid.set(last_row, col, self.edges.bottom(x));
        }
    }
}
