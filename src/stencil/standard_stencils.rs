use crate::stencil::*;

/// Mean of the four edge neighbors, the Jacobi update for the
/// discrete Laplace equation. Neighbor order is the row below,
/// the row above, the column to the left, the column to the right.
pub fn jacobi_average() -> Stencil<4> {
    Stencil::new([[1, 0], [-1, 0], [0, -1], [0, 1]], |args: &[f64; 4]| {
        let below = args[0];
        let above = args[1];
        let left = args[2];
        let right = args[3];
        (below + above + left + right) / 4.0
    })
}
