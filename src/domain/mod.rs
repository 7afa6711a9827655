//! The solution grid: sampled x and y axes plus a dense value buffer.
//! Values are addressed as `[row, col]` where the row indexes `ys`
//! and the column indexes `xs`.

mod chunk;
mod grid;

pub use chunk::*;
pub use grid::*;
