//! The iteration driver: configuration, per-run state and the loop
//! that sweeps, stamps, checks and swaps.

mod config;
mod solver_loop;
mod state;

pub use config::*;
pub use solver_loop::*;
pub use state::*;
