#![allow(clippy::module_inception)]
mod stencil;
mod updater;

pub mod standard_stencils;

pub use stencil::*;
pub use updater::*;
