pub mod boundary;
pub mod build_info;
pub mod cli;
pub mod convergence;
pub mod domain;
pub mod error;
pub mod render;
pub mod solver;
pub mod stencil;
pub mod util;
