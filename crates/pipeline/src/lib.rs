//! Checkers expansion pipeline
//!
//! This crate provides infrastructure for:
//! - Handing each worker a root board (the opening, or a seeded random setup)
//! - Expanding every root to a fixed depth and scoring the leaves
//! - Storing one fixed-size record per worker in a shared output file
//!
//! # Usage
//!
//! ```bash
//! # Four workers, six plies each, records in leaves.out
//! cargo run --release -p pipeline -- run --workers 4 --depth 6
//!
//! # Read worker 2's record back
//! cargo run -p pipeline -- show leaves.out 2
//! ```

pub mod config;
pub mod error;
pub mod eval;
pub mod results;
pub mod roots;
pub mod runner;
pub mod sink;
pub mod worker;

pub use config::*;
pub use error::*;
pub use eval::*;
pub use results::*;
pub use roots::*;
pub use runner::*;
pub use sink::*;
pub use worker::*;
