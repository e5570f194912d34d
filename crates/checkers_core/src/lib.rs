pub mod board;
pub mod captures;
pub mod error;
pub mod expand;
pub mod movegen;
pub mod pieces;
pub mod steps;
pub mod types;

// Re-export the game model and generators
pub use board::*;
pub use captures::*;
pub use error::BoardError;
pub use expand::{count_leaves, expand, expand_breadth_first};
pub use movegen::*;
pub use pieces::index_pieces;
pub use steps::simple_moves;
pub use types::*;
