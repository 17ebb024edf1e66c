pub mod board;
pub mod board_operations;

pub use board::Board;
pub use board_operations::*;
