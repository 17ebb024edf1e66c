pub mod use_board;
pub mod use_drag_and_drop;

pub use use_board::*;
pub use use_drag_and_drop::*;
