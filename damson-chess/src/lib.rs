pub use damson_types::*;

mod attacks;
mod board;
mod chess_move;
mod magics;
mod move_gen;

pub use attacks::*;
pub use board::*;
pub use chess_move::*;
pub use magics::*;
pub use move_gen::*;
