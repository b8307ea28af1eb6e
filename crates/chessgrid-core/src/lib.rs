//! Core board model: file/rank coordinates, squares in algebraic notation,
//! and the 64-square board generator.

mod board;
mod error;
mod file;
mod rank;
mod square;

pub use board::{Board, generate};
pub use error::SquareError;
pub use file::File;
pub use rank::Rank;
pub use square::Square;
