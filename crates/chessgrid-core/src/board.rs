//! The 64-square board model.

use std::ops::Index;
use std::slice;

use tracing::trace;

use crate::square::Square;

/// An ordered board of exactly 64 squares, rank 8 first.
///
/// `board[i].index() == i` for every `i`, so the board can be indexed
/// directly by a square's linear index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Square; Square::COUNT],
}

/// Build a fresh board. Equivalent to [`Board::generate`].
pub fn generate() -> Board {
    Board::generate()
}

impl Board {
    /// Build the board: for each index 0..63, the square at
    /// `row = index / 8`, `col = index % 8`.
    pub fn generate() -> Board {
        let squares = std::array::from_fn(Square::at);
        trace!(squares = Square::COUNT, "generated board");
        Board { squares }
    }

    /// Number of squares, always 64.
    #[inline]
    pub const fn len(&self) -> usize {
        Square::COUNT
    }

    /// Always `false`: a board never has zero squares.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// The square at `index`, or `None` if `index >= 64`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    /// Look a square up by its algebraic id.
    pub fn find(&self, id: &str) -> Option<&Square> {
        let index = Square::from_algebraic(id).ok()?.index();
        self.squares.get(index)
    }

    /// All squares in index order.
    #[inline]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterate over all squares in index order (a8, b8, ..., h1).
    pub fn iter(&self) -> slice::Iter<'_, Square> {
        self.squares.iter()
    }

    /// Iterate over the eight visual rows, top (rank 8) to bottom (rank 1).
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks_exact(Square::WIDTH)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::generate()
    }
}

impl Index<usize> for Board {
    type Output = Square;

    fn index(&self, index: usize) -> &Square {
        &self.squares[index]
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Square;
    type IntoIter = slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
