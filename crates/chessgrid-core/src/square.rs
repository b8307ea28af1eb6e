//! Board squares: algebraic id plus linear index.

use std::fmt;
use std::str::FromStr;

use crate::error::SquareError;
use crate::file::File;
use crate::rank::Rank;

/// One cell of the board, identified by its algebraic id and its index.
///
/// Index is row-major from the top-left: `index = row * 8 + col`, where
/// row 0 is rank 8 and col 0 is file a. So a8 = 0, h8 = 7, a1 = 56, h1 = 63.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Square {
    id: String,
    index: usize,
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Squares per row.
    pub const WIDTH: usize = 8;

    /// Build the square at `index`. Callers guarantee `index < 64`.
    pub(crate) fn at(index: usize) -> Square {
        debug_assert!(index < Square::COUNT);
        let file = File::ALL[index % Square::WIDTH];
        let rank = Rank::ALL[Rank::COUNT - 1 - index / Square::WIDTH];
        Square {
            id: format!("{file}{rank}"),
            index,
        }
    }

    /// Create the square at a linear index.
    pub fn from_index(index: usize) -> Result<Square, SquareError> {
        if index < Square::COUNT {
            Ok(Square::at(index))
        } else {
            Err(SquareError::IndexOutOfRange { index })
        }
    }

    /// Create the square at a top-down row and left-to-right column.
    pub fn from_coords(row: usize, col: usize) -> Result<Square, SquareError> {
        if row < Rank::COUNT && col < File::COUNT {
            Ok(Square::at(row * Square::WIDTH + col))
        } else {
            Err(SquareError::CoordsOutOfRange { row, col })
        }
    }

    /// Create the square on a given rank and file.
    pub fn new(rank: Rank, file: File) -> Square {
        Square::at(rank.row() * Square::WIDTH + file.index())
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Result<Square, SquareError> {
        let invalid = || SquareError::InvalidAlgebraic {
            found: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let file = File::from_char(file_char).ok_or_else(invalid)?;
        let rank = Rank::from_char(rank_char).ok_or_else(invalid)?;
        Ok(Square::new(rank, file))
    }

    /// The algebraic id, e.g. "e4".
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The linear index (0..63).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Top-down row (0 = rank 8).
    #[inline]
    pub fn row(&self) -> usize {
        self.index / Square::WIDTH
    }

    /// Left-to-right column (0 = file a).
    #[inline]
    pub fn col(&self) -> usize {
        self.index % Square::WIDTH
    }

    /// The file (column letter) of this square.
    #[inline]
    pub fn file(&self) -> File {
        File::ALL[self.col()]
    }

    /// The rank (row number) of this square.
    #[inline]
    pub fn rank(&self) -> Rank {
        Rank::ALL[Rank::COUNT - 1 - self.row()]
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.id)
    }
}
