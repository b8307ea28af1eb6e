//! Board ranks (rows 1–8) and their visual row positions.

use std::fmt;

/// A rank (row) on the board, from Rank1 (bottom) to Rank8 (top).
///
/// Ranks count bottom-up while visual rows count top-down: row 0 is
/// Rank8 and row 7 is Rank1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// Total number of ranks.
    pub const COUNT: usize = 8;

    /// All ranks in index order (Rank1 first).
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// Return the index (0..7, Rank1 = 0).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rank from a zero-based index (0 = Rank1, 7 = Rank8).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        if (index as usize) < Rank::COUNT {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }

    /// The rank number as written in algebraic notation (1..8).
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Create a rank from a top-down visual row (0 = Rank8, 7 = Rank1).
    #[inline]
    pub const fn from_row(row: u8) -> Option<Rank> {
        if (row as usize) < Rank::COUNT {
            Some(Rank::ALL[Rank::COUNT - 1 - row as usize])
        } else {
            None
        }
    }

    /// The top-down visual row of this rank (Rank8 = 0).
    #[inline]
    pub const fn row(self) -> usize {
        Rank::COUNT - 1 - self.index()
    }

    /// Create a rank from its digit, `'1'..='8'`.
    pub const fn from_char(c: char) -> Option<Rank> {
        match c {
            '1'..='8' => Rank::from_index(c as u8 - b'1'),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
