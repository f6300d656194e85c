//! Square type: a compact 0-63 board index.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SquareError;

/// A square on the chess board, stored as a 0-63 index.
///
/// Index layout: `rank * 8 + file`, little-endian rank-file — a1=0, h1=7,
/// a8=56, h8=63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Build a square from rank and file (both 0-7), without bounds checking.
    #[inline]
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Self {
        Square((rank * 8 + file) as u8)
    }

    /// Build a square from rank and file, checking bounds.
    #[must_use]
    pub const fn try_new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square::new(rank, file))
        } else {
            None
        }
    }

    /// Build a square from a 0-63 index.
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx as u8)
    }

    /// The square's 0-63 index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rank (0-7, 0 = rank 1).
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 / 8) as usize
    }

    /// File (0-7, 0 = file a).
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 % 8) as usize
    }

    /// Flip vertically (rank r -> rank 7-r), e.g. a1 <-> a8.
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square::new(7 - self.rank(), self.file())
    }

    /// Flip horizontally (file f -> file 7-f), e.g. a1 <-> h1.
    #[inline]
    #[must_use]
    pub const fn flip_horizontal(self) -> Self {
        Square::new(self.rank(), 7 - self.file())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() as u8 + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square::new(rank, file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidNotation { notation: s.to_string() });
        }
        let file = match chars[0] {
            'a'..='h' => chars[0] as usize - 'a' as usize,
            _ => return Err(SquareError::InvalidNotation { notation: s.to_string() }),
        };
        let rank = match chars[1] {
            '1'..='8' => chars[1] as usize - '1' as usize,
            _ => return Err(SquareError::InvalidNotation { notation: s.to_string() }),
        };
        Ok(Square::new(rank, file))
    }
}
