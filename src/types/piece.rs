//! Color and piece-class types, and the packed piece-code convention.
//!
//! Piece class values occupy 2..7 (pawn, bishop, knight, rook, queen, king,
//! in that order) so that a packed piece code `color | (class << 1)` lands
//! in 4..15. That numeric identity is load-bearing: the mailbox, Zobrist
//! tables and `Board::bitboards` index array all key off it directly.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// WHITE=0, BLACK=1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as u8 as usize
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Color {
        if idx == 0 {
            Color::White
        } else {
            Color::Black
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece class. Numeric identity (`class_value`) is 2..7 and is load-bearing —
/// see the module doc comment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Bishop,
    Knight,
    Rook,
    Queen,
    King,
}

/// All six piece classes in their bitboard-index order (matches `Piece::class_index`).
pub const ALL_PIECES: [Piece; 6] =
    [Piece::Pawn, Piece::Bishop, Piece::Knight, Piece::Rook, Piece::Queen, Piece::King];

/// Promotion targets in the order the packed move flags enumerate them:
/// knight, bishop, rook, queen (flags 8-11 / 12-15).
pub const PROMOTION_PIECES: [Piece; 4] = [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen];

impl Piece {
    /// Index into `Board::bitboards[2..=7]` (i.e. `class_value() - 2`).
    #[inline]
    #[must_use]
    pub const fn class_index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Bishop => 1,
            Piece::Knight => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    /// The load-bearing class numeral in 2..7 (see module doc comment).
    #[inline]
    #[must_use]
    pub const fn class_value(self) -> u8 {
        self.class_index() as u8 + 2
    }

    /// Build a piece class from a `class_value()` in 2..7. Returns `None`
    /// outside that range.
    #[must_use]
    pub const fn from_class_value(value: u8) -> Option<Piece> {
        match value {
            2 => Some(Piece::Pawn),
            3 => Some(Piece::Bishop),
            4 => Some(Piece::Knight),
            5 => Some(Piece::Rook),
            6 => Some(Piece::Queen),
            7 => Some(Piece::King),
            _ => None,
        }
    }

    /// Parse a piece from a lowercase (or uppercase) character (p, n, b, r, q, k).
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Lowercase FEN-style letter for this piece class.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// FEN-style letter, uppercased for White.
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

/// Packed piece code: `color | (class_value << 1)`, occupying 4..15. `0`
/// denotes an empty square in the mailbox.
#[inline]
#[must_use]
pub const fn piece_code(color: Color, piece: Piece) -> u8 {
    color as u8 | (piece.class_value() << 1)
}

/// Inverse of [`piece_code`]. Returns `None` for code `0` (empty).
#[must_use]
pub const fn decode_piece_code(code: u8) -> Option<(Color, Piece)> {
    if code == 0 {
        return None;
    }
    let color = if code & 1 == 0 { Color::White } else { Color::Black };
    let class_value = code >> 1;
    match Piece::from_class_value(class_value) {
        Some(piece) => Some((color, piece)),
        None => None,
    }
}
