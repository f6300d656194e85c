//! Error types for position-notation and move parsing failures.

use std::fmt;

/// Error type for position-notation parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The notation has too few whitespace-separated fields (needs at least 4).
    TooFewParts { found: usize },
    /// Invalid piece character in the placement field.
    InvalidPiece { char: char },
    /// Invalid castling character.
    InvalidCastling { char: char },
    /// Invalid side to move (must be `w` or `b`).
    InvalidSideToMove { found: String },
    /// Invalid en-passant target square.
    InvalidEnPassant { found: String },
    /// Too many rank groups in the placement field.
    InvalidRank { rank: usize },
    /// Too many files described in one rank group.
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "position notation must have at least 4 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "invalid piece character '{char}' in placement field")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "invalid castling character '{char}'")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en-passant square '{found}'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "too many rank groups in placement field (at group {rank})")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "too many files ({files}) in rank group {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square-notation parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7).
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7).
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation (expects e.g. "e4").
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "file {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for decoding a move from external wire/text representations.
///
/// `generate_moves` never produces an invalid `Move`; this error exists for
/// callers that build a `Move` from outside data (e.g. a UCI command) and
/// need to reject malformed input before it reaches `Board::make`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// The move string has an invalid length (must be 4-5 characters).
    InvalidLength { len: usize },
    /// Invalid square notation embedded in the move string.
    InvalidSquare { notation: String },
    /// Invalid promotion piece character.
    InvalidPromotion { char: char },
    /// The move is well-formed but does not match any legal move in the
    /// current position.
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "move notation must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "invalid square in move notation '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "'{notation}' is not a legal move in this position")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}
