//! Bitboard chess position representation and pseudolegal move generator.
//!
//! A [`board::Board`] holds piece placement (eight 64-bit bitboards plus a
//! mailbox), side to move, castling rights, en-passant target and a running
//! Zobrist hash. [`board::Board::generate_moves`] fills a caller-provided
//! [`types::MoveList`] with every pseudolegal move for the side to move;
//! [`board::Board::make`]/[`board::Board::unmake`] apply and revert them in
//! place. [`perft::perft`] exercises the whole pipeline by recursive leaf
//! counting, the standard move-generator correctness check.
//!
//! Search, evaluation, opening books and a UCI loop are outside this
//! crate's scope — it is the position/move-generation core such a thing
//! would sit on top of.

pub mod attacks;
pub mod bitops;
pub mod board;
pub mod error;
pub mod perft;
pub mod tables;
pub mod types;
pub mod zobrist;

pub use board::Board;
pub use types::{Color, Move, MoveList, Piece, Square};
