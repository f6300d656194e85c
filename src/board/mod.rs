//! The position type and everything that mutates or queries it: placement
//! and state (`state`), text notation (`fen`), pseudolegal generation
//! (`movegen`), apply/revert (`make_unmake`), and a debug-only dump
//! (`debug`).

mod debug;
mod fen;
mod make_unmake;
mod movegen;
mod state;

pub use state::{Board, MAX_PLY};
