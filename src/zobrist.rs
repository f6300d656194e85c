//! Zobrist hashing: a fixed table of 64-bit keys, built once from a
//! deterministic seed, and the incremental XOR updates that key it.

use std::sync::LazyLock;

use crate::types::{CastlingRights, Color, Piece};

/// Fixed seed for the key table. Changing this value changes every hash in
/// the crate; it is not meant to be configurable.
const ZOBRIST_SEED: u64 = 1_070_372;

/// splitmix64: a small, fast, seedable 64-bit generator. This is the PRNG
/// the distilled design treats as an external collaborator (see crate docs);
/// it exists here only to fill the Zobrist tables deterministically at
/// startup, not as a general-purpose randomness source.
pub(crate) struct Prng {
    state: u64,
}

impl Prng {
    pub(crate) const fn new(seed: u64) -> Self {
        Prng { state: seed }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

/// The number of en-passant-target key slots. Only indices on ranks 4/5
/// (and 0, meaning "no en-passant target") are ever looked up; the table is
/// sized generously per the spec's defensive-sizing note.
const EP_KEY_SLOTS: usize = 40;

/// Zobrist key table, built once and shared read-only by every `Board`.
pub(crate) struct ZobristKeys {
    /// Indexed by packed piece code (4..15); entries for codes outside that
    /// range (0..3) are unused filler.
    pub(crate) piece_square: [[u64; 64]; 16],
    /// Indexed by the raw castling-rights bitmask (0..16).
    pub(crate) castling: [u64; 16],
    /// XORed in whenever the side to move is Black.
    pub(crate) side_to_move: u64,
    /// Indexed by the raw en-passant-target square value (0 means "none").
    pub(crate) ep_square: [u64; EP_KEY_SLOTS],
}

impl ZobristKeys {
    fn generate() -> Self {
        let mut prng = Prng::new(ZOBRIST_SEED);

        let mut piece_square = [[0u64; 64]; 16];
        for row in piece_square.iter_mut() {
            for key in row.iter_mut() {
                *key = prng.next_u64();
            }
        }

        let mut castling = [0u64; 16];
        for key in castling.iter_mut() {
            *key = prng.next_u64();
        }

        let side_to_move = prng.next_u64();

        let mut ep_square = [0u64; EP_KEY_SLOTS];
        for key in ep_square.iter_mut() {
            *key = prng.next_u64();
        }

        ZobristKeys { piece_square, castling, side_to_move, ep_square }
    }
}

pub(crate) static ZOBRIST: LazyLock<ZobristKeys> = LazyLock::new(ZobristKeys::generate);

/// Key for piece `piece` of color `color` standing on `square_index` (0..64).
#[inline]
pub(crate) fn piece_key(color: Color, piece: Piece, square_index: usize) -> u64 {
    let code = crate::types::piece::piece_code(color, piece) as usize;
    ZOBRIST.piece_square[code][square_index]
}

/// Key for the current castling-rights value.
#[inline]
pub(crate) fn castling_key(rights: CastlingRights) -> u64 {
    ZOBRIST.castling[rights.as_u8() as usize]
}

/// Key for the current en-passant-target value (0 = none).
#[inline]
pub(crate) fn ep_key(ep_target: u8) -> u64 {
    ZOBRIST.ep_square[ep_target as usize]
}

/// Key XORed in when the side to move is Black.
#[inline]
pub(crate) fn side_to_move_key() -> u64 {
    ZOBRIST.side_to_move
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prng_is_deterministic() {
        let mut a = Prng::new(42);
        let mut b = Prng::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn prng_varies_with_seed() {
        let mut a = Prng::new(1);
        let mut b = Prng::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn key_table_is_stable_across_calls() {
        let a = piece_key(Color::White, Piece::Pawn, 12);
        let b = piece_key(Color::White, Piece::Pawn, 12);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_piece_square_pairs_get_distinct_keys() {
        let a = piece_key(Color::White, Piece::Pawn, 12);
        let b = piece_key(Color::Black, Piece::Pawn, 12);
        let c = piece_key(Color::White, Piece::Knight, 12);
        let d = piece_key(Color::White, Piece::Pawn, 13);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}
