//! Sliding-piece attack generation via Hyperbola Quintessence.

use crate::bitops;
use crate::tables::{
    ANTIDIAGONAL_MASKS, DIAGONAL_MASKS, FILE_MASKS, OCCUPY_SQUARE, RANK_MASKS, SOURCE_TO_ANTIDIAGONAL,
    SOURCE_TO_DIAGONAL, SOURCE_TO_FILE, SOURCE_TO_RANK,
};
use crate::types::{Bitboard, Square};

/// Squares reachable from `sq` along `line_mask` given board occupancy `occ`,
/// using subtraction-with-reversal to find the first blocker in both
/// directions at once. Includes the first blocker (if any); excludes `sq`
/// itself. Used for vertical (file) and diagonal/antidiagonal rays.
#[inline]
#[must_use]
fn hyperbola(sq: Square, line_mask: Bitboard, occ: Bitboard) -> Bitboard {
    let piece = OCCUPY_SQUARE[sq.index()];
    let blockers = line_mask & occ;
    let forward = Bitboard(blockers.0.wrapping_sub(2 * piece.0));
    let reversed_blockers = Bitboard(bitops::reverse(blockers.0));
    let reversed_piece = Bitboard(bitops::reverse(piece.0));
    let backward_reversed = Bitboard(reversed_blockers.0.wrapping_sub(2 * reversed_piece.0));
    let backward = Bitboard(bitops::reverse(backward_reversed.0));
    (forward ^ backward) & line_mask
}

/// Rank (horizontal) ray attacks: same construction as [`hyperbola`] but with
/// `mirror` in place of `reverse`, since byte-swap alone doesn't permute the
/// bits within a single rank byte.
#[inline]
#[must_use]
fn hyperbola_rank(sq: Square, line_mask: Bitboard, occ: Bitboard) -> Bitboard {
    let piece = OCCUPY_SQUARE[sq.index()];
    let blockers = line_mask & occ;
    let forward = Bitboard(blockers.0.wrapping_sub(2 * piece.0));
    let mirrored_blockers = Bitboard(bitops::mirror(blockers.0));
    let mirrored_piece = Bitboard(bitops::mirror(piece.0));
    let backward_mirrored = Bitboard(mirrored_blockers.0.wrapping_sub(2 * mirrored_piece.0));
    let backward = Bitboard(bitops::mirror(backward_mirrored.0));
    (forward ^ backward) & line_mask
}

/// Attacks along the file through `sq`.
#[inline]
#[must_use]
pub fn file_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    hyperbola(sq, FILE_MASKS[SOURCE_TO_FILE[sq.index()]], occ)
}

/// Attacks along the rank through `sq`.
#[inline]
#[must_use]
pub fn rank_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    hyperbola_rank(sq, RANK_MASKS[SOURCE_TO_RANK[sq.index()]], occ)
}

/// Attacks along the a1-h8-direction diagonal through `sq`.
#[inline]
#[must_use]
pub fn diagonal_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    hyperbola(sq, DIAGONAL_MASKS[SOURCE_TO_DIAGONAL[sq.index()]], occ)
}

/// Attacks along the h1-a8-direction antidiagonal through `sq`.
#[inline]
#[must_use]
pub fn antidiagonal_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    hyperbola(sq, ANTIDIAGONAL_MASKS[SOURCE_TO_ANTIDIAGONAL[sq.index()]], occ)
}

/// Bishop attacks: diagonal union antidiagonal.
#[inline]
#[must_use]
pub fn bishop_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    diagonal_attacks(sq, occ) | antidiagonal_attacks(sq, occ)
}

/// Rook attacks: file union rank.
#[inline]
#[must_use]
pub fn rook_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    file_attacks(sq, occ) | rank_attacks(sq, occ)
}

/// Queen attacks: bishop union rook.
#[inline]
#[must_use]
pub fn queen_attacks(sq: Square, occ: Bitboard) -> Bitboard {
    bishop_attacks(sq, occ) | rook_attacks(sq, occ)
}
