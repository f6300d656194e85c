//! Pawn move generation: pushes, double pushes, diagonal captures,
//! promotions (plain and capturing) and en-passant.

use crate::tables::{EP_TARGET_LOOKUP, PAWN_CAPTURE_LOOKUP};
use crate::types::moves::{FLAG_DOUBLE_PUSH, FLAG_EN_PASSANT, FLAG_QUIET};
use crate::types::piece::PROMOTION_PIECES;
use crate::types::{Bitboard, Color, Move, MoveList, Piece, Square};

use super::super::state::Board;

/// Per-color pawn geometry: forward direction, the rank a double push starts
/// from, and the back (promotion) rank.
struct PawnGeometry {
    dir: i32,
    start_rank: usize,
    promotion_rank: usize,
}

fn geometry(color: Color) -> PawnGeometry {
    match color {
        Color::White => PawnGeometry { dir: 1, start_rank: 1, promotion_rank: 7 },
        Color::Black => PawnGeometry { dir: -1, start_rank: 6, promotion_rank: 0 },
    }
}

impl Board {
    pub(super) fn generate_pawn_moves(
        &self,
        color: Color,
        list: &mut MoveList,
        captures_only: bool,
    ) {
        let geo = geometry(color);
        let empty = !self.all_occupancy();
        let enemy = self.occupancy(color.opponent());

        for from in self.pieces(color, Piece::Pawn).iter() {
            let rank = from.rank() as i32;
            let file = from.file();

            if !captures_only {
                let push_rank = rank + geo.dir;
                if (0..8).contains(&push_rank) {
                    let push_sq = Square::new(push_rank as usize, file);
                    if empty.contains(push_sq) {
                        if push_rank as usize == geo.promotion_rank {
                            push_promotions(list, from, push_sq, false);
                        } else {
                            list.push(Move::new(from, push_sq, FLAG_QUIET));
                            if from.rank() == geo.start_rank {
                                let double_rank = rank + 2 * geo.dir;
                                let double_sq = Square::new(double_rank as usize, file);
                                if empty.contains(double_sq) {
                                    list.push(Move::new(from, double_sq, FLAG_DOUBLE_PUSH));
                                }
                            }
                        }
                    }
                }
            }

            let capture_targets = PAWN_CAPTURE_LOOKUP[color.index()][from.index()] & enemy;
            for to in capture_targets.iter() {
                if to.rank() == geo.promotion_rank {
                    push_promotions(list, from, to, true);
                } else {
                    list.push(Move::new(from, to, crate::types::moves::FLAG_CAPTURE));
                }
            }

            if !captures_only
                && self.ep_target != 0
                && EP_TARGET_LOOKUP[self.ep_target as usize].contains(from)
            {
                let ep_sq_idx = self.ep_target as i32;
                let dest_idx = ep_sq_idx + geo.dir * 8;
                let dest = Square::from_index(dest_idx as usize);
                list.push(Move::new(from, dest, FLAG_EN_PASSANT));
            }
        }
    }
}

fn push_promotions(list: &mut MoveList, from: Square, to: Square, capture: bool) {
    let base = if capture {
        crate::types::moves::FLAG_PROMO_CAPTURE_KNIGHT
    } else {
        crate::types::moves::FLAG_PROMO_KNIGHT
    };
    for (offset, _piece) in PROMOTION_PIECES.iter().enumerate() {
        list.push(Move::new(from, to, base + offset as u8));
    }
}
