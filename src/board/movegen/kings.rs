//! King move generation (non-castling) and the dedicated castling
//! generator, which applies its own-check and attacked-path filtering up
//! front since it's cheaper to test for 2-3 squares than to rely on the
//! generic post-make legality filter.

use crate::tables::KING_MOVE_LOOKUP;
use crate::types::{Bitboard, Color, Move, MoveList, Piece, Square};
use crate::types::moves::{FLAG_CASTLE_KINGSIDE, FLAG_CASTLE_QUEENSIDE};

use super::super::state::Board;
use super::emit_targets;

/// Squares that must be empty for kingside/queenside castling, and the
/// rook's home square, per color. Index `[color][kingside]`.
struct CastleLayout {
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    path_must_be_empty: &'static [Square],
}

fn castle_layout(color: Color, kingside: bool) -> CastleLayout {
    let rank = if color == Color::White { 0 } else { 7 };
    if kingside {
        CastleLayout {
            king_from: Square::new(rank, 4),
            king_to: Square::new(rank, 6),
            rook_from: Square::new(rank, 7),
            path_must_be_empty: if rank == 0 { &KINGSIDE_PATH_W } else { &KINGSIDE_PATH_B },
        }
    } else {
        CastleLayout {
            king_from: Square::new(rank, 4),
            king_to: Square::new(rank, 2),
            rook_from: Square::new(rank, 0),
            path_must_be_empty: if rank == 0 { &QUEENSIDE_PATH_W } else { &QUEENSIDE_PATH_B },
        }
    }
}

static KINGSIDE_PATH_W: [Square; 2] = [Square::new(0, 5), Square::new(0, 6)];
static KINGSIDE_PATH_B: [Square; 2] = [Square::new(7, 5), Square::new(7, 6)];
static QUEENSIDE_PATH_W: [Square; 3] = [Square::new(0, 1), Square::new(0, 2), Square::new(0, 3)];
static QUEENSIDE_PATH_B: [Square; 3] = [Square::new(7, 1), Square::new(7, 2), Square::new(7, 3)];

impl Board {
    pub(super) fn generate_king_moves(
        &self,
        color: Color,
        list: &mut MoveList,
        captures_only: bool,
    ) {
        let enemy = self.occupancy(color.opponent());
        let empty = !self.all_occupancy();
        let enemy_attacked = self.attacked_squares(color.opponent());
        for from in self.pieces(color, Piece::King).iter() {
            let targets = KING_MOVE_LOOKUP[from.index()] & !enemy_attacked;
            emit_targets(from, targets, empty, enemy, list, captures_only);
        }
    }

    pub(super) fn generate_castles(&self, color: Color, list: &mut MoveList) {
        let enemy_attacked = self.attacked_squares(color.opponent());
        for kingside in [true, false] {
            if !self.castling_rights.has(color, kingside) {
                continue;
            }
            let layout = castle_layout(color, kingside);
            if self.piece_at(layout.king_from) != Some((color, Piece::King)) {
                continue;
            }
            if self.piece_at(layout.rook_from) != Some((color, Piece::Rook)) {
                continue;
            }
            if layout.path_must_be_empty.iter().any(|&sq| self.piece_at(sq).is_some()) {
                continue;
            }
            let king_path = Bitboard::from_square(layout.king_from)
                | Bitboard::from_square(layout.king_to)
                | Bitboard::from_square(between(layout.king_from, layout.king_to));
            if king_path.intersects(enemy_attacked) {
                continue;
            }
            let flag = if kingside { FLAG_CASTLE_KINGSIDE } else { FLAG_CASTLE_QUEENSIDE };
            list.push(Move::new(layout.king_from, layout.king_to, flag));
        }
    }
}

/// The square the king passes through (halfway between `from` and `to`,
/// both on the same rank).
fn between(from: Square, to: Square) -> Square {
    Square::new(from.rank(), (from.file() + to.file()) / 2)
}
