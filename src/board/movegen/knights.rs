//! Knight move generation: a fixed attack set per square, intersected with
//! empty/enemy occupancy.

use crate::tables::KNIGHT_MOVE_LOOKUP;
use crate::types::{Color, MoveList, Piece};

use super::super::state::Board;
use super::emit_targets;

impl Board {
    pub(super) fn generate_knight_moves(
        &self,
        color: Color,
        list: &mut MoveList,
        captures_only: bool,
    ) {
        let enemy = self.occupancy(color.opponent());
        let empty = !self.all_occupancy();
        for from in self.pieces(color, Piece::Knight).iter() {
            let targets = KNIGHT_MOVE_LOOKUP[from.index()];
            emit_targets(from, targets, empty, enemy, list, captures_only);
        }
    }
}
