//! Bishop and rook move generation via Hyperbola Quintessence attacks.
//! Queens are handled directly in the top-level dispatcher since they're
//! simply the union of both.

use crate::attacks;
use crate::types::{Color, MoveList, Piece};

use super::super::state::Board;
use super::emit_targets;

impl Board {
    pub(super) fn generate_slider_moves(
        &self,
        color: Color,
        piece: Piece,
        list: &mut MoveList,
        captures_only: bool,
    ) {
        debug_assert!(matches!(piece, Piece::Bishop | Piece::Rook));
        let own_occ = self.occupancy(color);
        let enemy = self.occupancy(color.opponent());
        let empty = !self.all_occupancy();
        let occ = self.all_occupancy();
        for from in self.pieces(color, piece).iter() {
            let attacks = match piece {
                Piece::Bishop => attacks::bishop_attacks(from, occ),
                Piece::Rook => attacks::rook_attacks(from, occ),
                _ => unreachable!(),
            } & !own_occ;
            emit_targets(from, attacks, empty, enemy, list, captures_only);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn rook_on_open_board_has_fourteen_targets() {
        let board = crate::Board::from_fen("8/8/8/3R4/8/8/8/8 w - -");
        let mut list = MoveList::new();
        board.generate_slider_moves(Color::White, Piece::Rook, &mut list, false);
        assert_eq!(list.len(), 14);
    }

    #[test]
    fn bishop_blocked_by_own_piece_excludes_that_square() {
        let board = crate::Board::from_fen("8/8/8/8/8/5P2/8/B7 w - -");
        let mut list = MoveList::new();
        board.generate_slider_moves(Color::White, Piece::Bishop, &mut list, false);
        assert!(list.iter().all(|mv| mv.dest() != Square::new(5, 5)));
        assert!(list.iter().any(|mv| mv.dest() == Square::new(4, 4)));
    }

    #[test]
    fn rook_capture_includes_enemy_blocker_square() {
        let board = crate::Board::from_fen("8/8/8/3r4/8/8/8/3R4 w - -");
        let mut list = MoveList::new();
        board.generate_slider_moves(Color::White, Piece::Rook, &mut list, false);
        assert!(list.iter().any(|mv| mv.dest() == Square::new(4, 3) && mv.is_capture()));
    }
}
