//! Apply/revert encoded moves, maintaining the bitboards, mailbox, castling
//! rights, en-passant target and Zobrist hash in lockstep, plus the
//! per-ply [`GameStateFrame`] history that makes `unmake` exact.

use crate::types::moves::{
    FLAG_CAPTURE, FLAG_CASTLE_KINGSIDE, FLAG_CASTLE_QUEENSIDE, FLAG_DOUBLE_PUSH, FLAG_EN_PASSANT,
    FLAG_PROMO_CAPTURE_KNIGHT, FLAG_PROMO_KNIGHT, FLAG_QUIET,
};
use crate::types::piece::decode_piece_code;
use crate::types::{CastlingRights, Color, Move, Piece, Square};
use crate::zobrist;

use super::state::{Board, GameStateFrame};

/// The four corner squares plus the two king home squares: any move that
/// vacates or lands on one of these clears the corresponding castling
/// right. A single table-driven check handles both "rook/king moved" and
/// "rook captured on its home square" in one pass over `from` and `to`.
const fn rights_lost_at(sq: Square) -> u8 {
    use crate::types::castling::{
        BLACK_KINGSIDE, BLACK_QUEENSIDE, WHITE_KINGSIDE, WHITE_QUEENSIDE,
    };
    match sq.index() {
        0 => WHITE_QUEENSIDE,  // a1
        7 => WHITE_KINGSIDE,   // h1
        4 => WHITE_KINGSIDE | WHITE_QUEENSIDE, // e1
        56 => BLACK_QUEENSIDE, // a8
        63 => BLACK_KINGSIDE,  // h8
        60 => BLACK_KINGSIDE | BLACK_QUEENSIDE, // e8
        _ => 0,
    }
}

impl Board {
    /// Apply `mv`, which must be a pseudolegal move for the side to move
    /// against the current position (callers must only pass moves produced
    /// by [`Board::generate_moves`]/[`Board::generate_captures`] against the
    /// current state; behavior on any other input is unspecified).
    pub fn make(&mut self, mv: Move) {
        let color = self.side_to_move;
        let enemy = color.opponent();
        let frame = self.frame_snapshot();

        self.hash ^= zobrist::castling_key(self.castling_rights);
        self.hash ^= zobrist::ep_key(self.ep_target);

        let (_, moving_piece) =
            self.piece_at(mv.source()).expect("make: source square is empty");
        debug_assert_eq!(self.piece_at(mv.source()).map(|(c, _)| c), Some(color));

        let mut new_rights = self.castling_rights.as_u8();
        new_rights &= !rights_lost_at(mv.source());
        new_rights &= !rights_lost_at(mv.dest());

        let mut captured_code = 0u8;
        let mut new_ep_target = 0u8;

        match mv.flag() {
            FLAG_QUIET => {
                self.move_piece(mv.source(), mv.dest(), color, moving_piece);
            }
            FLAG_DOUBLE_PUSH => {
                self.move_piece(mv.source(), mv.dest(), color, moving_piece);
                new_ep_target = mv.dest().index() as u8;
            }
            FLAG_CAPTURE => {
                captured_code = self.mailbox[mv.dest().index()];
                let (cap_color, cap_piece) =
                    decode_piece_code(captured_code).expect("capture onto empty square");
                self.remove_piece(mv.dest(), cap_color, cap_piece);
                self.move_piece(mv.source(), mv.dest(), color, moving_piece);
            }
            FLAG_CASTLE_KINGSIDE => {
                self.move_piece(mv.source(), mv.dest(), color, Piece::King);
                let rook_from = Square::from_index(mv.source().index() + 3);
                let rook_to = Square::from_index(mv.source().index() + 1);
                self.move_piece(rook_from, rook_to, color, Piece::Rook);
            }
            FLAG_CASTLE_QUEENSIDE => {
                self.move_piece(mv.source(), mv.dest(), color, Piece::King);
                let rook_from = Square::from_index(mv.source().index() - 4);
                let rook_to = Square::from_index(mv.source().index() - 1);
                self.move_piece(rook_from, rook_to, color, Piece::Rook);
            }
            FLAG_EN_PASSANT => {
                let captured_sq = Square::from_index(self.ep_target as usize);
                captured_code = self.mailbox[captured_sq.index()];
                let (cap_color, cap_piece) =
                    decode_piece_code(captured_code).expect("en passant with no captured pawn");
                self.remove_piece(captured_sq, cap_color, cap_piece);
                self.move_piece(mv.source(), mv.dest(), color, Piece::Pawn);
            }
            flag if flag >= FLAG_PROMO_KNIGHT => {
                let is_capture = flag >= FLAG_PROMO_CAPTURE_KNIGHT;
                if is_capture {
                    captured_code = self.mailbox[mv.dest().index()];
                    let (cap_color, cap_piece) =
                        decode_piece_code(captured_code).expect("promo-capture onto empty square");
                    self.remove_piece(mv.dest(), cap_color, cap_piece);
                }
                self.remove_piece(mv.source(), color, Piece::Pawn);
                let promoted = mv.promotion_piece().expect("promotion flag without piece");
                self.set_piece(mv.dest(), color, promoted);
            }
            other => unreachable!("invalid move flag {other}"),
        }

        self.castling_rights = CastlingRights::from_u8(new_rights);
        self.ep_target = new_ep_target;

        self.push_history(GameStateFrame {
            castling_rights: frame.castling_rights,
            captured: captured_code,
            ep_target: frame.ep_target,
        });

        self.side_to_move = enemy;
        self.hash ^= zobrist::side_to_move_key();
        self.hash ^= zobrist::castling_key(self.castling_rights);
        self.hash ^= zobrist::ep_key(self.ep_target);
    }

    /// Revert `mv`, the most recently applied move. Callers must unmake
    /// moves in exact reverse order of application.
    pub fn unmake(&mut self, mv: Move) {
        let prev_frame = self.pop_history();

        self.hash ^= zobrist::castling_key(self.castling_rights);
        self.hash ^= zobrist::ep_key(self.ep_target);
        self.hash ^= zobrist::side_to_move_key();

        let color = self.side_to_move.opponent();
        self.side_to_move = color;

        match mv.flag() {
            FLAG_QUIET => {
                let (_, piece) = self.piece_at(mv.dest()).expect("unmake: dest square is empty");
                self.move_piece(mv.dest(), mv.source(), color, piece);
            }
            FLAG_DOUBLE_PUSH => {
                self.move_piece(mv.dest(), mv.source(), color, Piece::Pawn);
            }
            FLAG_CAPTURE => {
                let (_, piece) = self.piece_at(mv.dest()).expect("unmake: dest square is empty");
                self.move_piece(mv.dest(), mv.source(), color, piece);
                let (cap_color, cap_piece) =
                    decode_piece_code(prev_frame.captured).expect("unmake capture: no record");
                self.set_piece(mv.dest(), cap_color, cap_piece);
            }
            FLAG_CASTLE_KINGSIDE => {
                self.move_piece(mv.dest(), mv.source(), color, Piece::King);
                let rook_from = Square::from_index(mv.source().index() + 3);
                let rook_to = Square::from_index(mv.source().index() + 1);
                self.move_piece(rook_to, rook_from, color, Piece::Rook);
            }
            FLAG_CASTLE_QUEENSIDE => {
                self.move_piece(mv.dest(), mv.source(), color, Piece::King);
                let rook_from = Square::from_index(mv.source().index() - 4);
                let rook_to = Square::from_index(mv.source().index() - 1);
                self.move_piece(rook_to, rook_from, color, Piece::Rook);
            }
            FLAG_EN_PASSANT => {
                self.move_piece(mv.dest(), mv.source(), color, Piece::Pawn);
                let captured_sq = Square::from_index(prev_frame.ep_target as usize);
                let (cap_color, cap_piece) =
                    decode_piece_code(prev_frame.captured).expect("unmake en passant: no record");
                self.set_piece(captured_sq, cap_color, cap_piece);
            }
            flag if flag >= FLAG_PROMO_KNIGHT => {
                let is_capture = flag >= FLAG_PROMO_CAPTURE_KNIGHT;
                let promoted = mv.promotion_piece().expect("promotion flag without piece");
                self.remove_piece(mv.dest(), color, promoted);
                self.set_piece(mv.source(), color, Piece::Pawn);
                if is_capture {
                    let (cap_color, cap_piece) = decode_piece_code(prev_frame.captured)
                        .expect("unmake promo-capture: no record");
                    self.set_piece(mv.dest(), cap_color, cap_piece);
                }
            }
            other => unreachable!("invalid move flag {other}"),
        }

        self.castling_rights = prev_frame.castling_rights;
        self.ep_target = prev_frame.ep_target;

        self.hash ^= zobrist::castling_key(self.castling_rights);
        self.hash ^= zobrist::ep_key(self.ep_target);
    }

    /// Pass the turn without moving a piece (search pruning helper). No
    /// castling-rights change; the en-passant target is always cleared,
    /// since no pawn just double-pushed.
    pub fn make_null(&mut self) {
        let frame = self.frame_snapshot();
        self.hash ^= zobrist::ep_key(self.ep_target);
        self.ep_target = 0;
        self.hash ^= zobrist::ep_key(self.ep_target);
        self.push_history(GameStateFrame {
            castling_rights: frame.castling_rights,
            captured: 0,
            ep_target: frame.ep_target,
        });
        self.side_to_move = self.side_to_move.opponent();
        self.hash ^= zobrist::side_to_move_key();
    }

    /// Inverse of [`Board::make_null`].
    pub fn unmake_null(&mut self) {
        let prev_frame = self.pop_history();
        self.hash ^= zobrist::side_to_move_key();
        self.side_to_move = self.side_to_move.opponent();
        self.hash ^= zobrist::ep_key(self.ep_target);
        self.ep_target = prev_frame.ep_target;
        self.hash ^= zobrist::ep_key(self.ep_target);
    }
}
