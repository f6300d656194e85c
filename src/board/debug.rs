//! Debug-only board visualization: an ASCII ranks-8-to-1 dump and a raw-hex
//! bitboard grid printer, for manual inspection while debugging move
//! generation. Never called from non-debug code paths.

use crate::types::{Bitboard, Color, Piece};

use super::state::Board;

#[cfg(debug_assertions)]
impl Board {
    /// Print every bitboard (both occupancy masks and all twelve
    /// color/class combinations) plus side-to-move, castling rights and
    /// en-passant target.
    pub fn debug_bitboards(&self) {
        let pieces = [
            (Piece::Pawn, "P"),
            (Piece::Knight, "N"),
            (Piece::Bishop, "B"),
            (Piece::Rook, "R"),
            (Piece::Queen, "Q"),
            (Piece::King, "K"),
        ];

        println!("Side to move: {}", self.side_to_move());
        println!("Castling mask: {:#06b}", self.castling_rights().as_u8());
        if let Some(ep_target) = self.ep_target() {
            println!("EP target: {ep_target}");
        }
        println!("Hash: {:#018x}", self.hash());
        println!("All occupied: {:#018x}", self.all_occupancy().0);

        for color in [Color::White, Color::Black] {
            for (piece, name) in pieces {
                let bb = self.pieces(color, piece).0;
                println!("{color} {name}: {bb:#018x}");
            }
        }
        println!("------------------------------------");
    }

    /// Print an ASCII board (ranks 8 down to 1) with a piece letter per
    /// occupied square, uppercase for White.
    pub fn print_ascii(&self) {
        println!("  +---+---+---+---+---+---+---+---+");
        for rank in (0..8).rev() {
            print!("{} |", rank + 1);
            for file in 0..8 {
                let sq = crate::types::Square::new(rank, file);
                let ch = match self.piece_at(sq) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                print!(" {ch} |");
            }
            println!("\n  +---+---+---+---+---+---+---+---+");
        }
        println!("    a   b   c   d   e   f   g   h");
    }

    /// Print a labeled raw-hex grid of a single bitboard, ranks 8 down to 1.
    pub fn print_bitboard_grid(label: &str, bb: Bitboard) {
        println!("{label} {:#018x}", bb.0);
        println!("  +---+---+---+---+---+---+---+---+");
        for rank in (0..8).rev() {
            print!("{} |", rank + 1);
            for file in 0..8 {
                let idx = rank * 8 + file;
                let ch = if (bb.0 >> idx) & 1 == 1 { '1' } else { '.' };
                print!(" {ch} |");
            }
            println!("\n  +---+---+---+---+---+---+---+---+");
        }
        println!("    a   b   c   d   e   f   g   h");
        println!("------------------------------------");
    }
}
