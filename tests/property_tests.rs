//! Property-based tests over random legal move sequences: make/unmake
//! round-trips the hash and position, the incremental hash always matches
//! a from-scratch recomputation, and FEN round-trips through
//! `to_fen`/`try_from_fen`.

use bitboard_core::{Board, MoveList};
use proptest::prelude::*;

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

/// Play up to `choices.len()` random legal moves from `board`, selecting
/// the `i`th move by `choices[i] % move_count`, returning the list of
/// moves actually played (for unmaking in reverse).
fn play_random_moves(board: &mut Board, choices: &[usize]) -> Vec<bitboard_core::Move> {
    let mut played = Vec::new();
    for &choice in choices {
        let mut list = MoveList::new();
        board.generate_moves(&mut list);
        if list.is_empty() {
            break;
        }
        let mv = *list.as_slice().iter().nth(choice % list.len()).expect("index in range");
        let mover = board.side_to_move();
        board.make(mv);
        if board.in_check(mover) {
            board.unmake(mv);
            continue;
        }
        played.push(mv);
    }
    played
}

proptest! {
    #[test]
    fn make_unmake_restores_hash_and_fen(choices in prop::collection::vec(0..64usize, 0..20)) {
        let mut board = Board::from_fen(START);
        let initial_hash = board.hash();
        let initial_fen = board.to_fen();

        let played = play_random_moves(&mut board, &choices);
        for &mv in played.iter().rev() {
            board.unmake(mv);
        }

        prop_assert_eq!(board.hash(), initial_hash);
        prop_assert_eq!(board.to_fen(), initial_fen);
    }

    #[test]
    fn incremental_hash_matches_recomputation(choices in prop::collection::vec(0..64usize, 0..20)) {
        let mut board = Board::from_fen(START);
        for &choice in &choices {
            let mut list = MoveList::new();
            board.generate_moves(&mut list);
            if list.is_empty() {
                break;
            }
            let mv = *list.as_slice().iter().nth(choice % list.len()).expect("index in range");
            let mover = board.side_to_move();
            board.make(mv);
            if board.in_check(mover) {
                board.unmake(mv);
                continue;
            }
            prop_assert_eq!(board.hash(), board.recompute_hash());
        }
    }

    #[test]
    fn fen_roundtrip_preserves_position(choices in prop::collection::vec(0..64usize, 0..20)) {
        let mut board = Board::from_fen(START);
        play_random_moves(&mut board, &choices);

        let fen = board.to_fen();
        let restored = Board::from_fen(&fen);

        prop_assert_eq!(board.hash(), restored.hash());
        prop_assert_eq!(board.side_to_move(), restored.side_to_move());
        prop_assert_eq!(board.castling_rights(), restored.castling_rights());
        prop_assert_eq!(board.ep_target(), restored.ep_target());
    }

    #[test]
    fn castling_moves_never_leave_own_king_in_check(choices in prop::collection::vec(0..64usize, 0..10)) {
        let mut board = Board::from_fen(START);
        play_random_moves(&mut board, &choices);

        let mover = board.side_to_move();
        let mut list = MoveList::new();
        board.generate_moves(&mut list);
        for &mv in list.iter().filter(|mv| mv.is_castle()) {
            board.make(mv);
            let left_in_check = board.in_check(mover);
            board.unmake(mv);
            prop_assert!(!left_in_check, "castle {mv:?} left the mover's king in check");
        }
    }
}

#[test]
fn single_long_random_walk_preserves_consistency() {
    let mut board = Board::from_fen(START);
    let choices: Vec<usize> = (0..60).map(|i| (i * 2654435761usize) & 0xff).collect();
    play_random_moves(&mut board, &choices);
    assert!(board.check_consistency());
}
