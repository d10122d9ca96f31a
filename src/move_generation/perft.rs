//! Leaf-count oracle for move generation.
//!
//! Walks the legal move tree with copy-on-recurse, exactly the way a search
//! driver is expected to combine `generate_moves` and `apply_move`.

use crate::game_state::position::Position;
use crate::move_generation::attacks::checkers;
use crate::move_generation::legal_move_generator::generate_moves;
use crate::move_generation::move_list::MoveList;
use crate::moves::chess_move::Move;

pub fn perft(position: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = MoveList::new();
    generate_moves(position, checkers(position), &mut moves);

    let mut nodes = 0u64;
    for &mv in &moves {
        let mut next = *position;
        if next.apply_move(mv) {
            continue;
        }
        nodes += if depth == 1 { 1 } else { perft(&next, depth - 1) };
    }
    nodes
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide(position: &Position, depth: u8) -> Vec<(Move, u64)> {
    let mut moves = MoveList::new();
    generate_moves(position, checkers(position), &mut moves);

    let mut out = Vec::with_capacity(moves.len());
    for &mv in &moves {
        let mut next = *position;
        if next.apply_move(mv) {
            continue;
        }
        out.push((mv, perft(&next, depth.saturating_sub(1))));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::position::Position;
    use crate::move_generation::attacks::checkers;
    use crate::move_generation::legal_move_generator::generate_moves;
    use crate::move_generation::move_list::MoveList;

    fn assert_perft(fen: &str, expected: &[u64]) {
        let position = Position::from_fen(fen).expect("FEN should parse");
        for (depth_idx, &nodes) in expected.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;
            assert_eq!(perft(&position, depth), nodes, "{fen} at depth {depth}");
        }
    }

    #[test]
    fn start_position() {
        assert_perft(STARTING_POSITION_FEN, &[20, 400, 8902, 197_281]);
    }

    #[test]
    fn kiwipete() {
        assert_perft(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            &[48, 2039, 97_862],
        );
    }

    #[test]
    fn rook_endgame_with_en_passant_pins() {
        assert_perft("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", &[14, 191, 2812, 43_238]);
    }

    #[test]
    fn promotions_and_castling_under_pressure() {
        assert_perft(
            "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
            &[6, 264, 9467],
        );
        assert_perft(
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            &[44, 1486, 62_379],
        );
    }

    #[test]
    fn divide_sums_to_perft() {
        let position = Position::new_game();
        let divided = perft_divide(&position, 3);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 8902);
    }

    fn walk_consistency(position: &Position, depth: u8) {
        position
            .check_consistency()
            .expect("mailbox and bitboards should agree");
        if depth == 0 {
            return;
        }
        let mut moves = MoveList::new();
        generate_moves(position, checkers(position), &mut moves);
        for &mv in &moves {
            let mut next = *position;
            if next.apply_move(mv) {
                continue;
            }
            walk_consistency(&next, depth - 1);
        }
    }

    #[test]
    fn every_reachable_position_stays_consistent() {
        walk_consistency(&Position::new_game(), 3);
        let kiwipete = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("FEN should parse");
        walk_consistency(&kiwipete, 2);
    }
}
