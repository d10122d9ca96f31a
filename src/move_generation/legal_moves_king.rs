use crate::game_state::chess_rules::{CASTLING_PATH, KING_HOME, ROOK_HOME};
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::attacks::is_square_attacked;
use crate::move_generation::move_list::MoveList;
use crate::moves::chess_move::Move;
use crate::moves::leaper_moves::king_attacks;

/// One-step king moves onto any square not holding a friendly piece.
pub fn generate_king_moves(position: &Position, out: &mut MoveList) {
    let side = position.side_to_move;
    let from = position.king_square(side);
    let mut targets = king_attacks(from) & !position.color_occupancy(side);
    while targets != 0 {
        out.push(Move::quiet(from, pop_lsb(&mut targets)));
    }
}

/// Two-square king moves for each wing whose right is held, whose path is
/// empty, and whose transit square is not attacked. Only call when the side to
/// move is not in check; the landing square is verified after the move.
pub fn generate_castling_moves(position: &Position, out: &mut MoveList) {
    let side = position.side_to_move;
    let enemy = side.opposite();
    let king_from = KING_HOME[side.index()];

    if position.piece_at(king_from) != Some(Piece::new(side, PieceKind::King)) {
        return;
    }

    for castle_side in CastleSide::BOTH {
        if !position.can_castle(side, castle_side) {
            continue;
        }

        let rook_from = ROOK_HOME[side.index()][castle_side.index()];
        if position.piece_at(rook_from) != Some(Piece::new(side, PieceKind::Rook)) {
            continue;
        }

        if position.occupancy() & CASTLING_PATH[side.index()][castle_side.index()] != 0 {
            continue;
        }

        let (transit, king_to) = match castle_side {
            CastleSide::Kingside => (king_from + 1, king_from + 2),
            CastleSide::Queenside => (king_from - 1, king_from - 2),
        };
        if is_square_attacked(position, transit, enemy) {
            continue;
        }

        out.push(Move::quiet(king_from, king_to));
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_castling_moves, generate_king_moves};
    use crate::game_state::position::Position;
    use crate::move_generation::move_list::MoveList;
    use crate::moves::chess_move::Move;

    fn castles(fen: &str) -> MoveList {
        let position = Position::from_fen(fen).expect("FEN should parse");
        let mut out = MoveList::new();
        generate_castling_moves(&position, &mut out);
        out
    }

    #[test]
    fn both_wings_available() {
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(moves.as_slice(), &[Move::quiet(4, 2), Move::quiet(4, 6)]);
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert_eq!(moves.as_slice(), &[Move::quiet(60, 58), Move::quiet(60, 62)]);
    }

    #[test]
    fn each_precondition_removes_castling() {
        // Right missing.
        assert!(!castles("4k3/8/8/8/8/8/8/4K2R w Q - 0 1").contains(&Move::quiet(4, 6)));
        // Path blocked.
        assert!(castles("4k3/8/8/8/8/8/8/4KB1R w K - 0 1").is_empty());
        // Transit square attacked.
        assert!(castles("4kr2/8/8/8/8/8/8/4K2R w K - 0 1").is_empty());
        // Rook missing from its home square.
        assert!(castles("4k3/8/8/8/8/8/8/4K1R1 w K - 0 1").is_empty());
        // King away from home.
        assert!(castles("4k3/8/8/8/8/8/8/3K3R w K - 0 1").is_empty());
        // Baseline with all preconditions satisfied.
        assert_eq!(
            castles("4k3/8/8/8/8/8/8/4K2R w K - 0 1").as_slice(),
            &[Move::quiet(4, 6)]
        );
    }

    #[test]
    fn queenside_b_file_attack_does_not_matter() {
        let moves = castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert_eq!(moves.as_slice(), &[Move::quiet(4, 2)]);
    }

    #[test]
    fn king_steps_skip_friendly_squares() {
        let position = Position::new_game();
        let mut out = MoveList::new();
        generate_king_moves(&position, &mut out);
        assert!(out.is_empty());
    }
}
