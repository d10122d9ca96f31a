use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::move_list::MoveList;
use crate::moves::chess_move::{Move, Promotion};
use crate::moves::leaper_moves::pawn_attacks;

const RANK_1: Bitboard = 0xFF;
const FILE_A: Bitboard = 0x0101_0101_0101_0101;
const FILE_H: Bitboard = FILE_A << 7;

#[inline]
const fn rank_mask(rank: u8) -> Bitboard {
    RANK_1 << (rank * 8)
}

#[inline]
fn shift(bb: Bitboard, delta: i32) -> Bitboard {
    if delta >= 0 {
        bb << delta
    } else {
        bb >> -delta
    }
}

fn push_promotions(out: &mut MoveList, from: Square, to: Square) {
    for promotion in Promotion::ALL {
        out.push(Move::new(from, to, promotion));
    }
}

/// Pushes, captures, promotions and en-passant for the side to move.
///
/// Every destination except en-passant is intersected with `check_filter`;
/// an en-passant capture can remove a checking pawn that is not on its own
/// destination square, so it is left for the post-move check test.
pub fn generate_pawn_moves(position: &Position, check_filter: Bitboard, out: &mut MoveList) {
    let side = position.side_to_move;
    let (forward, left, right) = match side {
        Color::Light => (8, 7, 9),
        Color::Dark => (-8, -9, -7),
    };
    let third_rank = match side {
        Color::Light => rank_mask(2),
        Color::Dark => rank_mask(5),
    };
    let seventh_rank = match side {
        Color::Light => rank_mask(6),
        Color::Dark => rank_mask(1),
    };

    let empty = !position.occupancy();
    let enemies = position.color_occupancy(side.opposite());
    let pawns = position.pieces_of(side, PieceKind::Pawn);
    let promoting = pawns & seventh_rank;
    let regular = pawns & !seventh_rank;

    let single = shift(regular, forward) & empty;
    let mut double = shift(single & third_rank, forward) & empty & check_filter;
    let mut single = single & check_filter;

    while single != 0 {
        let to = pop_lsb(&mut single);
        out.push(Move::quiet((to as i32 - forward) as Square, to));
    }
    while double != 0 {
        let to = pop_lsb(&mut double);
        out.push(Move::quiet((to as i32 - 2 * forward) as Square, to));
    }

    let mut cap_left = shift(regular & !FILE_A, left) & enemies & check_filter;
    let mut cap_right = shift(regular & !FILE_H, right) & enemies & check_filter;
    while cap_left != 0 {
        let to = pop_lsb(&mut cap_left);
        out.push(Move::quiet((to as i32 - left) as Square, to));
    }
    while cap_right != 0 {
        let to = pop_lsb(&mut cap_right);
        out.push(Move::quiet((to as i32 - right) as Square, to));
    }

    if let Some(ep_square) = position.en_passant_square {
        let mut capturers = regular & pawn_attacks(side.opposite(), ep_square);
        while capturers != 0 {
            let from = pop_lsb(&mut capturers);
            out.push(Move::quiet(from, ep_square));
        }
    }

    let mut promo_push = shift(promoting, forward) & empty & check_filter;
    let mut promo_left = shift(promoting & !FILE_A, left) & enemies & check_filter;
    let mut promo_right = shift(promoting & !FILE_H, right) & enemies & check_filter;
    while promo_push != 0 {
        let to = pop_lsb(&mut promo_push);
        push_promotions(out, (to as i32 - forward) as Square, to);
    }
    while promo_left != 0 {
        let to = pop_lsb(&mut promo_left);
        push_promotions(out, (to as i32 - left) as Square, to);
    }
    while promo_right != 0 {
        let to = pop_lsb(&mut promo_right);
        push_promotions(out, (to as i32 - right) as Square, to);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::position::Position;
    use crate::move_generation::move_list::MoveList;
    use crate::moves::chess_move::{Move, Promotion};

    fn pawn_moves(fen: &str) -> MoveList {
        let position = Position::from_fen(fen).expect("FEN should parse");
        let mut out = MoveList::new();
        generate_pawn_moves(&position, !0, &mut out);
        out
    }

    #[test]
    fn start_position_has_sixteen_pawn_moves() {
        let moves = pawn_moves("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(moves.len(), 16);
        assert!(moves.contains(&Move::quiet(12, 28)));
    }

    #[test]
    fn blocked_pawn_has_no_double_push() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(moves.is_empty());
    }

    #[test]
    fn promotion_expands_to_four_moves() {
        let moves = pawn_moves("3nk3/2P5/8/8/8/8/8/4K3 w - - 0 1");
        // c7-c8 push and c7xd8 capture, four promotions each
        assert_eq!(moves.len(), 8);
        assert!(moves.contains(&Move::new(50, 58, Promotion::Queen)));
        assert!(moves.contains(&Move::new(50, 59, Promotion::Knight)));
    }

    #[test]
    fn en_passant_target_is_generated() {
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        assert!(moves.contains(&Move::quiet(36, 43)));
        assert!(moves.contains(&Move::quiet(36, 44)));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn dark_pawns_move_down_the_board() {
        let moves = pawn_moves("4k3/p7/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(moves.as_slice(), &[Move::quiet(48, 40), Move::quiet(48, 32)]);
    }
}
