//! Move generation pipeline.
//!
//! `generate_moves` produces pseudo-legal moves already narrowed by the check
//! status: only king moves under double check, and every other destination
//! restricted to the check filter under single check. Moves that expose the
//! king through a pin, or walk the king into an attacked square, are still
//! present; they are rejected when `apply_move` reports the mover in check.

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::attacks::checkers;
use crate::move_generation::legal_moves_king::{generate_castling_moves, generate_king_moves};
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::move_list::MoveList;
use crate::moves::chess_move::Move;
use crate::moves::leaper_moves::knight_attacks;
use crate::moves::line_masks::between;
use crate::moves::sliding_moves::{bishop_attacks, rook_attacks};

/// Squares a non-king move must land on given the current checkers.
#[inline]
pub fn check_filter(position: &Position, checkers: Bitboard) -> Bitboard {
    if checkers == 0 {
        return !0;
    }
    let king = position.king_square(position.side_to_move);
    let checker = checkers.trailing_zeros() as Square;
    between(king, checker) | square_bb(checker)
}

/// Fill `out` with the candidate moves for the side to move.
///
/// `checkers` must be the set returned by [`checkers`] for this position.
pub fn generate_moves(position: &Position, checkers: Bitboard, out: &mut MoveList) {
    out.clear();
    let side = position.side_to_move;
    let own = position.color_occupancy(side);
    let occupancy = position.occupancy();

    generate_king_moves(position, out);

    if checkers.count_ones() > 1 {
        return;
    }

    let filter = check_filter(position, checkers);

    generate_pawn_moves(position, filter, out);

    let mut knights = position.pieces_of(side, PieceKind::Knight);
    while knights != 0 {
        let from = pop_lsb(&mut knights);
        push_targets(out, from, knight_attacks(from) & !own & filter);
    }

    let queens = position.pieces_of(side, PieceKind::Queen);

    let mut diagonals = position.pieces_of(side, PieceKind::Bishop) | queens;
    while diagonals != 0 {
        let from = pop_lsb(&mut diagonals);
        push_targets(out, from, bishop_attacks(from, occupancy) & !own & filter);
    }

    let mut orthogonals = position.pieces_of(side, PieceKind::Rook) | queens;
    while orthogonals != 0 {
        let from = pop_lsb(&mut orthogonals);
        push_targets(out, from, rook_attacks(from, occupancy) & !own & filter);
    }

    if checkers == 0 {
        generate_castling_moves(position, out);
    }
}

#[inline]
fn push_targets(out: &mut MoveList, from: Square, mut targets: Bitboard) {
    while targets != 0 {
        out.push(Move::quiet(from, pop_lsb(&mut targets)));
    }
}

/// Fully legal moves: generate, then keep only those that survive
/// `apply_move` on a scratch copy without leaving the mover in check.
pub fn generate_legal_moves(position: &Position) -> MoveList {
    let mut candidates = MoveList::new();
    generate_moves(position, checkers(position), &mut candidates);

    let mut legal = MoveList::new();
    for &mv in &candidates {
        let mut scratch = *position;
        if !scratch.apply_move(mv) {
            legal.push(mv);
        }
    }
    legal
}
