//! In-place state transition.
//!
//! `apply_move` mutates the position and reports whether the mover's own king
//! is attacked afterwards. There is no unmake: a caller that may need the old
//! state copies the position first (it is `Copy`) and drops the copy when the
//! move turns out to be illegal.

use crate::game_state::chess_rules::{KING_HOME, ROOK_HOME};
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::attacks::is_square_attacked;
use crate::moves::chess_move::Move;

impl Position {
    /// See [`apply_move`].
    #[inline]
    pub fn apply_move(&mut self, mv: Move) -> bool {
        apply_move(self, mv)
    }
}

/// Play `mv` on `position`. Returns `true` when the side that moved is left in
/// check, which makes the move illegal. A move whose origin does not hold a
/// piece of the side to move is also reported illegal, and the position is
/// left untouched in that case.
pub fn apply_move(position: &mut Position, mv: Move) -> bool {
    let from = mv.from();
    let to = mv.to();
    let color = position.side_to_move;
    let enemy = color.opposite();

    let Some(moving) = position.piece_at(from) else {
        return true;
    };
    if moving.color != color {
        return true;
    }

    position.halfmove_clock = position.halfmove_clock.saturating_add(1);
    let mut new_en_passant = None;

    if position.take_piece(to).is_some() {
        position.halfmove_clock = 0;
    }
    position.move_piece(from, to);

    match moving.kind {
        PieceKind::Pawn => {
            position.halfmove_clock = 0;

            if square_rank(to) == color.promotion_rank() {
                position.remove_piece(to);
                position.place_piece(to, Piece::new(color, mv.promotion().piece_kind()));
            } else if from.abs_diff(to) == 16 {
                new_en_passant = Some((from + to) / 2);
            } else if Some(to) == position.en_passant_square {
                let captured = match color {
                    Color::Light => to - 8,
                    Color::Dark => to + 8,
                };
                position.remove_piece(captured);
            }
        }
        PieceKind::King => {
            position.castling_rights[color.index()] = [false; 2];

            let rook_squares = &ROOK_HOME[color.index()];
            if to == from + 2 {
                position.move_piece(rook_squares[CastleSide::Kingside.index()], from + 1);
            } else if to + 2 == from {
                position.move_piece(rook_squares[CastleSide::Queenside.index()], from - 1);
            }
        }
        _ => {}
    }

    revoke_castling_rights(position, from);
    revoke_castling_rights(position, to);

    position.side_to_move = enemy;
    if color == Color::Dark {
        position.fullmove_number = position.fullmove_number.saturating_add(1);
    }
    position.en_passant_square = new_en_passant;

    is_square_attacked(position, position.king_square(color), enemy)
}

/// Any move touching a king or rook home square ends the matching rights.
#[inline]
fn revoke_castling_rights(position: &mut Position, square: Square) {
    for color in Color::BOTH {
        if square == KING_HOME[color.index()] {
            position.castling_rights[color.index()] = [false; 2];
        }
        for side in CastleSide::BOTH {
            if square == ROOK_HOME[color.index()][side.index()] {
                position.castling_rights[color.index()][side.index()] = false;
            }
        }
    }
}
