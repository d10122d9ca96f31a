//! Coordinate move text (`e2e4`, `e7e8Q`) to and from packed moves.

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, position::Position};
use crate::moves::chess_move::{Move, Promotion};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

#[inline]
fn is_promoting(position: &Position, from: Square, to: Square) -> bool {
    position.piece_at(from).is_some_and(|piece| {
        piece.kind == PieceKind::Pawn && square_rank(to) == piece.color.promotion_rank()
    })
}

/// Render `mv` in coordinate form. The promotion letter is only written for a
/// pawn reaching its last rank.
pub fn move_to_long_algebraic(position: &Position, mv: Move) -> String {
    let mut out = square_to_algebraic(mv.from());
    out.push_str(&square_to_algebraic(mv.to()));
    if is_promoting(position, mv.from(), mv.to()) {
        out.push(mv.promotion().to_char());
    }
    out
}

pub fn long_algebraic_to_move(position: &Position, long_algebraic: &str) -> Result<Move, ChessErrors> {
    let invalid = |reason: &str| ChessErrors::InvalidMoveString(format!("{long_algebraic}: {reason}"));

    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(invalid("expected four or five characters"));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;

    match position.piece_at(from) {
        Some(piece) if piece.color == position.side_to_move => {}
        Some(_) => return Err(invalid("origin piece does not belong to the side to move")),
        None => return Err(invalid("no piece on origin square")),
    }

    let promotion = long_algebraic[4..].chars().next();
    match (is_promoting(position, from, to), promotion) {
        (true, Some(ch)) => Promotion::from_char(ch)
            .map(|promotion| Move::new(from, to, promotion))
            .ok_or_else(|| invalid("unknown promotion piece")),
        (true, None) => Err(invalid("missing promotion piece")),
        (false, Some(_)) => Err(invalid("only a pawn reaching its last rank may promote")),
        (false, None) => Ok(Move::quiet(from, to)),
    }
}
