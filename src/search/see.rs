//! Static exchange evaluation.
//!
//! Answers whether resolving every capture on a move's destination leaves the
//! mover at least `threshold` centipawns ahead. Attackers are resolved cheapest
//! first against a shrinking occupancy mask, so sliders lined up behind an
//! attacker join the exchange once it has been used. Pins and the legality of
//! recaptures are ignored.

use crate::game_state::chess_rules::see_value;
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::attacks::attackers_to_square;
use crate::moves::chess_move::Move;

/// Value of what `mv` captures (en passant counts as a pawn).
#[inline]
pub fn captured_value(position: &Position, mv: Move) -> i32 {
    match position.piece_at(mv.to()) {
        Some(piece) => see_value(piece.kind),
        None if is_en_passant(position, mv) => see_value(PieceKind::Pawn),
        None => 0,
    }
}

#[inline]
pub fn is_en_passant(position: &Position, mv: Move) -> bool {
    position.en_passant_square == Some(mv.to())
        && position.piece_at(mv.from()).map(|p| p.kind) == Some(PieceKind::Pawn)
}

#[inline]
pub fn is_capture(position: &Position, mv: Move) -> bool {
    position.piece_at(mv.to()).is_some() || is_en_passant(position, mv)
}

/// Remove the cheapest piece of `color` attacking `square` from `occupancy`
/// and return its kind.
fn pop_cheapest_attacker(
    position: &Position,
    square: Square,
    color: Color,
    occupancy: &mut Bitboard,
) -> Option<PieceKind> {
    let attackers = attackers_to_square(position, square, color, *occupancy);
    if attackers == 0 {
        return None;
    }

    PieceKind::ALL.into_iter().find_map(|kind| {
        let candidates = attackers & position.pieces(kind);
        if candidates == 0 {
            return None;
        }
        *occupancy &= !(candidates & candidates.wrapping_neg());
        Some(kind)
    })
}

pub fn see(position: &Position, mv: Move, threshold: i32) -> bool {
    let color = position.side_to_move;
    let from = mv.from();
    let to = mv.to();

    let Some(moving) = position.piece_at(from) else {
        return false;
    };

    let mut gain = captured_value(position, mv);
    let mut risk = see_value(moving.kind);

    if gain < threshold {
        return false;
    }

    let mut occupancy = position.occupancy() & !square_bb(from);
    if is_en_passant(position, mv) {
        let behind = match color {
            Color::Light => to - 8,
            Color::Dark => to + 8,
        };
        occupancy &= !square_bb(behind);
    }

    while gain - risk < threshold {
        let Some(theirs) = pop_cheapest_attacker(position, to, color.opposite(), &mut occupancy)
        else {
            return true;
        };

        gain -= risk + 1;
        risk = see_value(theirs);

        if gain + risk < threshold {
            return false;
        }

        let Some(ours) = pop_cheapest_attacker(position, to, color, &mut occupancy) else {
            return false;
        };

        gain += risk - 1;
        risk = see_value(ours);
    }

    true
}
