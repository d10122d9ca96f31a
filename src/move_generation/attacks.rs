//! Square attack queries.
//!
//! `is_square_attacked` walks the 0x88 mailbox outward from the target square:
//! eight rays that stop at the first occupied slot, plus eight knight probes.
//! `attackers_to_square` answers the same question as a bitboard against a
//! caller-supplied occupancy, so exchange evaluation can model pieces that have
//! already left the square without touching the position.

use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::leaper_moves::{king_attacks, knight_attacks, pawn_attacks};
use crate::moves::sliding_moves::{bishop_attacks, rook_attacks};

const NORTH: i32 = 16;
const SOUTH: i32 = -16;
const EAST: i32 = 1;
const WEST: i32 = -1;

/// Ray directions; the first four are orthogonal, the rest diagonal.
const ATTACK_RAYS: [i32; 8] = [
    EAST,
    WEST,
    SOUTH,
    NORTH,
    SOUTH + EAST,
    SOUTH + WEST,
    NORTH + EAST,
    NORTH + WEST,
];

const KNIGHT_JUMPS: [i32; 8] = [
    EAST * 2 + NORTH,
    EAST * 2 + SOUTH,
    SOUTH * 2 + EAST,
    SOUTH * 2 + WEST,
    WEST * 2 + SOUTH,
    WEST * 2 + NORTH,
    NORTH * 2 + WEST,
    NORTH * 2 + EAST,
];

/// True when any piece of `by` attacks `square`.
pub fn is_square_attacked(position: &Position, square: Square, by: Color) -> bool {
    let origin = mailbox_index(square) as i32;

    for (ray, &dir) in ATTACK_RAYS.iter().enumerate() {
        let orthogonal = ray < 4;
        let mut target = origin + dir;

        while !is_off_board(target) {
            let Some(piece) = position.piece_at_mailbox(target as usize) else {
                target += dir;
                continue;
            };

            if piece.color == by {
                let adjacent = target == origin + dir;
                let hit = match piece.kind {
                    PieceKind::Queen => true,
                    PieceKind::Rook => orthogonal,
                    PieceKind::Bishop => !orthogonal,
                    PieceKind::King => adjacent,
                    // A light pawn attacks upward, so it sits below the target.
                    PieceKind::Pawn => {
                        adjacent
                            && match by {
                                Color::Light => dir == SOUTH + EAST || dir == SOUTH + WEST,
                                Color::Dark => dir == NORTH + EAST || dir == NORTH + WEST,
                            }
                    }
                    PieceKind::Knight => false,
                };
                if hit {
                    return true;
                }
            }
            break;
        }
    }

    KNIGHT_JUMPS.iter().any(|&jump| {
        let target = origin + jump;
        !is_off_board(target)
            && position.piece_at_mailbox(target as usize) == Some(Piece::new(by, PieceKind::Knight))
    })
}

/// Every piece of `by` attacking `square`, considering only pieces present in
/// `occupancy`. Sliders are traced through `occupancy` as well, so removing a
/// piece from the mask uncovers any x-ray attacker behind it.
pub fn attackers_to_square(
    position: &Position,
    square: Square,
    by: Color,
    occupancy: Bitboard,
) -> Bitboard {
    let queens = position.pieces(PieceKind::Queen);
    let diagonal = position.pieces(PieceKind::Bishop) | queens;
    let orthogonal = position.pieces(PieceKind::Rook) | queens;

    let attackers = (pawn_attacks(by.opposite(), square) & position.pieces(PieceKind::Pawn))
        | (knight_attacks(square) & position.pieces(PieceKind::Knight))
        | (king_attacks(square) & position.pieces(PieceKind::King))
        | (bishop_attacks(square, occupancy) & diagonal)
        | (rook_attacks(square, occupancy) & orthogonal);

    attackers & position.color_occupancy(by) & occupancy
}

/// Opposing pieces giving check to the side to move.
#[inline]
pub fn checkers(position: &Position) -> Bitboard {
    let side = position.side_to_move;
    attackers_to_square(
        position,
        position.king_square(side),
        side.opposite(),
        position.occupancy(),
    )
}

#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    is_square_attacked(position, position.king_square(color), color.opposite())
}
