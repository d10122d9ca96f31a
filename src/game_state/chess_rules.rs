//! Canonical chess-rule constants.
//!
//! Starting position, castling geometry, and the material values used by the
//! exchange evaluator live here so every subsystem agrees on them.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Home square of each side's king.
pub const KING_HOME: [Square; 2] = [4, 60];

/// Home square of each side's rooks, `[color][castle side]`.
pub const ROOK_HOME: [[Square; 2]; 2] = [[0, 7], [56, 63]];

/// Squares that must be empty for castling, `[color][castle side]`.
pub const CASTLING_PATH: [[Bitboard; 2]; 2] = [
    [
        square_bb(1) | square_bb(2) | square_bb(3),
        square_bb(5) | square_bb(6),
    ],
    [
        square_bb(57) | square_bb(58) | square_bb(59),
        square_bb(61) | square_bb(62),
    ],
];

/// Piece values used by static exchange evaluation and capture ordering.
pub const SEE_VALUES: [i32; 6] = [100, 450, 450, 650, 1250, 10000];

#[inline]
pub const fn see_value(kind: PieceKind) -> i32 {
    SEE_VALUES[kind.index()]
}
