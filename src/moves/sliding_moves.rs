//! Occupancy-indexed attack sets for bishops, rooks and queens.
//!
//! Each square owns one precomputed ray per direction. The attack set along a
//! ray is the full ray minus everything behind the nearest blocker, found with
//! a single bit scan on `ray & occupancy`. Positive directions scan from the
//! low end, negative ones from the high end.

use crate::game_state::chess_types::{Bitboard, Square};

/// (file step, rank step, increasing square index?)
const DIRECTIONS: [(i32, i32, bool); 8] = [
    (0, 1, true),    // north
    (1, 0, true),    // east
    (0, -1, false),  // south
    (-1, 0, false),  // west
    (1, 1, true),    // north-east
    (-1, 1, true),   // north-west
    (1, -1, false),  // south-east
    (-1, -1, false), // south-west
];

const ORTHOGONAL: [usize; 4] = [0, 1, 2, 3];
const DIAGONAL: [usize; 4] = [4, 5, 6, 7];

/// `[direction][square]`: every square along that ray on an empty board.
pub const RAYS: [[Bitboard; 64]; 8] = build_rays();

const fn build_rays() -> [[Bitboard; 64]; 8] {
    let mut table = [[0u64; 64]; 8];
    let mut dir = 0usize;

    while dir < 8 {
        let mut sq = 0usize;
        while sq < 64 {
            let (file_step, rank_step, _) = DIRECTIONS[dir];
            let mut file = (sq % 8) as i32 + file_step;
            let mut rank = (sq / 8) as i32 + rank_step;
            let mut ray = 0u64;

            while file >= 0 && file < 8 && rank >= 0 && rank < 8 {
                ray |= 1u64 << (rank * 8 + file);
                file += file_step;
                rank += rank_step;
            }

            table[dir][sq] = ray;
            sq += 1;
        }
        dir += 1;
    }

    table
}

#[inline]
fn ray_attacks(dir: usize, square: Square, occupancy: Bitboard) -> Bitboard {
    let ray = RAYS[dir][square as usize];
    let blockers = ray & occupancy;
    if blockers == 0 {
        return ray;
    }

    let blocker = if DIRECTIONS[dir].2 {
        blockers.trailing_zeros()
    } else {
        63 - blockers.leading_zeros()
    };
    ray ^ RAYS[dir][blocker as usize]
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    DIAGONAL
        .iter()
        .fold(0u64, |acc, &dir| acc | ray_attacks(dir, square, occupancy))
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    ORTHOGONAL
        .iter()
        .fold(0u64, |acc, &dir| acc | ray_attacks(dir, square, occupancy))
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}
