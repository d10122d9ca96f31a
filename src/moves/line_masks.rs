//! Squares strictly between two aligned squares.
//!
//! Used to build the check filter: a non-king move answers a single slider
//! check only by landing between the king and the checker, or on the checker.

use crate::game_state::chess_types::{Bitboard, Square};

pub const BETWEEN: [[Bitboard; 64]; 64] = build_between();

/// Squares strictly between `a` and `b`; empty unless they share a line.
#[inline]
pub const fn between(a: Square, b: Square) -> Bitboard {
    BETWEEN[a as usize][b as usize]
}

const fn build_between() -> [[Bitboard; 64]; 64] {
    let mut table = [[0u64; 64]; 64];
    let mut a = 0usize;

    while a < 64 {
        let mut b = 0usize;
        while b < 64 {
            table[a][b] = squares_between(a as i32, b as i32);
            b += 1;
        }
        a += 1;
    }

    table
}

const fn squares_between(a: i32, b: i32) -> Bitboard {
    let df = b % 8 - a % 8;
    let dr = b / 8 - a / 8;

    let aligned = (df == 0 || dr == 0 || df == dr || df == -dr) && a != b;
    if !aligned {
        return 0;
    }

    let step_f = signum(df);
    let step_r = signum(dr);
    let mut file = a % 8 + step_f;
    let mut rank = a / 8 + step_r;
    let mut out = 0u64;

    while file != b % 8 || rank != b / 8 {
        out |= 1u64 << (rank * 8 + file);
        file += step_f;
        rank += step_r;
    }

    out
}

const fn signum(x: i32) -> i32 {
    if x > 0 {
        1
    } else if x < 0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::between;

    #[test]
    fn between_on_file_and_diagonal() {
        // e1 .. e8
        assert_eq!(between(4, 60).count_ones(), 6);
        // a1 .. h8
        assert_eq!(between(0, 63).count_ones(), 6);
        assert_ne!(between(0, 63) & (1u64 << 27), 0);
    }

    #[test]
    fn between_is_empty_for_adjacent_or_unaligned() {
        assert_eq!(between(4, 5), 0);
        assert_eq!(between(1, 18), 0); // knight jump
        assert_eq!(between(7, 7), 0);
    }
}
