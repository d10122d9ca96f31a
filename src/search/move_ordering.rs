//! Move ordering for the search driver.
//!
//! `score_moves` gives every generated move a priority; the bands are wide
//! enough that a lower band can never overtake a higher one through history
//! scores, which are bounded by `MAX_HISTORY`. `get_next_move` then hands the
//! moves out best-first, one partial selection step at a time.

use crate::game_state::chess_rules::see_value;
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::move_list::{MoveList, ScoreList};
use crate::moves::chess_move::{Move, Promotion};
use crate::search::see::{captured_value, is_capture, see};
use crate::search::thread_info::ThreadInfo;

pub const HASH_MOVE_SCORE: i32 = 10_000_000;
pub const QUEEN_PROMOTION_SCORE: i32 = 5_000_000;
pub const GOOD_CAPTURE_SCORE: i32 = 2_000_000;
pub const BAD_CAPTURE_SCORE: i32 = -2_000_000;
pub const KILLER_MOVE_SCORE: i32 = 100_000;

/// Captures that lose less than about a pawn still count as good.
pub const GOOD_CAPTURE_SEE_THRESHOLD: i32 = -107;

#[inline]
fn is_queen_promotion(position: &Position, mv: Move) -> bool {
    let Some(piece) = position.piece_at(mv.from()) else {
        return false;
    };
    piece.kind == PieceKind::Pawn
        && square_rank(mv.to()) == piece.color.promotion_rank()
        && mv.promotion() == Promotion::Queen
}

/// Score every move in `moves` into `scores` (cleared first, same order).
pub fn score_moves(
    position: &Position,
    thread_info: &ThreadInfo,
    moves: &MoveList,
    hash_move: Option<Move>,
    scores: &mut ScoreList,
) {
    scores.clear();

    let their_last = thread_info.previous_move(1);
    let our_last = thread_info.previous_move(2);
    let killer = thread_info.killer();

    for &mv in moves {
        let Some(piece) = position.piece_at(mv.from()) else {
            scores.push(i32::MIN);
            continue;
        };
        let to = mv.to();

        let score = if Some(mv) == hash_move {
            HASH_MOVE_SCORE
        } else if is_queen_promotion(position, mv) {
            QUEEN_PROMOTION_SCORE
        } else if is_capture(position, mv) {
            let band = if see(position, mv, GOOD_CAPTURE_SEE_THRESHOLD) {
                GOOD_CAPTURE_SCORE
            } else {
                BAD_CAPTURE_SCORE
            };
            band + captured_value(position, mv) * 100 - see_value(piece.kind) / 100
                + thread_info.capture_history(piece, to)
        } else if mv == killer {
            KILLER_MOVE_SCORE
        } else {
            let mut quiet = thread_info.history(piece, to);
            if let Some(previous) = their_last {
                quiet += thread_info.continuation_history(previous, piece, to);
            }
            if let Some(previous) = our_last {
                quiet += thread_info.continuation_history(previous, piece, to);
            }
            quiet
        };

        scores.push(score);
    }
}

/// Swap the best-scored move at or after `start` into `start` and return it.
///
/// Both lists are permuted in lockstep so scores stay attached to their moves.
/// `start` must index a move that has not been handed out yet; callers stop
/// once `start == moves.len()`.
pub fn get_next_move(moves: &mut MoveList, scores: &mut ScoreList, start: usize) -> Move {
    debug_assert!(
        start < moves.len(),
        "get_next_move start {start} is past the {} scored moves",
        moves.len()
    );
    let mut best_idx = start;
    let mut best_score = scores[start];
    for (idx, &score) in scores.iter().enumerate().take(moves.len()).skip(start + 1) {
        if score > best_score {
            best_score = score;
            best_idx = idx;
        }
    }

    moves.swap(start, best_idx);
    scores.swap(start, best_idx);
    moves[start]
}
