//! Per-search-thread heuristic state.
//!
//! Each search thread owns one `ThreadInfo` next to its own `Position`; nothing
//! here is shared or locked. History tables are indexed by colored piece and
//! destination square, continuation history additionally by the piece and
//! destination of an earlier ply.

use log::debug;

use crate::game_state::chess_types::{Piece, Square};
use crate::moves::chess_move::{Move, MOVE_NONE};

pub const MAX_SEARCH_DEPTH: usize = 127;
pub const GAME_HISTORY_SIZE: usize = 2000;
pub const MAX_HISTORY: i32 = 16_384;

const PIECE_SQUARES: usize = Piece::COUNT * 64;

/// One played move in the game/search line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameHistoryEntry {
    pub position_key: u64,
    pub played_move: Move,
    pub piece_moved: Option<Piece>,
}

#[derive(Debug, Clone)]
pub struct ThreadInfo {
    pub thread_id: u16,
    pub game_history: Vec<GameHistoryEntry>,
    pub search_ply: usize,
    pub nodes: u64,
    pub killers: [Move; MAX_SEARCH_DEPTH + 1],
    history: Vec<i32>,
    capture_history: Vec<i32>,
    continuation_history: Vec<i32>,
}

impl Default for ThreadInfo {
    fn default() -> Self {
        Self::new(0)
    }
}

#[inline]
const fn piece_square(piece: Piece, to: Square) -> usize {
    piece.index() * 64 + to as usize
}

#[inline]
fn gravity(entry: &mut i32, bonus: i32) {
    let clamped = bonus.clamp(-MAX_HISTORY, MAX_HISTORY);
    *entry += clamped - *entry * clamped.abs() / MAX_HISTORY;
}

impl ThreadInfo {
    pub fn new(thread_id: u16) -> Self {
        Self {
            thread_id,
            game_history: Vec::with_capacity(GAME_HISTORY_SIZE),
            search_ply: 0,
            nodes: 0,
            killers: [MOVE_NONE; MAX_SEARCH_DEPTH + 1],
            history: vec![0; PIECE_SQUARES],
            capture_history: vec![0; PIECE_SQUARES],
            continuation_history: vec![0; PIECE_SQUARES * PIECE_SQUARES],
        }
    }

    /// Number of moves recorded so far (game moves plus the current line).
    #[inline]
    pub fn game_ply(&self) -> usize {
        self.game_history.len()
    }

    /// Record a move about to be searched or played.
    pub fn push_move(&mut self, position_key: u64, played_move: Move, piece_moved: Option<Piece>) {
        self.game_history.push(GameHistoryEntry {
            position_key,
            played_move,
            piece_moved,
        });
    }

    pub fn pop_move(&mut self) -> Option<GameHistoryEntry> {
        self.game_history.pop()
    }

    /// Entry `plies_back` moves before the current one, if it was a real move
    /// made inside the current search line.
    pub fn previous_move(&self, plies_back: usize) -> Option<(Piece, Square)> {
        if plies_back == 0 || self.search_ply < plies_back {
            return None;
        }
        let entry = self.game_history.get(self.game_ply().checked_sub(plies_back)?)?;
        if entry.played_move.is_none() {
            return None;
        }
        entry.piece_moved.map(|piece| (piece, entry.played_move.to()))
    }

    #[inline]
    pub fn history(&self, piece: Piece, to: Square) -> i32 {
        self.history[piece_square(piece, to)]
    }

    #[inline]
    pub fn capture_history(&self, piece: Piece, to: Square) -> i32 {
        self.capture_history[piece_square(piece, to)]
    }

    #[inline]
    pub fn continuation_history(
        &self,
        previous: (Piece, Square),
        piece: Piece,
        to: Square,
    ) -> i32 {
        let (prev_piece, prev_to) = previous;
        self.continuation_history
            [piece_square(prev_piece, prev_to) * PIECE_SQUARES + piece_square(piece, to)]
    }

    pub fn update_history(&mut self, piece: Piece, to: Square, bonus: i32) {
        gravity(&mut self.history[piece_square(piece, to)], bonus);
    }

    pub fn update_capture_history(&mut self, piece: Piece, to: Square, bonus: i32) {
        gravity(&mut self.capture_history[piece_square(piece, to)], bonus);
    }

    /// Apply `bonus` to the continuation entries keyed on the last one and two
    /// plies, whichever exist.
    pub fn update_continuation_history(&mut self, piece: Piece, to: Square, bonus: i32) {
        for plies_back in [1, 2] {
            if let Some((prev_piece, prev_to)) = self.previous_move(plies_back) {
                let idx = piece_square(prev_piece, prev_to) * PIECE_SQUARES + piece_square(piece, to);
                gravity(&mut self.continuation_history[idx], bonus);
            }
        }
    }

    #[inline]
    pub fn killer(&self) -> Move {
        self.killers
            .get(self.search_ply)
            .copied()
            .unwrap_or(MOVE_NONE)
    }

    pub fn store_killer(&mut self, mv: Move) {
        if let Some(slot) = self.killers.get_mut(self.search_ply) {
            *slot = mv;
        }
    }

    /// Reset per-search counters while keeping learned history.
    pub fn clear_for_new_search(&mut self) {
        debug!("thread {}: clearing killers after {} nodes", self.thread_id, self.nodes);
        self.nodes = 0;
        self.search_ply = 0;
        self.killers = [MOVE_NONE; MAX_SEARCH_DEPTH + 1];
    }

    /// Forget everything, including game history (new game).
    pub fn clear_all(&mut self) {
        debug!("thread {}: clearing all heuristic tables", self.thread_id);
        self.clear_for_new_search();
        self.game_history.clear();
        self.history.fill(0);
        self.capture_history.fill(0);
        self.continuation_history.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::{ThreadInfo, MAX_HISTORY};
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::moves::chess_move::{Move, MOVE_NONE};

    const LIGHT_KNIGHT: Piece = Piece::new(Color::Light, PieceKind::Knight);
    const DARK_PAWN: Piece = Piece::new(Color::Dark, PieceKind::Pawn);

    #[test]
    fn gravity_update_saturates() {
        let mut info = ThreadInfo::new(0);
        for _ in 0..200 {
            info.update_history(LIGHT_KNIGHT, 21, 4000);
        }
        let value = info.history(LIGHT_KNIGHT, 21);
        assert!(value > 0 && value <= MAX_HISTORY);
        info.update_history(LIGHT_KNIGHT, 21, -4000);
        assert!(info.history(LIGHT_KNIGHT, 21) < value);
    }

    #[test]
    fn previous_move_requires_search_depth() {
        let mut info = ThreadInfo::new(0);
        info.push_move(1, Move::quiet(52, 36), Some(DARK_PAWN));
        assert_eq!(info.previous_move(1), None);
        info.search_ply = 1;
        assert_eq!(info.previous_move(1), Some((DARK_PAWN, 36)));
        assert_eq!(info.previous_move(2), None);
    }

    #[test]
    fn continuation_history_keys_on_previous_plies() {
        let mut info = ThreadInfo::new(0);
        info.push_move(1, Move::quiet(6, 21), Some(LIGHT_KNIGHT));
        info.push_move(2, Move::quiet(52, 36), Some(DARK_PAWN));
        info.search_ply = 2;

        info.update_continuation_history(LIGHT_KNIGHT, 36, 1000);
        assert!(info.continuation_history((DARK_PAWN, 36), LIGHT_KNIGHT, 36) > 0);
        assert!(info.continuation_history((LIGHT_KNIGHT, 21), LIGHT_KNIGHT, 36) > 0);
        assert_eq!(info.continuation_history((DARK_PAWN, 35), LIGHT_KNIGHT, 36), 0);
    }

    #[test]
    fn killers_are_per_ply_and_cleared_between_searches() {
        let mut info = ThreadInfo::new(3);
        info.search_ply = 4;
        info.store_killer(Move::quiet(1, 18));
        assert_eq!(info.killer(), Move::quiet(1, 18));
        info.search_ply = 5;
        assert_eq!(info.killer(), MOVE_NONE);

        info.nodes = 99;
        info.update_history(LIGHT_KNIGHT, 18, 500);
        info.clear_for_new_search();
        assert_eq!(info.nodes, 0);
        assert!(info.killers.iter().all(|k| k.is_none()));
        assert!(info.history(LIGHT_KNIGHT, 18) > 0);

        info.clear_all();
        assert_eq!(info.history(LIGHT_KNIGHT, 18), 0);
    }
}
