//! Fixed-capacity move and score buffers.
//!
//! Both live on the caller's stack and are refilled in place for every node.
//! No legal chess position has more than 218 moves, so overflowing the
//! capacity means a generator bug and panics instead of truncating.

use std::ops::Deref;

use crate::moves::chess_move::{Move, MOVE_NONE};

pub const MAX_MOVES: usize = 256;

#[derive(Debug, Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl Default for MoveList {
    fn default() -> Self {
        Self {
            moves: [MOVE_NONE; MAX_MOVES],
            len: 0,
        }
    }
}

impl MoveList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        assert!(self.len < MAX_MOVES, "move list overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len]
    }
}

impl Deref for MoveList {
    type Target = [Move];

    fn deref(&self) -> &[Move] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Ordering priorities, parallel to a [`MoveList`].
#[derive(Debug, Clone)]
pub struct ScoreList {
    scores: [i32; MAX_MOVES],
    len: usize,
}

impl Default for ScoreList {
    fn default() -> Self {
        Self {
            scores: [0; MAX_MOVES],
            len: 0,
        }
    }
}

impl ScoreList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, score: i32) {
        assert!(self.len < MAX_MOVES, "score list overflow");
        self.scores[self.len] = score;
        self.len += 1;
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.scores[..self.len]
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.scores[..self.len].swap(a, b);
    }
}

impl Deref for ScoreList {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        self.as_slice()
    }
}
