//! Zobrist-keyed transposition table handed to the search driver.
//!
//! The move-generation core only reads the hash move back out of it for
//! ordering. Slots are addressed by the low bits of the key, so the slot count
//! is rounded down to a power of two.

use log::debug;

use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    entry: TTEntry,
    generation: u8,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    slots: Vec<Option<Slot>>,
    mask: u64,
    generation: u8,
}

impl TranspositionTable {
    /// Searches this many generations old lose their slot to any newcomer.
    const STALE_AFTER: u8 = 4;

    pub fn new_with_mb(size_mb: usize) -> Self {
        let budget = size_mb.max(1) * 1024 * 1024 / std::mem::size_of::<Option<Slot>>();
        let count = 1usize << budget.max(1).ilog2();
        debug!("transposition table: {size_mb} MB -> {count} slots");
        Self {
            slots: vec![None; count],
            mask: count as u64 - 1,
            generation: 0,
        }
    }

    /// Start a new search; entries written earlier begin to age.
    pub fn new_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.generation = 0;
    }

    #[inline]
    fn slot_index(&self, key: u64) -> usize {
        (key & self.mask) as usize
    }

    pub fn probe(&self, key: u64) -> Option<TTEntry> {
        self.slots[self.slot_index(key)]
            .map(|slot| slot.entry)
            .filter(|entry| entry.key == key)
    }

    /// Best move recorded for `key`, passed to `score_moves` as the hash move.
    #[inline]
    pub fn hash_move(&self, key: u64) -> Option<Move> {
        self.probe(key).and_then(|entry| entry.best_move)
    }

    /// Write `entry` unless its slot holds something more valuable: the same
    /// position searched deeper, or a different position from a recent search
    /// that was searched deeper than the newcomer.
    pub fn store(&mut self, entry: TTEntry) {
        let index = self.slot_index(entry.key);
        let keep_existing = self.slots[index].is_some_and(|slot| {
            let fresh = self.generation.wrapping_sub(slot.generation) < Self::STALE_AFTER;
            if slot.entry.key == entry.key {
                slot.entry.depth > entry.depth
            } else {
                fresh && slot.entry.depth > entry.depth
            }
        });

        if !keep_existing {
            self.slots[index] = Some(Slot {
                entry,
                generation: self.generation,
            });
        }
    }
}
