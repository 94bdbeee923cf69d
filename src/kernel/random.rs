//! Random index sources for picking quiz targets.

use rand::Rng;

pub trait IndexSource: Send {
    /// Return an index in `0..len`. Only called with `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Uniform selection backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngIndex;

impl IndexSource for ThreadRngIndex {
    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always returns the same index (wrapped into range).
#[derive(Debug, Clone, Copy)]
pub struct FixedIndex(pub usize);

impl IndexSource for FixedIndex {
    fn next_index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceIndex {
    seq: Vec<usize>,
    pos: usize,
}

impl SequenceIndex {
    pub fn new(seq: Vec<usize>) -> Self {
        Self { seq, pos: 0 }
    }
}

impl IndexSource for SequenceIndex {
    fn next_index(&mut self, len: usize) -> usize {
        if self.seq.is_empty() {
            return 0;
        }
        let value = self.seq[self.pos % self.seq.len()];
        self.pos = self.pos.wrapping_add(1);
        value % len
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/random.rs"]
mod tests;
