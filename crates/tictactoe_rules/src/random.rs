//! Injectable randomness.
//!
//! Every random decision in the game (symbol fallback, computer moves) goes
//! through [`RandomSource`], so a seeded or scripted source replays a game
//! exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;

/// Supplies uniformly distributed indices.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass a zero `len`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Picks one element of `items` using `rng`, or `None` when `items` is empty.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.pick_index(items.len());
    items.get(index)
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Lets the symbol prompt and the computer player draw from one stream.
impl<R: RandomSource + ?Sized> RandomSource for Rc<RefCell<R>> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.borrow_mut().pick_index(len)
    }
}

/// Randomness from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible randomness from a fixed seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: u64,
}

impl SeededRandom {
    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed this generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Each scripted value is reduced modulo the requested length, so a script
/// never produces an out-of-range index. An empty script always yields `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Creates a source that returns `script` in order.
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % len
    }
}
