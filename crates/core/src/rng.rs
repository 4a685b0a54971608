//! RNG module - the randomness port used while carving
//!
//! Carving only ever needs to shuffle four directions, so the port is a
//! single `next_u32` plus a bounded draw. Two sources are provided:
//!
//! - [`SimpleRng`]: a seeded LCG for reproducible mazes and tests
//! - [`EntropyRng`]: `StdRng` seeded from the OS for normal play

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of uniform randomness.
pub trait RngPort {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Shuffle a slice using Fisher-Yates
pub fn shuffle<T, R: RngPort + ?Sized>(rng: &mut R, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.next_range((i + 1) as u32) as usize;
        slice.swap(i, j);
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }
}

impl RngPort for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // The low bits of an LCG cycle with a short period; mix the high bits down.
        self.state ^ (self.state >> 16)
    }
}

/// OS-seeded RNG for normal play.
#[derive(Debug, Clone)]
pub struct EntropyRng {
    inner: StdRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngPort for EntropyRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        self.inner.gen_range(0..max)
    }
}
