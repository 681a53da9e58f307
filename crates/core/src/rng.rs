//! RNG module - deterministic shuffling for card deals
//!
//! Boards are dealt by doubling the first `pairs` faces of the symbol set and
//! running a Fisher-Yates shuffle over the result. The shuffle is driven by a
//! small LCG so a seed reproduces the exact same sequence of deals, which the
//! tests and benches rely on. Production seeds come from the thread RNG.

use crate::types::{CardFace, Difficulty};

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

    /// Seed from the operating system's entropy via the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u32>())
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales the full 32-bit output instead of taking `% max`: the low bits
    /// of an LCG have very short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current generator state (a seed that continues this sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Build the shuffled face layout for a tier: each face exactly twice.
pub fn deal_faces(difficulty: Difficulty, rng: &mut SimpleRng) -> Vec<CardFace> {
    let mut faces: Vec<CardFace> = CardFace::first(difficulty.pair_count())
        .flat_map(|face| [face, face])
        .collect();
    rng.shuffle(&mut faces);
    faces
}
