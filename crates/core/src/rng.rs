//! RNG module - uniform shape generation
//!
//! Every lookahead shape is drawn uniformly from the seven shapes, independent of
//! what came before (no bag, no history). A small seeded LCG keeps games
//! reproducible from their seed.

use crate::types::{Shape, SHAPE_COUNT};

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Draws shapes uniformly at random
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    seed: u32,
    rng: SimpleRng,
}

impl ShapeGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next shape
    pub fn draw(&mut self) -> Shape {
        Shape::ALL[self.rng.next_range(SHAPE_COUNT as u32) as usize]
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
