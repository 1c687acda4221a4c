//! RNG module - uniform shape and color generation
//!
//! Every shape is equally likely on every draw (no bag), and each color
//! channel is drawn from `1..=255` so a piece is never pure black.
//!
//! A small LCG keeps sessions deterministic for a given seed.

use crate::types::{Rgb, ShapeKind};

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
    /// Uses the high bits; the low bits of a power-of-two LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniformly random shape
    pub fn next_shape(&mut self) -> ShapeKind {
        let index = self.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[index]
    }

    /// Random color with every channel in `1..=255`
    pub fn next_color(&mut self) -> Rgb {
        let r = self.next_range(255) as u8 + 1;
        let g = self.next_range(255) as u8 + 1;
        let b = self.next_range(255) as u8 + 1;
        Rgb::new(r, g, b)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
