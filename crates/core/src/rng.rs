//! RNG module - injected, seedable randomness
//!
//! Two kinds of draws:
//!
//! - [`SimpleRng`]: a sequential LCG, used where the visit order is fixed
//!   (seeding the bounded grid row by row).
//! - [`hash2`]: a coordinate-addressed hash, used for hazard placement in the
//!   streaming world so the outcome for a coordinate does not depend on the
//!   order in which windows happen to materialize it.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    ///
    /// The seed is mixed through [`splitmix64`] first, so nearby seeds
    /// (0 and 1, or `n` and `n + 1`) start from unrelated states.
    pub fn new(seed: u64) -> Self {
        let mixed = splitmix64(seed);
        let folded = (mixed ^ (mixed >> 32)) as u32;
        // Avoid 0 seed which would produce all zeros
        let state = if folded == 0 { 1 } else { folded };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// True with probability `1 / one_in`.
    pub fn one_in(&mut self, one_in: u32) -> bool {
        one_in <= 1 || self.next_range(one_in) == 0
    }
}

#[inline]
pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Hash a coordinate under a seed.
#[inline]
pub fn hash2(x: i32, y: i32, seed: u64) -> u64 {
    let mut h = splitmix64(seed ^ 0x9E3779B97F4A7C15);
    h = splitmix64(h ^ (x as u32 as u64).wrapping_mul(0x85EBCA6B));
    h = splitmix64(h ^ (y as u32 as u64).wrapping_mul(0xC2B2AE35));
    h
}

/// Probability expressed as "one in N".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HazardRatio {
    pub one_in: u32,
}

impl HazardRatio {
    pub const fn one_in(one_in: u32) -> Self {
        Self { one_in }
    }

    /// Coordinate-addressed draw.
    #[inline]
    pub fn hit(&self, x: i32, y: i32, seed: u64) -> bool {
        self.one_in <= 1 || hash2(x, y, seed) % self.one_in as u64 == 0
    }
}

impl Default for HazardRatio {
    fn default() -> Self {
        Self::one_in(crate::types::DEFAULT_HAZARD_ONE_IN)
    }
}
