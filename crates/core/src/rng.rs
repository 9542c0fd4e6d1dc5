//! RNG module - injectable randomness for both engines
//!
//! Engines never reach for ambient randomness. They draw from a
//! [`RandomSource`], so a test can replay an exact sequence and a seeded
//! game is reproducible.
//!
//! - [`SimpleRng`]: seeded LCG used in production.
//! - [`SequenceRng`]: replays a fixed list of raw values, cycling.

/// Source of uniform random integers
pub trait RandomSource {
    /// Generate the next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Generate a value in `[0, max)`; returns 0 when `max` is 0
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
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

    /// Current internal state (feed it back to `new` to resume the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Scales by the high bits; the low bits of a power-of-two LCG cycle quickly.
    fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of raw values, starting over when exhausted
///
/// `next_range(max)` yields `value % max`, so scripting a value below `max`
/// selects it exactly.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values handed out so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let a: Vec<u32> = (0..8).map(|_| rng1.next_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| rng2.next_u32()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_seed_is_not_degenerate() {
        let mut rng = SimpleRng::new(0);
        let values: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
        assert!(values.iter().any(|&v| v != values[0]));
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_next_range_covers_every_bucket() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 10];
        for _ in 0..500 {
            seen[rng.next_range(10) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_sequence_rng_replays_and_cycles() {
        let mut rng = SequenceRng::new(vec![3, 1, 4]);
        assert_eq!(rng.next_range(10), 3);
        assert_eq!(rng.next_range(10), 1);
        assert_eq!(rng.next_range(2), 0);
        assert_eq!(rng.next_u32(), 3);
        assert_eq!(rng.drawn(), 4);
    }

    #[test]
    fn test_sequence_rng_empty_yields_zero() {
        let mut rng = SequenceRng::new(Vec::new());
        assert_eq!(rng.next_u32(), 0);
    }
}
