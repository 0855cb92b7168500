// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::{splitmix64, Engine, SeedableEngine};

/// `SplitMix64`: a Weyl sequence passed through a 64-bit avalanche finaliser.
///
/// Single word of state, period 2^64. Every state is valid (including zero),
/// so no seed fix-up is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Current raw state word.
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Engine for SplitMix64 {
    fn reseed(&mut self, seed: u32) {
        self.state = u64::from(seed);
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        splitmix64(&mut self.state)
    }
}

impl SeedableEngine for SplitMix64 {
    fn from_seed(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_is_not_a_fixed_point() {
        let mut engine = SplitMix64::from_seed(0);
        let a = engine.next_u64();
        let b = engine.next_u64();
        assert_ne!(a, 0);
        assert_ne!(a, b);
    }

    #[test]
    fn negative_seed_bit_pattern_is_preserved() {
        let engine = SplitMix64::from_seed((-1_i32).cast_unsigned());
        assert_eq!(engine.state(), 0xffff_ffff);
    }
}
