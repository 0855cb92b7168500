// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::{splitmix64, Engine, SeedableEngine};
use crate::constants::GOLDEN_GAMMA;

/// `xorshift64*` (Marsaglia / Vigna): a xorshift triple followed by a
/// multiplicative scramble. Period 2^64 - 1; zero is the one forbidden state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xorshift64Star {
    state: u64,
}

impl Xorshift64Star {
    /// Current raw state word.
    pub fn state(&self) -> u64 {
        self.state
    }

    fn expand(seed: u32) -> u64 {
        let mut sm_state = u64::from(seed);
        match splitmix64(&mut sm_state) {
            0 => GOLDEN_GAMMA,
            state => state,
        }
    }
}

impl Engine for Xorshift64Star {
    fn reseed(&mut self, seed: u32) {
        self.state = Self::expand(seed);
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl SeedableEngine for Xorshift64Star {
    fn from_seed(seed: u32) -> Self {
        Self {
            state: Self::expand(seed),
        }
    }
}
