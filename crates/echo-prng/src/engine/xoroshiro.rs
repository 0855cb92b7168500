// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::{splitmix64, Engine, SeedableEngine};
use crate::constants::GOLDEN_GAMMA;

/// Stateful `xoroshiro128+` engine; the default behind [`Generator`](crate::Generator).
///
/// * 128 bits of state, period 2^128 - 1.
/// * The low bits are weaker than the high bits; the generator only consumes
///   the high bits (top 53 for floats, a multiply-high for ranges).
/// * Not cryptographically secure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xoroshiro128Plus {
    state: [u64; 2],
}

impl Xoroshiro128Plus {
    /// Constructs the engine from raw state words.
    ///
    /// The all-zero state is a fixed point, so it is replaced by
    /// `[GOLDEN_GAMMA, 0]`.
    pub fn from_state(state: [u64; 2]) -> Self {
        Self {
            state: Self::non_degenerate(state),
        }
    }

    /// Current raw state words.
    pub fn state(&self) -> [u64; 2] {
        self.state
    }

    fn non_degenerate(mut state: [u64; 2]) -> [u64; 2] {
        if state[0] == 0 && state[1] == 0 {
            state[0] = GOLDEN_GAMMA;
        }
        state
    }
}

impl Engine for Xoroshiro128Plus {
    fn reseed(&mut self, seed: u32) {
        let mut sm_state = u64::from(seed);
        let state = [splitmix64(&mut sm_state), splitmix64(&mut sm_state)];
        self.state = Self::non_degenerate(state);
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }
}

impl SeedableEngine for Xoroshiro128Plus {
    fn from_seed(seed: u32) -> Self {
        let mut engine = Self { state: [0, 0] };
        engine.reseed(seed);
        engine
    }
}
