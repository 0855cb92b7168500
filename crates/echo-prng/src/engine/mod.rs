// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Raw bit-transition engines that drive a [`Generator`](crate::Generator).
//!
//! An engine only knows how to reset itself from a 32-bit seed and how to
//! produce the next 64 raw bits. Range mapping lives in the generator, so any
//! engine here can be swapped in without changing the public sampling contract.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::GOLDEN_GAMMA;

mod dynamic;
mod splitmix;
mod xoroshiro;
mod xorshift;

pub use dynamic::DynEngine;
pub use splitmix::SplitMix64;
pub use xoroshiro::Xoroshiro128Plus;
pub use xorshift::Xorshift64Star;

/// Deterministic 64-bit output stream.
pub trait Engine {
    /// Resets the state as a pure function of `seed`.
    fn reseed(&mut self, seed: u32);

    /// Advances the state once and returns 64 raw bits.
    fn next_u64(&mut self) -> u64;
}

/// Engines that can be constructed directly from a seed.
pub trait SeedableEngine: Engine + Sized {
    /// Builds an engine whose state is fully determined by `seed`.
    fn from_seed(seed: u32) -> Self;
}

/// One SplitMix64 step: advances `state` by the golden gamma and returns the
/// avalanche-mixed result.
///
/// Every engine expands its 32-bit seed through this function, so distinct
/// seeds never collapse into the same starting state.
#[inline]
pub(crate) fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(GOLDEN_GAMMA);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Names the built-in engines; used wherever the engine is picked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineKind {
    /// [`Xoroshiro128Plus`], the default.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "xoroshiro128+", alias = "xoroshiro"))]
    Xoroshiro128Plus,
    /// [`SplitMix64`].
    #[cfg_attr(feature = "serde", serde(rename = "splitmix64", alias = "splitmix"))]
    SplitMix64,
    /// [`Xorshift64Star`].
    #[cfg_attr(feature = "serde", serde(rename = "xorshift64*", alias = "xorshift"))]
    Xorshift64Star,
}

impl EngineKind {
    /// All built-in engines, default first.
    pub const ALL: [EngineKind; 3] = [
        EngineKind::Xoroshiro128Plus,
        EngineKind::SplitMix64,
        EngineKind::Xorshift64Star,
    ];

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            EngineKind::Xoroshiro128Plus => "xoroshiro128+",
            EngineKind::SplitMix64 => "splitmix64",
            EngineKind::Xorshift64Star => "xorshift64*",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an engine name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown engine '{0}' (expected one of: xoroshiro128+, splitmix64, xorshift64*)")]
pub struct ParseEngineError(pub String);

impl FromStr for EngineKind {
    type Err = ParseEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xoroshiro128+" | "xoroshiro128plus" | "xoroshiro" => Ok(EngineKind::Xoroshiro128Plus),
            "splitmix64" | "splitmix" => Ok(EngineKind::SplitMix64),
            "xorshift64*" | "xorshift64star" | "xorshift" => Ok(EngineKind::Xorshift64Star),
            _ => Err(ParseEngineError(s.to_owned())),
        }
    }
}
