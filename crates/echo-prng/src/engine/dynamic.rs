// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::{Engine, EngineKind, SeedableEngine, SplitMix64, Xoroshiro128Plus, Xorshift64Star};

/// Engine chosen at runtime from an [`EngineKind`].
///
/// Reseeding keeps the selected kind; only the state is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynEngine {
    /// See [`Xoroshiro128Plus`].
    Xoroshiro128Plus(Xoroshiro128Plus),
    /// See [`SplitMix64`].
    SplitMix64(SplitMix64),
    /// See [`Xorshift64Star`].
    Xorshift64Star(Xorshift64Star),
}

impl DynEngine {
    /// Builds the engine named by `kind`, seeded with `seed`.
    pub fn new(kind: EngineKind, seed: u32) -> Self {
        match kind {
            EngineKind::Xoroshiro128Plus => Self::Xoroshiro128Plus(Xoroshiro128Plus::from_seed(seed)),
            EngineKind::SplitMix64 => Self::SplitMix64(SplitMix64::from_seed(seed)),
            EngineKind::Xorshift64Star => Self::Xorshift64Star(Xorshift64Star::from_seed(seed)),
        }
    }

    /// Which engine this is.
    pub const fn kind(&self) -> EngineKind {
        match self {
            Self::Xoroshiro128Plus(_) => EngineKind::Xoroshiro128Plus,
            Self::SplitMix64(_) => EngineKind::SplitMix64,
            Self::Xorshift64Star(_) => EngineKind::Xorshift64Star,
        }
    }
}

impl Engine for DynEngine {
    fn reseed(&mut self, seed: u32) {
        match self {
            Self::Xoroshiro128Plus(e) => e.reseed(seed),
            Self::SplitMix64(e) => e.reseed(seed),
            Self::Xorshift64Star(e) => e.reseed(seed),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            Self::Xoroshiro128Plus(e) => e.next_u64(),
            Self::SplitMix64(e) => e.next_u64(),
            Self::Xorshift64Star(e) => e.next_u64(),
        }
    }
}

impl SeedableEngine for DynEngine {
    /// Seeds the default engine kind.
    fn from_seed(seed: u32) -> Self {
        Self::new(EngineKind::default(), seed)
    }
}

impl From<EngineKind> for DynEngine {
    fn from(kind: EngineKind) -> Self {
        Self::new(kind, 0)
    }
}
