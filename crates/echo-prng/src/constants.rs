// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canonical constants shared by the engines and the generator.

/// Seed used when a generator is drawn from before any explicit seed call.
pub const DEFAULT_SEED: i32 = 0;

/// 2^64 / φ, the SplitMix64 Weyl increment.
///
/// Also substituted for an all-zero engine state, which would otherwise be a
/// fixed point of the xorshift family.
pub const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// 2^-53: maps the top 53 bits of a raw draw onto `[0, 1)`.
pub(crate) const UNIFORM_SCALE: f64 = 1.0 / 9_007_199_254_740_992.0;
