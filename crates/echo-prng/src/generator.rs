// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The seeded generator and its two derived draws.

use tracing::debug;

use crate::constants::{DEFAULT_SEED, UNIFORM_SCALE};
use crate::engine::{DynEngine, Engine, EngineKind, SeedableEngine, Xoroshiro128Plus};

/// Seeded pseudo-random stream.
///
/// * The state is a pure function of the last seed and the number of draws
///   since, so matching seeds yield identical sequences across runs and
///   platforms.
/// * Each instance is independent; two generators never share state.
/// * Not thread-safe to share: a `Generator` is `Send` but every draw needs
///   `&mut self`. Give each thread its own instance, or go through
///   [`global`](crate::global) which adds a lock.
/// * Not cryptographically secure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator<E = Xoroshiro128Plus> {
    engine: E,
    seed: i32,
    draws: u64,
}

impl Generator<Xoroshiro128Plus> {
    /// Creates a generator on the default engine, seeded with `seed`.
    pub fn new(seed: i32) -> Self {
        Self::from_seed(seed)
    }
}

impl Generator<DynEngine> {
    /// Creates a generator on the engine named by `kind`.
    pub fn with_kind(kind: EngineKind, seed: i32) -> Self {
        Self::with_engine(DynEngine::from(kind), seed)
    }

    /// Which engine drives this generator.
    pub fn kind(&self) -> EngineKind {
        self.engine.kind()
    }
}

impl<E: SeedableEngine> Generator<E> {
    /// Creates a generator on engine `E`, seeded with `seed`.
    pub fn from_seed(seed: i32) -> Self {
        Self {
            engine: E::from_seed(seed.cast_unsigned()),
            seed,
            draws: 0,
        }
    }
}

impl<E: SeedableEngine> Default for Generator<E> {
    /// Seeds with [`DEFAULT_SEED`].
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }
}

impl<E: Engine> Generator<E> {
    /// Wraps an existing engine and immediately reseeds it with `seed`.
    pub fn with_engine(mut engine: E, seed: i32) -> Self {
        engine.reseed(seed.cast_unsigned());
        Self {
            engine,
            seed,
            draws: 0,
        }
    }

    /// Resets the stream as a pure function of `value`.
    ///
    /// Every `i32` is valid, including zero and negative values; negative
    /// seeds are taken by their two's-complement bit pattern. Prior state has
    /// no influence on what follows.
    pub fn seed(&mut self, value: i32) {
        self.engine.reseed(value.cast_unsigned());
        self.seed = value;
        self.draws = 0;
        debug!(seed = value, engine = std::any::type_name::<E>(), "generator reseeded");
    }

    /// Seed most recently applied.
    pub fn last_seed(&self) -> i32 {
        self.seed
    }

    /// Number of state advances since the last seed.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Shared access to the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the underlying engine.
    ///
    /// Draws taken directly from the engine bypass the [`draws`](Self::draws)
    /// counter.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Advances once and returns 64 raw bits.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.wrapping_add(1);
        self.engine.next_u64()
    }

    /// Advances once and returns the high 32 raw bits.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Advances once and returns a float in `[0, 1)`.
    ///
    /// The top 53 bits of the raw draw fill the mantissa and are scaled by
    /// 2^-53, so the largest possible result is `1 - 2^-53`; `1.0` is
    /// unreachable and every representable step is equally likely.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * UNIFORM_SCALE
    }

    /// Returns an integer in `[min(lower, upper), max(lower, upper))`.
    ///
    /// * `lower < upper`: the usual half-open range.
    /// * `lower > upper`: the bounds are swapped, so the result still lies
    ///   between the two inputs. Supported, but new call sites should pass
    ///   ordered bounds.
    /// * `lower == upper`: returns `lower` without advancing the state.
    ///
    /// One raw draw is scaled onto the span with a 64x64->128 multiply-high,
    /// i.e. `floor(raw / 2^64 * span)`. The offset is strictly below the span,
    /// so neither bound is ever exceeded and no division takes place. Bias is
    /// at most `span / 2^64` per value.
    #[allow(clippy::cast_possible_truncation)]
    pub fn rand_range(&mut self, lower: i32, upper: i32) -> i32 {
        if lower == upper {
            return lower;
        }
        let (lo, hi) = if lower < upper {
            (lower, upper)
        } else {
            (upper, lower)
        };
        let span = hi.abs_diff(lo);
        // (raw * span) >> 64 < span <= u32::MAX
        let offset = ((u128::from(self.next_u64()) * u128::from(span)) >> 64) as u32;
        lo.wrapping_add_unsigned(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SplitMix64;

    #[test]
    fn equal_bounds_return_bound_without_drawing() {
        let mut rng = Generator::new(333);
        for _ in 0..100 {
            assert_eq!(rng.rand_range(42, 42), 42);
        }
        assert_eq!(rng.draws(), 0);
        assert_eq!(rng.rand_range(i32::MIN, i32::MIN), i32::MIN);
        assert_eq!(rng.rand_range(i32::MAX, i32::MAX), i32::MAX);
    }

    #[test]
    fn full_i32_span_is_pinned() {
        let mut rng = Generator::new(7);
        let values: Vec<i32> = (0..3).map(|_| rng.rand_range(i32::MIN, i32::MAX)).collect();
        assert_eq!(values, vec![-401_072_453, -866_021_322, 835_361_966]);
    }

    #[test]
    fn negative_ranges_are_pinned() {
        let mut rng = Generator::new(123);
        let values: Vec<i32> = (0..5).map(|_| rng.rand_range(-10, -3)).collect();
        assert_eq!(values, vec![-6, -6, -8, -10, -8]);
    }

    #[test]
    fn seed_resets_counter_and_remembers_value() {
        let mut rng = Generator::new(1);
        rng.uniform();
        rng.rand_range(0, 10);
        assert_eq!(rng.draws(), 2);
        rng.seed(-5);
        assert_eq!(rng.draws(), 0);
        assert_eq!(rng.last_seed(), -5);
    }

    #[test]
    fn default_uses_default_seed() {
        let mut a: Generator = Generator::default();
        let mut b = Generator::new(DEFAULT_SEED);
        assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
    }

    #[test]
    fn uniform_matches_top_53_bits_of_engine() {
        let mut rng = Generator::<SplitMix64>::from_seed(9);
        let mut engine = SplitMix64::from_seed(9);
        let expected = (engine.next_u64() >> 11) as f64 / 9_007_199_254_740_992.0;
        assert_eq!(rng.uniform().to_bits(), expected.to_bits());
    }

    #[test]
    fn dyn_generator_tracks_kind() {
        let mut rng = Generator::with_kind(EngineKind::Xorshift64Star, 42);
        assert_eq!(rng.kind(), EngineKind::Xorshift64Star);
        rng.seed(43);
        assert_eq!(rng.kind(), EngineKind::Xorshift64Star);
    }
}
