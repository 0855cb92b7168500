// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Echo PRNG: deterministic pseudo-random streams for simulation and tests.
//!
//! The crate is built around [`Generator`], an instantiable state machine that
//! is seeded from a 32-bit integer and exposes two derived draws:
//!
//! * [`Generator::uniform`] returns an `f64` in `[0, 1)`.
//! * [`Generator::rand_range`] returns an `i32` in `[min(lower, upper), max(lower, upper))`,
//!   or exactly `lower` when both bounds are equal.
//!
//! The bit-level transition function is a pluggable [`Engine`]; the default is
//! [`Xoroshiro128Plus`]. Identical seeds yield identical sequences on every
//! supported platform. Nothing here reads the clock, thread ids, or addresses.
//!
//! Not cryptographically secure.
//!
//! For code that wants the classic free-function style (`seed`, `uniform`,
//! `rand_range`) the [`global`] module wraps one lazily created, lock-guarded
//! default generator. New code should prefer owning a [`Generator`].
//!
//! ```
//! use echo_prng::Generator;
//!
//! let mut rng = Generator::new(42);
//! let x = rng.uniform();
//! assert!((0.0..1.0).contains(&x));
//!
//! let die = rng.rand_range(1, 7);
//! assert!((1..7).contains(&die));
//! assert_eq!(rng.rand_range(9, 9), 9);
//! ```

mod constants;
mod engine;
mod generator;
pub mod global;

pub use constants::{DEFAULT_SEED, GOLDEN_GAMMA};
pub use engine::{
    DynEngine, Engine, EngineKind, ParseEngineError, SeedableEngine, SplitMix64,
    Xoroshiro128Plus, Xorshift64Star,
};
pub use generator::Generator;
