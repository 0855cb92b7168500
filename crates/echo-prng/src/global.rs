// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Process-wide default generator with free-function ergonomics.
//!
//! A thin layer over one [`Generator`] kept behind a mutex. It exists for
//! callers that want the classic `seed` / `uniform` / `rand_range` calls; code
//! that cares about independent streams or throughput should own a
//! [`Generator`] instead.
//!
//! Lifecycle:
//! * [`init`] (or [`seed`]) installs a generator seeded with the given value.
//! * [`destroy`] drops it; the next draw behaves as if never initialised.
//! * Drawing while uninitialised lazily installs a generator seeded with
//!   [`DEFAULT_SEED`] and logs a warning. The fallback is deterministic.
//!
//! All threads share the one stream, so the interleaving of draws across
//! threads decides who sees which value. Determinism holds per call order,
//! not per thread.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::constants::DEFAULT_SEED;
use crate::generator::Generator;

static DEFAULT: Mutex<Option<Generator>> = Mutex::new(None);

// The slot only holds plain integers, so a poisoned lock still guards a valid
// generator.
fn slot() -> MutexGuard<'static, Option<Generator>> {
    DEFAULT.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Installs a fresh default generator seeded with `seed`, replacing any
/// existing one.
pub fn init(seed: i32) {
    *slot() = Some(Generator::new(seed));
    info!(seed, "default generator initialised");
}

/// Drops the default generator.
pub fn destroy() {
    if slot().take().is_some() {
        debug!("default generator destroyed");
    }
}

/// Returns `true` while a default generator is installed.
pub fn is_initialized() -> bool {
    slot().is_some()
}

/// Reseeds the default generator, installing one if needed.
pub fn seed(value: i32) {
    let mut slot = slot();
    match slot.as_mut() {
        Some(rng) => rng.seed(value),
        None => *slot = Some(Generator::new(value)),
    }
}

/// Draws a float in `[0, 1)` from the default generator.
pub fn uniform() -> f64 {
    with_default(Generator::uniform)
}

/// Draws an integer in `[min(lower, upper), max(lower, upper))` from the
/// default generator; see [`Generator::rand_range`].
pub fn rand_range(lower: i32, upper: i32) -> i32 {
    with_default(|rng| rng.rand_range(lower, upper))
}

/// Runs `f` against the default generator while holding its lock.
///
/// `f` must not call back into this module; the lock is not reentrant.
pub fn with_default<R>(f: impl FnOnce(&mut Generator) -> R) -> R {
    let mut slot = slot();
    let rng = slot.get_or_insert_with(|| {
        warn!(
            seed = DEFAULT_SEED,
            "default generator used before seeding; falling back to default seed"
        );
        Generator::new(DEFAULT_SEED)
    });
    f(rng)
}
