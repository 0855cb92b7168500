// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `echo-prng check`: statistical and contract checks against one engine.
//!
//! Each check reseeds with its own fixed seed, so results never depend on
//! execution order. Large checks draw `iterations` values; the short ones use
//! fixed counts.

use std::io::{self, Write};

use echo_prng::{DynEngine, EngineKind, Generator};
use tracing::debug;

type Rng = Generator<DynEngine>;
type CheckFn = fn(&mut Rng, usize) -> Result<(), String>;

const BINS: usize = 10;
const BIN_TOLERANCE: f64 = 0.1;
const MEAN_TOLERANCE: f64 = 0.01;

const CHECKS: [(&str, CheckFn); 12] = [
    ("uniform_range", uniform_range),
    ("uniform_distribution", uniform_distribution),
    ("seed_consistency", seed_consistency),
    ("seed_diversity", seed_diversity),
    ("rand_range_bounds", rand_range_bounds),
    ("rand_range_swapped", rand_range_swapped),
    ("rand_range_equal", rand_range_equal),
    ("rand_range_coverage", rand_range_coverage),
    ("negative_seed", negative_seed),
    ("zero_seed", zero_seed),
    ("uniform_mean", uniform_mean),
    ("no_immediate_repetition", no_immediate_repetition),
];

/// Outcome of a single named check.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub name: &'static str,
    pub result: Result<(), String>,
}

/// Outcomes of a full suite run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(()) => writeln!(out, "[PASS] {}", outcome.name)?,
                Err(reason) => writeln!(out, "[FAIL] {}: {reason}", outcome.name)?,
            }
        }
        writeln!(out)?;
        writeln!(out, "===========================================")?;
        writeln!(
            out,
            "Results: {} passed, {} failed",
            self.passed(),
            self.failed()
        )?;
        writeln!(out, "===========================================")
    }
}

/// Runs every check on a fresh generator for `kind`.
pub fn run(kind: EngineKind, iterations: usize) -> Report {
    let mut rng = Generator::with_kind(kind, 0);
    let outcomes = CHECKS
        .iter()
        .map(|&(name, check)| {
            let result = check(&mut rng, iterations);
            debug!(check = name, engine = %kind, ok = result.is_ok(), "check finished");
            Outcome { name, result }
        })
        .collect();
    Report { outcomes }
}

fn uniform_range(rng: &mut Rng, iterations: usize) -> Result<(), String> {
    rng.seed(12345);
    for _ in 0..iterations {
        let v = rng.uniform();
        if !(0.0..1.0).contains(&v) {
            return Err(format!("value {v:.10} out of range [0, 1)"));
        }
    }
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn uniform_distribution(rng: &mut Rng, iterations: usize) -> Result<(), String> {
    rng.seed(42);
    let mut counts = [0_usize; BINS];
    for _ in 0..iterations {
        let bin = ((rng.uniform() * BINS as f64) as usize).min(BINS - 1);
        counts[bin] += 1;
    }
    let expected = iterations as f64 / BINS as f64;
    for (bin, &count) in counts.iter().enumerate() {
        let deviation = (count as f64 - expected).abs() / expected;
        if deviation > BIN_TOLERANCE {
            return Err(format!(
                "bin {bin} has {count} (expected ~{expected:.0}, deviation {:.2}%)",
                deviation * 100.0
            ));
        }
    }
    Ok(())
}

fn seed_consistency(rng: &mut Rng, _: usize) -> Result<(), String> {
    rng.seed(999);
    let first = (rng.uniform(), rng.uniform());
    rng.seed(999);
    let second = (rng.uniform(), rng.uniform());
    if first.0.to_bits() == second.0.to_bits() && first.1.to_bits() == second.1.to_bits() {
        Ok(())
    } else {
        Err(format!(
            "inconsistent: ({:.10}, {:.10}) != ({:.10}, {:.10})",
            first.0, first.1, second.0, second.1
        ))
    }
}

fn seed_diversity(rng: &mut Rng, _: usize) -> Result<(), String> {
    rng.seed(100);
    let a = rng.uniform();
    rng.seed(200);
    let b = rng.uniform();
    if a.to_bits() == b.to_bits() {
        return Err("different seeds produced same value".into());
    }
    Ok(())
}

fn rand_range_bounds(rng: &mut Rng, iterations: usize) -> Result<(), String> {
    rng.seed(777);
    let (lower, upper) = (10, 50);
    for _ in 0..iterations {
        let v = rng.rand_range(lower, upper);
        if !(lower..upper).contains(&v) {
            return Err(format!("value {v} out of range [{lower}, {upper})"));
        }
    }
    Ok(())
}

fn rand_range_swapped(rng: &mut Rng, _: usize) -> Result<(), String> {
    rng.seed(555);
    let (lower, upper) = (100, 10);
    for _ in 0..1000 {
        let v = rng.rand_range(lower, upper);
        if !(upper..lower).contains(&v) {
            return Err(format!("value {v} out of range [{upper}, {lower})"));
        }
    }
    Ok(())
}

fn rand_range_equal(rng: &mut Rng, _: usize) -> Result<(), String> {
    rng.seed(333);
    let bound = 42;
    for _ in 0..100 {
        let v = rng.rand_range(bound, bound);
        if v != bound {
            return Err(format!("expected {bound}, got {v}"));
        }
    }
    Ok(())
}

fn rand_range_coverage(rng: &mut Rng, iterations: usize) -> Result<(), String> {
    rng.seed(888);
    let mut seen = [false; 10];
    for _ in 0..iterations {
        let v = rng.rand_range(0, 10);
        match usize::try_from(v).ok().and_then(|i| seen.get_mut(i)) {
            Some(slot) => *slot = true,
            None => return Err(format!("value {v} out of range [0, 10)")),
        }
    }
    match seen.iter().position(|&s| !s) {
        Some(missing) => Err(format!(
            "value {missing} never generated in {iterations} iterations"
        )),
        None => Ok(()),
    }
}

fn negative_seed(rng: &mut Rng, _: usize) -> Result<(), String> {
    rng.seed(-12345);
    if (0..1000).all(|_| (0.0..1.0).contains(&rng.uniform())) {
        Ok(())
    } else {
        Err("negative seed produced invalid values".into())
    }
}

fn zero_seed(rng: &mut Rng, _: usize) -> Result<(), String> {
    rng.seed(0);
    let v = rng.uniform();
    if (0.0..1.0).contains(&v) {
        Ok(())
    } else {
        Err("zero seed produced invalid value".into())
    }
}

fn uniform_mean(rng: &mut Rng, iterations: usize) -> Result<(), String> {
    rng.seed(111);
    let sum: f64 = (0..iterations).map(|_| rng.uniform()).sum();
    let mean = sum / iterations.max(1) as f64;
    let deviation = (mean - 0.5).abs();
    if deviation < MEAN_TOLERANCE {
        Ok(())
    } else {
        Err(format!(
            "mean {mean:.6} deviates from expected 0.5 by {deviation:.6}"
        ))
    }
}

fn no_immediate_repetition(rng: &mut Rng, _: usize) -> Result<(), String> {
    rng.seed(654);
    let mut prev = rng.uniform();
    for _ in 0..1000 {
        let curr = rng.uniform();
        if curr.to_bits() == prev.to_bits() {
            return Err("immediate repetition detected".into());
        }
        prev = curr;
    }
    Ok(())
}
