// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `echo-prng demo`: the example walkthrough.

use std::io::{self, Write};

use echo_prng::{EngineKind, Generator};

/// Writes the three example sequences for `kind` to `out`.
pub fn run(kind: EngineKind, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Random Number Generator Example")?;
    writeln!(out, "================================")?;
    writeln!(out)?;

    let mut rng = Generator::with_kind(kind, 42);
    writeln!(out, "10 uniform random numbers [0, 1):")?;
    for _ in 0..10 {
        writeln!(out, "  {:.6}", rng.uniform())?;
    }

    writeln!(out)?;
    writeln!(out, "10 random integers in range [1, 100):")?;
    rng.seed(12345);
    for _ in 0..10 {
        writeln!(out, "  {}", rng.rand_range(1, 100))?;
    }

    writeln!(out)?;
    writeln!(out, "Simulating 6-sided die rolls:")?;
    rng.seed(99);
    for i in 1..=10 {
        writeln!(out, "  Roll {i}: {}", rng.rand_range(1, 7))?;
    }
    Ok(())
}
