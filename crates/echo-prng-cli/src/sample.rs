// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `echo-prng sample`: raw draws for a seed.

use std::io::Write;

use anyhow::{Context, Result};
use echo_prng::{EngineKind, Generator};
use serde::Serialize;

use crate::cli::Format;

/// What to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// Floats in `[0, 1)`.
    Uniform,
    /// Integers from `rand_range(lower, upper)`.
    Range(i32, i32),
}

#[derive(Serialize)]
#[serde(untagged)]
enum Values {
    Uniform(Vec<f64>),
    Range(Vec<i32>),
}

/// Draws `count` values and writes them to `out` in `format`.
pub fn run(
    kind: EngineKind,
    seed: i32,
    count: usize,
    draw: Draw,
    format: Format,
    out: &mut impl Write,
) -> Result<()> {
    let mut rng = Generator::with_kind(kind, seed);
    let values = match draw {
        Draw::Uniform => Values::Uniform((0..count).map(|_| rng.uniform()).collect()),
        Draw::Range(lower, upper) => {
            Values::Range((0..count).map(|_| rng.rand_range(lower, upper)).collect())
        }
    };

    match format {
        Format::Json => {
            serde_json::to_writer(&mut *out, &values).context("failed to encode samples")?;
            writeln!(out)?;
        }
        Format::Text => match &values {
            Values::Uniform(vs) => {
                for v in vs {
                    writeln!(out, "{v:.17}")?;
                }
            }
            Values::Range(vs) => {
                for v in vs {
                    writeln!(out, "{v}")?;
                }
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(draw: Draw, format: Format) -> String {
        let mut out = Vec::new();
        run(EngineKind::Xoroshiro128Plus, 99, 4, draw, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn range_text_is_one_value_per_line() {
        assert_eq!(capture(Draw::Range(1, 7), Format::Text), "2\n5\n2\n1\n");
    }

    #[test]
    fn range_json_is_an_array() {
        assert_eq!(capture(Draw::Range(7, 1), Format::Json), "[2,5,2,1]\n");
    }

    #[test]
    fn uniform_json_parses_back() {
        let parsed: Vec<f64> = serde_json::from_str(&capture(Draw::Uniform, Format::Json)).unwrap();
        assert_eq!(parsed.len(), 4);
        assert!(parsed.iter().all(|v| (0.0..1.0).contains(v)));
    }
}
