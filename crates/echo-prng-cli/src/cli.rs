// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use echo_prng::EngineKind;

#[derive(Parser, Debug)]
#[command(name = "echo-prng", version)]
#[command(about = "Deterministic PRNG: demo output, statistical checks, sampling")]
pub struct Cli {
    /// Engine to draw from (xoroshiro128+, splitmix64, xorshift64*)
    #[arg(long, global = true)]
    pub engine: Option<EngineKind>,
    /// Directory holding settings.json (defaults to the platform config dir)
    #[arg(long, global = true, env = "ECHO_PRNG_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the example sequences (uniforms, integers, die rolls)
    Demo,
    /// Run the statistical check suite; exits non-zero on any failure
    Check {
        /// Draws per large check (default from settings, else 100000)
        #[arg(long)]
        iterations: Option<usize>,
    },
    /// Print draws for a seed
    Sample {
        /// Seed (default from settings)
        #[arg(long, allow_negative_numbers = true)]
        seed: Option<i32>,
        /// Number of draws
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Draw integers in [LOWER, UPPER) instead of uniforms
        #[arg(
            long,
            num_args = 2,
            value_names = ["LOWER", "UPPER"],
            allow_negative_numbers = true
        )]
        range: Option<Vec<i32>>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Inspect or initialise the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective settings as JSON
    Show,
    /// Write default settings
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One value per line
    Text,
    /// A JSON array
    Json,
}
