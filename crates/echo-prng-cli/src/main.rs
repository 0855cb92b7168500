// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `echo-prng`: developer CLI for the Echo PRNG.
//!
//! # Usage
//! ```text
//! echo-prng [--engine <KIND>] [--config-dir <DIR>] <command>
//! ```
//!
//! Commands: `demo`, `check`, `sample`, `config show|init`. Results go to
//! stdout; logs go to stderr and are filtered by `RUST_LOG` (default `warn`).
//! `check` exits non-zero when any check fails.

mod check;
mod cli;
mod config;
mod demo;
mod sample;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, ConfigAction};
use crate::config::{ConfigService, FsConfigStore, Settings, SETTINGS_KEY};
use crate::sample::Draw;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let service = open_config(&cli);
    // Loaded per command so `config init` can replace a malformed file.
    let settings = || -> Result<Settings> {
        let mut settings = match &service {
            Some(service) => service.settings().context("failed to load settings")?,
            None => Settings::default(),
        };
        if let Some(engine) = cli.engine {
            settings.engine = engine;
        }
        Ok(settings)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Demo => {
            demo::run(settings()?.engine, &mut out).context("failed to write demo output")?;
        }
        Command::Check { iterations } => {
            let settings = settings()?;
            let iterations = iterations.unwrap_or(settings.iterations);
            info!(engine = %settings.engine, iterations, "running check suite");
            let report = check::run(settings.engine, iterations);
            report.write_to(&mut out).context("failed to write report")?;
            if report.failed() > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Sample {
            seed,
            count,
            range,
            format,
        } => {
            let settings = settings()?;
            let draw = match range.as_deref() {
                Some(&[lower, upper]) => Draw::Range(lower, upper),
                Some(other) => bail!("--range takes exactly two values, got {}", other.len()),
                None => Draw::Uniform,
            };
            let seed = seed.unwrap_or(settings.default_seed);
            sample::run(settings.engine, seed, *count, draw, *format, &mut out)?;
        }
        Command::Config {
            action: ConfigAction::Show,
        } => {
            serde_json::to_writer_pretty(&mut out, &settings()?)?;
            writeln!(out)?;
        }
        Command::Config {
            action: ConfigAction::Init { force },
        } => {
            let Some(service) = &service else {
                bail!("no config directory available; pass --config-dir");
            };
            let path = service.store().path_for(SETTINGS_KEY);
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            service
                .save(SETTINGS_KEY, &Settings::default())
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote default settings");
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Settings store for this run; `None` when no directory can be resolved.
fn open_config(cli: &Cli) -> Option<ConfigService<FsConfigStore>> {
    let store = match &cli.config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => match FsConfigStore::platform() {
            Ok(store) => store,
            Err(err) => {
                warn!(%err, "config directory unavailable; using default settings");
                return None;
            }
        },
    };
    Some(ConfigService::new(store))
}
