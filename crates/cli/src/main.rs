// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Joker Poker command line evaluator.
//!
//! Prints the best 5 cards out of each 7 cards hand given on the command line,
//! or read one per line from stdin when no hand is given:
//!
//! ```text
//! $ jokerpoker "6C 7C 8C 9C TC 5C ?B" "TD TC TH 7C 7D 8C 8S"
//! 6C 7C 8C 9C TC 5C ?B => 7C 8C 9C JC TC (Straight Flush)
//! TD TC TH 7C 7D 8C 8S => 8C 8S TC TD TH (Full House)
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::error;
use std::io::{self, BufRead, Write};

mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// Hands of 7 space separated tokens, e.g. "TD TC 5H 5C 7C ?R ?B".
    hands: Vec<String>,
    /// Print one JSON object per hand.
    #[clap(long, short)]
    json: bool,
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let hands = if cli.hands.is_empty() {
        io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?
    } else {
        cli.hands
    };

    let mut stdout = io::stdout().lock();
    let mut failed = 0;

    for line in hands.iter().map(|l| l.trim()) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match report::Report::evaluate(line) {
            Ok(report) if cli.json => writeln!(stdout, "{}", serde_json::to_string(&report)?)?,
            Ok(report) => writeln!(stdout, "{report}")?,
            Err(e) => {
                error!("{line}: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} invalid hands");
    }

    Ok(())
}
