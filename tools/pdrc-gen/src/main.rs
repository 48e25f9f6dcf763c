// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! pdrc-gen - compile PDR schemas into an embeddable C header.
//!
//! Usage:
//!   pdrc-gen schemas/ --output pdr_data.h
//!   pdrc-gen schemas/ --output pdr_data.h --symbol pdr_blob --strict

use clap::Parser;
use pdrc_gen::runner::{run, RunConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pdrc-gen")]
#[command(about = "Compile PDR schemas into an embeddable binary blob")]
#[command(version)]
struct Args {
    /// Directory containing schema documents (.yaml/.yml/.json)
    schema_dir: PathBuf,

    /// Output header path
    #[arg(short, long)]
    output: PathBuf,

    /// Symbol name for the generated array
    #[arg(short, long, default_value = "pdr_data")]
    symbol: String,

    /// Treat diagnostics as errors
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let report = run(&RunConfig {
        schema_dir: args.schema_dir,
        output: args.output,
        symbol: args.symbol,
        strict: args.strict,
    })?;
    report.summary();
    Ok(())
}
