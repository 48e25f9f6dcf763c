// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema-to-header generation pipeline.

use anyhow::{bail, Context, Result};
use pdrc::emit::write_header;
use pdrc::{compile, load_corpus};
use std::path::PathBuf;
use tracing::{info, warn};

/// Tool configuration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub schema_dir: PathBuf,
    pub output: PathBuf,
    pub symbol: String,
    /// Refuse to emit anything when the compiler reported diagnostics.
    pub strict: bool,
}

/// Outcome of one generation run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub records: usize,
    pub blob_bytes: usize,
    pub warnings: usize,
}

impl RunReport {
    pub fn summary(&self) {
        println!();
        println!("  [OK] Records compiled:  {}", self.records);
        println!("  [OK] Blob size:         {} bytes", self.blob_bytes);
        if self.warnings > 0 {
            println!("  [!!] Warnings:          {}", self.warnings);
        }
    }
}

/// Load, compile, and emit.
///
/// Diagnostics are logged as warnings here; the core only collects them.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    info!("loading schemas from {}", config.schema_dir.display());
    let mut corpus = load_corpus(&config.schema_dir).with_context(|| {
        format!("failed to load schemas from {}", config.schema_dir.display())
    })?;

    info!("compiling {} records", corpus.len());
    let output = compile(&mut corpus).context("compilation failed")?;

    for diag in &output.diagnostics {
        warn!("{}", diag);
    }
    if config.strict && !output.diagnostics.is_empty() {
        bail!(
            "{} diagnostics in strict mode, no output written",
            output.diagnostics.len()
        );
    }

    write_header(&config.output, &config.symbol, &output.blob, &output.segments)
        .with_context(|| format!("failed to emit {}", config.output.display()))?;

    Ok(RunReport {
        records: output.segments.len(),
        blob_bytes: output.blob.len(),
        warnings: output.diagnostics.len(),
    })
}
