// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Loads schema documents from disk into an ordered corpus.

use super::Record;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while gathering schema documents. All are hard failures:
/// a malformed schema aborts the run before compilation starts.
#[derive(Debug, Error)]
pub enum SchemaLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// A document may hold one record map or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SchemaDoc {
    Many(Vec<Record>),
    One(Record),
}

/// Load every schema document under `dir`, recursively, in stable path
/// order.
///
/// Corpus order determines handle assignment, so the file list is sorted
/// before any document is read; directory listing order never leaks into
/// the output. Records without an explicit `name` take their source file's
/// stem.
pub fn load_corpus(dir: &Path) -> Result<Vec<Record>, SchemaLoadError> {
    let mut paths = collect_schema_files(dir)?;
    paths.sort();

    let mut corpus = Vec::new();
    for path in paths {
        let text = fs::read_to_string(&path).map_err(|source| SchemaLoadError::Io {
            path: path.clone(),
            source,
        })?;
        let doc = parse_document(&path, &text)?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let records = match doc {
            SchemaDoc::Many(records) => records,
            SchemaDoc::One(record) => vec![record],
        };
        for mut record in records {
            if record.name.is_empty() {
                record.name.clone_from(&stem);
            }
            corpus.push(record);
        }
        log::debug!("loaded {}", path.display());
    }

    log::info!("loaded {} records from {}", corpus.len(), dir.display());
    Ok(corpus)
}

fn collect_schema_files(dir: &Path) -> Result<Vec<PathBuf>, SchemaLoadError> {
    let mut out = Vec::new();
    let entries = fs::read_dir(dir).map_err(|source| SchemaLoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| SchemaLoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            out.extend(collect_schema_files(&path)?);
        } else if is_schema_file(&path) {
            out.push(path);
        }
    }
    Ok(out)
}

fn is_schema_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml" | "json")
    )
}

fn parse_document(path: &Path, text: &str) -> Result<SchemaDoc, SchemaLoadError> {
    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_str(text).map_err(|source| SchemaLoadError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_yaml::from_str(text).map_err(|source| SchemaLoadError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}
