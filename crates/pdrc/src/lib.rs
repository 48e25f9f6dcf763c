// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # pdrc - Platform Descriptor Record compiler
//!
//! Compiles declarative PDR schemas into one contiguous binary blob, ready
//! to embed as a constant array in generated firmware source.
//!
//! The pipeline: flatten each record's nested field groups into a leaf
//! sequence, derive the `record_handle` / `pdr_length` header fields,
//! encode every leaf little-endian, and concatenate all records in corpus
//! order. Lenient conditions (unknown type tags, missing headers) are
//! collected as diagnostics and returned with the blob; encoding failures
//! abort with no output.
//!
//! # Example
//!
//! ```rust
//! use pdrc::compile;
//! use pdrc::schema::{RecordBuilder, StringEncoding};
//!
//! let mut corpus = vec![RecordBuilder::new("entity_names")
//!     .common_header()
//!     .string_value("name", StringEncoding::Ascii, "ABC")
//!     .build()];
//!
//! let output = compile(&mut corpus)?;
//! assert_eq!(output.blob.len(), 9);
//! assert_eq!(&output.blob[6..], b"ABC");
//! # Ok::<(), pdrc::CompileError>(())
//! ```

pub mod compiler;
pub mod diag;
pub mod emit;
pub mod schema;

pub use compiler::{compile, CompileError, CompileOutput, RecordSegment};
pub use diag::{Diagnostic, DiagnosticKind, Diagnostics};
pub use schema::{load_corpus, Field, FieldValue, Record, SchemaLoadError, TypeTag};
