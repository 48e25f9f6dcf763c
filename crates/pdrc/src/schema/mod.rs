// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Declarative record schema: fields, scalar types, values, loading.
//!
//! A [`Record`] is an ordered tree of [`Field`]s: groups that only
//! structure, and leaves that carry a type tag and (optionally) a value.
//! Records arrive either from schema documents on disk ([`load_corpus`])
//! or from the [`RecordBuilder`] API.

mod builder;
mod field;
mod loader;
mod types;
mod value;

pub use builder::{GroupBuilder, RecordBuilder};
pub use field::{Field, GroupField, LeafField, Record};
pub use loader::{load_corpus, SchemaLoadError};
pub use types::{ScalarType, StringEncoding, TypeTag};
pub use value::FieldValue;

/// Name of the header group every record is expected to carry.
pub const COMMON_HEADER: &str = "commonHeader";
/// Header leaf that receives the corpus-wide sequential handle.
pub const RECORD_HANDLE: &str = "record_handle";
/// Header leaf that receives the record's total encoded length.
pub const PDR_LENGTH: &str = "pdr_length";
