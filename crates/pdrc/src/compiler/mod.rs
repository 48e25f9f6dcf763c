// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The flatten -> derive -> encode pipeline.
//!
//! [`compile`] is the single synchronous entry point: it derives every
//! record's header fields, then serializes the whole corpus into one
//! contiguous blob. The pipeline is strictly sequential; handle
//! assignment is a single ordered pass over the corpus before any byte
//! is encoded.

mod assign;
mod encode;
mod flatten;

pub use assign::assign_derived_fields;
pub use encode::{encode_leaf, EncodeError};
pub use flatten::flatten;

use crate::diag::Diagnostics;
use crate::schema::{LeafField, Record, TypeTag};
use std::fmt;

/// Result of one compilation run.
#[derive(Debug)]
pub struct CompileOutput {
    /// Every record's encoded bytes, concatenated in corpus order with no
    /// separators or padding.
    pub blob: Vec<u8>,
    /// Per-record location within `blob`, in corpus order.
    pub segments: Vec<RecordSegment>,
    /// Non-fatal conditions absorbed during the run.
    pub diagnostics: Diagnostics,
}

/// Blob-relative location of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSegment {
    pub name: String,
    /// Assigned handle; `None` when the record had no usable header.
    pub handle: Option<u32>,
    pub offset: usize,
    pub length: usize,
}

/// Hard failures that abort a compilation with no output.
#[derive(Debug)]
pub enum CompileError {
    /// The input yielded zero records.
    EmptyCorpus,
    /// A leaf could not be encoded.
    Encode { record: String, source: EncodeError },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCorpus => write!(f, "schema corpus contains no records"),
            Self::Encode { record, source } => write!(f, "record {}: {}", record, source),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode { source, .. } => Some(source),
            Self::EmptyCorpus => None,
        }
    }
}

/// Compile a corpus: derive header fields, then serialize every record.
///
/// Records are mutated in place (`record_handle` / `pdr_length` values
/// only). A hard failure returns before any output exists; lenient
/// conditions are collected into [`CompileOutput::diagnostics`] for the
/// caller to log or reject.
pub fn compile(corpus: &mut [Record]) -> Result<CompileOutput, CompileError> {
    if corpus.is_empty() {
        return Err(CompileError::EmptyCorpus);
    }

    let mut diagnostics = Diagnostics::new();
    let assigned = assign_derived_fields(corpus, &mut diagnostics);
    log::debug!("assigned {} record handles", assigned);

    let (blob, segments) = assemble(corpus, &mut diagnostics)?;
    Ok(CompileOutput {
        blob,
        segments,
        diagnostics,
    })
}

/// Concatenate every record's flattened, encoded leaves in corpus order.
///
/// Length information exists only inside each record's own `pdr_length`
/// bytes; the stream itself carries no framing.
fn assemble(
    corpus: &[Record],
    diags: &mut Diagnostics,
) -> Result<(Vec<u8>, Vec<RecordSegment>), CompileError> {
    let mut blob = Vec::new();
    let mut segments = Vec::with_capacity(corpus.len());
    for record in corpus {
        let offset = blob.len();
        for leaf in flatten(&record.fields) {
            note_lenient(record, leaf, diags);
            let bytes = encode_leaf(leaf).map_err(|source| CompileError::Encode {
                record: record.name.clone(),
                source,
            })?;
            blob.extend_from_slice(&bytes);
        }
        segments.push(RecordSegment {
            name: record.name.clone(),
            handle: record.handle(),
            offset,
            length: blob.len() - offset,
        });
    }
    log::debug!("assembled {} records into {} bytes", segments.len(), blob.len());
    Ok((blob, segments))
}

// Record the lenient conditions the encoder absorbs without failing.
fn note_lenient(record: &Record, leaf: &LeafField, diags: &mut Diagnostics) {
    match &leaf.tag {
        TypeTag::Unknown(tag) => diags.unknown_type_tag(&record.name, &leaf.name, tag),
        TypeTag::Scalar(_) if leaf.value.is_none() => diags.missing_value(&record.name, &leaf.name),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::DiagnosticKind;
    use crate::schema::{RecordBuilder, ScalarType, StringEncoding};

    #[test]
    fn test_single_record_with_ascii_string() {
        let mut corpus = vec![RecordBuilder::new("names")
            .common_header()
            .string_value("name", StringEncoding::Ascii, "ABC")
            .build()];

        let output = compile(&mut corpus).expect("compile");

        assert_eq!(corpus[0].handle(), Some(0));
        // uint32 handle (LE) + uint16 length (LE) + "ABC"
        assert_eq!(output.blob.len(), 9);
        assert_eq!(&output.blob[0..4], [0, 0, 0, 0]);
        assert_eq!(&output.blob[4..6], [9, 0]);
        assert_eq!(&output.blob[6..9], [0x41, 0x42, 0x43]);
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn test_two_header_only_records() {
        let mut corpus = vec![
            RecordBuilder::new("first").common_header().build(),
            RecordBuilder::new("second").common_header().build(),
        ];

        let output = compile(&mut corpus).expect("compile");

        assert_eq!(corpus[0].handle(), Some(0));
        assert_eq!(corpus[1].handle(), Some(1));
        assert_eq!(output.blob.len(), 2 * 6);
        // Second record's handle bytes sit right after the first segment.
        assert_eq!(&output.blob[6..10], [1, 0, 0, 0]);
        assert_eq!(output.segments.len(), 2);
        assert_eq!(output.segments[1].offset, 6);
        assert_eq!(output.segments[1].length, 6);
    }

    #[test]
    fn test_empty_corpus_is_fatal() {
        let mut corpus: Vec<Record> = Vec::new();
        assert!(matches!(
            compile(&mut corpus),
            Err(CompileError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_declared_length_matches_emitted_segment() {
        let mut corpus = vec![RecordBuilder::new("r")
            .common_header()
            .scalar_value("a", ScalarType::Uint8, 1u8)
            .scalar("reserved", ScalarType::Uint16)
            .string_value("label", StringEncoding::Utf16Be, "xyz")
            .leaf_value("mystery", TypeTag::parse("uint128"), 5u64)
            .build()];

        let output = compile(&mut corpus).expect("compile");

        // Declared pdr_length equals the segment actually emitted, with
        // the zero-filled scalar counted and the unknown tag excluded on
        // both sides.
        let declared = u16::from_le_bytes([output.blob[4], output.blob[5]]);
        assert_eq!(usize::from(declared), output.segments[0].length);
        assert_eq!(output.segments[0].length, 6 + 1 + 2 + 6);
    }

    #[test]
    fn test_lenient_conditions_become_diagnostics() {
        let mut corpus = vec![
            RecordBuilder::new("bare").scalar_value("x", ScalarType::Uint8, 1u8).build(),
            RecordBuilder::new("odd")
                .common_header()
                .scalar("reserved", ScalarType::Uint16)
                .leaf("mystery", TypeTag::parse("float80"))
                .build(),
        ];

        let output = compile(&mut corpus).expect("compile");

        let kinds: Vec<&DiagnosticKind> =
            output.diagnostics.iter().map(|d| &d.kind).collect();
        assert_eq!(kinds.len(), 3);
        assert!(matches!(kinds[0], DiagnosticKind::MissingCommonHeader));
        assert!(matches!(kinds[1], DiagnosticKind::MissingValue { .. }));
        assert!(matches!(kinds[2], DiagnosticKind::UnknownTypeTag { .. }));
    }

    #[test]
    fn test_encoding_failure_aborts_with_no_output() {
        let mut corpus = vec![
            RecordBuilder::new("ok").common_header().build(),
            RecordBuilder::new("bad")
                .common_header()
                .string_value("name", StringEncoding::Ascii, "naïve")
                .build(),
        ];

        let err = compile(&mut corpus).unwrap_err();
        assert!(matches!(err, CompileError::Encode { .. }));
        let rendered = err.to_string();
        assert!(rendered.contains("bad"));
    }

    #[test]
    fn test_string_only_record_length_agreement() {
        let mut corpus = vec![RecordBuilder::new("aux_names")
            .common_header()
            .string_value("languageTag", StringEncoding::Ascii, "en")
            .string_value("name", StringEncoding::Utf16Be, "CPU")
            .build()];

        let output = compile(&mut corpus).expect("compile");

        let declared = u16::from_le_bytes([output.blob[4], output.blob[5]]);
        assert_eq!(usize::from(declared), output.blob.len());
        assert_eq!(output.blob.len(), 6 + 2 + 6);
    }

    #[test]
    fn test_headerless_record_still_emits_bytes() {
        let mut corpus = vec![
            RecordBuilder::new("bare")
                .scalar_value("x", ScalarType::Uint8, 0xAAu8)
                .build(),
            RecordBuilder::new("ok").common_header().build(),
        ];

        let output = compile(&mut corpus).expect("compile");

        assert_eq!(output.blob[0], 0xAA);
        assert_eq!(output.segments[0].handle, None);
        assert_eq!(output.segments[0].length, 1);
        // The headerless record did not consume handle 0.
        assert_eq!(output.segments[1].handle, Some(0));
    }
}
