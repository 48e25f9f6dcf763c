// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Derived header field assignment.

use crate::compiler::flatten::flatten;
use crate::diag::Diagnostics;
use crate::schema::{
    Field, FieldValue, LeafField, Record, TypeTag, COMMON_HEADER, PDR_LENGTH, RECORD_HANDLE,
};

/// Assign `record_handle` and `pdr_length` across the corpus.
///
/// Handles form a contiguous zero-based sequence in corpus order, one per
/// record; the counter is threaded through by value, not held in shared
/// state. Author-supplied values for either field are overwritten.
/// Records without a `commonHeader` group are left unmodified (and do not
/// consume a handle). Returns the number of handles assigned.
pub fn assign_derived_fields(corpus: &mut [Record], diags: &mut Diagnostics) -> u32 {
    let mut next_handle: u32 = 0;
    for record in corpus.iter_mut() {
        next_handle = assign_record(record, next_handle, diags);
    }
    next_handle
}

/// Derive one record's header fields. Returns the next free handle.
fn assign_record(record: &mut Record, handle: u32, diags: &mut Diagnostics) -> u32 {
    // The length comes from the pre-assignment flattened view. Scalar
    // widths are value-independent, so the header's own leaves count
    // correctly even though their values are only written below.
    let length: u64 = flatten(&record.fields).iter().map(|leaf| leaf_size(leaf)).sum();

    let header = record
        .fields
        .iter_mut()
        .find_map(|field| match field {
            Field::Group(group) if group.name == COMMON_HEADER => Some(group),
            _ => None,
        });
    let Some(header) = header else {
        diags.missing_common_header(&record.name);
        return handle;
    };

    let mut next = handle;
    for field in &mut header.fields {
        let Field::Leaf(leaf) = field else { continue };
        if leaf.name == RECORD_HANDLE {
            leaf.value = Some(FieldValue::Unsigned(next.into()));
            next += 1;
        } else if leaf.name == PDR_LENGTH {
            leaf.value = Some(FieldValue::Unsigned(length));
        }
    }
    next
}

/// Byte-size contribution of one flattened leaf.
///
/// Scalars count their registry width whether or not a value is assigned
/// (the encoder zero-fills absent values to the same width, so declared
/// and emitted lengths agree). Strings count only when a value is
/// present; unknown tags count zero.
pub(crate) fn leaf_size(leaf: &LeafField) -> u64 {
    match &leaf.tag {
        TypeTag::Str(encoding) => leaf
            .value
            .as_ref()
            .and_then(FieldValue::as_str)
            .map_or(0, |s| (s.chars().count() * encoding.char_width()) as u64),
        // Scalars at their registry width, unknown tags at zero.
        tag => tag.fixed_width() as u64,
    }
}
