// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Recursive field flattening.

use crate::schema::{Field, LeafField};

/// Expand nested groups into the pre-order sequence of leaf fields.
///
/// Group wrappers are replaced by their children, in declaration order;
/// leaves (including strings) pass through unchanged. Length derivation
/// and byte emission both call this on the same tree, so both see the
/// same sequence.
pub fn flatten(fields: &[Field]) -> Vec<&LeafField> {
    let mut leaves = Vec::new();
    collect(fields, &mut leaves);
    leaves
}

fn collect<'a>(fields: &'a [Field], leaves: &mut Vec<&'a LeafField>) {
    for field in fields {
        match field {
            Field::Group(group) => collect(&group.fields, leaves),
            Field::Leaf(leaf) => leaves.push(leaf),
        }
    }
}
