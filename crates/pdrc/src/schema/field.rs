// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Records and their field trees.

use super::{FieldValue, TypeTag, COMMON_HEADER, RECORD_HANDLE};
use serde::{Deserialize, Serialize};

/// One Platform Descriptor Record: a named, ordered field tree.
///
/// Structure is fixed once deserialized; only the values of the
/// `record_handle` / `pdr_length` header leaves are written during
/// compilation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record name, defaulted to the source file stem by the loader.
    #[serde(default)]
    pub name: String,
    pub fields: Vec<Field>,
}

impl Record {
    /// The assigned handle, once the derivation pass has run.
    pub fn handle(&self) -> Option<u32> {
        let header = self
            .fields
            .iter()
            .filter_map(Field::as_group)
            .find(|g| g.name == COMMON_HEADER)?;
        let leaf = header
            .fields
            .iter()
            .filter_map(Field::as_leaf)
            .find(|l| l.name == RECORD_HANDLE)?;
        leaf.value
            .as_ref()
            .and_then(FieldValue::as_u64)
            .and_then(|v| u32::try_from(v).ok())
    }
}

/// A schema field: either a named group of nested fields or a typed leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Group(GroupField),
    Leaf(LeafField),
}

impl Field {
    pub fn name(&self) -> &str {
        match self {
            Self::Group(group) => &group.name,
            Self::Leaf(leaf) => &leaf.name,
        }
    }

    pub fn as_group(&self) -> Option<&GroupField> {
        match self {
            Self::Group(group) => Some(group),
            Self::Leaf(_) => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut GroupField> {
        match self {
            Self::Group(group) => Some(group),
            Self::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafField> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Group(_) => None,
        }
    }
}

/// A field that only structures other fields; never itself encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupField {
    pub name: String,
    pub fields: Vec<Field>,
}

/// A directly encodable field: type tag plus optional value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafField {
    pub name: String,
    #[serde(rename = "type")]
    pub tag: TypeTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
}
