// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder API for records.

use super::{
    Field, FieldValue, GroupField, LeafField, Record, ScalarType, StringEncoding, TypeTag,
    COMMON_HEADER, PDR_LENGTH, RECORD_HANDLE,
};

/// Builder for assembling [`Record`] trees without a schema document.
///
/// # Example
///
/// ```rust
/// use pdrc::schema::{RecordBuilder, ScalarType, StringEncoding};
///
/// let record = RecordBuilder::new("sensor_names")
///     .common_header()
///     .scalar_value("sensorId", ScalarType::Uint16, 7u16)
///     .string_value("name", StringEncoding::Ascii, "fan1")
///     .build();
/// assert_eq!(record.fields.len(), 3);
/// ```
#[derive(Debug)]
pub struct RecordBuilder {
    name: String,
    inner: GroupBuilder,
}

impl RecordBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: GroupBuilder::new(),
        }
    }

    /// Add a leaf with no assigned value.
    pub fn leaf(mut self, name: impl Into<String>, tag: TypeTag) -> Self {
        self.inner = self.inner.leaf(name, tag);
        self
    }

    /// Add a leaf with an assigned value.
    pub fn leaf_value(
        mut self,
        name: impl Into<String>,
        tag: TypeTag,
        value: impl Into<FieldValue>,
    ) -> Self {
        self.inner = self.inner.leaf_value(name, tag, value);
        self
    }

    /// Add a scalar leaf with no assigned value.
    pub fn scalar(self, name: impl Into<String>, ty: ScalarType) -> Self {
        self.leaf(name, TypeTag::Scalar(ty))
    }

    /// Add a scalar leaf with an assigned value.
    pub fn scalar_value(
        self,
        name: impl Into<String>,
        ty: ScalarType,
        value: impl Into<FieldValue>,
    ) -> Self {
        self.leaf_value(name, TypeTag::Scalar(ty), value)
    }

    /// Add a string leaf with an assigned value.
    pub fn string_value(
        self,
        name: impl Into<String>,
        encoding: StringEncoding,
        text: impl Into<String>,
    ) -> Self {
        self.leaf_value(name, TypeTag::Str(encoding), text.into())
    }

    /// Add a nested group built by `build`.
    pub fn group(mut self, name: impl Into<String>, build: impl FnOnce(GroupBuilder) -> GroupBuilder) -> Self {
        self.inner = self.inner.group(name, build);
        self
    }

    /// Add the standard `commonHeader` group with unassigned
    /// `record_handle` and `pdr_length` leaves.
    pub fn common_header(self) -> Self {
        self.group(COMMON_HEADER, |g| {
            g.leaf(RECORD_HANDLE, TypeTag::Scalar(ScalarType::Uint32))
                .leaf(PDR_LENGTH, TypeTag::Scalar(ScalarType::Uint16))
        })
    }

    pub fn build(self) -> Record {
        Record {
            name: self.name,
            fields: self.inner.fields,
        }
    }
}

/// Builder for the field list of a group.
#[derive(Debug, Default)]
pub struct GroupBuilder {
    fields: Vec<Field>,
}

impl GroupBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Add a leaf with no assigned value.
    pub fn leaf(mut self, name: impl Into<String>, tag: TypeTag) -> Self {
        self.fields.push(Field::Leaf(LeafField {
            name: name.into(),
            tag,
            value: None,
        }));
        self
    }

    /// Add a leaf with an assigned value.
    pub fn leaf_value(
        mut self,
        name: impl Into<String>,
        tag: TypeTag,
        value: impl Into<FieldValue>,
    ) -> Self {
        self.fields.push(Field::Leaf(LeafField {
            name: name.into(),
            tag,
            value: Some(value.into()),
        }));
        self
    }

    /// Add a scalar leaf with an assigned value.
    pub fn scalar_value(
        self,
        name: impl Into<String>,
        ty: ScalarType,
        value: impl Into<FieldValue>,
    ) -> Self {
        self.leaf_value(name, TypeTag::Scalar(ty), value)
    }

    /// Add a nested group built by `build`.
    pub fn group(mut self, name: impl Into<String>, build: impl FnOnce(GroupBuilder) -> GroupBuilder) -> Self {
        let inner = build(GroupBuilder::new());
        self.fields.push(Field::Group(GroupField {
            name: name.into(),
            fields: inner.fields,
        }));
        self
    }
}
