// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Leaf byte encoding.
//!
//! All scalar packing is little-endian, as a pinned contract: the output
//! blob is bit-identical across hosts.

use crate::schema::{FieldValue, LeafField, ScalarType, StringEncoding, TypeTag};
use std::fmt;

/// Hard failures raised while packing a single leaf.
///
/// Any of these aborts the whole compilation: a blob with silently
/// corrupted bytes is worse than no blob.
#[derive(Debug)]
pub enum EncodeError {
    /// A character cannot be represented in the declared string encoding.
    Unencodable {
        field: String,
        encoding: StringEncoding,
        ch: char,
    },
    /// A numeric value does not fit the declared scalar width.
    OutOfRange {
        field: String,
        ty: ScalarType,
        value: FieldValue,
    },
    /// The assigned value's kind does not match the declared type.
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unencodable { field, encoding, ch } => {
                write!(
                    f,
                    "field {}: {:?} is not representable in {}",
                    field,
                    ch,
                    encoding.tag()
                )
            }
            Self::OutOfRange { field, ty, value } => {
                write!(f, "field {}: value {:?} does not fit {}", field, value, ty.tag())
            }
            Self::TypeMismatch {
                field,
                expected,
                found,
            } => {
                write!(f, "field {}: expected {} value, found {}", field, expected, found)
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Encode one leaf into its binary representation.
///
/// Scalars pack little-endian at their registry width; a scalar with no
/// assigned value zero-fills to the same width, so emitted bytes always
/// match the leaf's declared length contribution. Strings encode
/// character by character with no terminator or length prefix. Unknown
/// tags and valueless strings produce no bytes.
///
/// Pure: the leaf is never mutated.
pub fn encode_leaf(leaf: &LeafField) -> Result<Vec<u8>, EncodeError> {
    match &leaf.tag {
        TypeTag::Scalar(ty) => match &leaf.value {
            Some(value) => encode_scalar(leaf, *ty, value),
            None => Ok(vec![0; ty.width()]),
        },
        TypeTag::Str(encoding) => match &leaf.value {
            Some(value) => {
                let Some(text) = value.as_str() else {
                    return Err(EncodeError::TypeMismatch {
                        field: leaf.name.clone(),
                        expected: "string",
                        found: value.kind(),
                    });
                };
                encode_string(leaf, *encoding, text)
            }
            None => Ok(Vec::new()),
        },
        TypeTag::Unknown(_) => Ok(Vec::new()),
    }
}

fn encode_scalar(
    leaf: &LeafField,
    ty: ScalarType,
    value: &FieldValue,
) -> Result<Vec<u8>, EncodeError> {
    match ty {
        ScalarType::Uint8 | ScalarType::Enum8 => {
            let v = unsigned_value(leaf, ty, value, u64::from(u8::MAX))?;
            Ok(vec![v as u8])
        }
        ScalarType::Uint16 | ScalarType::Enum16 => {
            let v = unsigned_value(leaf, ty, value, u64::from(u16::MAX))?;
            Ok((v as u16).to_le_bytes().to_vec())
        }
        ScalarType::Uint32 => {
            let v = unsigned_value(leaf, ty, value, u64::from(u32::MAX))?;
            Ok((v as u32).to_le_bytes().to_vec())
        }
        ScalarType::Sint8 => {
            let v = signed_value(leaf, ty, value, i64::from(i8::MIN), i64::from(i8::MAX))?;
            Ok((v as i8).to_le_bytes().to_vec())
        }
        ScalarType::Sint16 => {
            let v = signed_value(leaf, ty, value, i64::from(i16::MIN), i64::from(i16::MAX))?;
            Ok((v as i16).to_le_bytes().to_vec())
        }
        ScalarType::Sint32 => {
            let v = signed_value(leaf, ty, value, i64::from(i32::MIN), i64::from(i32::MAX))?;
            Ok((v as i32).to_le_bytes().to_vec())
        }
        ScalarType::Bool8 => match value {
            FieldValue::Bool(b) => Ok(vec![u8::from(*b)]),
            other => Err(EncodeError::TypeMismatch {
                field: leaf.name.clone(),
                expected: "bool",
                found: other.kind(),
            }),
        },
        ScalarType::Real32 => {
            let v = value.as_f64().ok_or_else(|| EncodeError::TypeMismatch {
                field: leaf.name.clone(),
                expected: "real",
                found: value.kind(),
            })?;
            Ok((v as f32).to_le_bytes().to_vec())
        }
    }
}

fn unsigned_value(
    leaf: &LeafField,
    ty: ScalarType,
    value: &FieldValue,
    max: u64,
) -> Result<u64, EncodeError> {
    let v = match value {
        FieldValue::Unsigned(v) => Some(*v),
        FieldValue::Signed(v) => u64::try_from(*v).ok(),
        other => {
            return Err(EncodeError::TypeMismatch {
                field: leaf.name.clone(),
                expected: "integer",
                found: other.kind(),
            })
        }
    };
    match v {
        Some(v) if v <= max => Ok(v),
        _ => Err(EncodeError::OutOfRange {
            field: leaf.name.clone(),
            ty,
            value: value.clone(),
        }),
    }
}

fn signed_value(
    leaf: &LeafField,
    ty: ScalarType,
    value: &FieldValue,
    min: i64,
    max: i64,
) -> Result<i64, EncodeError> {
    let v = match value {
        FieldValue::Signed(v) => Some(*v),
        FieldValue::Unsigned(v) => i64::try_from(*v).ok(),
        other => {
            return Err(EncodeError::TypeMismatch {
                field: leaf.name.clone(),
                expected: "integer",
                found: other.kind(),
            })
        }
    };
    match v {
        Some(v) if v >= min && v <= max => Ok(v),
        _ => Err(EncodeError::OutOfRange {
            field: leaf.name.clone(),
            ty,
            value: value.clone(),
        }),
    }
}

fn encode_string(
    leaf: &LeafField,
    encoding: StringEncoding,
    text: &str,
) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(text.len() * encoding.char_width());
    for ch in text.chars() {
        match encoding {
            StringEncoding::Ascii | StringEncoding::Utf8 => {
                if !ch.is_ascii() {
                    return Err(EncodeError::Unencodable {
                        field: leaf.name.clone(),
                        encoding,
                        ch,
                    });
                }
                out.push(ch as u8);
            }
            StringEncoding::Utf16 | StringEncoding::Utf16Le => {
                out.extend_from_slice(&code_unit(leaf, encoding, ch)?.to_le_bytes());
            }
            StringEncoding::Utf16Be => {
                out.extend_from_slice(&code_unit(leaf, encoding, ch)?.to_be_bytes());
            }
        }
    }
    Ok(out)
}

// Single UTF-16 code unit. Code points beyond the BMP would need a
// surrogate pair, which violates the two-bytes-per-character layout.
fn code_unit(leaf: &LeafField, encoding: StringEncoding, ch: char) -> Result<u16, EncodeError> {
    u16::try_from(u32::from(ch)).map_err(|_| EncodeError::Unencodable {
        field: leaf.name.clone(),
        encoding,
        ch,
    })
}
