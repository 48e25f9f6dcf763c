// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Leaf values as they arrive from schema documents.

use serde::{Deserialize, Serialize};

/// A leaf's assigned value.
///
/// Deserialized untagged, so YAML/JSON scalars map to the natural variant:
/// `true` -> `Bool`, `7` -> `Unsigned`, `-7` -> `Signed`, `3.5` -> `Real`,
/// `"abc"` -> `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Real(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Unsigned view; signed values convert when non-negative.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Unsigned(v) => Some(*v),
            Self::Signed(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Signed view; unsigned values convert when they fit.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Signed(v) => Some(*v),
            Self::Unsigned(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Real view; integer values widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            Self::Unsigned(v) => Some(*v as f64),
            Self::Signed(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Short kind label for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Unsigned(_) | Self::Signed(_) => "integer",
            Self::Real(_) => "real",
            Self::Text(_) => "string",
        }
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<u8> for FieldValue {
    fn from(v: u8) -> Self {
        Self::Unsigned(v.into())
    }
}

impl From<u16> for FieldValue {
    fn from(v: u16) -> Self {
        Self::Unsigned(v.into())
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        Self::Unsigned(v.into())
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        Self::Unsigned(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::Signed(v.into())
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Signed(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_sign_views() {
        assert_eq!(FieldValue::Signed(7).as_u64(), Some(7));
        assert_eq!(FieldValue::Signed(-7).as_u64(), None);
        assert_eq!(FieldValue::Unsigned(7).as_i64(), Some(7));
        assert_eq!(FieldValue::Unsigned(u64::MAX).as_i64(), None);
    }

    #[test]
    fn test_real_view_widens_integers() {
        assert_eq!(FieldValue::Unsigned(3).as_f64(), Some(3.0));
        assert_eq!(FieldValue::Signed(-3).as_f64(), Some(-3.0));
        assert_eq!(FieldValue::Text("3".into()).as_f64(), None);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(FieldValue::Bool(true).kind(), "bool");
        assert_eq!(FieldValue::Unsigned(1).kind(), "integer");
        assert_eq!(FieldValue::Signed(-1).kind(), "integer");
        assert_eq!(FieldValue::Real(1.0).kind(), "real");
        assert_eq!(FieldValue::from("x").kind(), "string");
    }
}
