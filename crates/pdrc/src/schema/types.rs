// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Scalar type registry and string encodings.

use serde::{Deserialize, Serialize};

/// Fixed-width scalar kinds understood by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Uint8,
    Uint16,
    Uint32,
    Sint8,
    Sint16,
    Sint32,
    Enum8,
    Enum16,
    Bool8,
    Real32,
}

impl ScalarType {
    /// Encoded width in bytes.
    pub fn width(self) -> usize {
        match self {
            Self::Uint8 | Self::Sint8 | Self::Enum8 | Self::Bool8 => 1,
            Self::Uint16 | Self::Sint16 | Self::Enum16 => 2,
            Self::Uint32 | Self::Sint32 | Self::Real32 => 4,
        }
    }

    /// Canonical schema spelling.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Sint8 => "sint8",
            Self::Sint16 => "sint16",
            Self::Sint32 => "sint32",
            Self::Enum8 => "enum8",
            Self::Enum16 => "enum16",
            Self::Bool8 => "bool8",
            Self::Real32 => "real32",
        }
    }

    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "uint8" => Some(Self::Uint8),
            "uint16" => Some(Self::Uint16),
            "uint32" => Some(Self::Uint32),
            "sint8" => Some(Self::Sint8),
            "sint16" => Some(Self::Sint16),
            "sint32" => Some(Self::Sint32),
            "enum8" => Some(Self::Enum8),
            "enum16" => Some(Self::Enum16),
            "bool8" => Some(Self::Bool8),
            "real32" => Some(Self::Real32),
            _ => None,
        }
    }
}

/// Character encodings for string leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringEncoding {
    Ascii,
    Utf8,
    Utf16,
    Utf16Le,
    Utf16Be,
}

impl StringEncoding {
    /// Bytes per encoded character.
    pub fn char_width(self) -> usize {
        match self {
            Self::Ascii | Self::Utf8 => 1,
            Self::Utf16 | Self::Utf16Le | Self::Utf16Be => 2,
        }
    }

    /// Canonical schema spelling.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Ascii => "strASCII",
            Self::Utf8 => "strUTF8",
            Self::Utf16 => "strUTF16",
            Self::Utf16Le => "strUTF16LE",
            Self::Utf16Be => "strUTF16BE",
        }
    }

    // Hyphenated spellings appear in older schema documents; accept both.
    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "strASCII" => Some(Self::Ascii),
            "strUTF8" | "strUTF-8" => Some(Self::Utf8),
            "strUTF16" | "strUTF-16" => Some(Self::Utf16),
            "strUTF16LE" | "strUTF-16LE" => Some(Self::Utf16Le),
            "strUTF16BE" | "strUTF-16BE" => Some(Self::Utf16Be),
            _ => None,
        }
    }
}

/// A leaf's declared type.
///
/// Parsing is total: unrecognized spellings are preserved verbatim as
/// [`TypeTag::Unknown`] rather than rejected. Unknown tags are zero-width
/// and encode to zero bytes; each occurrence surfaces as a diagnostic
/// during compilation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeTag {
    Scalar(ScalarType),
    Str(StringEncoding),
    Unknown(String),
}

impl TypeTag {
    /// Parse a schema spelling. Never fails.
    pub fn parse(tag: &str) -> Self {
        if let Some(scalar) = ScalarType::parse(tag) {
            return Self::Scalar(scalar);
        }
        if let Some(encoding) = StringEncoding::parse(tag) {
            return Self::Str(encoding);
        }
        Self::Unknown(tag.to_string())
    }

    /// Fixed byte width; zero for strings (variable) and unknown tags.
    pub fn fixed_width(&self) -> usize {
        match self {
            Self::Scalar(scalar) => scalar.width(),
            Self::Str(_) | Self::Unknown(_) => 0,
        }
    }
}

impl From<String> for TypeTag {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        match tag {
            TypeTag::Scalar(scalar) => scalar.tag().to_string(),
            TypeTag::Str(encoding) => encoding.tag().to_string(),
            TypeTag::Unknown(raw) => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_widths() {
        assert_eq!(ScalarType::Uint8.width(), 1);
        assert_eq!(ScalarType::Uint16.width(), 2);
        assert_eq!(ScalarType::Uint32.width(), 4);
        assert_eq!(ScalarType::Sint8.width(), 1);
        assert_eq!(ScalarType::Sint16.width(), 2);
        assert_eq!(ScalarType::Sint32.width(), 4);
        assert_eq!(ScalarType::Enum8.width(), 1);
        assert_eq!(ScalarType::Enum16.width(), 2);
        assert_eq!(ScalarType::Bool8.width(), 1);
        assert_eq!(ScalarType::Real32.width(), 4);
    }

    #[test]
    fn test_string_char_widths() {
        assert_eq!(StringEncoding::Ascii.char_width(), 1);
        assert_eq!(StringEncoding::Utf8.char_width(), 1);
        assert_eq!(StringEncoding::Utf16.char_width(), 2);
        assert_eq!(StringEncoding::Utf16Le.char_width(), 2);
        assert_eq!(StringEncoding::Utf16Be.char_width(), 2);
    }

    #[test]
    fn test_tag_parse_round_trip() {
        for spelling in [
            "uint8", "uint16", "uint32", "sint8", "sint16", "sint32", "enum8", "enum16", "bool8",
            "real32", "strASCII", "strUTF8", "strUTF16", "strUTF16LE", "strUTF16BE",
        ] {
            let tag = TypeTag::parse(spelling);
            assert_eq!(String::from(tag), spelling);
        }
    }

    #[test]
    fn test_hyphenated_string_spellings() {
        assert_eq!(
            TypeTag::parse("strUTF-16BE"),
            TypeTag::Str(StringEncoding::Utf16Be)
        );
        assert_eq!(TypeTag::parse("strUTF-8"), TypeTag::Str(StringEncoding::Utf8));
    }

    #[test]
    fn test_unknown_tag_is_zero_width() {
        let tag = TypeTag::parse("uint128");
        assert_eq!(tag, TypeTag::Unknown("uint128".to_string()));
        assert_eq!(tag.fixed_width(), 0);
    }

    #[test]
    fn test_fixed_width_ignores_strings() {
        assert_eq!(TypeTag::Str(StringEncoding::Utf16).fixed_width(), 0);
        assert_eq!(TypeTag::Scalar(ScalarType::Uint32).fixed_width(), 4);
    }
}
