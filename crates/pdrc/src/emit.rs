// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generated-artifact rendering.
//!
//! The compiler has no opinion on the container format; this module is
//! the default sink. It renders the blob as a C header: the constant
//! array, its size, and a `{record_handle, offset}` index table so
//! firmware can seek into the blob without parsing it.

use crate::compiler::RecordSegment;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Bytes rendered per line of the array initializer.
const BYTES_PER_LINE: usize = 12;

/// Failure writing the generated artifact.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render the blob as a C array initializer body, hex bytes, 12 per line.
pub fn render_c_array(blob: &[u8]) -> String {
    let lines: Vec<String> = blob
        .chunks(BYTES_PER_LINE)
        .map(|chunk| {
            let bytes: Vec<String> = chunk.iter().map(|b| format!("0x{b:02X}")).collect();
            format!("    {}", bytes.join(", "))
        })
        .collect();
    lines.join(",\n")
}

/// Render the full generated header: blob array, size constant, index
/// table, record count.
pub fn render_header(symbol: &str, blob: &[u8], segments: &[RecordSegment]) -> String {
    let mut out = String::new();
    out.push_str("#pragma once\n\n");
    out.push_str("#include <stdint.h>\n#include <stddef.h>\n\n");
    out.push_str("typedef struct { uint32_t record_handle; uint32_t offset; } PdrIndexEntry;\n\n");

    out.push_str(&format!("static const uint8_t {symbol}[] = {{\n"));
    out.push_str(&render_c_array(blob));
    out.push_str("\n};\n\n");

    out.push_str(&format!(
        "static const size_t {symbol}_size = sizeof({symbol});\n\n"
    ));

    out.push_str(&format!("static const PdrIndexEntry {symbol}_index[] = {{\n"));
    for segment in segments {
        // Records that never received a handle have no index entry.
        if let Some(handle) = segment.handle {
            out.push_str(&format!("    {{ {}, {} }},\n", handle, segment.offset));
        }
    }
    out.push_str("};\n\n");

    out.push_str(&format!(
        "#define {symbol}_record_count (sizeof({symbol}_index)/sizeof({symbol}_index[0]))\n\n"
    ));

    for segment in segments {
        out.push_str(&format!(
            "#define {}_{}_offset ({})\n",
            symbol,
            c_ident(&segment.name),
            segment.offset
        ));
    }
    out
}

// Record names come from file stems and may contain characters C
// identifiers cannot.
fn c_ident(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Write the rendered header to `path`.
pub fn write_header(
    path: &Path,
    symbol: &str,
    blob: &[u8],
    segments: &[RecordSegment],
) -> Result<(), EmitError> {
    let rendered = render_header(symbol, blob, segments);
    fs::write(path, rendered).map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "wrote {} ({} bytes, {} records)",
        path.display(),
        blob.len(),
        segments.len()
    );
    Ok(())
}
