// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use pdrc_gen::runner::{run, RunConfig};
use std::fs;
use std::path::Path;

const TERMINUS_YAML: &str = r"
fields:
  - name: commonHeader
    fields:
      - name: record_handle
        type: uint32
      - name: pdr_length
        type: uint16
  - name: terminusHandle
    type: uint16
    value: 7
";

const NAMES_YAML: &str = r#"
fields:
  - name: commonHeader
    fields:
      - name: record_handle
        type: uint32
      - name: pdr_length
        type: uint16
  - name: languageTag
    type: strASCII
    value: "en"
"#;

fn write_schemas(dir: &Path) {
    fs::write(dir.join("10_terminus.yaml"), TERMINUS_YAML).expect("write schema");
    fs::write(dir.join("20_names.yaml"), NAMES_YAML).expect("write schema");
}

#[test]
fn test_generates_header_from_schema_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let schema_dir = dir.path().join("schemas");
    fs::create_dir(&schema_dir).expect("mkdir");
    write_schemas(&schema_dir);
    let output = dir.path().join("pdr_data.h");

    let report = run(&RunConfig {
        schema_dir,
        output: output.clone(),
        symbol: "pdr_blob".to_string(),
        strict: false,
    })
    .expect("run succeeds");

    assert_eq!(report.records, 2);
    // terminus: 6-byte header + uint16; names: 6-byte header + "en"
    assert_eq!(report.blob_bytes, 8 + 8);
    assert_eq!(report.warnings, 0);

    let header = fs::read_to_string(&output).expect("read header");
    assert!(header.contains("static const uint8_t pdr_blob[] = {"));
    assert!(header.contains("static const size_t pdr_blob_size = sizeof(pdr_blob);"));
    // Handles in file-path order; second record starts after the first's
    // 8 bytes.
    assert!(header.contains("{ 0, 0 },"));
    assert!(header.contains("{ 1, 8 },"));
    // terminusHandle = 7 little-endian, then the second record's handle.
    assert!(header.contains("0x07, 0x00, 0x01"));
    assert!(header.contains("#define pdr_blob_10_terminus_offset (0)"));
    assert!(header.contains("#define pdr_blob_20_names_offset (8)"));
}

#[test]
fn test_strict_mode_rejects_diagnostics() {
    let dir = tempfile::tempdir().expect("tempdir");
    let schema_dir = dir.path().join("schemas");
    fs::create_dir(&schema_dir).expect("mkdir");
    fs::write(
        schema_dir.join("odd.yaml"),
        "fields:\n  - name: mystery\n    type: uint128\n    value: 5\n",
    )
    .expect("write schema");
    let output = dir.path().join("pdr_data.h");

    let result = run(&RunConfig {
        schema_dir,
        output: output.clone(),
        symbol: "pdr_data".to_string(),
        strict: true,
    });

    assert!(result.is_err());
    assert!(!output.exists(), "strict failure must not leave an artifact");
}

#[test]
fn test_missing_schema_dir_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = run(&RunConfig {
        schema_dir: dir.path().join("does_not_exist"),
        output: dir.path().join("out.h"),
        symbol: "pdr_data".to_string(),
        strict: false,
    });
    assert!(result.is_err());
}
