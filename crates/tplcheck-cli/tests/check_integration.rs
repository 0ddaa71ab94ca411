// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Integration tests for the check command.

use std::fs;
use tempfile::TempDir;
use tplcheck_cli::commands;

#[test]
fn test_check_valid_script() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("ok.lua");
    fs::write(&script, "local a = 1\nreturn a").unwrap();

    let report = commands::check::run(script.to_str().unwrap(), None, "Report", None, false)
        .expect("check should run");
    assert!(report.ok);
}

#[test]
fn test_check_invalid_script_reports_annotations() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("bad.lua");
    fs::write(&script, "local a = 1\nlocal b = = 2").unwrap();

    let report = commands::check::run(script.to_str().unwrap(), None, "Report", None, false)
        .expect("check should run");
    assert!(!report.ok);
    assert!(!report.annotations.is_empty());
}

#[test]
fn test_check_with_header_file() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("ok.lua");
    let header = dir.path().join("header.lua");
    fs::write(&script, "local a = 1").unwrap();
    fs::write(&header, "local ctx = {}").unwrap();

    let report = commands::check::run(
        script.to_str().unwrap(),
        Some(header.to_str().unwrap()),
        "Report",
        None,
        false,
    )
    .expect("check should run");
    assert!(report.ok);
}

#[test]
fn test_check_missing_file_errors() {
    let result = commands::check::run("/nonexistent/script.lua", None, "Report", None, false);
    assert!(result.is_err());
}
