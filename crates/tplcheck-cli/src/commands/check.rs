// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Check command: validate a script file and print mapped diagnostics.

use std::fs;
use std::path::Path;
use tplcheck::{LuaCompiler, TypeDescriptor, ValidationReport, Validator};

/// Runs the check command.
///
/// Returns the validation report so the caller can decide the exit code.
pub fn run(
    file: &str,
    header_file: Option<&str>,
    context: &str,
    deps_dir: Option<&str>,
    json: bool,
) -> anyhow::Result<ValidationReport> {
    let body = fs::read_to_string(file)?;
    let header = match header_file {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    let mut validator = Validator::new(LuaCompiler::new());
    if let Some(dir) = deps_dir {
        validator = validator.with_dependency_folder(Path::new(dir));
    }

    tracing::debug!("checking {} against context type {}", file, context);
    let report = validator.validate(&body, header.as_deref(), &TypeDescriptor::new(context));

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for annotation in &report.annotations {
            println!(
                "{}..{}: {}",
                annotation.start, annotation.end, annotation.message
            );
        }
        println!("{}", report.summary);
    }

    Ok(report)
}
