// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Script assembly: combining a user script with its header fragment.

/// The text handed to the compiler, built from a user script and an
/// optional header fragment.
///
/// Built fresh per validation call and discarded once compilation returns.
#[derive(Debug, Clone)]
pub struct CompilationUnit<'a> {
    /// The user's original script.
    pub body: &'a str,
    /// The header fragment appended after the body, if any.
    pub header: Option<&'a str>,
    /// The combined text as it will be compiled.
    pub assembled_text: String,
    /// Character offset in `assembled_text` where the body ends.
    ///
    /// When a header is present, the separator newline sits at this
    /// offset; diagnostics located at or past it belong to the header,
    /// not the user's script.
    pub boundary: usize,
}

/// Concatenates a script body with an optional header.
///
/// A single `\n` separates body and header regardless of the body's
/// original line-ending style. An absent or empty header leaves the body
/// untouched. Purely structural; no validation, no failure modes.
pub fn assemble<'a>(body: &'a str, header: Option<&'a str>) -> CompilationUnit<'a> {
    let boundary = body.chars().count();
    match header {
        Some(h) if !h.is_empty() => CompilationUnit {
            body,
            header: Some(h),
            assembled_text: format!("{}\n{}", body, h),
            boundary,
        },
        _ => CompilationUnit {
            body,
            header: None,
            assembled_text: body.to_string(),
            boundary,
        },
    }
}
