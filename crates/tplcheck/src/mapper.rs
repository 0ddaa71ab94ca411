// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Localization of compiler diagnostics back into the original script.
//!
//! Diagnostics are reported against the *assembled* text (body plus
//! header), so their line numbers do not line up with what the user is
//! editing. Localization works by content: the compiled line a diagnostic
//! points at is matched, trimmed, against every line of the original text,
//! and each matching line receives an annotation. Matching every
//! occurrence is deliberate — the same statement may legitimately repeat,
//! and the compiler gives no way to tell which copy it meant.

use crate::annotations::Annotation;
use crate::compiler::CompilationFailure;
use crate::source::SourceText;

/// Characters that terminate the forward scan for an annotation's end.
const DELIMITERS: &str = " [](){}.,;\"':-+*&";

/// Maps each diagnostic in `failure` to character ranges in `original`.
///
/// Per diagnostic:
///
/// 1. Guard `0 < line <= lineCount` of the compiled source; out-of-range
///    diagnostics cannot be localized and are skipped.
/// 2. Take the compiled line, trimmed, as the match pattern.
/// 3. Annotate every original line whose trimmed text equals the pattern.
/// 4. The range starts at the diagnostic's column within the matched line
///    (clamped to the line) and extends to the nearest delimiter or end
///    of document, exclusive.
///
/// A diagnostic whose compiled line matches no original line produces no
/// annotation; the overall failure is still reported through the summary,
/// just without a caret.
pub fn map_diagnostics(original: &SourceText, failure: &CompilationFailure) -> Vec<Annotation> {
    let compiled_lines: Vec<&str> = failure.source_code.split('\n').collect();
    let mut annotations = Vec::new();

    for diagnostic in &failure.errors {
        if diagnostic.line == 0 || diagnostic.line > compiled_lines.len() {
            tracing::debug!(
                "skipping unlocalizable diagnostic at line {}: {}",
                diagnostic.line,
                diagnostic.message
            );
            continue;
        }
        let pattern = compiled_lines[diagnostic.line - 1].trim();

        for line in original.lines() {
            if line.text.trim() != pattern {
                continue;
            }
            let start = (line.start + diagnostic.column.saturating_sub(1)).min(line.end());
            let mut end = start;
            while let Some(c) = original.char_at(end) {
                if DELIMITERS.contains(c) {
                    break;
                }
                end += 1;
            }
            annotations.push(Annotation {
                start,
                end,
                message: diagnostic.message.clone(),
            });
        }
    }

    annotations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::CompilerDiagnostic;

    fn failure(source_code: &str, errors: Vec<CompilerDiagnostic>) -> CompilationFailure {
        CompilationFailure {
            source_code: source_code.to_string(),
            errors,
            summary: "compile failed".to_string(),
        }
    }

    fn diag(line: usize, column: usize, message: &str) -> CompilerDiagnostic {
        CompilerDiagnostic {
            line,
            column,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_delimiter_scan_stops_before_paren() {
        let original = SourceText::new("foo.bar();");
        // Column 5 points at `bar` in the compiled copy of the same line.
        let f = failure("foo.bar();", vec![diag(1, 5, "unknown member")]);
        let annotations = map_diagnostics(&original, &f);
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].start, 4);
        assert_eq!(annotations[0].end, 7); // stops at '('
        assert_eq!(annotations[0].message, "unknown member");
    }

    #[test]
    fn test_all_matching_lines_are_annotated() {
        let original = SourceText::new("x = 1\ny = 2\nx = 1");
        let f = failure("header\nx = 1", vec![diag(2, 1, "bad statement")]);
        let annotations = map_diagnostics(&original, &f);
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[0].start, 0);
        assert_eq!(annotations[1].start, 12);
    }

    #[test]
    fn test_trimmed_match_ignores_indentation() {
        let original = SourceText::new("    foo.bar();");
        let f = failure("foo.bar();", vec![diag(1, 1, "boom")]);
        let annotations = map_diagnostics(&original, &f);
        assert_eq!(annotations.len(), 1);
        // Column applies to the original line as stored, indentation included.
        assert_eq!(annotations[0].start, 0);
        assert_eq!(annotations[0].end, 0); // leading space is a delimiter
    }

    #[test]
    fn test_line_zero_is_skipped() {
        let original = SourceText::new("x = 1");
        let f = failure("x = 1", vec![diag(0, 1, "nowhere")]);
        assert!(map_diagnostics(&original, &f).is_empty());
    }

    #[test]
    fn test_line_past_end_is_skipped() {
        let original = SourceText::new("x = 1");
        let f = failure("x = 1", vec![diag(5, 1, "nowhere")]);
        assert!(map_diagnostics(&original, &f).is_empty());
    }

    #[test]
    fn test_unmatched_pattern_produces_no_annotation() {
        let original = SourceText::new("x = 1");
        let f = failure("y = 2", vec![diag(1, 1, "boom")]);
        assert!(map_diagnostics(&original, &f).is_empty());
    }

    #[test]
    fn test_column_is_clamped_to_line() {
        let original = SourceText::new("ab\ncd");
        let f = failure("ab", vec![diag(1, 99, "far out")]);
        let annotations = map_diagnostics(&original, &f);
        assert_eq!(annotations.len(), 1);
        // Clamped to the end of the first line; the scan then runs into
        // the newline, which is not a delimiter, and continues into `cd`.
        assert_eq!(annotations[0].start, 2);
        assert_eq!(annotations[0].end, 5);
    }

    #[test]
    fn test_range_invariant_holds() {
        let original = SourceText::new("foo.bar();\nbaz qux\nfoo.bar();");
        let f = failure(
            "foo.bar();\nbaz qux",
            vec![diag(1, 5, "a"), diag(2, 1, "b"), diag(2, 5, "c")],
        );
        for annotation in map_diagnostics(&original, &f) {
            assert!(annotation.start <= annotation.end);
            assert!(annotation.end <= original.len());
        }
    }

    #[test]
    fn test_crlf_source_still_matches() {
        let original = SourceText::new("x = 1\r\ny = 2");
        let f = failure("x = 1\r\nheader", vec![diag(1, 1, "boom")]);
        let annotations = map_diagnostics(&original, &f);
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].start, 0);
        assert_eq!(annotations[0].end, 1); // 'x', then space delimiter
    }
}
