// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Top-level validation entry point.
//!
//! [`Validator`] wires the pipeline together: assemble the script with its
//! header, hand the unit to the compilation adapter, map any diagnostics
//! back into the original text, and build the annotation store the caller
//! queries for tooltips. One validation call runs to completion before
//! returning; each call produces its own store.

use crate::annotations::{Annotation, AnnotationStore};
use crate::assembler::assemble;
use crate::compiler::{CompilationAdapter, CompileError, TypeDescriptor};
use crate::mapper::map_diagnostics;
use crate::source::SourceText;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Fixed message reported when a script compiles cleanly.
pub const SYNTAX_OK_MESSAGE: &str = "Script syntax is OK";

/// Phrases that mark a compile failure as a missing-dependency condition.
/// Matched case-insensitively against the composed summary.
const MISSING_DEPENDENCY_PHRASES: &[&str] =
    &["are you missing an assembly reference", "module not found"];

/// Supplies the boilerplate header appended to a script when the caller
/// gives no explicit override.
pub trait HeaderProvider {
    /// The header for scripts compiled against the given context type,
    /// if one applies.
    fn script_header(&self, context: &TypeDescriptor) -> Option<String>;
}

/// Outcome of a validation call.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// True when the script compiled without diagnostics.
    pub ok: bool,
    /// Success message, composed failure summary, or raw host error.
    pub summary: String,
    /// Mapped annotations in emission order. Empty on success and on
    /// host errors.
    pub annotations: Vec<Annotation>,
    /// Point-lookup store over `annotations`.
    pub store: AnnotationStore,
}

impl ValidationReport {
    fn success() -> Self {
        Self {
            ok: true,
            summary: SYNTAX_OK_MESSAGE.to_string(),
            annotations: Vec::new(),
            store: AnnotationStore::default(),
        }
    }
}

/// Orchestrates script assembly, compilation, and diagnostic mapping.
pub struct Validator<A: CompilationAdapter> {
    adapter: A,
    header_provider: Option<Box<dyn HeaderProvider>>,
    dependency_folder: Option<PathBuf>,
}

impl<A: CompilationAdapter> Validator<A> {
    /// Creates a validator over the given compilation adapter.
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            header_provider: None,
            dependency_folder: None,
        }
    }

    /// Sets the collaborator that supplies headers when the caller passes
    /// none.
    pub fn with_header_provider(mut self, provider: Box<dyn HeaderProvider>) -> Self {
        self.header_provider = Some(provider);
        self
    }

    /// Sets the folder named in the missing-dependency hint.
    pub fn with_dependency_folder(mut self, folder: impl AsRef<Path>) -> Self {
        self.dependency_folder = Some(folder.as_ref().to_path_buf());
        self
    }

    /// Validates `body` against `context`, using the header provider for
    /// boilerplate.
    pub fn validate_with_defaults(&self, body: &str, context: &TypeDescriptor) -> ValidationReport {
        self.validate(body, None, context)
    }

    /// Validates `body` with an explicit header override (`None` falls
    /// back to the header provider).
    ///
    /// Never fails: compile problems are reported inside the returned
    /// [`ValidationReport`], and the assembled unit is discarded whether
    /// compilation succeeds or not.
    pub fn validate(
        &self,
        body: &str,
        header: Option<&str>,
        context: &TypeDescriptor,
    ) -> ValidationReport {
        let provided;
        let header = match header {
            Some(h) => Some(h),
            None => {
                provided = self
                    .header_provider
                    .as_ref()
                    .and_then(|p| p.script_header(context));
                provided.as_deref()
            }
        };
        let unit = assemble(body, header);

        match self.adapter.compile(&unit, context) {
            Ok(_) => {
                tracing::debug!("script compiled cleanly against {}", context.name());
                ValidationReport::success()
            }
            Err(CompileError::Compilation(failure)) => {
                let original = SourceText::new(body);
                let annotations = map_diagnostics(&original, &failure);
                let store = AnnotationStore::build(&annotations);

                let mut summary = format!("Compilation error:\n{}", failure.summary);
                if let Some(folder) = &self.dependency_folder {
                    if is_missing_dependency(&summary) {
                        summary.push_str(&format!(
                            "\nNote that you can add modules to load by copying them into the dependency folder: '{}'",
                            folder.display()
                        ));
                    }
                }
                ValidationReport {
                    ok: false,
                    summary,
                    annotations,
                    store,
                }
            }
            Err(CompileError::Host(message)) => {
                tracing::warn!("compilation host error: {}", message);
                ValidationReport {
                    ok: false,
                    summary: message,
                    annotations: Vec::new(),
                    store: AnnotationStore::default(),
                }
            }
        }
    }
}

fn is_missing_dependency(summary: &str) -> bool {
    let lowered = summary.to_lowercase();
    MISSING_DEPENDENCY_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}
