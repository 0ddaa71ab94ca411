// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # tplcheck
//!
//! Script validation and error localization for report template scripts.
//!
//! Report definitions embed user-authored scripts that are compiled on the
//! fly. tplcheck compiles such a script (plus its boilerplate header)
//! through a pluggable compilation adapter and, when compilation fails,
//! maps every compiler diagnostic back to a character range in the
//! *original* uncombined script, so an editor can underline the offending
//! text and answer point queries with the error message.
//!
//! ## Quick Start
//!
//! ```rust
//! use tplcheck::{LuaCompiler, TypeDescriptor, Validator};
//!
//! let validator = Validator::new(LuaCompiler::new());
//! let report = validator.validate("local a = = 1", None, &TypeDescriptor::new("Report"));
//! assert!(!report.ok);
//! // Every offset inside a mapped range answers with the message.
//! for annotation in &report.annotations {
//!     assert_eq!(report.store.lookup(annotation.start), Some(annotation.message.as_str()));
//! }
//! ```

/// Error annotations and the point-lookup store.
pub mod annotations;
/// Script/header assembly into a compilation unit.
pub mod assembler;
/// Compilation adapter trait and the Lua-backed implementation.
pub mod compiler;
/// Error types and reporting.
pub mod error;
/// Diagnostic-to-source localization.
pub mod mapper;
/// User profile persistence.
pub mod profile;
/// Original script text with offset tracking.
pub mod source;
/// Top-level validation entry point.
pub mod validator;

pub use annotations::{Annotation, AnnotationStore};
pub use assembler::{assemble, CompilationUnit};
pub use compiler::{
    CompilationAdapter, CompilationFailure, CompileError, CompiledArtifact, CompilerDiagnostic,
    LuaCompiler, TypeDescriptor,
};
pub use error::{Result, TplcheckError};
pub use mapper::map_diagnostics;
pub use profile::UserProfile;
pub use source::{SourceLine, SourceText};
pub use validator::{HeaderProvider, ValidationReport, Validator, SYNTAX_OK_MESSAGE};
