// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Compilation adapter: the pluggable seam to the script compiler.
//!
//! [`CompilationAdapter`] is the capability the validator needs: hand it an
//! assembled compilation unit plus a context type descriptor and get back
//! either an opaque artifact or a structured failure. [`LuaCompiler`] is
//! the in-tree implementation, compiling the assembled text as a Lua chunk
//! through `mlua`.
//!
//! Failures come in two kinds and they must not be conflated:
//!
//! - [`CompileError::Compilation`]: the compiler produced per-location
//!   diagnostics; these flow on to the diagnostic mapper.
//! - [`CompileError::Host`]: anything else (missing dependency, runtime
//!   fault in the compilation service); carries only a message and is
//!   never mapped.

use crate::assembler::CompilationUnit;
use lazy_static::lazy_static;
use mlua::Lua;
use nanoid::nanoid;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Describes the context type a script is compiled against.
///
/// The validator passes this through to the adapter; what it means is up
/// to the implementation (the original system resolved ambient model
/// variables from it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
}

impl TypeDescriptor {
    /// Creates a descriptor for the named context type.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The context type name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A single compiler-reported diagnostic against the assembled text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerDiagnostic {
    /// 1-based line in the assembled source.
    pub line: usize,
    /// 1-based column in that line.
    pub column: usize,
    /// The compiler's message.
    pub message: String,
}

/// A compile failure carrying per-location diagnostics.
#[derive(Debug, Clone)]
pub struct CompilationFailure {
    /// The exact text that was compiled (the assembled unit).
    pub source_code: String,
    /// Diagnostics in compiler emission order, not de-duplicated.
    pub errors: Vec<CompilerDiagnostic>,
    /// Human-readable failure summary.
    pub summary: String,
}

/// Failure outcome of a compile attempt.
#[derive(Error, Debug)]
pub enum CompileError {
    /// The compiler rejected the script with diagnostics.
    #[error("{}", .0.summary)]
    Compilation(CompilationFailure),

    /// The compilation service itself failed; no diagnostics available.
    #[error("{0}")]
    Host(String),
}

/// Opaque result of a successful compile.
#[derive(Debug, Clone)]
pub struct CompiledArtifact {
    /// The identity the unit was compiled under.
    pub identity: String,
    /// Compiled chunk bytecode.
    pub bytecode: Vec<u8>,
}

/// The compilation capability the validator is built against.
///
/// One attempt per call; implementations do not retry and do not block
/// indefinitely. A dependency that fails to load is a reported error, not
/// a hang.
pub trait CompilationAdapter {
    /// Compiles the assembled unit against the given context type.
    fn compile(
        &self,
        unit: &CompilationUnit<'_>,
        context: &TypeDescriptor,
    ) -> Result<CompiledArtifact, CompileError>;
}

lazy_static! {
    // Lua error locations: `[string "chunkname"]:LINE: message` for loaded
    // strings, `name:LINE: message` for named chunks.
    static ref LOCATION_RE: Regex =
        Regex::new(r#"(?:\[string "[^"]*"\]|[\w@./-]+):(\d+):\s*([^\r\n]*)"#).unwrap();
}

/// Parses Lua compiler output into location diagnostics.
///
/// Lua reports no column, so every diagnostic gets column 1. A message
/// with no recognizable location degrades to a single line-0 diagnostic,
/// which the mapper treats as unlocalizable.
fn parse_diagnostics(message: &str) -> Vec<CompilerDiagnostic> {
    let mut errors = Vec::new();
    for caps in LOCATION_RE.captures_iter(message) {
        if let Ok(line) = caps[1].parse::<usize>() {
            errors.push(CompilerDiagnostic {
                line,
                column: 1,
                message: caps[2].trim().to_string(),
            });
        }
    }
    if errors.is_empty() {
        errors.push(CompilerDiagnostic {
            line: 0,
            column: 1,
            message: message.trim().to_string(),
        });
    }
    errors
}

/// Compiles scripts as Lua chunks through an embedded `mlua` state.
///
/// Every attempt names its chunk with a freshly generated identity so
/// nothing can collide with a previously compiled chunk while the user
/// iterates on the same text. The chunk is loaded but never executed;
/// a successful load is dumped to bytecode as the artifact.
#[derive(Debug, Default)]
pub struct LuaCompiler;

impl LuaCompiler {
    /// Creates a new Lua-backed compiler.
    pub fn new() -> Self {
        Self
    }
}

impl CompilationAdapter for LuaCompiler {
    fn compile(
        &self,
        unit: &CompilationUnit<'_>,
        context: &TypeDescriptor,
    ) -> Result<CompiledArtifact, CompileError> {
        let identity = nanoid!();
        tracing::debug!(
            "compiling chunk {} against context type {}",
            identity,
            context.name()
        );

        let lua = Lua::new();
        match lua
            .load(&unit.assembled_text)
            .set_name(identity.clone())
            .into_function()
        {
            Ok(function) => Ok(CompiledArtifact {
                identity,
                bytecode: function.dump(true),
            }),
            Err(mlua::Error::SyntaxError { message, .. }) => {
                let errors = parse_diagnostics(&message);
                tracing::debug!("chunk {} rejected with {} diagnostic(s)", identity, errors.len());
                Err(CompileError::Compilation(CompilationFailure {
                    source_code: unit.assembled_text.clone(),
                    errors,
                    summary: message,
                }))
            }
            Err(other) => {
                tracing::warn!("chunk {} failed outside compilation: {}", identity, other);
                Err(CompileError::Host(other.to_string()))
            }
        }
    }
}
