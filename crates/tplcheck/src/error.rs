// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for the tplcheck validation engine.
//!
//! This module defines [`TplcheckError`], the main error enum. Note that
//! compile *diagnostics* are not errors in this sense: a script that fails
//! to compile is a normal outcome of validation and is reported as data
//! (see [`crate::compiler::CompilationFailure`]). `TplcheckError` covers
//! the faults that prevent the engine itself from doing its job, such as
//! profile files that cannot be read or written.

use thiserror::Error;

/// The main error type for tplcheck operations.
#[derive(Error, Debug)]
pub enum TplcheckError {
    /// A user profile file could not be read or parsed.
    #[error("Unable to read the profile file '{path}': {source}")]
    ProfileRead {
        /// The offending file path.
        path: String,
        /// The underlying cause (I/O or parse failure).
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A user profile file could not be written.
    #[error("Unable to write the profile file '{path}': {source}")]
    ProfileWrite {
        /// The target file path.
        path: String,
        /// The underlying cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A profile save was requested but no path is associated with the profile.
    #[error("Profile has no associated path to save to")]
    ProfileNoPath,

    /// Lua-level error surfaced outside of compilation diagnostics.
    #[error("Lua error: {0}")]
    LuaError(#[from] mlua::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for Results with [`TplcheckError`].
pub type Result<T> = std::result::Result<T, TplcheckError>;
