// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! tplcheck CLI library.
//!
//! Command-line interface over the tplcheck validation engine.
//!
//! # Usage
//!
//! This crate is primarily used through the `tplcheck` binary:
//!
//! ```bash
//! tplcheck check script.lua            # Validate a script file
//! tplcheck check script.lua --json     # Machine-readable report
//! tplcheck profile show profile.json   # Inspect a user profile
//! ```

/// CLI commands (check, profile).
pub mod commands;
