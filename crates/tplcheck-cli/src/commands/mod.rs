// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! CLI command implementations.
//!
//! - `check`: validate a script file and print mapped diagnostics
//! - `profile`: inspect or prune a user profile file

/// Script validation command.
pub mod check;
/// User profile commands.
pub mod profile;
