// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Profile commands: inspect or prune a user profile file.

use tplcheck::UserProfile;

/// Loads and prints a profile file.
pub fn show(path: &str) -> anyhow::Result<()> {
    let profile = UserProfile::load_from_file(path)?;
    println!("culture:    {}", if profile.culture.is_empty() { "(default)" } else { &profile.culture });
    println!("view:       {}", profile.view);
    println!("dashboards: {}", profile.dashboards.join(", "));
    Ok(())
}

/// Re-saves a profile in place, dropping empty dashboard entries.
pub fn prune(path: &str) -> anyhow::Result<()> {
    let mut profile = UserProfile::load_from_file(path)?;
    let before = profile.dashboards.len();
    profile.save()?;
    let dropped = before - profile.dashboards.len();
    println!("pruned {} empty dashboard entr{}", dropped, if dropped == 1 { "y" } else { "ies" });
    Ok(())
}
