// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! User profile persistence.
//!
//! A small JSON record independent of the validation engine: preferred
//! culture, startup view, and pinned dashboards. Load failures carry the
//! offending path and the underlying cause; they are never swallowed.

use crate::error::{Result, TplcheckError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_view() -> String {
    "reports".to_string()
}

/// Per-user settings persisted alongside the report repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Preferred culture name (empty means host default).
    #[serde(default)]
    pub culture: String,
    /// Startup view.
    #[serde(default = "default_view")]
    pub view: String,
    /// Pinned dashboard identifiers.
    #[serde(default)]
    pub dashboards: Vec<String>,
    /// The file this profile was loaded from or last saved to.
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            culture: String::new(),
            view: default_view(),
            dashboards: Vec::new(),
            path: None,
        }
    }
}

impl UserProfile {
    /// Loads a profile from a JSON file.
    ///
    /// On success the returned profile remembers `path` for later
    /// [`save`](Self::save) calls.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let read = || -> std::result::Result<Self, Box<dyn std::error::Error + Send + Sync>> {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        };
        match read() {
            Ok(mut profile) => {
                profile.path = Some(path.to_path_buf());
                Ok(profile)
            }
            Err(source) => Err(TplcheckError::ProfileRead {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Saves the profile to its remembered path.
    pub fn save(&mut self) -> Result<()> {
        match self.path.clone() {
            Some(path) => self.save_to_file(path),
            None => Err(TplcheckError::ProfileNoPath),
        }
    }

    /// Saves the profile to `path` as JSON.
    ///
    /// Empty dashboard entries are pruned before writing. The profile's
    /// remembered path is updated to `path` whether or not the write
    /// succeeds, matching the save-target-wins contract of the original
    /// store.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.dashboards.retain(|entry| !entry.is_empty());

        let result = (|| -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
            let json = serde_json::to_string_pretty(self)?;
            fs::write(path, json)?;
            Ok(())
        })();
        self.path = Some(path.to_path_buf());

        result.map_err(|source| TplcheckError::ProfileWrite {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");

        let mut profile = UserProfile {
            culture: "en-US".to_string(),
            view: "dashboards".to_string(),
            dashboards: vec!["sales".to_string(), "ops".to_string()],
            path: None,
        };
        profile.save_to_file(&path).unwrap();
        assert_eq!(profile.path.as_deref(), Some(path.as_path()));

        let loaded = UserProfile::load_from_file(&path).unwrap();
        assert_eq!(loaded.culture, "en-US");
        assert_eq!(loaded.view, "dashboards");
        assert_eq!(loaded.dashboards, vec!["sales", "ops"]);
        assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_empty_dashboards_are_pruned_on_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");

        let mut profile = UserProfile {
            dashboards: vec!["sales".to_string(), String::new(), "ops".to_string()],
            ..UserProfile::default()
        };
        profile.save_to_file(&path).unwrap();
        assert_eq!(profile.dashboards, vec!["sales", "ops"]);

        let loaded = UserProfile::load_from_file(&path).unwrap();
        assert_eq!(loaded.dashboards, vec!["sales", "ops"]);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{}").unwrap();

        let loaded = UserProfile::load_from_file(&path).unwrap();
        assert_eq!(loaded.view, "reports");
        assert!(loaded.culture.is_empty());
        assert!(loaded.dashboards.is_empty());
    }

    #[test]
    fn test_load_error_carries_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        let err = UserProfile::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_path_updated_even_when_save_fails() {
        let dir = TempDir::new().unwrap();
        // Writing to a directory path fails.
        let mut profile = UserProfile::default();
        let result = profile.save_to_file(dir.path());
        assert!(result.is_err());
        assert_eq!(profile.path.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_save_without_path_errors() {
        let mut profile = UserProfile::default();
        assert!(matches!(
            profile.save(),
            Err(TplcheckError::ProfileNoPath)
        ));
    }
}
