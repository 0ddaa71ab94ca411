// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error annotations and the point-lookup store built from them.

use serde::Serialize;
use std::collections::HashMap;

/// A diagnostic message mapped to a character range in the original script.
///
/// `start..end` is half-open in whole-document character coordinates.
/// `start == end` is permitted (a delimiter sat directly at the mapped
/// column); consumers must tolerate empty ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// First character covered by the annotation.
    pub start: usize,
    /// One past the last character covered (exclusive).
    pub end: usize,
    /// The compiler's message for this range.
    pub message: String,
}

/// Point-lookup store mapping character offsets to error messages.
///
/// Built once per validation pass and immutable afterwards; a new
/// validation always builds a fresh store rather than mutating a prior
/// one, so stale entries cannot survive a rebuild.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnnotationStore {
    entries: HashMap<usize, String>,
}

impl AnnotationStore {
    /// Builds a store by expanding each annotation's range into per-offset
    /// entries.
    ///
    /// First writer wins: when two annotations cover the same offset, the
    /// one earlier in emission order keeps the slot.
    pub fn build(annotations: &[Annotation]) -> Self {
        let mut entries: HashMap<usize, String> = HashMap::new();
        for annotation in annotations {
            for offset in annotation.start..annotation.end {
                entries
                    .entry(offset)
                    .or_insert_with(|| annotation.message.clone());
            }
        }
        Self { entries }
    }

    /// The message covering the given offset, if any.
    pub fn lookup(&self, offset: usize) -> Option<&str> {
        self.entries.get(&offset).map(String::as_str)
    }

    /// Returns true if no offset is covered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of covered offsets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
