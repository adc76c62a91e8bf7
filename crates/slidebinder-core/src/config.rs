// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Binder configuration: where captures are read from and PDFs are written to.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Extension of every document the binder writes.
pub const OUTPUT_EXTENSION: &str = "pdf";

/// Input and output locations for a binder run.
///
/// Both bases are relative to the working directory unless given as absolute
/// paths. Neither directory is created by the binder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinderConfig {
    /// Parent of the per-identifier capture directories.
    pub captures_dir: PathBuf,
    /// Directory the assembled PDFs are written into.
    pub pdfs_dir: PathBuf,
}

impl BinderConfig {
    /// Create a configuration rooted at explicit input and output bases.
    pub fn new(captures_dir: impl Into<PathBuf>, pdfs_dir: impl Into<PathBuf>) -> Self {
        Self {
            captures_dir: captures_dir.into(),
            pdfs_dir: pdfs_dir.into(),
        }
    }

    /// Configuration with both bases placed under `root`.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self::new(root.join("captures"), root.join("pdfs"))
    }

    /// Capture directory for a sanitized token.
    pub fn capture_dir(&self, token: &str) -> PathBuf {
        self.captures_dir.join(token)
    }

    /// Output document path for a sanitized token.
    pub fn output_path(&self, token: &str) -> PathBuf {
        self.pdfs_dir.join(format!("{token}.{OUTPUT_EXTENSION}"))
    }
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self::new("captures", "pdfs")
    }
}
