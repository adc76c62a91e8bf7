// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for slidebinder.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all slidebinder operations.
#[derive(Debug, Error)]
pub enum SlideBinderError {
    // -- Collection errors --
    #[error("capture directory not found: {}", path.display())]
    CaptureDirNotFound { path: PathBuf },

    #[error("no slide images found in {}", dir.display())]
    NoSlidesFound { dir: PathBuf },

    // -- Assembly errors --
    #[error("refusing to write a PDF with no pages to {}", path.display())]
    EmptyDocument { path: PathBuf },

    #[error("failed to decode image {}: {detail}", path.display())]
    ImageDecode { path: PathBuf, detail: String },

    #[error("failed to write PDF to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -- Storage --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SlideBinderError>;
