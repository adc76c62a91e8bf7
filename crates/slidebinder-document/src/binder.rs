// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Binder pipeline: identifier → capture directory → ordered slides → PDF.

use std::path::PathBuf;

use slidebinder_core::error::{Result, SlideBinderError};
use slidebinder_core::{BinderConfig, sanitize};
use tracing::{info, instrument};

use crate::collect;
use crate::pdf::writer::{AssemblyReport, SlideAssembler};

/// Result of binding one identifier's captures.
#[derive(Debug, Clone)]
pub struct BindOutcome {
    /// Sanitized form of the identifier.
    pub token: String,
    /// Directory the slides were read from.
    pub capture_dir: PathBuf,
    pub report: AssemblyReport,
}

/// Bind the captures for `identifier` into a single PDF.
///
/// The identifier is sanitized into a token, slides are collected from
/// `config.capture_dir(token)` and the document is written to
/// `config.output_path(token)`. A capture directory without any slides fails
/// with [`SlideBinderError::NoSlidesFound`] and writes nothing.
#[instrument(skip(config))]
pub fn bind(identifier: &str, config: &BinderConfig) -> Result<BindOutcome> {
    let token = sanitize(identifier);
    let capture_dir = config.capture_dir(&token);
    let output = config.output_path(&token);
    info!(token = %token, capture_dir = %capture_dir.display(), "Binding slides");

    let slides = collect::scan(&capture_dir)?;
    if slides.is_empty() {
        return Err(SlideBinderError::NoSlidesFound { dir: capture_dir });
    }

    let report = SlideAssembler::new(identifier).write_to_file(&slides.into_paths(), &output)?;

    Ok(BindOutcome {
        token,
        capture_dir,
        report,
    })
}
