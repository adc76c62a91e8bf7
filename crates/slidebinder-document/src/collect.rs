// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Slide collector: find the numbered slide captures in a directory and put
// them in page order.
//
// Capture files are named `<n>.png` for a slide and `<n>-diagram.png` for an
// optional diagram shown after it. Any file whose extension-less name is a
// plain integer contributes to the highest ordinal `M`; only slides with an
// ordinal in `0..=M` are collected.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use slidebinder_core::error::{Result, SlideBinderError};
use slidebinder_core::{SlideImage, SlideKind};
use tracing::{debug, info, instrument};

/// Outcome of scanning one capture directory.
#[derive(Debug, Clone)]
pub struct SlideScan {
    /// The directory that was scanned.
    dir: PathBuf,
    /// Highest integer base name seen, if any.
    max_ordinal: Option<u64>,
    /// Selected slides in page order.
    slides: Vec<SlideImage>,
}

impl SlideScan {
    /// The scanned directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Highest ordinal found, or `-1` when no file name parsed as one.
    pub fn max_ordinal(&self) -> i64 {
        self.max_ordinal
            .and_then(|max| i64::try_from(max).ok())
            .unwrap_or(-1)
    }

    /// Selected slides in page order.
    pub fn slides(&self) -> &[SlideImage] {
        &self.slides
    }

    /// Number of selected slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True when no slide was selected.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Image paths in page order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.slides.iter().map(|slide| slide.path.clone()).collect()
    }

    /// Consume the scan, keeping only the image paths in page order.
    pub fn into_paths(self) -> Vec<PathBuf> {
        self.slides.into_iter().map(|slide| slide.path).collect()
    }
}

/// Scan `dir` and return the ordered slide list.
///
/// Fails with [`SlideBinderError::CaptureDirNotFound`] if the directory does
/// not exist. Names that do not parse are skipped without error.
#[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
pub fn scan(dir: impl AsRef<Path>) -> Result<SlideScan> {
    let dir = dir.as_ref();
    let names = list_file_names(dir)?;

    let max_ordinal = names.iter().filter_map(|name| parse_ordinal(name)).max();

    let mut slides: Vec<SlideImage> = match max_ordinal {
        Some(max) => names
            .iter()
            .filter_map(|name| parse_slide_name(name))
            .filter(|(ordinal, _)| *ordinal <= max)
            .map(|(ordinal, kind)| SlideImage {
                ordinal,
                kind,
                path: dir.join(kind.file_name(ordinal)),
            })
            .collect(),
        None => Vec::new(),
    };
    slides.sort_by_key(|slide| (slide.ordinal, slide.kind == SlideKind::Diagram));

    info!(
        files = names.len(),
        max_ordinal = ?max_ordinal,
        slides = slides.len(),
        "Capture directory scanned"
    );

    Ok(SlideScan {
        dir: dir.to_path_buf(),
        max_ordinal,
        slides,
    })
}

/// Scan `dir` and return just the image paths in page order.
pub fn collect(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    scan(dir).map(SlideScan::into_paths)
}

// -- Helpers ------------------------------------------------------------------

/// Names of the regular files directly inside `dir`.
fn list_file_names(dir: &Path) -> Result<HashSet<String>> {
    let entries = std::fs::read_dir(dir).map_err(|err| match err.kind() {
        ErrorKind::NotFound => SlideBinderError::CaptureDirNotFound {
            path: dir.to_path_buf(),
        },
        _ => SlideBinderError::Io(err),
    })?;

    let mut names = HashSet::new();
    for entry in entries {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => {
                names.insert(name);
            }
            Err(raw) => debug!(name = ?raw, "Skipping non UTF-8 file name"),
        }
    }
    Ok(names)
}

/// Ordinal encoded by a file name, ignoring its extension.
///
/// The whole stem must be a base-10 integer: `"3.png"` and `"3"` give 3,
/// `"3abc.png"` and `"0-diagram.png"` give nothing.
fn parse_ordinal(file_name: &str) -> Option<u64> {
    let stem = Path::new(file_name).file_stem()?.to_str()?;
    match stem.parse::<u64>() {
        Ok(ordinal) => Some(ordinal),
        Err(_) => {
            debug!(file_name, "Ignoring non-numeric file name");
            None
        }
    }
}

/// Recognise the exact names produced by [`SlideKind::file_name`].
///
/// Only the canonical spelling matches, so `"03.png"` or `"+3.png"` are not
/// slides even though their stems parse as ordinals.
fn parse_slide_name(file_name: &str) -> Option<(u64, SlideKind)> {
    let (digits, kind) = if let Some(digits) = file_name.strip_suffix("-diagram.png") {
        (digits, SlideKind::Diagram)
    } else {
        (file_name.strip_suffix(".png")?, SlideKind::Main)
    };
    let ordinal: u64 = digits.parse().ok()?;
    (kind.file_name(ordinal) == file_name).then_some((ordinal, kind))
}
