// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for slidebinder.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Pixel density the slide captures are authored at.
pub const SOURCE_DPI: f32 = 96.0;

/// PDF user-space units per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Which image of an ordinal a capture file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlideKind {
    /// The slide itself, `<n>.png`.
    Main,
    /// Optional companion diagram, `<n>-diagram.png`. Follows its main slide.
    Diagram,
}

impl SlideKind {
    /// Page order within a single ordinal.
    pub const ORDER: [SlideKind; 2] = [SlideKind::Main, SlideKind::Diagram];

    /// File name the capture process uses for this kind at `ordinal`.
    pub fn file_name(&self, ordinal: u64) -> String {
        match self {
            Self::Main => format!("{ordinal}.png"),
            Self::Diagram => format!("{ordinal}-diagram.png"),
        }
    }
}

/// One capture file selected for the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideImage {
    pub ordinal: u64,
    pub kind: SlideKind,
    pub path: PathBuf,
}

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageSize {
    /// Page size for an image of `width` x `height` pixels authored at
    /// [`SOURCE_DPI`].
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self {
            width_pt: pixels_to_points(width),
            height_pt: pixels_to_points(height),
        }
    }
}

/// Convert a pixel length at [`SOURCE_DPI`] to points.
pub fn pixels_to_points(pixels: u32) -> f32 {
    pixels as f32 * POINTS_PER_INCH / SOURCE_DPI
}
