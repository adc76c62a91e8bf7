// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// slidebinder-document: Slide collection and PDF assembly.
//
// Provides the slide collector (scan a capture directory for `<n>.png` and
// `<n>-diagram.png` in page order), the page-per-image PDF assembler, and the
// binder pipeline that wires identifier sanitising, collection and assembly
// together.

pub mod binder;
pub mod collect;
pub mod pdf;

// Re-export the primary entry points so callers can use `slidebinder_document::bind` etc.
pub use binder::{BindOutcome, bind};
pub use collect::{SlideScan, collect, scan};
pub use pdf::writer::{AssemblyReport, SlideAssembler, assemble};
