// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module: page-per-image document assembly.

pub mod writer;

pub use writer::{AssemblyReport, SlideAssembler, assemble};
