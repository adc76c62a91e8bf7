// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Identifier sanitising: turn an arbitrary source URL into a token that is
// safe to use as a directory name and a file stem.

use once_cell::sync::Lazy;
use regex::Regex;

/// Any run of characters outside ASCII letters, digits, `_` and `.`.
///
/// The class is spelled out in ASCII ranges so that non-ASCII letters and
/// digits are collapsed too.
static RE_DISALLOWED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.]+").unwrap());

/// Replace every maximal run of disallowed characters with a single `_`.
///
/// The result only contains `[A-Za-z0-9_.]`. Underscores already present in
/// the input are kept as they are; only disallowed runs are collapsed.
pub fn sanitize(raw: &str) -> String {
    RE_DISALLOWED_RUN.replace_all(raw, "_").into_owned()
}
