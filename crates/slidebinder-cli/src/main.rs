// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// slidebinder: bind captured slide images into a single PDF.
//
// Entry point. Initialises logging, parses the source URL, and runs the binder
// pipeline against `captures/` and `pdfs/` in the working directory.

use anyhow::{Context, Result};
use clap::Parser;
use slidebinder_core::BinderConfig;
use tracing_subscriber::EnvFilter;

/// Bind the captured slides of a presentation into one PDF.
#[derive(Parser, Debug)]
#[command(
    name = "slidebinder",
    version,
    about = "Bind captured slide images into a single page-per-image PDF",
    long_about = "Reads captures/<token>/<n>.png and <n>-diagram.png, where <token> is the \
URL with every run of characters other than letters, digits, '_' and '.' replaced by '_', \
and writes one page per image to pdfs/<token>.pdf. The pdfs/ directory must already exist."
)]
struct Cli {
    /// Source URL the slides were captured from.
    url: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = BinderConfig::default();
    let outcome = slidebinder_document::bind(&cli.url, &config)
        .with_context(|| format!("failed to bind slides for {}", cli.url))?;

    tracing::info!(
        token = %outcome.token,
        pages = outcome.report.page_count(),
        bytes = outcome.report.bytes_written,
        output = %outcome.report.output.display(),
        "Slides bound"
    );

    Ok(())
}
