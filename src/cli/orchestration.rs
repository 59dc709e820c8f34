//! Command workflows
//!
//! Each binary parses its arguments with clap and hands them over to one of
//! the workflows below. The workflows take plain argument structs so they
//! can be driven from tests without going through clap.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::boundary::{self, BoundaryWarning};
use crate::config::Config;
use crate::domain::RewriteMode;
use crate::extract::StatExtractor;
use crate::rewrite::{PomRewriter, RewriteOutcome};
use crate::ui;

/// Arguments for the statistics extraction workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractWorkflowArgs {
    /// HTML report to read
    pub report: PathBuf,
}

/// Arguments for the POM rewrite workflow
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteWorkflowArgs {
    /// POM file rewritten in place
    pub file: PathBuf,

    pub old_version: String,

    pub new_version: String,

    pub mode: RewriteMode,
}

/// Extracts the download records of `args.report` and writes them as CSV
/// lines to `out`.
///
/// # Returns
///
/// The number of records written
pub fn run_stat_extract<W: Write>(
    args: &ExtractWorkflowArgs,
    config: &Config,
    out: &mut W,
) -> Result<usize> {
    let text = fs::read_to_string(&args.report)
        .with_context(|| format!("Failed to read report '{}'", args.report.display()))?;

    let extractor = StatExtractor::new(&config.extract)?;
    let mut written = 0;
    for record in extractor.extract(&text) {
        writeln!(out, "{}", record).context("Failed to write CSV output")?;
        written += 1;
    }
    out.flush().context("Failed to write CSV output")?;

    log::info!(
        "{}: {} record(s) extracted",
        args.report.display(),
        written
    );
    if written == 0 {
        ui::display_boundary_warning(&BoundaryWarning::EmptyReport {
            file: args.report.display().to_string(),
        });
    }

    Ok(written)
}

/// Rewrites the anchored snapshot versions of `args.file` in place.
pub fn run_rewrite(args: &RewriteWorkflowArgs, config: &Config) -> Result<RewriteOutcome> {
    if let Some(warning) = boundary::check_bump(&args.old_version, &args.new_version) {
        ui::display_boundary_warning(&warning);
    }

    let rewriter = PomRewriter::new(config.rewrite.clone());
    let outcome = rewriter
        .rewrite_file(&args.file, &args.old_version, &args.new_version, args.mode)
        .with_context(|| format!("Failed to rewrite '{}'", args.file.display()))?;

    if outcome.total() == 0 {
        ui::display_boundary_warning(&BoundaryWarning::NoMatches {
            file: args.file.display().to_string(),
            mode: args.mode,
        });
    }

    Ok(outcome)
}
