//! Command-line surface shared by the three binaries.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches};

use crate::config::Config;
use crate::domain::RewriteMode;
use crate::ui;

pub mod orchestration;

pub use orchestration::{
    run_rewrite, run_stat_extract, ExtractWorkflowArgs, RewriteWorkflowArgs,
};

/// Arguments of `stat-extract`
#[derive(clap::Parser, Debug)]
#[command(
    name = "stat-extract",
    version,
    about = "Print the download records of a statistics report as CSV lines"
)]
pub struct StatExtractCli {
    /// HTML statistics report
    pub html_file: PathBuf,
}

/// Arguments of `rewrite-parent-pom` and `rewrite-root-pom`
#[derive(clap::Parser, Debug)]
#[command(version, about = "Bump the snapshot version of a POM file in place")]
pub struct RewriteCli {
    /// POM file to rewrite
    pub file: PathBuf,

    /// Version currently in the file, without the snapshot suffix
    pub old_version: String,

    /// Version to write, without the snapshot suffix
    pub new_version: String,
}

impl RewriteCli {
    /// Parses the process arguments under the given command name.
    ///
    /// Both rewrite binaries share these arguments; the name shows up in
    /// `--help` and `--version`. Exits with status 2 on a usage error.
    pub fn parse_for(name: &'static str) -> Self {
        let matches = Self::command().name(name).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

/// Runs `stat-extract`, printing CSV on stdout.
pub fn stat_extract_main(cli: StatExtractCli) -> Result<()> {
    let args = ExtractWorkflowArgs {
        report: cli.html_file,
    };

    let stdout = io::stdout();
    run_stat_extract(&args, &Config::default(), &mut stdout.lock())?;
    Ok(())
}

/// Runs one of the rewrite commands.
pub fn rewrite_main(cli: RewriteCli, mode: RewriteMode) -> Result<()> {
    let args = RewriteWorkflowArgs {
        file: cli.file,
        old_version: cli.old_version,
        new_version: cli.new_version,
        mode,
    };

    let outcome = run_rewrite(&args, &Config::default())?;
    if outcome.total() > 0 {
        ui::display_success(&format!(
            "Rewrote {} version tag(s) in {}",
            outcome.total(),
            args.file.display()
        ));
    }
    Ok(())
}
