use anyhow::Result;
use clap::Parser;

use crate::shame::Mode;

const BUILD_INFO_HUMAN: &str = env!("BUILD_INFO_HUMAN");

#[derive(Parser, Debug)]
#[command(name = "prshame")]
#[command(
    about = "Comments on every open pull request older than a week to remind everyone it is still there"
)]
#[command(long_version = BUILD_INFO_HUMAN)]
struct CliArgs {
    /// Repository in format 'owner/repo' (defaults to $GITHUB_REPOSITORY)
    #[arg(short = 'r', long, value_name = "OWNER/REPO")]
    repo: Option<String>,

    /// Log shameful PRs without posting comments
    #[arg(long = "dry-run")]
    dry_run: bool,
}

/// Options taken from the command line; everything else comes from the
/// environment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOptions {
    pub repo: Option<String>,
    pub mode: Mode,
}

/// Parses command-line arguments into run options.
pub fn parse_args<I, T>(args: I) -> Result<RunOptions>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = CliArgs::try_parse_from(args)?;

    Ok(RunOptions {
        repo: cli.repo.filter(|r| !r.trim().is_empty()),
        mode: if cli.dry_run { Mode::DryRun } else { Mode::Post },
    })
}
