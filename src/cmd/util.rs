//! Utility commands (version, completion).

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Show version information
pub fn cmd_version(verbose: bool) -> Result<()> {
    println!("tally {}", env!("CARGO_PKG_VERSION"));

    if verbose {
        println!("commit: {}", env!("TALLY_GIT_SHA"));
        println!("built: {}", env!("TALLY_BUILD_DATE"));
    }

    Ok(())
}

/// Generate shell completion script
pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tally", &mut io::stdout());
    Ok(())
}
