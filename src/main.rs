//! reelcap - movie metadata and review lookup
//!
//! Looks up a movie by title and year, combining OMDb metadata with up to
//! 3 TMDB reviews.
//!
//! # Usage
//!
//! ```bash
//! reelcap "Inception" 2010
//! reelcap "Inception" 2010 --json
//! ```

use clap::Parser;

use reelcap::cli::{self, Cli, ExitCode, Output};
use reelcap::commands;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let exit_code = run_cli(cli).await;
    std::process::exit(exit_code.into());
}

/// Run the lookup and return an exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);

    if let Err(e) = cli::validate_title(&cli.title) {
        return output.error(e, ExitCode::InvalidArgs);
    }

    commands::lookup_cmd(&cli, &output).await
}
