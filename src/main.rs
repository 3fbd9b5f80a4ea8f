//! Banquet CLI

use std::{io, process::ExitCode};

use clap::Parser;

use crate::cli::Cli;

mod cli;

/// Banquet CLI entry point
pub fn main() -> ExitCode {
    // Load .env file if present (ignore if missing)
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = cli::logging::init(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln"
        )]
        {
            eprintln!("Failed to initialise logging: {error}");
        }

        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.run(&mut handle) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            #[expect(clippy::print_stderr, reason = "user-facing command error")]
            {
                eprintln!("{error}");
            }

            ExitCode::FAILURE
        }
    }
}
