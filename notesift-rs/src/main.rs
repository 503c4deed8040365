//! Notesift CLI entry point.

mod logging;

use clap::Parser;
use notesift::cli::args::{Cli, Commands};
use notesift::cli::output::Output;
use notesift::cli::{outline, search};
use notesift::config::Config;
use notesift::error::{Error, ExitCode as NotesiftExitCode};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code.code() as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<NotesiftExitCode, Error> {
    let output = Output::new(cli.output_format(), cli.quiet);

    match &cli.command {
        Commands::Search(args) => {
            let config = Config::load()?;
            search::run(args, &config, &output)
        }
        Commands::Outline(args) => outline::run(&args.path, &output),
    }
}
