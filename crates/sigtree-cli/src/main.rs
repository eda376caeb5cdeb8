use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

mod args;
mod commands;
mod util;

#[derive(Parser)]
#[command(name = "sigtree", about = "Write addressed values into XML documents")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a single value and save the document
    Set(commands::set::Args),
    /// Write a batch of values from JSON and save the document
    Apply(commands::apply::Args),
    /// Print the document or the element at a path
    Inspect(commands::inspect::Args),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    util::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Set(args) => commands::set::run(args),
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Inspect(args) => commands::inspect::run(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
