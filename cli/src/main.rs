mod draw;
mod inspect;

use clap::{Parser, Subcommand};

/// bitgen command-line interface
#[derive(Parser)]
#[command(name = "bitgen", version, about = "gjrand / jsf64 bit generator tool")]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Command,
}

/// Supported subcommands
#[derive(Subcommand)]
enum Command {
    /// Print draws from a seeded or resumed generator
    Draw(draw::DrawArgs),
    /// Verify a checkpoint file and print its contents
    Inspect(inspect::InspectArgs),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Draw(args) => draw::run(args),
        Command::Inspect(args) => inspect::run(args),
    };
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
