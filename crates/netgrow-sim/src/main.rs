use std::error::Error;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use commands::{
    grow::{self, GrowArgs},
    version::{self, VersionArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "netgrow-sim", about = "Random network growth simulator")]
struct Cli {
    /// Log every rejected attachment and per-network timing detail.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Grow a batch of networks and write the report and figure.
    Grow(GrowArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;
    match cli.command {
        Command::Grow(args) => grow::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
