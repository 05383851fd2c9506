mod cli;
mod commands;

use clap::Parser;

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, stegend_core::StegendError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Hide(hide) => hide.run(),
        Commands::Unveil(unveil) => unveil.run(),
        Commands::Capacity(capacity) => capacity.run(),
    }
}
