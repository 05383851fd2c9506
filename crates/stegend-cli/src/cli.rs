use clap::{Parser, Subcommand};
use dialoguer::Input;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}

/// asks interactively for the text message, `None` if the terminal is not interactive
pub fn ask_for_message() -> Option<String> {
    Input::<String>::new()
        .with_prompt("Message to hide")
        .allow_empty(true)
        .interact_text()
        .ok()
}
