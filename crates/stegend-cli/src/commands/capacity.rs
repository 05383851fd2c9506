use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Shows how long a message a PNG image can hide
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// PNG image used as carrier
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media file",
        required = true
    )]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let c = stegend_core::api::capacity::of_file(&self.media)?;
        println!("bits:               {}", c.bits);
        println!("bytes:              {}", c.bytes);
        println!("max message length: {}", c.max_message_len);

        Ok(())
    }
}
