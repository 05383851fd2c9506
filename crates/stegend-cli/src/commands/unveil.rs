use std::fs;
use std::path::PathBuf;

use clap::Args;
use log::info;
use stegend_core::StegendError;

use crate::CliResult;

/// Unveils a text message from a PNG image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Message will be stored in that file instead of printed, the file is written as UTF-8
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let message = stegend_core::api::unveil::prepare()
            .from_secret_file(self.media)
            .execute()?;

        match self.output_file {
            Some(file) => {
                fs::write(&file, message.as_bytes())
                    .map_err(|source| StegendError::WriteError { source })?;
                info!("message written to {file:?}");
            }
            None => println!("{message}"),
        }

        Ok(())
    }
}
