use std::path::PathBuf;

use clap::Args;
use stegend_core::StegendError;

use crate::CliResult;

/// Hides a text message in a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// PNG image used as carrier, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden, asked for if omitted
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let message = self
            .message
            .or_else(crate::cli::ask_for_message)
            .ok_or(StegendError::MissingMessage)?;

        stegend_core::api::hide::prepare()
            .with_message(&message)
            .with_image(self.media)
            .with_output(self.write_to_file)
            .execute()
    }
}
