use std::path::{Path, PathBuf};

use log::info;

use crate::media::{load_png, save_png};
use crate::{codec, StegendError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// The carrier image, it is only read
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The PNG file the image with the hidden message is written to
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), StegendError> {
        let Some(message) = self.message else {
            return Err(StegendError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(StegendError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegendError::TargetNotSet);
        };

        let carrier = load_png(&image)?;
        let secret = codec::encode(&carrier, &message)?;
        save_png(&secret, &output)?;
        info!("message hidden in {output:?}");

        Ok(())
    }
}
