use std::path::{Path, PathBuf};

use crate::media::load_png;
use crate::{codec, StegendError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
}

impl UnveilApi {
    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Unveils the message, an image without a message is [`StegendError::NoSecretData`]
    pub fn execute(self) -> Result<String, StegendError> {
        self.execute_optional()?.ok_or(StegendError::NoSecretData)
    }

    /// Unveils the message, an image without a message is `Ok(None)`
    pub fn execute_optional(self) -> Result<Option<String>, StegendError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegendError::CarrierNotSet);
        };

        Ok(codec::decode(&load_png(&secret_media)?))
    }
}
