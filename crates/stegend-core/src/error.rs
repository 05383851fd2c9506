use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegendError {
    /// Represents a message that does not fit into the carrier, both numbers are in bits
    #[error(
        "Capacity Error: the message needs {required} bits but the carrier only offers {available} bits"
    )]
    Capacity { required: usize, available: usize },

    /// Represents a pixel buffer whose length does not match `width * height * 4`
    #[error("Invalid pixel buffer: {len} bytes do not match the dimensions {width}x{height}")]
    InvalidBuffer { width: u32, height: u32, len: usize },

    /// Represents a character that cannot be stored in a single byte
    #[error("Unsupported character {character:?} at position {position}, only U+0000..=U+00FF can be hidden")]
    UnsupportedCharacter { character: char, position: usize },

    /// Represents an unveil of no secret data. For example when a media did not contain any secrets
    #[error("No secret data found")]
    NoSecretData,

    /// Represents an unsupported carrier media. For example, a JPEG file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
