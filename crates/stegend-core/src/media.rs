use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use image::{ColorType, ImageFormat, RgbaImage};
use log::error;

use crate::error::StegendError;
use crate::pixel_buffer::PixelBuffer;
use crate::result::Result;

impl TryFrom<RgbaImage> for PixelBuffer {
    type Error = StegendError;

    fn try_from(img: RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }
}

impl PixelBuffer {
    pub fn from_rgba_image(img: RgbaImage) -> Result<Self> {
        img.try_into()
    }

    pub fn into_rgba_image(self) -> Result<RgbaImage> {
        let (width, height) = self.dimensions();
        let len = self.as_bytes().len();
        RgbaImage::from_raw(width, height, self.into_raw()).ok_or(StegendError::InvalidBuffer {
            width,
            height,
            len,
        })
    }
}

/// loads a PNG file as RGBA pixel buffer, other file types are refused
pub fn load_png(file: &Path) -> Result<PixelBuffer> {
    ensure_png_extension(file)?;

    let img = image::open(file).map_err(|e| {
        error!("Error opening image {file:?}: {e}");
        StegendError::InvalidImageMedia
    })?;

    img.to_rgba8().try_into()
}

/// stores a pixel buffer as lossless PNG file
pub fn save_png(buffer: &PixelBuffer, file: &Path) -> Result<()> {
    ensure_png_extension(file)?;

    let f = File::create(file).map_err(|e| {
        error!("Error creating file {file:?}: {e}");
        StegendError::WriteError { source: e }
    })?;
    write_png(buffer, f)
}

pub fn write_png<W: Write + Seek>(buffer: &PixelBuffer, mut writer: W) -> Result<()> {
    let (width, height) = buffer.dimensions();
    image::write_buffer_with_format(
        &mut writer,
        buffer.as_bytes(),
        width,
        height,
        ColorType::Rgba8,
        ImageFormat::Png,
    )
    .map_err(|e| {
        error!("Error saving image: {e}");
        StegendError::ImageEncodingError
    })
}

fn ensure_png_extension(file: &Path) -> Result<()> {
    match file.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => Ok(()),
        _ => Err(StegendError::UnsupportedMedia),
    }
}
