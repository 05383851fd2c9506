use std::fs;
use std::path::Path;

use tempfile::TempDir;

use stegend_core::api::{capacity, hide, unveil};
use stegend_core::media::{load_png, save_png};
use stegend_core::{PixelBuffer, Result, StegendError};

fn prepare_carrier_png(dir: &Path, width: u32, height: u32) -> Result<std::path::PathBuf> {
    let carrier = dir.join("carrier.png");
    let buffer = PixelBuffer::from_fn(width, height, |x, y| {
        let i = (x ^ y) as u8;
        [i, i.wrapping_mul(3), 255 - i, 255 - (i % 16)]
    });
    save_png(&buffer, &carrier)?;

    Ok(carrier)
}

#[test]
fn should_hide_and_unveil_a_message_through_png_files() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = prepare_carrier_png(out_dir.path(), 24, 24)?;
    let secret = out_dir.path().join("secret.png");

    hide::prepare()
        .with_message("Hello, World!")
        .with_image(&carrier)
        .with_output(&secret)
        .execute()?;

    let l = fs::metadata(&secret)
        .expect("Output image was not written.")
        .len();
    assert!(l > 0, "File is not supposed to be empty");

    let message = unveil::prepare().from_secret_file(&secret).execute()?;
    assert_eq!(message, "Hello, World!");

    Ok(())
}

#[test]
fn should_keep_the_carrier_file_untouched() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = prepare_carrier_png(out_dir.path(), 16, 16)?;
    let before = fs::read(&carrier)?;

    hide::prepare()
        .with_message("read only")
        .with_image(&carrier)
        .with_output(out_dir.path().join("secret.png"))
        .execute()?;

    assert_eq!(fs::read(&carrier)?, before);

    Ok(())
}

#[test]
fn should_preserve_alpha_through_png_files() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = prepare_carrier_png(out_dir.path(), 16, 16)?;
    let secret = out_dir.path().join("secret.png");

    hide::prepare()
        .with_message("transparent")
        .with_image(&carrier)
        .with_output(&secret)
        .execute()?;

    let before = load_png(&carrier)?;
    let after = load_png(&secret)?;
    for (a, b) in before
        .as_bytes()
        .chunks_exact(4)
        .zip(after.as_bytes().chunks_exact(4))
    {
        assert_eq!(a[3], b[3]);
    }

    Ok(())
}

#[test]
fn should_report_no_secret_data_for_a_plain_image() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = prepare_carrier_png(out_dir.path(), 16, 16)?;

    assert_eq!(
        unveil::prepare()
            .from_secret_file(&carrier)
            .execute_optional()?,
        None
    );
    assert!(matches!(
        unveil::prepare().from_secret_file(&carrier).execute(),
        Err(StegendError::NoSecretData)
    ));

    Ok(())
}

#[test]
fn should_fail_with_capacity_error_and_write_nothing() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = prepare_carrier_png(out_dir.path(), 2, 2)?;
    let secret = out_dir.path().join("secret.png");

    let result = hide::prepare()
        .with_message("Hi")
        .with_image(&carrier)
        .with_output(&secret)
        .execute();

    assert!(matches!(result, Err(StegendError::Capacity { .. })));
    assert!(!secret.exists(), "no image must be written on failure");

    Ok(())
}

#[test]
fn should_report_the_capacity_of_a_png_file() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = prepare_carrier_png(out_dir.path(), 10, 10)?;

    let c = capacity::of_file(&carrier)?;
    assert_eq!(c.bits, 300);
    assert_eq!(c.bytes, 37);
    assert_eq!(c.max_message_len, 26);

    Ok(())
}

#[test]
fn should_refuse_a_non_png_output() -> Result<()> {
    let out_dir = TempDir::new()?;
    let carrier = prepare_carrier_png(out_dir.path(), 16, 16)?;

    let result = hide::prepare()
        .with_message("Hi")
        .with_image(&carrier)
        .with_output(out_dir.path().join("secret.jpg"))
        .execute();
    assert!(matches!(result, Err(StegendError::UnsupportedMedia)));

    Ok(())
}
