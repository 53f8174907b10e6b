//! System clipboard operations
//!
//! Copies text or decoded image pixels to the system clipboard.

use anyhow::{Context, Result};
use arboard::{Clipboard, ImageData};
use std::borrow::Cow;
use std::path::Path;

/// Place UTF-8 text on the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to open clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write text to clipboard")?;
    Ok(())
}

/// Decode an image file and place its pixels on the system clipboard.
pub fn copy_image_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let image = image::open(path)
        .with_context(|| format!("Failed to decode image: {:?}", path))?
        .into_rgba8();
    let (width, height) = image.dimensions();

    let mut clipboard = Clipboard::new().context("Failed to open clipboard")?;
    clipboard
        .set_image(ImageData {
            width: width as usize,
            height: height as usize,
            bytes: Cow::Owned(image.into_raw()),
        })
        .context("Failed to write image to clipboard")?;
    Ok(())
}
