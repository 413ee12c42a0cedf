//! Encoding and writing of rendered gradients

use std::ffi::OsString;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Output format implied by the path extension.
pub fn format_for_path(path: &Path) -> Result<ImageFormat> {
    match ImageFormat::from_path(path) {
        Ok(format) if format.writing_enabled() => Ok(format),
        _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Encode the image in memory.
pub fn encode(image: &RgbImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format)?;
    Ok(buf.into_inner())
}

pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    encode(image, ImageFormat::Png)
}

/// Hidden sibling of `path` used while the encoded bytes are written.
fn temp_path(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| Error::UnsupportedFormat(path.to_path_buf()))?;
    let mut tmp = OsString::from(".");
    tmp.push(name);
    tmp.push(format!(".{}.tmp", std::process::id()));
    Ok(path.with_file_name(tmp))
}

/// Encode `image` according to the extension of `path` and write it.
///
/// The bytes go to a temporary sibling first and are renamed into place,
/// so a failed write never leaves a partial image at `path`.
pub fn write_image(image: &RgbImage, path: &Path) -> Result<()> {
    let format = format_for_path(path)?;
    let bytes = encode(image, format)?;
    let tmp = temp_path(path)?;

    let written = fs::write(&tmp, &bytes).and_then(|_| fs::rename(&tmp, path));
    if let Err(err) = written {
        if tmp.exists() {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                log::warn!("failed to remove temporary file {:?}: {}", tmp, cleanup);
            }
        }
        return Err(err.into());
    }

    log::info!(
        "wrote {}x{} {:?} image to {:?} ({} bytes)",
        image.width(),
        image.height(),
        format,
        path,
        bytes.len()
    );
    Ok(())
}

/// Hex SHA-256 of the raw RGB pixel buffer.
pub fn pixel_digest(image: &RgbImage) -> String {
    let mut hasher = Sha256::new();
    hasher.update(image.width().to_le_bytes());
    hasher.update(image.height().to_le_bytes());
    hasher.update(image.as_raw());
    hex::encode(hasher.finalize())
}
