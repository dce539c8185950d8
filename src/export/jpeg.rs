//! Maximum-quality JPEG encoding of a raster snapshot.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, RgbaImage};

use crate::rendering::RasterSnapshot;
use crate::{Error, Result};

pub const MIME_JPEG: &str = "image/jpeg";

/// Encode the snapshot as JPEG at quality 100, no resizing.
///
/// The alpha channel is dropped; snapshots are sampled over an opaque
/// base.
pub fn encode(snapshot: &RasterSnapshot) -> Result<Vec<u8>> {
    let rgba: RgbaImage =
        RgbaImage::from_raw(snapshot.width, snapshot.height, snapshot.rgba.clone())
            .ok_or_else(|| Error::Encode("snapshot buffer does not match its dimensions".into()))?;
    let rgb = DynamicImage::ImageRgba8(rgba).to_rgb8();

    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut out, 100);
    encoder
        .encode(
            rgb.as_raw(),
            snapshot.width,
            snapshot.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(out)
}
