//! Single-page paginated document embedding the snapshot.

use std::io::Cursor;

use printpdf::image_crate::codecs::jpeg::JpegDecoder;
use printpdf::{Image, ImageTransform, Mm, PdfDocument};

use super::jpeg;
use crate::rendering::RasterSnapshot;
use crate::{Error, Result};

pub const MIME_PDF: &str = "application/pdf";

/// A4 portrait, in millimeters.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Placed height of a `width_px` x `height_px` image stretched to the full
/// page width with its aspect ratio preserved.
pub fn placed_height_mm(width_px: u32, height_px: u32) -> f32 {
    PAGE_WIDTH_MM * height_px as f32 / width_px as f32
}

/// Build a one-page A4 portrait document with the snapshot's JPEG encoding
/// placed flush to the page's top-left corner at full page width. No text
/// layer, no metadata beyond encoder defaults.
pub fn encode(snapshot: &RasterSnapshot) -> Result<Vec<u8>> {
    let jpeg_bytes = jpeg::encode(snapshot)?;

    let (doc, page, layer) = PdfDocument::new(
        "Certificate",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "certificate",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let decoder = JpegDecoder::new(Cursor::new(jpeg_bytes.as_slice()))
        .map_err(|e| Error::Encode(e.to_string()))?;
    let image = Image::try_from(decoder).map_err(|e| Error::Encode(e.to_string()))?;

    // printpdf sizes images through their dpi; pinning the dpi to the
    // snapshot width makes the placed width exactly the page width.
    let dpi = snapshot.width as f32 * 25.4 / PAGE_WIDTH_MM;
    let placed_h = placed_height_mm(snapshot.width, snapshot.height);

    image.add_to_layer(
        layer,
        ImageTransform {
            translate_x: Some(Mm(0.0)),
            translate_y: Some(Mm(PAGE_HEIGHT_MM - placed_h)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );

    doc.save_to_bytes().map_err(|e| Error::Encode(e.to_string()))
}
