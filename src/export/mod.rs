//! Artifact encoders, naming, and delivery.

pub mod jpeg;
pub mod naming;
pub mod pdf;
pub mod save;

use std::fmt;
use std::str::FromStr;

use crate::rendering::RasterSnapshot;
use crate::{Error, Result};

/// Requested download format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Compressed raster image, maximum quality.
    Jpeg,
    /// Single-page A4 portrait document embedding the raster.
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Jpeg => jpeg::MIME_JPEG,
            ExportFormat::Pdf => pdf::MIME_PDF,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(Error::Other(format!("unknown export format: {}", other))),
        }
    }
}

/// One downloadable artifact: the encoded bytes, their MIME type, and the
/// date-stamped filename they should be saved under. Produced once per
/// export request and discarded after delivery.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub filename: String,
}

/// Encode a snapshot in the requested format and name the result.
///
/// Encoding is deterministic for a fixed snapshot; randomness enters only
/// through the generated identifier. Encoding failures propagate to the
/// caller with no retry and no partial artifact.
pub fn encode(snapshot: &RasterSnapshot, format: ExportFormat) -> Result<ExportArtifact> {
    let bytes = match format {
        ExportFormat::Jpeg => jpeg::encode(snapshot)?,
        ExportFormat::Pdf => pdf::encode(snapshot)?,
    };
    let filename = format!("{}.{}", naming::artifact_stem(), format.extension());
    Ok(ExportArtifact {
        bytes,
        mime_type: format.mime_type(),
        filename,
    })
}
