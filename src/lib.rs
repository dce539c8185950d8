//! Certforge
//!
//! A certificate rendering and export engine: collect a short identity
//! record, render it into a styled document, and export the result as a
//! maximum-quality JPEG or a single-page A4 PDF.
//!
//! # Pipeline
//!
//! - **Session** gates everything: the form collects a record, a valid
//!   submit mounts the certificate on the render surface and enters
//!   previewing, and only then are exports reachable.
//! - **Capture** samples the mounted node into an RGBA bitmap at a fixed
//!   2x oversampling factor.
//! - **Encoders** turn the bitmap into the requested artifact, name it
//!   with a random date-stamped identifier, and hand it to the file
//!   saver.
//!
//! # Example
//!
//! ```no_run
//! use certforge::{CertConfig, ExportFormat, Prefix, Session};
//!
//! # #[tokio::main]
//! # async fn main() -> certforge::Result<()> {
//! let mut session = Session::new(CertConfig::default()).await?;
//! session.set_prefix(Some(Prefix::Mr));
//! session.set_first_name("สมชาย");
//! session.set_last_name("ใจดี");
//! session.submit().await?;
//!
//! if let Some(artifact) = session.export(ExportFormat::Jpeg).await? {
//!     println!("saved {}", artifact.filename);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod record;
pub use record::{IdentityRecord, Prefix};

pub mod locale;
pub mod template;

pub mod rendering;
pub use rendering::RasterSnapshot;

pub mod surface;
pub use surface::RenderSurface;

pub mod export;
pub use export::{ExportArtifact, ExportFormat};

pub mod session;
pub use session::{Session, ViewState};

/// Configuration for a certificate session.
///
/// Defaults are conservative: no extra font file (the system font
/// database is always loaded) and artifacts saved to the current
/// directory.
///
/// # Examples
///
/// ```
/// let cfg = certforge::CertConfig::default();
/// assert!(cfg.font_path.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CertConfig {
    /// Optional font file loaded ahead of the system fonts, for the Thai
    /// text on the certificate face.
    pub font_path: Option<PathBuf>,
    /// Directory the download trigger writes artifacts into.
    pub output_dir: PathBuf,
}

impl Default for CertConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            output_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CertConfig::default();
        assert!(config.font_path.is_none());
        assert_eq!(config.output_dir, PathBuf::from("."));
    }
}
