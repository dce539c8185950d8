//! Compose certificate markup into a render tree.

use std::path::Path;

use resvg::usvg::{Options, Tree};

use crate::{Error, Result};

/// Owns the font database and parser options used for every compose.
///
/// Fonts resolve from an optional configured font file first, then from
/// the system font database. Building the database is the expensive part,
/// so a compositor is created once per surface and reused.
pub struct Compositor {
    options: Options<'static>,
}

impl Compositor {
    pub fn new(font_path: Option<&Path>) -> Self {
        let mut options = Options::default();
        if let Some(path) = font_path {
            if options.fontdb_mut().load_font_file(path).is_err() {
                log::warn!("could not load font file {:?}; using system fonts", path);
            }
        }
        options.fontdb_mut().load_system_fonts();
        Self { options }
    }

    /// Parse SVG markup into a composed tree ready for sampling.
    pub fn compose(&self, svg: &str) -> Result<Tree> {
        Tree::from_data(svg.as_bytes(), &self.options).map_err(|e| Error::Compose(e.to_string()))
    }
}
