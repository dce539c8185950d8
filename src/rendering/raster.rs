//! Sample a composed node into a fixed-resolution bitmap.

use resvg::tiny_skia::{self, Pixmap};
use resvg::usvg::Tree;

use super::RasterSnapshot;
use crate::{Error, Result};

/// Rasterize `tree` at the given oversampling factor.
///
/// The pixmap starts as opaque white: the JPEG encoder downstream has no
/// alpha channel to carry, so the node is flattened here.
pub fn rasterize(tree: &Tree, oversample: u32) -> Result<RasterSnapshot> {
    let size = tree.size();
    let width = (size.width().round() as u32) * oversample;
    let height = (size.height().round() as u32) * oversample;

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| Error::Render(format!("invalid raster size {}x{}", width, height)))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(oversample as f32, oversample as f32);
    resvg::render(tree, transform, &mut pixmap.as_mut());

    Ok(RasterSnapshot {
        width,
        height,
        rgba: pixmap.take(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::compose::Compositor;
    use crate::record::{IdentityRecord, Prefix};
    use crate::template;

    fn composed_tree() -> Tree {
        let record = IdentityRecord {
            prefix: Some(Prefix::Mr),
            first_name: "สมชาย".to_string(),
            last_name: "ใจดี".to_string(),
        };
        let svg = template::certificate_svg(&record, "06 สิงหาคม 2569");
        Compositor::new(None).compose(&svg).expect("compose template")
    }

    #[test]
    fn applies_oversampling_factor() {
        let snap = rasterize(&composed_tree(), 2).expect("rasterize");
        assert_eq!(snap.width, template::NODE_WIDTH * 2);
        assert_eq!(snap.height, template::NODE_HEIGHT * 2);
        assert_eq!(snap.rgba.len(), (snap.width * snap.height * 4) as usize);
    }

    #[test]
    fn face_is_white_and_border_is_gold() {
        let snap = rasterize(&composed_tree(), 2).expect("rasterize");

        let center = snap.pixel(snap.width / 2, snap.height / 2);
        assert_eq!(&center[..3], &[255, 255, 255]);

        // Middle of the outer border band at the top edge.
        let border = snap.pixel(snap.width / 2, 8);
        assert!(
            border[0] > 200 && border[1] > 150 && border[2] < 100,
            "expected gold border, got {:?}",
            border
        );
    }

    #[test]
    fn sampling_is_deterministic() {
        let tree = composed_tree();
        let a = rasterize(&tree, 2).expect("rasterize");
        let b = rasterize(&tree, 2).expect("rasterize");
        assert_eq!(a.rgba, b.rgba);
    }
}
