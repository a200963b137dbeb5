//! High-level favicon operations.
//!
//! These functions combine planning with a surface. They take a size and a
//! palette, build the plan, and paint it.

use super::palette::Palette;
use super::{MAX_ICON_SIZE, RenderError};
use super::plan::{IconPlan, Shape, plan_icon};
use super::surface::{PixelSurface, Surface};
use image::{ImageFormat, RgbaImage};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Execute every operation of a plan against a surface, in order.
pub fn paint(plan: &IconPlan, surface: &mut impl Surface) {
    for op in &plan.ops {
        match &op.shape {
            Shape::Polygon { points } => surface.fill_polygon(points, op.color),
            Shape::Polyline { points, width } => surface.stroke_polyline(points, *width, op.color),
            Shape::Ellipse { center, radius } => surface.fill_circle(*center, *radius, op.color),
        }
    }
}

/// Render the icon at `size` × `size` pixels.
///
/// Sizes outside `1..=MAX_ICON_SIZE` are rejected before anything is
/// allocated.
pub fn render_icon(size: u32, palette: &Palette) -> Result<RgbaImage, RenderError> {
    if size == 0 || size > MAX_ICON_SIZE {
        return Err(RenderError::InvalidSize(size));
    }
    let plan = plan_icon(size, palette);
    debug!("{size}px: {} draw ops at scale {:.3}", plan.ops.len(), plan.scale);
    let mut surface = PixelSurface::new(size, plan.background)?;
    paint(&plan, &mut surface);
    Ok(surface.to_image())
}

/// A favicon file written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// `favicon-32.png` for stem `favicon` and size 32.
pub fn icon_file_name(file_stem: &str, size: u32) -> String {
    format!("{file_stem}-{size}.png")
}

/// Render each size and write it as `<file_stem>-<size>.png` in `out_dir`.
///
/// The directory is created if needed. Existing files are overwritten.
/// Stops at the first failure; files already written stay on disk.
pub fn write_favicons(
    out_dir: &Path,
    sizes: &[u32],
    palette: &Palette,
    file_stem: &str,
) -> Result<Vec<GeneratedIcon>, RenderError> {
    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::with_capacity(sizes.len());

    for &size in sizes {
        let image = render_icon(size, palette)?;
        let path = out_dir.join(icon_file_name(file_stem, size));
        image.save_with_format(&path, ImageFormat::Png)?;
        info!("wrote {}", path.display());
        written.push(GeneratedIcon { size, path });
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favicon::DEFAULT_SIZES;
    use crate::favicon::plan::Element;
    use crate::favicon::surface::tests::{RecordedCall, RecordingSurface};
    use tempfile::TempDir;

    #[test]
    fn paint_issues_one_call_per_op() {
        let palette = Palette::default();
        let plan = plan_icon(256, &palette);
        let mut surface = RecordingSurface::default();
        paint(&plan, &mut surface);

        assert_eq!(surface.calls.len(), plan.ops.len());
        assert!(matches!(
            surface.calls[0],
            RecordedCall::Polygon { color, .. } if color == palette.background
        ));
        assert!(surface.calls.iter().any(|c| matches!(
            c,
            RecordedCall::Circle { radius: 6, color, .. } if *color == palette.copper
        )));
    }

    #[test]
    fn paint_small_icon_has_no_circle() {
        let plan = plan_icon(16, &Palette::default());
        let mut surface = RecordingSurface::default();
        paint(&plan, &mut surface);
        assert!(
            !surface
                .calls
                .iter()
                .any(|c| matches!(c, RecordedCall::Circle { .. }))
        );
        assert!(!plan.has(Element::AccentLine));
    }

    #[test]
    fn render_icon_dimensions() {
        let image = render_icon(32, &Palette::default()).unwrap();
        assert_eq!(image.dimensions(), (32, 32));
    }

    #[test]
    fn render_icon_rejects_zero() {
        let err = render_icon(0, &Palette::default()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSize(0)));
    }

    #[test]
    fn render_icon_rejects_oversized() {
        let err = render_icon(MAX_ICON_SIZE + 1, &Palette::default()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSize(s) if s == MAX_ICON_SIZE + 1));
        let err = render_icon(u32::MAX, &Palette::default()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSize(u32::MAX)));
    }

    #[test]
    fn write_favicons_rejects_oversized_before_writing() {
        let tmp = TempDir::new().unwrap();
        let result = write_favicons(tmp.path(), &[100_000], &Palette::default(), "favicon");
        assert!(matches!(result, Err(RenderError::InvalidSize(100_000))));
        assert!(!tmp.path().join("favicon-100000.png").exists());
    }

    #[test]
    fn render_icon_one_pixel() {
        let image = render_icon(1, &Palette::default()).unwrap();
        assert_eq!(image.dimensions(), (1, 1));
    }

    #[test]
    fn render_icon_draws_stone_and_keeps_corners() {
        let palette = Palette::default();
        let image = render_icon(64, &palette).unwrap();
        assert_eq!(*image.get_pixel(0, 0), palette.background);
        assert_eq!(*image.get_pixel(63, 63), palette.background);
        // left leg of the arch: x = 6u -> 10.67px, y = 25u -> 44.4px
        let leg_has_stone = (9..=12).any(|x| *image.get_pixel(x, 44) == palette.stone);
        assert!(leg_has_stone);
    }

    #[test]
    fn render_icon_is_deterministic() {
        let palette = Palette::default();
        assert_eq!(
            render_icon(128, &palette).unwrap(),
            render_icon(128, &palette).unwrap()
        );
    }

    #[test]
    fn icon_file_names() {
        assert_eq!(icon_file_name("favicon", 16), "favicon-16.png");
        assert_eq!(icon_file_name("touch", 256), "touch-256.png");
    }

    #[test]
    fn write_favicons_writes_every_size() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("nested/icons");
        let icons = write_favicons(&out, DEFAULT_SIZES, &Palette::default(), "favicon").unwrap();

        assert_eq!(icons.len(), 5);
        for icon in &icons {
            assert!(icon.path.exists());
            let decoded = image::open(&icon.path).unwrap();
            assert_eq!(decoded.width(), icon.size);
            assert_eq!(decoded.height(), icon.size);
        }
        assert_eq!(icons[0].path, out.join("favicon-16.png"));
    }

    #[test]
    fn write_favicons_stops_on_bad_size() {
        let tmp = TempDir::new().unwrap();
        let result = write_favicons(tmp.path(), &[16, 0, 32], &Palette::default(), "favicon");
        assert!(matches!(result, Err(RenderError::InvalidSize(0))));
        assert!(tmp.path().join("favicon-16.png").exists());
        assert!(!tmp.path().join("favicon-32.png").exists());
    }
}
