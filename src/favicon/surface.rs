//! The 2-D drawing seam.
//!
//! The [`Surface`] trait defines the three primitives the icon needs: polygon
//! fill, polyline stroke and circle fill. The production implementation,
//! [`PixelSurface`], rasterizes onto a `tiny_skia::Pixmap` and hands the
//! result over as an `image::RgbaImage` for PNG encoding.
//!
//! ## Pixel model
//!
//! - Anti-aliasing is off: a pixel is painted when its centre is inside the
//!   shape. Favicons at 16px read better with hard edges.
//! - Polygons and circles fill with the even-odd rule.
//! - A polyline is stroked as one path with butt caps, so translucent
//!   strokes do not darken where segments meet.
//! - Colours are composited source-over, so translucent palette entries
//!   tint what lies beneath instead of replacing it.

use super::RenderError;
use super::geometry::Point;
use image::{Rgba, RgbaImage};
use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

pub trait Surface {
    fn fill_polygon(&mut self, points: &[Point], color: Rgba<u8>);

    /// Stroke each consecutive pair of `points` as a segment `width` pixels wide.
    fn stroke_polyline(&mut self, points: &[Point], width: u32, color: Rgba<u8>);

    fn fill_circle(&mut self, center: Point, radius: u32, color: Rgba<u8>);
}

/// An RGBA raster that the icon is painted onto.
pub struct PixelSurface {
    pixmap: Pixmap,
}

impl PixelSurface {
    /// A `size` × `size` canvas filled with `background`.
    pub fn new(size: u32, background: Rgba<u8>) -> Result<Self, RenderError> {
        let mut pixmap = Pixmap::new(size, size).ok_or(RenderError::InvalidSize(size))?;
        let [r, g, b, a] = background.0;
        pixmap.fill(Color::from_rgba8(r, g, b, a));
        Ok(Self { pixmap })
    }

    /// Copy out the canvas as straight-alpha RGBA.
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        image
    }
}

fn paint_for(color: Rgba<u8>) -> Paint<'static> {
    let [r, g, b, a] = color.0;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = false;
    paint
}

/// Path through `points`, optionally closed. `None` when tiny-skia rejects
/// it (too few points, or non-finite coordinates).
fn path_through(points: &[Point], close: bool) -> Option<Path> {
    let (&(x0, y0), rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(x0 as f32, y0 as f32);
    for &(x, y) in rest {
        pb.line_to(x as f32, y as f32);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

impl Surface for PixelSurface {
    fn fill_polygon(&mut self, points: &[Point], color: Rgba<u8>) {
        if points.len() < 3 {
            return;
        }
        if let Some(path) = path_through(points, true) {
            self.pixmap.fill_path(
                &path,
                &paint_for(color),
                FillRule::EvenOdd,
                Transform::identity(),
                None,
            );
        }
    }

    fn stroke_polyline(&mut self, points: &[Point], width: u32, color: Rgba<u8>) {
        let Some(path) = path_through(points, false) else {
            return;
        };
        let stroke = Stroke {
            width: width.max(1) as f32,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint_for(color),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn fill_circle(&mut self, (cx, cy): Point, radius: u32, color: Rgba<u8>) {
        if let Some(path) = PathBuilder::from_circle(cx as f32, cy as f32, radius as f32) {
            self.pixmap.fill_path(
                &path,
                &paint_for(color),
                FillRule::EvenOdd,
                Transform::identity(),
                None,
            );
        }
    }
}
