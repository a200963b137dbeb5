//! The drawing plan for one icon size.
//!
//! A plan describes *what* to draw, in pixel coordinates, without touching
//! pixels. Painting is the [`surface`](super::surface)'s job. Keeping the two
//! apart lets tests assert which elements appear at which size.

use super::geometry::{
    Point, arch_outline, keystone_cap, pixel_width, scale_for, scale_point, scale_points,
};
use super::palette::Palette;
use image::Rgba;

/// Smallest size that gets the accent line under the arch.
pub const ACCENT_MIN_SIZE: u32 = 32;
/// Smallest size that gets the copper circle on the keystone.
pub const KEYSTONE_CIRCLE_MIN_SIZE: u32 = 32;
/// Smallest size that gets the voussoir hint lines.
pub const VOUSSOIR_MIN_SIZE: u32 = 64;

/// Stroke widths on the design grid.
const ARCH_STROKE: f64 = 1.5;
const FINE_STROKE: f64 = 0.6;
const KEYSTONE_RADIUS: f64 = 0.8;

/// Which part of the icon an operation draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    ArchFill,
    ArchStroke,
    BaseLine,
    AccentLine,
    KeystoneCap,
    KeystoneOutline,
    KeystoneCircle,
    VoussoirHint,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon { points: Vec<Point> },
    Polyline { points: Vec<Point>, width: u32 },
    /// Circle with a whole-pixel radius.
    Ellipse { center: Point, radius: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    pub element: Element,
    pub shape: Shape,
    pub color: Rgba<u8>,
}

/// Ordered drawing operations for one output size.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPlan {
    pub size: u32,
    pub scale: f64,
    pub background: Rgba<u8>,
    pub ops: Vec<DrawOp>,
}

impl IconPlan {
    pub fn has(&self, element: Element) -> bool {
        self.ops.iter().any(|op| op.element == element)
    }

    pub fn ops_for(&self, element: Element) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(move |op| op.element == element)
    }
}

/// Plan the icon at `size` × `size` pixels.
pub fn plan_icon(size: u32, palette: &Palette) -> IconPlan {
    let scale = scale_for(size);
    let line = |a: Point, b: Point| vec![scale_point(a, scale), scale_point(b, scale)];
    let mut ops = Vec::new();

    let outline = scale_points(&arch_outline(), scale);
    let mut interior = outline.clone();
    interior.extend([scale_point((30.0, 32.0), scale), scale_point((6.0, 32.0), scale)]);
    ops.push(DrawOp {
        element: Element::ArchFill,
        shape: Shape::Polygon { points: interior },
        color: palette.background,
    });

    let arch_width = pixel_width(ARCH_STROKE, scale);
    ops.push(DrawOp {
        element: Element::ArchStroke,
        shape: Shape::Polyline {
            points: outline,
            width: arch_width,
        },
        color: palette.stone,
    });
    ops.push(DrawOp {
        element: Element::BaseLine,
        shape: Shape::Polyline {
            points: line((6.0, 32.0), (30.0, 32.0)),
            width: arch_width,
        },
        color: palette.stone,
    });

    if size >= ACCENT_MIN_SIZE {
        ops.push(DrawOp {
            element: Element::AccentLine,
            shape: Shape::Polyline {
                points: line((10.0, 31.0), (26.0, 31.0)),
                width: pixel_width(FINE_STROKE, scale),
            },
            color: palette.accent,
        });
    }

    let cap = scale_points(&keystone_cap(), scale);
    let mut cap_outline = cap.clone();
    cap_outline.push(cap[0]);
    ops.push(DrawOp {
        element: Element::KeystoneCap,
        shape: Shape::Polygon { points: cap },
        color: palette.cap_fill,
    });
    ops.push(DrawOp {
        element: Element::KeystoneOutline,
        shape: Shape::Polyline {
            points: cap_outline,
            width: pixel_width(ARCH_STROKE, scale),
        },
        color: palette.copper,
    });

    if size >= KEYSTONE_CIRCLE_MIN_SIZE {
        ops.push(DrawOp {
            element: Element::KeystoneCircle,
            shape: Shape::Ellipse {
                center: scale_point((18.0, 3.5), scale),
                radius: pixel_width(KEYSTONE_RADIUS, scale),
            },
            color: palette.copper,
        });
    }

    if size >= VOUSSOIR_MIN_SIZE {
        let width = pixel_width(FINE_STROKE, scale);
        for (a, b) in [((10.0, 12.0), (8.0, 16.0)), ((26.0, 12.0), (28.0, 16.0))] {
            ops.push(DrawOp {
                element: Element::VoussoirHint,
                shape: Shape::Polyline {
                    points: line(a, b),
                    width,
                },
                color: palette.voussoir,
            });
        }
    }

    IconPlan {
        size,
        scale,
        background: palette.background,
        ops,
    }
}
