//! Pure coordinate math for the icon's 36-unit design grid.
//!
//! All functions here are pure and testable without any pixels.

/// A point in design units or pixels, depending on context.
pub type Point = (f64, f64);

/// Side length of the square design grid the icon is authored on.
pub const DESIGN_GRID: f64 = 36.0;

/// Samples per quadratic Bézier segment (yields `BEZIER_STEPS + 1` points).
pub const BEZIER_STEPS: usize = 24;

/// Pixels per design unit at the given output size.
pub fn scale_for(size: u32) -> f64 {
    size as f64 / DESIGN_GRID
}

pub fn scale_point((x, y): Point, scale: f64) -> Point {
    (x * scale, y * scale)
}

pub fn scale_points(points: &[Point], scale: f64) -> Vec<Point> {
    points.iter().map(|&p| scale_point(p, scale)).collect()
}

/// Pixel width of a stroke that is `units` wide on the design grid.
///
/// Rounds half to even and never returns less than 1, so hairlines survive
/// at 16px.
///
/// # Examples
/// ```
/// # use keystone::favicon::geometry::{pixel_width, scale_for};
/// assert_eq!(pixel_width(1.5, scale_for(256)), 11);
/// assert_eq!(pixel_width(0.6, scale_for(16)), 1);
/// ```
pub fn pixel_width(units: f64, scale: f64) -> u32 {
    let px = (units * scale).round_ties_even();
    if px < 1.0 { 1 } else { px as u32 }
}

/// Sample a quadratic Bézier curve at `steps + 1` evenly spaced `t` values,
/// endpoints included.
pub fn quadratic_bezier(p0: Point, p1: Point, p2: Point, steps: usize) -> Vec<Point> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let u = 1.0 - t;
            let x = u * u * p0.0 + 2.0 * u * t * p1.0 + t * t * p2.0;
            let y = u * u * p0.1 + 2.0 * u * t * p1.1 + t * t * p2.1;
            (x, y)
        })
        .collect()
}

/// The arch outline in design units: left leg up, two quarter-curves over
/// the top, right leg down.
///
/// Equivalent SVG path: `M6 32 L6 18 Q6 6 18 6 Q30 6 30 18 L30 32`.
pub fn arch_outline() -> Vec<Point> {
    let mut outline = vec![(6.0, 32.0), (6.0, 18.0)];
    outline.extend(quadratic_bezier(
        (6.0, 18.0),
        (6.0, 6.0),
        (18.0, 6.0),
        BEZIER_STEPS,
    ));
    outline.extend(quadratic_bezier(
        (18.0, 6.0),
        (30.0, 6.0),
        (30.0, 18.0),
        BEZIER_STEPS,
    ));
    outline.extend([(30.0, 18.0), (30.0, 32.0)]);
    outline
}

/// Keystone cap trapezoid in design units: `M14 6 L15 2 L21 2 L22 6`.
pub fn keystone_cap() -> Vec<Point> {
    vec![(14.0, 6.0), (15.0, 2.0), (21.0, 2.0), (22.0, 6.0)]
}
