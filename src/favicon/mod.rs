//! Favicon rasterization of the keystone arch.
//!
//! | Step | Where |
//! |---|---|
//! | **Design-grid math** | [`geometry`]: scaling, Bézier sampling, stroke widths |
//! | **What to draw** | [`plan`]: ordered, element-tagged [`DrawOp`]s per size |
//! | **How to draw** | [`surface`]: [`Surface`] trait + [`PixelSurface`] (`tiny_skia::Pixmap`) |
//! | **Files** | [`operations`]: render, PNG encode, write the size set |
//!
//! The icon is authored on a 36×36 unit grid and scaled linearly to each
//! output size. Fine details are gated by size so the 16px icon stays legible.

pub mod geometry;
pub mod operations;
pub mod palette;
pub mod plan;
pub mod surface;

pub use operations::{GeneratedIcon, icon_file_name, paint, render_icon, write_favicons};
pub use palette::{Palette, parse_hex_color};
pub use plan::{DrawOp, Element, IconPlan, Shape, plan_icon};
pub use surface::{PixelSurface, Surface};

use thiserror::Error;

/// Sizes the site references from its `<link rel="icon">` tags.
pub const DEFAULT_SIZES: &[u32] = &[16, 32, 64, 128, 256];

/// Largest edge length [`render_icon`] accepts.
pub const MAX_ICON_SIZE: u32 = 4096;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Invalid icon size: {0} (must be 1-{MAX_ICON_SIZE}px)")]
    InvalidSize(u32),
    #[error("Invalid colour '{0}': expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
}
