//! Icon colours.
//!
//! Colours are written as CSS-style hex strings in `keystone.toml` and parsed
//! into `image::Rgba<u8>` once, before any drawing happens.

use super::RenderError;
use crate::config::FaviconColors;
use image::Rgba;

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional, case-insensitive).
pub fn parse_hex_color(value: &str) -> Result<Rgba<u8>, RenderError> {
    let invalid = || RenderError::InvalidColor(value.to_string());
    let hex = value.trim().trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]))
}

/// The six colours the icon is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Parchment canvas and arch interior.
    pub background: Rgba<u8>,
    /// Arch and base strokes.
    pub stone: Rgba<u8>,
    /// Keystone outline and circle.
    pub copper: Rgba<u8>,
    /// Translucent accent line under the arch.
    pub accent: Rgba<u8>,
    /// Translucent keystone fill.
    pub cap_fill: Rgba<u8>,
    /// Voussoir hint lines.
    pub voussoir: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba([245, 240, 232, 255]),
            stone: Rgba([92, 77, 58, 255]),
            copper: Rgba([154, 85, 48, 255]),
            accent: Rgba([61, 122, 138, 180]),
            cap_fill: Rgba([154, 85, 48, 38]),
            voussoir: Rgba([92, 77, 58, 76]),
        }
    }
}

impl Palette {
    pub fn from_config(colors: &FaviconColors) -> Result<Self, RenderError> {
        Ok(Self {
            background: parse_hex_color(&colors.background)?,
            stone: parse_hex_color(&colors.stone)?,
            copper: parse_hex_color(&colors.copper)?,
            accent: parse_hex_color(&colors.accent)?,
            cap_fill: parse_hex_color(&colors.cap_fill)?,
            voussoir: parse_hex_color(&colors.voussoir)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rgb_is_opaque() {
        assert_eq!(parse_hex_color("#5C4D3A").unwrap(), Rgba([92, 77, 58, 255]));
        assert_eq!(parse_hex_color("5c4d3a").unwrap(), Rgba([92, 77, 58, 255]));
    }

    #[test]
    fn parse_rgba() {
        assert_eq!(parse_hex_color("#3d7a8ab4").unwrap(), Rgba([61, 122, 138, 180]));
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "#", "#fff", "#12345", "#1234567", "#gggggg", "#123456789", "#ü2345"] {
            assert!(
                matches!(parse_hex_color(bad), Err(RenderError::InvalidColor(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn stock_colors_match_default_palette() {
        let palette = Palette::from_config(&FaviconColors::default()).unwrap();
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn from_config_reports_bad_field() {
        let colors = FaviconColors {
            copper: "copper".into(),
            ..FaviconColors::default()
        };
        let err = Palette::from_config(&colors).unwrap_err();
        assert!(err.to_string().contains("copper"));
    }
}
