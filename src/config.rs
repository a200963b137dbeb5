//! Tool configuration.
//!
//! Handles loading, validating, and merging `keystone.toml`. Stock defaults
//! are overridden by whatever the user file specifies; command-line flags
//! override both.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [favicons]
//! sizes = [16, 32, 64, 128, 256]  # Square pixel sizes to render
//! output_dir = "."                 # Where PNGs are written
//! file_stem = "favicon"            # -> favicon-16.png, favicon-32.png, ...
//!
//! [favicons.colors]
//! background = "#f5f0e8ff"         # Parchment canvas
//! stone = "#5c4d3aff"              # Arch and base strokes
//! copper = "#9a5530ff"             # Keystone outline and circle
//! accent = "#3d7a8ab4"             # Accent line under the arch
//! cap_fill = "#9a553026"           # Keystone fill
//! voussoir = "#5c4d3a4c"           # Voussoir hint lines
//!
//! [readability]
//! exclude_elements = ["script", "style", "svg", "noscript", "head"]
//! min_sentence_words = 3
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [favicons]
//! output_dir = "public"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::favicon::{self, MAX_ICON_SIZE, parse_hex_color};
use crate::readability::{extract, tokenize};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `keystone.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Favicon rendering settings.
    pub favicons: FaviconConfig,
    /// Readability analysis settings.
    pub readability: ReadabilityConfig,
}

impl ToolConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let favicons = &self.favicons;
        if favicons.sizes.is_empty() {
            return Err(ConfigError::Validation(
                "favicons.sizes must not be empty".into(),
            ));
        }
        if let Some(bad) = favicons
            .sizes
            .iter()
            .find(|&&s| s == 0 || s > MAX_ICON_SIZE)
        {
            return Err(ConfigError::Validation(format!(
                "favicons.sizes entries must be 1-{MAX_ICON_SIZE}, got {bad}"
            )));
        }
        if favicons.file_stem.trim().is_empty() {
            return Err(ConfigError::Validation(
                "favicons.file_stem must not be empty".into(),
            ));
        }
        for (key, value) in favicons.colors.entries() {
            parse_hex_color(value).map_err(|e| {
                ConfigError::Validation(format!("favicons.colors.{key}: {e}"))
            })?;
        }
        if self.readability.min_sentence_words == 0 {
            return Err(ConfigError::Validation(
                "readability.min_sentence_words must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Favicon rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaviconConfig {
    /// Square pixel sizes to render, in output order.
    pub sizes: Vec<u32>,
    /// Directory the PNGs are written to.
    pub output_dir: String,
    /// File name prefix; each file is `<file_stem>-<size>.png`.
    pub file_stem: String,
    pub colors: FaviconColors,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            sizes: favicon::DEFAULT_SIZES.to_vec(),
            output_dir: ".".to_string(),
            file_stem: "favicon".to_string(),
            colors: FaviconColors::default(),
        }
    }
}

/// Icon colours as `#rrggbb` or `#rrggbbaa` hex strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaviconColors {
    pub background: String,
    pub stone: String,
    pub copper: String,
    pub accent: String,
    pub cap_fill: String,
    pub voussoir: String,
}

impl FaviconColors {
    /// `(key, value)` pairs, for validation messages.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("background", self.background.as_str()),
            ("stone", self.stone.as_str()),
            ("copper", self.copper.as_str()),
            ("accent", self.accent.as_str()),
            ("cap_fill", self.cap_fill.as_str()),
            ("voussoir", self.voussoir.as_str()),
        ]
    }
}

impl Default for FaviconColors {
    fn default() -> Self {
        Self {
            background: "#f5f0e8ff".to_string(),
            stone: "#5c4d3aff".to_string(),
            copper: "#9a5530ff".to_string(),
            accent: "#3d7a8ab4".to_string(),
            cap_fill: "#9a553026".to_string(),
            voussoir: "#5c4d3a4c".to_string(),
        }
    }
}

/// Readability analysis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadabilityConfig {
    /// Elements whose text is not shown to readers. Replaces the defaults.
    pub exclude_elements: Vec<String>,
    /// Minimum words for a span to count as a sentence.
    pub min_sentence_words: usize,
}

impl Default for ReadabilityConfig {
    fn default() -> Self {
        Self {
            exclude_elements: extract::DEFAULT_EXCLUDED_ELEMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_sentence_words: tokenize::DEFAULT_MIN_SENTENCE_WORDS,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// `ToolConfig::default()` as a TOML table: the layer every `keystone.toml`
/// is laid over.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ToolConfig::default()).expect("ToolConfig serializes to a table")
}

/// Lay `overlay` over `base`.
///
/// Tables merge key by key, recursively. Any other overlay value replaces the
/// base value outright, arrays included: `sizes = [32]` means one size.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    let toml::Value::Table(overlay) = overlay else {
        return overlay;
    };
    let toml::Value::Table(mut table) = base else {
        return toml::Value::Table(overlay);
    };
    for (key, value) in overlay {
        let merged = match table.remove(&key) {
            Some(existing) => merge_toml(existing, value),
            None => value,
        };
        table.insert(key, merged);
    }
    toml::Value::Table(table)
}

/// Parse `path` as TOML. A file that is not there is `Ok(None)`.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(toml::from_str(&content)?))
}

/// Apply the user layer (if any) to `base`, deserialize, validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ToolConfig, ConfigError> {
    let merged = overlay.into_iter().fold(base, merge_toml);
    let config = ToolConfig::deserialize(merged)?;
    config.validate()?;
    Ok(config)
}

/// Stock defaults, overlaid with `path` when it exists, then validated.
pub fn load_config(path: &Path) -> Result<ToolConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(path)?)
}

/// Returns a fully-commented stock `keystone.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Keystone Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Command-line flags (--out-dir, --sizes) override these values.

# ---------------------------------------------------------------------------
# Favicons
# ---------------------------------------------------------------------------
[favicons]
# Square pixel sizes to render. Each becomes <file_stem>-<size>.png.
sizes = [16, 32, 64, 128, 256]

# Directory the PNG files are written to (created if missing).
output_dir = "."

# File name prefix.
file_stem = "favicon"

# Icon colours, as #rrggbb or #rrggbbaa. The alpha byte is blended
# over whatever lies beneath.
[favicons.colors]
background = "#f5f0e8ff"   # Parchment canvas and arch interior
stone = "#5c4d3aff"        # Arch and base strokes
copper = "#9a5530ff"       # Keystone outline and circle (32px and up)
accent = "#3d7a8ab4"       # Accent line under the arch (32px and up)
cap_fill = "#9a553026"     # Keystone fill
voussoir = "#5c4d3a4c"     # Voussoir hint lines (64px and up)

# ---------------------------------------------------------------------------
# Readability
# ---------------------------------------------------------------------------
[readability]
# Elements whose text readers never see. Their whole subtree is skipped.
# Setting this replaces the list; include the defaults you still want.
exclude_elements = ["script", "style", "svg", "noscript", "head"]

# A span between sentence-ending punctuation counts as a sentence only
# with at least this many words. Filters out nav labels and buttons.
min_sentence_words = 3
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_favicon_settings() {
        let config = ToolConfig::default();
        assert_eq!(config.favicons.sizes, vec![16, 32, 64, 128, 256]);
        assert_eq!(config.favicons.output_dir, ".");
        assert_eq!(config.favicons.file_stem, "favicon");
        assert_eq!(config.favicons.colors.accent, "#3d7a8ab4");
    }

    #[test]
    fn default_config_has_readability_settings() {
        let config = ToolConfig::default();
        assert_eq!(
            config.readability.exclude_elements,
            vec!["script", "style", "svg", "noscript", "head"]
        );
        assert_eq!(config.readability.min_sentence_words, 3);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[favicons]
output_dir = "public"
"#;
        let config: ToolConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.favicons.output_dir, "public");
        // Defaults preserved
        assert_eq!(config.favicons.sizes, vec![16, 32, 64, 128, 256]);
        assert_eq!(config.readability.min_sentence_words, 3);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("keystone.toml")).unwrap();
        assert_eq!(config, ToolConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keystone.toml");
        fs::write(
            &path,
            r##"
[favicons]
sizes = [48, 96]

[favicons.colors]
stone = "#000000"

[readability]
exclude_elements = ["nav", "footer"]
"##,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.favicons.sizes, vec![48, 96]);
        assert_eq!(config.favicons.colors.stone, "#000000");
        assert_eq!(config.readability.exclude_elements, vec!["nav", "footer"]);
        // Unspecified values are defaults
        assert_eq!(config.favicons.colors.copper, "#9a5530ff");
        assert_eq!(config.readability.min_sentence_words, 3);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keystone.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_unreadable_path_is_io_error() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Io(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keystone.toml");
        fs::write(
            &path,
            r##"
[favicons.colors]
accent = "teal"
"##,
        )
        .unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("favicons.colors.accent"));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[favicons]
sizes = [16, 32]
file_stem = "favicon"
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[favicons]
file_stem = "icon"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let favicons = merged.get("favicons").unwrap();
        assert_eq!(favicons.get("file_stem").unwrap().as_str(), Some("icon"));
        assert_eq!(favicons.get("sizes").unwrap().as_array().unwrap().len(), 2);
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str("sizes = [16, 32, 64]").unwrap();
        let overlay: toml::Value = toml::from_str("sizes = [512]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("sizes").unwrap().as_array().unwrap().len(), 1);
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str(
            r##"
[favicons.colors]
copper = "#ff0000"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let colors = merged.get("favicons").unwrap().get("colors").unwrap();
        assert_eq!(colors.get("copper").unwrap().as_str(), Some("#ff0000"));
        assert_eq!(colors.get("stone").unwrap().as_str(), Some("#5c4d3aff"));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<ToolConfig, _> = toml::from_str(
            r#"
[favicons]
size = [16]
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<ToolConfig, _> = toml::from_str("[readabilty]\nmin_sentence_words = 2\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_nested_key_rejected() {
        let result: Result<ToolConfig, _> = toml::from_str("[favicons.colors]\nteal = \"#fff\"\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(ToolConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_sizes_empty() {
        let mut config = ToolConfig::default();
        config.favicons.sizes = vec![];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_sizes_range() {
        let mut config = ToolConfig::default();
        config.favicons.sizes = vec![16, 0];
        assert!(config.validate().unwrap_err().to_string().contains("got 0"));

        config.favicons.sizes = vec![MAX_ICON_SIZE];
        assert!(config.validate().is_ok());
        config.favicons.sizes = vec![MAX_ICON_SIZE + 1];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_file_stem() {
        let mut config = ToolConfig::default();
        config.favicons.file_stem = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_min_sentence_words() {
        let mut config = ToolConfig::default();
        config.readability.min_sentence_words = 0;
        assert!(config.validate().is_err());
        config.readability.min_sentence_words = 1;
        assert!(config.validate().is_ok());
    }

    // =========================================================================
    // resolve_config / stock_config_toml tests
    // =========================================================================

    #[test]
    fn resolve_config_with_no_overlay() {
        let config = resolve_config(stock_defaults_value(), None).unwrap();
        assert_eq!(config, ToolConfig::default());
    }

    #[test]
    fn resolve_config_rejects_invalid_values() {
        let overlay: toml::Value = toml::from_str("[favicons]\nsizes = []\n").unwrap();
        let result = resolve_config(stock_defaults_value(), Some(overlay));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: ToolConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, ToolConfig::default());
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[favicons]"));
        assert!(content.contains("[favicons.colors]"));
        assert!(content.contains("[readability]"));
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.is_table());
        assert!(val.get("favicons").is_some());
        assert!(val.get("readability").is_some());
    }
}
