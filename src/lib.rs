//! # Keystone
//!
//! Two small build-time tools for a static website, shipped as one binary:
//!
//! - **favicons**: rasterize the keystone-arch icon at 16, 32, 64, 128 and
//!   256 pixels and write them as PNGs.
//! - **readability**: score the visible prose of an HTML page with the
//!   standard readability formulas before it is published.
//!
//! The two share no computation, only configuration, errors and output
//! conventions.
//!
//! # Pipelines
//!
//! ```text
//! readability   HTML ─▶ visible text ─▶ sentences/words ─▶ stats ─▶ scores ─▶ report
//! favicons      size ─▶ plan (draw ops) ─▶ surface (pixels) ─▶ PNG
//! ```
//!
//! Every stage is a plain function from input to value. File reads and
//! writes happen only at the ends ([`readability::analyze_file`],
//! [`favicon::write_favicons`]), so the tokenizer, calculator and icon plan
//! are unit-tested without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`readability`] | Text extraction, tokenization, syllables, readability formulas |
//! | [`favicon`] | Icon geometry, drawing plan, raster surface, PNG output |
//! | [`config`] | `keystone.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI output formatting for both commands |
//!
//! # Design Decisions
//!
//! ## Heuristics Are Frozen
//!
//! The syllable counter is approximate. Its rule order is kept exactly, since
//! any change shifts Fog, SMOG and Flesch-Kincaid scores and makes reports
//! incomparable with earlier runs.
//!
//! ## Plan, Then Paint
//!
//! The icon is first described as an ordered list of element-tagged drawing
//! operations ([`favicon::IconPlan`]) and only then painted onto a
//! [`favicon::Surface`]. Size-gated details (accent line, keystone circle,
//! voussoir hints) are decided in the plan, where tests can see them.
//!
//! ## Loud Failure on Empty Prose
//!
//! A page with no qualifying sentences is an error, not a report full of
//! `NaN`. Directory runs skip such pages with a warning.

pub mod config;
pub mod favicon;
pub mod output;
pub mod readability;
