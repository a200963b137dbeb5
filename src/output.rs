//! CLI output formatting for both commands.
//!
//! # Output Format
//!
//! ## Readability
//!
//! ```text
//! ======================================================
//!   index.html — Readability Report
//! ======================================================
//!   Words:                 812
//!   Sentences:              47
//!   Syllables:            1264
//!   Unique words:          401
//! ──────────────────────────────────────────────────────
//!   Avg sentence length:   17.3 words
//!   Avg word length:       4.71 chars
//!   Avg syllables/word:    1.56
//! ──────────────────────────────────────────────────────
//!   Flesch Reading Ease:   50.8  (60-70 = plain English)
//!   Flesch-Kincaid Grade:  9.9  (US school grade)
//!   Gunning Fog Index:     12.4  (12 = high school)
//!   SMOG Grade:            11.8  (years of education)
//!   Coleman-Liau Index:    11.6  (US school grade)
//!   Auto Readability:      10.5  (US school grade)
//! ──────────────────────────────────────────────────────
//!   Lexical Density:       49.4%  (40-60% = informational)
//! ======================================================
//!
//!   Avg grade level (4-metric): 11.1
//!   Reading ease verdict:       Fairly difficult — some college
//! ```
//!
//! The SMOG line is omitted below three sentences.
//!
//! ## Favicons
//!
//! ```text
//! Created ./favicon-16.png (16x16)
//! Created ./favicon-32.png (32x32)
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::favicon::GeneratedIcon;
use crate::readability::Analysis;

const RULE_WIDTH: usize = 54;

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn light_rule() -> String {
    "─".repeat(RULE_WIDTH)
}

// ============================================================================
// Readability
// ============================================================================

/// Format the fixed-width readability report for one document.
pub fn format_readability_report(title: &str, analysis: &Analysis) -> Vec<String> {
    let stats = &analysis.stats;
    let m = &analysis.metrics;
    let mut lines = vec![
        heavy_rule(),
        format!("  {title} — Readability Report"),
        heavy_rule(),
        format!("  Words:              {:>6}", stats.words),
        format!("  Sentences:          {:>6}", stats.sentences),
        format!("  Syllables:          {:>6}", stats.syllables),
        format!("  Unique words:       {:>6}", stats.unique_words),
        light_rule(),
        format!("  Avg sentence length:{:>7.1} words", m.avg_sentence_length),
        format!("  Avg word length:    {:>7.2} chars", m.avg_word_length),
        format!("  Avg syllables/word: {:>7.2}", m.avg_syllables_per_word),
        light_rule(),
        format!(
            "  Flesch Reading Ease:{:>7.1}  (60-70 = plain English)",
            m.flesch_reading_ease
        ),
        format!(
            "  Flesch-Kincaid Grade:{:>6.1}  (US school grade)",
            m.flesch_kincaid_grade
        ),
        format!("  Gunning Fog Index:  {:>7.1}  (12 = high school)", m.gunning_fog),
    ];
    if let Some(smog) = m.smog {
        lines.push(format!("  SMOG Grade:         {smog:>7.1}  (years of education)"));
    }
    lines.extend([
        format!("  Coleman-Liau Index: {:>7.1}  (US school grade)", m.coleman_liau),
        format!(
            "  Auto Readability:   {:>7.1}  (US school grade)",
            m.automated_readability
        ),
        light_rule(),
        format!(
            "  Lexical Density:    {:>7.1}%  (40-60% = informational)",
            m.lexical_density
        ),
        heavy_rule(),
        String::new(),
        format!("  Avg grade level (4-metric): {:.1}", m.grade_level),
        format!("  Reading ease verdict:       {}", m.verdict),
        String::new(),
    ]);
    lines
}

pub fn print_readability_report(title: &str, analysis: &Analysis) {
    for line in format_readability_report(title, analysis) {
        println!("{}", line);
    }
}

/// Closing line for a directory run.
pub fn format_batch_summary(analyzed: usize, skipped: usize) -> String {
    let noun = if analyzed == 1 { "document" } else { "documents" };
    if skipped == 0 {
        format!("Analyzed {analyzed} {noun}")
    } else {
        format!("Analyzed {analyzed} {noun}, skipped {skipped} without enough prose")
    }
}

// ============================================================================
// Favicons
// ============================================================================

/// One `Created` line per written icon.
pub fn format_favicon_output(icons: &[GeneratedIcon]) -> Vec<String> {
    icons
        .iter()
        .map(|icon| {
            format!(
                "Created {} ({}x{})",
                icon.path.display(),
                icon.size,
                icon.size
            )
        })
        .collect()
}

pub fn print_favicon_output(icons: &[GeneratedIcon]) {
    for line in format_favicon_output(icons) {
        println!("{}", line);
    }
}
