//! Readability analysis of a web page's visible prose.
//!
//! ```text
//! HTML ──extract──▶ text ──tokenize──▶ sentences + words
//!                                     │
//!                          syllables ─┴─▶ AggregateStats ──▶ MetricsReport
//! ```
//!
//! The module is split into:
//! - **Extract**: HTML → normalized visible text ([`extract::visible_text`])
//! - **Tokenize**: sentence and word splitting
//! - **Syllables**: the per-word syllable heuristic
//! - **Metrics**: aggregate counts and the readability formulas
//!
//! Only [`analyze_file`], [`find_html_files`] and [`analyze_dir`] touch the
//! filesystem; the calculator and tokenizer are tested on plain strings.

pub mod extract;
pub mod metrics;
pub mod syllables;
pub mod tokenize;

pub use metrics::{AggregateStats, MetricsReport, Verdict};
pub use syllables::count_syllables;
pub use tokenize::{split_sentences, split_words};

use crate::config::ReadabilityConfig;
use log::{debug, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ReadabilityError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("No words found in document")]
    NoWords,
    #[error("No sentences of enough words found in document")]
    NoSentences,
}

impl ReadabilityError {
    /// True when the document simply has too little prose to score.
    pub fn is_empty_document(&self) -> bool {
        matches!(self, ReadabilityError::NoWords | ReadabilityError::NoSentences)
    }
}

/// Tunables for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Element names whose subtrees are not reader-visible.
    pub exclude_elements: Vec<String>,
    /// Minimum word tokens for a span to count as a sentence.
    pub min_sentence_words: usize,
}

impl Default for AnalysisOptions {
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

impl From<&ReadabilityConfig> for AnalysisOptions {
    fn from(config: &ReadabilityConfig) -> Self {
        Self {
            exclude_elements: config.exclude_elements.clone(),
            min_sentence_words: config.min_sentence_words,
        }
    }
}

/// Counts and scores for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub stats: AggregateStats,
    pub metrics: MetricsReport,
}

/// Analyze already-extracted plain text.
pub fn analyze_text(text: &str, options: &AnalysisOptions) -> Result<Analysis, ReadabilityError> {
    let sentences = split_sentences(text, options.min_sentence_words);
    let words = split_words(text);
    debug!(
        "tokenized {} sentences, {} words",
        sentences.len(),
        words.len()
    );

    let stats = AggregateStats::from_tokens(&sentences, &words);
    let metrics = MetricsReport::compute(&stats)?;
    Ok(Analysis { stats, metrics })
}

/// Analyze the visible text of an HTML document.
pub fn analyze_html(html: &str, options: &AnalysisOptions) -> Result<Analysis, ReadabilityError> {
    let text = extract::visible_text(html, &options.exclude_elements);
    debug!("extracted {} chars of visible text", text.len());
    analyze_text(&text, options)
}

/// Read and analyze an HTML file.
pub fn analyze_file(path: &Path, options: &AnalysisOptions) -> Result<Analysis, ReadabilityError> {
    let html = std::fs::read_to_string(path)?;
    analyze_html(&html, options)
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
}

/// Every `.html`/`.htm` file below `dir`, sorted by path.
pub fn find_html_files(dir: &Path) -> Result<Vec<PathBuf>, ReadabilityError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_html(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// One document's analysis, keyed by its path relative to the scanned
/// directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentAnalysis {
    pub path: String,
    #[serde(flatten)]
    pub analysis: Analysis,
}

/// Result of a directory run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirAnalysis {
    /// Analyzed documents, in path order.
    pub documents: Vec<DocumentAnalysis>,
    /// Documents without enough prose to score.
    pub skipped: Vec<String>,
}

/// Analyze every HTML file below `dir`.
///
/// Documents that fail with [`ReadabilityError::is_empty_document`] are
/// logged and recorded in `skipped`. Any other error aborts the run.
pub fn analyze_dir(dir: &Path, options: &AnalysisOptions) -> Result<DirAnalysis, ReadabilityError> {
    let files = find_html_files(dir)?;
    if files.is_empty() {
        warn!("no .html files found under {}", dir.display());
    }
    info!("analyzing {} documents under {}", files.len(), dir.display());

    let mut result = DirAnalysis::default();
    for path in files {
        let relative = path
            .strip_prefix(dir)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");
        match analyze_file(&path, options) {
            Ok(analysis) => result.documents.push(DocumentAnalysis {
                path: relative,
                analysis,
            }),
            Err(e) if e.is_empty_document() => {
                warn!("skipping {relative}: {e}");
                result.skipped.push(relative);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(result)
}
