//! Sentence and word tokenization over normalized plain text.
//!
//! A *word* is a maximal run of ASCII letters and apostrophes. A *sentence*
//! is a span ending in `.`, `!` or `?` that holds at least `min_words` words;
//! shorter spans (nav labels, button text, stray headings) are discarded.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z']+").unwrap());

/// Terminal punctuation followed by whitespace. The split point is *after*
/// the punctuation character, so it stays with the sentence it ends.
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Fallback: any run of terminal punctuation, whitespace not required.
static PUNCT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Minimum words per sentence in the stock configuration.
pub const DEFAULT_MIN_SENTENCE_WORDS: usize = 3;

/// Extract every word token, case preserved.
pub fn split_words(text: &str) -> Vec<String> {
    WORD.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

fn word_count(text: &str) -> usize {
    WORD.find_iter(text).count()
}

fn keep_sentences<'a>(
    pieces: impl Iterator<Item = &'a str>,
    min_words: usize,
) -> Vec<String> {
    pieces
        .map(str::trim)
        .filter(|s| word_count(s) >= min_words)
        .map(str::to_string)
        .collect()
}

/// Split at whitespace that follows terminal punctuation.
fn split_after_punctuation(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BREAK.find_iter(text) {
        // `[.!?]` is one byte wide
        pieces.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    pieces.push(&text[start..]);
    pieces
}

/// Split text into sentences of at least `min_words` words.
///
/// The primary rule breaks only where punctuation is followed by whitespace,
/// so `3.5` or `example.com` do not end a sentence. When that keeps nothing,
/// every run of `.`, `!`, `?` becomes a break instead.
///
/// Returns an empty list when no span reaches `min_words` under either rule.
pub fn split_sentences(text: &str, min_words: usize) -> Vec<String> {
    let sentences = keep_sentences(split_after_punctuation(text).into_iter(), min_words);
    if !sentences.is_empty() {
        return sentences;
    }
    keep_sentences(PUNCT_RUN.split(text), min_words)
}
