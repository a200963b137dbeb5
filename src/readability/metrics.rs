//! Readability formulas over aggregate document statistics.
//!
//! All scores are pure functions of [`AggregateStats`]. The constants are the
//! published ones for each formula and are applied exactly, in `f64`.
//!
//! | Score | Formula |
//! |---|---|
//! | Flesch Reading Ease | `206.835 − 1.015·asl − 84.6·asw` |
//! | Flesch-Kincaid Grade | `0.39·asl + 11.8·asw − 15.59` |
//! | Gunning Fog | `0.4·(asl + 100·complex/W)` |
//! | SMOG | `3 + √(complex·30/S)`, only when `S ≥ 3` |
//! | Coleman-Liau | `0.0588·(C/W·100) − 0.296·(S/W·100) − 15.8` |
//! | ARI | `4.71·acw + 0.5·asl − 21.43` |
//! | Lexical density | `U/W·100` |
//!
//! where `asl = W/S`, `asw = Y/W`, `acw = C/W`.

use super::ReadabilityError;
use super::syllables::count_syllables;
use serde::Serialize;
use std::collections::HashSet;

/// SMOG needs at least this many sentences to be reported.
pub const SMOG_MIN_SENTENCES: usize = 3;

/// Syllable count at which a word counts as "complex" for Fog and SMOG.
pub const COMPLEX_WORD_SYLLABLES: u32 = 3;

/// Counts shared by every formula, derived once per document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
    /// Sum of word lengths (letters and apostrophes only).
    pub characters: usize,
    /// Distinct words, compared case-insensitively.
    pub unique_words: usize,
    /// Words of three or more syllables.
    pub complex_words: usize,
}

impl AggregateStats {
    /// Derive the counts from tokenizer output.
    pub fn from_tokens(sentences: &[String], words: &[String]) -> Self {
        let syllable_counts: Vec<u32> = words.iter().map(|w| count_syllables(w)).collect();
        let unique: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();

        Self {
            words: words.len(),
            sentences: sentences.len(),
            syllables: syllable_counts.iter().map(|&c| c as usize).sum(),
            characters: words.iter().map(|w| w.chars().count()).sum(),
            unique_words: unique.len(),
            complex_words: syllable_counts
                .iter()
                .filter(|&&c| c >= COMPLEX_WORD_SYLLABLES)
                .count(),
        }
    }
}

/// Qualitative reading-ease band, from Flesch Reading Ease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Easy,
    Standard,
    FairlyDifficult,
    Difficult,
    VeryDifficult,
}

impl Verdict {
    /// Band for a Flesch Reading Ease score. Bands are checked top-down.
    pub fn from_reading_ease(fre: f64) -> Self {
        if fre >= 70.0 {
            Verdict::Easy
        } else if fre >= 60.0 {
            Verdict::Standard
        } else if fre >= 50.0 {
            Verdict::FairlyDifficult
        } else if fre >= 30.0 {
            Verdict::Difficult
        } else {
            Verdict::VeryDifficult
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Easy => "Easy",
            Verdict::Standard => "Standard",
            Verdict::FairlyDifficult => "Fairly difficult",
            Verdict::Difficult => "Difficult",
            Verdict::VeryDifficult => "Very difficult",
        }
    }

    /// Who the band reads well for.
    pub fn audience(self) -> &'static str {
        match self {
            Verdict::Easy => "accessible to most readers",
            Verdict::Standard => "plain English range",
            Verdict::FairlyDifficult => "some college",
            Verdict::Difficult => "college level",
            Verdict::VeryDifficult => "professional/academic",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {}", self.label(), self.audience())
    }
}

/// Every score computed for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Average sentence length, words per sentence.
    pub avg_sentence_length: f64,
    /// Average syllables per word.
    pub avg_syllables_per_word: f64,
    /// Average characters per word.
    pub avg_word_length: f64,
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub gunning_fog: f64,
    /// `None` below [`SMOG_MIN_SENTENCES`] sentences.
    pub smog: Option<f64>,
    pub coleman_liau: f64,
    pub automated_readability: f64,
    /// Unique words as a percentage of all words, in `[0, 100]`.
    pub lexical_density: f64,
    /// Mean of Flesch-Kincaid, Fog, Coleman-Liau and ARI. SMOG is left out
    /// so the average means the same thing whether or not it is present.
    pub grade_level: f64,
    pub verdict: Verdict,
}

impl MetricsReport {
    /// Compute all scores.
    ///
    /// Fails with [`ReadabilityError::NoWords`] or
    /// [`ReadabilityError::NoSentences`] rather than dividing by zero.
    pub fn compute(stats: &AggregateStats) -> Result<Self, ReadabilityError> {
        if stats.words == 0 {
            return Err(ReadabilityError::NoWords);
        }
        if stats.sentences == 0 {
            return Err(ReadabilityError::NoSentences);
        }

        let w = stats.words as f64;
        let s = stats.sentences as f64;
        let y = stats.syllables as f64;
        let c = stats.characters as f64;
        let complex = stats.complex_words as f64;

        let asl = w / s;
        let asw = y / w;
        let acw = c / w;

        let flesch_reading_ease = 206.835 - 1.015 * asl - 84.6 * asw;
        let flesch_kincaid_grade = 0.39 * asl + 11.8 * asw - 15.59;
        let gunning_fog = 0.4 * (asl + 100.0 * complex / w);
        let smog = (stats.sentences >= SMOG_MIN_SENTENCES)
            .then(|| 3.0 + (complex * (30.0 / s)).sqrt());
        let coleman_liau = 0.0588 * (c / w * 100.0) - 0.296 * (s / w * 100.0) - 15.8;
        let automated_readability = 4.71 * acw + 0.5 * asl - 21.43;
        let lexical_density = stats.unique_words as f64 / w * 100.0;
        let grade_level =
            (flesch_kincaid_grade + gunning_fog + coleman_liau + automated_readability) / 4.0;

        Ok(Self {
            avg_sentence_length: asl,
            avg_syllables_per_word: asw,
            avg_word_length: acw,
            flesch_reading_ease,
            flesch_kincaid_grade,
            gunning_fog,
            smog,
            coleman_liau,
            automated_readability,
            lexical_density,
            grade_level,
            verdict: Verdict::from_reading_ease(flesch_reading_ease),
        })
    }
}
