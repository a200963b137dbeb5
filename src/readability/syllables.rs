//! English syllable estimation.
//!
//! This is a heuristic, not a phonetic dictionary. Its output feeds the
//! Flesch, Fog and SMOG formulas directly, so the rule order below is fixed:
//! reordering or "improving" a rule silently shifts every score.
//!
//! 1. Lowercase, trim apostrophes from both ends.
//! 2. Words of three characters or fewer are one syllable.
//! 3. Drop a trailing non-vowel + `es`, then a trailing non-vowel + `ed`
//!    (the non-vowel goes with the suffix).
//! 4. Drop one trailing `e`.
//! 5. Count runs of `a e i o u`; never return less than one.

const VOWELS: &[u8] = b"aeiou";

fn is_vowel(b: u8) -> bool {
    VOWELS.contains(&b)
}

/// Remove `<non-vowel><suffix>` from the end of `word`, if present.
fn strip_consonant_suffix(word: &mut String, suffix: &str) {
    let Some(stem) = word.strip_suffix(suffix) else {
        return;
    };
    let Some(before) = stem.chars().next_back() else {
        return;
    };
    if !before.is_ascii() || !is_vowel(before as u8) {
        let cut = stem.len() - before.len_utf8();
        word.truncate(cut);
    }
}

/// Count maximal runs of vowels.
fn vowel_groups(word: &str) -> u32 {
    let mut groups = 0;
    let mut in_group = false;
    for b in word.bytes() {
        if is_vowel(b) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }
    groups
}

/// Estimate the syllable count of a single word token.
///
/// Tokens come from [`split_words`](super::tokenize::split_words), so they are
/// ASCII letters and apostrophes. The result is always at least 1.
pub fn count_syllables(word: &str) -> u32 {
    let mut word = word.to_ascii_lowercase().trim_matches('\'').to_string();
    if word.chars().count() <= 3 {
        return 1;
    }

    strip_consonant_suffix(&mut word, "es");
    strip_consonant_suffix(&mut word, "ed");
    if word.ends_with('e') {
        word.pop();
    }

    vowel_groups(&word).max(1)
}
