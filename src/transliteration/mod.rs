/*!
 * Romanized (Latin keyboard) input to native script conversion.
 *
 * - `profile`: per-language syllable tables
 * - `segmenter`: consonant-vowel parsing and glyph rendering
 *
 * The engine never fails. Words that are already native, contain digits or
 * mix scripts come back untouched, and spellings without a table entry
 * pass through as their original Latin letters.
 */

pub mod profile;
pub mod segmenter;

pub use self::profile::{ScriptProfile, VowelSystem};
pub use self::segmenter::{Segment, Syllable};

use crate::language_utils::LanguageTag;

/// Stateless transliteration engine over the static profiles
#[derive(Debug, Clone, Copy, Default)]
pub struct TransliterationEngine;

impl TransliterationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Profile for a language, if it is written in a supported Brahmic script
    pub fn profile_for(&self, tag: &LanguageTag) -> Option<&'static ScriptProfile> {
        profile::profile_for(tag)
    }

    /// Whether text can be converted into the language's script
    pub fn supports(&self, tag: &LanguageTag) -> bool {
        self.profile_for(tag).is_some()
    }

    /// Convert text word by word, keeping whitespace and punctuation
    pub fn transliterate(&self, text: &str, profile: &ScriptProfile) -> String {
        self.transliterate_with(text, profile, |_| None)
    }

    /// Convert text for a language; unsupported languages return it unchanged
    pub fn transliterate_for(&self, text: &str, tag: &LanguageTag) -> String {
        match self.profile_for(tag) {
            Some(profile) => self.transliterate(text, profile),
            None => text.to_string(),
        }
    }

    /// Convert text, consulting `lookup` for every lowercase word core
    /// before falling back to the syllable tables.
    pub fn transliterate_with<F>(&self, text: &str, profile: &ScriptProfile, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut out = String::with_capacity(text.len() * 3);
        let mut word = String::new();

        for c in text.chars() {
            if c.is_whitespace() {
                if !word.is_empty() {
                    out.push_str(&self.transliterate_word_with(&word, profile, &lookup));
                    word.clear();
                }
                out.push(c);
            } else {
                word.push(c);
            }
        }
        if !word.is_empty() {
            out.push_str(&self.transliterate_word_with(&word, profile, &lookup));
        }

        out
    }

    /// Convert a single whitespace-free word
    pub fn transliterate_word(&self, word: &str, profile: &ScriptProfile) -> String {
        self.transliterate_word_with(word, profile, &|_: &str| None)
    }

    fn transliterate_word_with<F>(&self, word: &str, profile: &ScriptProfile, lookup: &F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        let (prefix, core, suffix) = split_punctuation(word);

        if core.is_empty() || !core.chars().all(|c| c.is_ascii_alphabetic()) {
            return word.to_string();
        }

        let lowered = core.to_ascii_lowercase();
        let native = match lookup(&lowered) {
            Some(native) => native,
            None => segmenter::render(&segmenter::segment(&lowered, profile), profile),
        };

        format!("{}{}{}", prefix, native, suffix)
    }
}

/// Split a word into leading punctuation, core and trailing punctuation
pub fn split_punctuation(word: &str) -> (&str, &str, &str) {
    let start = word
        .char_indices()
        .find(|(_, c)| c.is_alphanumeric())
        .map_or(word.len(), |(i, _)| i);
    let end = word
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map_or(start, |(i, c)| i + c.len_utf8());

    (&word[..start], &word[start..end], &word[end..])
}
