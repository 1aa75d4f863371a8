/*!
 * Static phrase and word dictionaries.
 *
 * - `tables`: curated phrase, word and romanized-spelling data
 * - `spelling`: chat-speak and variant-spelling normalizer
 *
 * Both dictionaries are bidirectional. English keys map forward to every
 * listed language; text in any other language is first mapped back to its
 * English key, which then serves as the pivot toward the target.
 */

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

pub mod spelling;
pub mod tables;

pub use self::spelling::SpellNormalizer;

use self::spelling::match_case;
use self::tables::Translations;

/// Canonical name of the pivot language
pub const PIVOT_LANGUAGE: &str = "english";

/// Longest multi-word unit tried by the token-wise pass
pub const MAX_WINDOW: usize = 3;

/// Forward and reverse index over one table
#[derive(Debug, Default)]
struct Bilingual {
    forward: HashMap<&'static str, HashMap<&'static str, &'static str>>,
    reverse: HashMap<&'static str, HashMap<String, &'static str>>,
    reverse_any: HashMap<String, &'static str>,
}

impl Bilingual {
    fn insert(&mut self, english: &'static str, translations: Translations) {
        let row = self.forward.entry(english).or_default();
        for &(language, text) in translations {
            row.insert(language, text);

            let key = lookup_key(text);
            self.reverse.entry(language).or_default().entry(key.clone()).or_insert(english);
            self.reverse_any.entry(key).or_insert(english);
        }
    }

    /// English key for a normalized key in `source`
    fn english_key(&self, key: &str, source: &str) -> Option<&'static str> {
        if source == PIVOT_LANGUAGE {
            return self.forward.get_key_value(key).map(|(english, _)| *english);
        }
        self.reverse.get(source)?.get(key).copied()
    }

    fn render(&self, english: &'static str, target: &str) -> Option<&'static str> {
        if target == PIVOT_LANGUAGE {
            return Some(english);
        }
        self.forward.get(english)?.get(target).copied()
    }

    /// Translate a normalized key; a miss in `source` retries it as English
    fn translate(&self, key: &str, source: &str, target: &str) -> Option<&'static str> {
        self.english_key(key, source)
            .and_then(|english| self.render(english, target))
            .or_else(|| {
                (source != PIVOT_LANGUAGE)
                    .then(|| self.english_key(key, PIVOT_LANGUAGE))
                    .flatten()
                    .and_then(|english| self.render(english, target))
            })
    }

    /// Translate a normalized key written in any known language
    fn translate_any(&self, key: &str, target: &str) -> Option<&'static str> {
        let english = self
            .english_key(key, PIVOT_LANGUAGE)
            .or_else(|| self.reverse_any.get(key).copied())?;
        self.render(english, target)
    }
}

/// Whole-message phrase dictionary
#[derive(Debug)]
pub struct PhraseDictionary {
    table: Bilingual,
}

impl PhraseDictionary {
    fn from_static_tables() -> Self {
        let mut table = Bilingual::default();
        for &(english, translations) in tables::PHRASES {
            table.insert(english, translations);
        }
        Self { table }
    }

    /// Look up a whole message in any language, rendered in `target`
    pub fn lookup_phrase(&self, text: &str, target: &str) -> Option<String> {
        self.lookup_with(text, |key| self.table.translate_any(key, target))
    }

    /// Look up a whole message written in `source`, rendered in `target`
    pub fn translate_phrase(&self, text: &str, source: &str, target: &str) -> Option<String> {
        self.lookup_with(text, |key| self.table.translate(key, source, target))
    }

    /// Exact match first, then the punctuation-stripped variant with the
    /// outer punctuation carried over.
    fn lookup_with<F>(&self, text: &str, find: F) -> Option<String>
    where
        F: Fn(&str) -> Option<&'static str>,
    {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(found) = find(&lookup_key(trimmed)) {
            return Some(match_case(trimmed, found));
        }

        let (prefix, core, suffix) = split_token(trimmed);
        let stripped = lookup_key(&strip_punctuation(core));
        if stripped.is_empty() {
            return None;
        }

        find(&stripped).map(|found| format!("{}{}{}", prefix, match_case(core, found), suffix))
    }
}

/// Word and short multi-word unit dictionary
#[derive(Debug)]
pub struct WordDictionary {
    table: Bilingual,
}

impl WordDictionary {
    /// Words plus every phrase short enough for the sliding window
    fn from_static_tables() -> Self {
        let mut table = Bilingual::default();
        for &(english, translations) in tables::WORDS {
            table.insert(english, translations);
        }
        for &(english, translations) in tables::PHRASES {
            if english.split_whitespace().count() <= MAX_WINDOW {
                table.insert(english, translations);
            }
        }
        Self { table }
    }

    /// Look up a single token in any language, rendered in `target`
    pub fn lookup_word(&self, token: &str, target: &str) -> Option<String> {
        let (_, core, _) = split_token(token.trim());
        if core.is_empty() {
            return None;
        }
        self.table
            .translate_any(&lookup_key(core), target)
            .map(|found| match_case(core, found))
    }

    /// Look up a normalized key written in `source`, rendered in `target`
    pub fn translate_key(&self, key: &str, source: &str, target: &str) -> Option<&'static str> {
        self.table.translate(key, source, target)
    }
}

static PHRASE_DICTIONARY: Lazy<PhraseDictionary> = Lazy::new(PhraseDictionary::from_static_tables);
static WORD_DICTIONARY: Lazy<WordDictionary> = Lazy::new(WordDictionary::from_static_tables);

static ROMANIZED_LEXICON: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        tables::ROMANIZED
            .iter()
            .map(|(language, words)| (*language, words.iter().copied().collect()))
            .collect()
    });

pub fn phrases() -> &'static PhraseDictionary {
    &PHRASE_DICTIONARY
}

pub fn words() -> &'static WordDictionary {
    &WORD_DICTIONARY
}

/// Correct native spelling of a lowercase romanized word, if curated
pub fn romanized_lexicon(language: &str, word: &str) -> Option<&'static str> {
    ROMANIZED_LEXICON.get(language)?.get(word).copied()
}

/// Run the dictionary tiers over a text.
///
/// Tries the whole text as a phrase, then replaces tokens left to right,
/// preferring the longest window of up to [`MAX_WINDOW`] tokens. Returns
/// `None` unless at least one token actually changed.
pub fn convert_with_dictionary(text: &str, source: &str, target: &str) -> Option<String> {
    if let Some(phrase) = phrases().translate_phrase(text, source, target) {
        debug!("Phrase dictionary hit for '{}' ({} -> {})", text.trim(), source, target);
        return Some(phrase);
    }

    let (leading, tokens) = split_words(text);
    if tokens.is_empty() {
        return None;
    }

    let mut out = String::from(leading);
    let mut changed = false;
    let mut i = 0;

    while i < tokens.len() {
        let longest = MAX_WINDOW.min(tokens.len() - i);
        let hit = (1..=longest)
            .rev()
            .find_map(|size| match_window(&tokens[i..i + size], source, target).map(|r| (size, r)));

        match hit {
            Some((size, (replacement, was_changed))) => {
                out.push_str(&replacement);
                out.push_str(tokens[i + size - 1].1);
                changed |= was_changed;
                i += size;
            }
            None => {
                out.push_str(tokens[i].0);
                out.push_str(tokens[i].1);
                i += 1;
            }
        }
    }

    if changed {
        debug!("Word dictionary rewrote '{}' ({} -> {})", text.trim(), source, target);
        Some(out)
    } else {
        None
    }
}

/// Replacement for a window of (word, gap) tokens and whether it differs
/// from the input. Inner tokens must carry no punctuation.
fn match_window(window: &[(&str, &str)], source: &str, target: &str) -> Option<(String, bool)> {
    let last = window.len() - 1;
    let mut cores = Vec::with_capacity(window.len());
    let mut prefix = "";
    let mut suffix = "";

    for (index, (word, _)) in window.iter().enumerate() {
        let (pre, core, suf) = split_token(word);
        if core.is_empty() || (index > 0 && !pre.is_empty()) || (index < last && !suf.is_empty()) {
            return None;
        }
        if index == 0 {
            prefix = pre;
        }
        if index == last {
            suffix = suf;
        }
        cores.push(core);
    }

    let key = lookup_key(&cores.join(" "));
    let found = words().translate_key(&key, source, target)?;
    let changed = lookup_key(found) != key;

    Some((format!("{}{}{}", prefix, match_case(cores[0], found), suffix), changed))
}

/// Split text into leading whitespace and (word, trailing whitespace) pairs
fn split_words(text: &str) -> (&str, Vec<(&str, &str)>) {
    let start = text.find(|c: char| !c.is_whitespace()).unwrap_or(text.len());
    let leading = &text[..start];
    let mut tokens = Vec::new();
    let mut rest = &text[start..];

    while !rest.is_empty() {
        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (word, after) = rest.split_at(word_end);
        let gap_end = after.find(|c: char| !c.is_whitespace()).unwrap_or(after.len());
        let (gap, next) = after.split_at(gap_end);
        tokens.push((word, gap));
        rest = next;
    }

    (leading, tokens)
}

/// Characters treated as punctuation around dictionary tokens.
///
/// Apostrophes stay part of the word ("t'aime"); combining marks of
/// Indic scripts are never punctuation.
fn is_punctuation(c: char) -> bool {
    (c.is_ascii_punctuation() && c != '\'')
        || matches!(
            c,
            '¿' | '¡' | '।' | '॥' | '…' | '«' | '»' | '“' | '”' | '‘' | '’' | '。' | '，' | '？' | '！'
        )
}

fn split_token(token: &str) -> (&str, &str, &str) {
    let start = token.find(|c: char| !is_punctuation(c)).unwrap_or(token.len());
    let end = token
        .char_indices()
        .rev()
        .find(|(_, c)| !is_punctuation(*c))
        .map_or(start, |(i, c)| i + c.len_utf8())
        .max(start);
    (&token[..start], &token[start..end], &token[end..])
}

fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !is_punctuation(*c)).collect()
}

/// Lowercase with whitespace runs collapsed to single spaces
fn lookup_key(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
