/*!
 * Table-driven spelling cleanup for chat input.
 *
 * Runs before dictionary lookup and transliteration. English-side text gets
 * its chat abbreviations expanded; romanized Indic text gets common variant
 * spellings folded onto the one the lexicon knows.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::transliteration::split_punctuation;

const CHAT_SPEAK: &[(&str, &str)] = &[
    ("u", "you"),
    ("ur", "your"),
    ("r", "are"),
    ("plz", "please"),
    ("pls", "please"),
    ("thx", "thank you"),
    ("ty", "thank you"),
    ("tysm", "thank you so much"),
    ("gm", "good morning"),
    ("gn", "good night"),
    ("tc", "take care"),
    ("hru", "how are you"),
    ("wru", "where are you"),
    ("ily", "i love you"),
    ("btw", "by the way"),
    ("idk", "i don't know"),
    ("msg", "message"),
    ("tmrw", "tomorrow"),
    ("tmr", "tomorrow"),
    ("2day", "today"),
    ("2morrow", "tomorrow"),
    ("luv", "love"),
    ("gud", "good"),
    ("nyt", "night"),
    ("bday", "birthday"),
    ("hbd", "happy birthday"),
    ("k", "ok"),
    ("kk", "ok"),
];

const VARIANTS: &[(&str, &[(&str, &str)])] = &[
    ("hindi", &[
        ("nhi", "nahi"),
        ("nai", "nahi"),
        ("kia", "kya"),
        ("mai", "main"),
        ("hy", "hai"),
        ("acha", "accha"),
        ("achha", "accha"),
        ("bhut", "bahut"),
        ("bohot", "bahut"),
        ("pyaar", "pyar"),
        ("thik", "theek"),
        ("kaha", "kahan"),
        ("kyu", "kyun"),
    ]),
    ("telugu", &[
        ("nuvu", "nuvvu"),
        ("meru", "meeru"),
        ("baagunnava", "bagunnava"),
        ("bagunava", "bagunnava"),
        ("ledhu", "ledu"),
        ("avnu", "avunu"),
    ]),
    ("tamil", &[
        ("vanakam", "vanakkam"),
        ("nanri", "nandri"),
        ("eppadi", "epdi"),
    ]),
    ("bengali", &[
        ("nomoskaar", "nomoskar"),
        ("valo", "bhalo"),
        ("tmi", "tumi"),
    ]),
    ("kannada", &[
        ("namaskaara", "namaskara"),
    ]),
    ("malayalam", &[
        ("njaan", "njan"),
    ]),
    ("punjabi", &[
        ("tussi", "tusi"),
        ("pyar", "pyaar"),
    ]),
];

static CHAT_SPEAK_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CHAT_SPEAK.iter().copied().collect());

static VARIANT_MAP: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> = Lazy::new(|| {
    VARIANTS
        .iter()
        .map(|(language, pairs)| (*language, pairs.iter().copied().collect()))
        .collect()
});

/// Stateless spelling normalizer over the static tables
#[derive(Debug, Clone, Copy, Default)]
pub struct SpellNormalizer;

impl SpellNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize every word of a text, keeping whitespace and punctuation.
    ///
    /// `language` is the canonical name of the language the text is written
    /// in; `None` or `"english"` enables chat-speak expansion.
    pub fn normalize(&self, text: &str, language: Option<&str>) -> String {
        let mut out = String::with_capacity(text.len());
        let mut word = String::new();

        for c in text.chars() {
            if c.is_whitespace() {
                if !word.is_empty() {
                    out.push_str(&self.normalize_token(&word, language));
                    word.clear();
                }
                out.push(c);
            } else {
                word.push(c);
            }
        }
        if !word.is_empty() {
            out.push_str(&self.normalize_token(&word, language));
        }

        out
    }

    /// Normalize a bare lowercase word with no surrounding punctuation
    pub fn normalize_word(&self, word: &str, language: Option<&str>) -> String {
        let collapsed = collapse_repeats(word);

        let english_side = language.is_none_or(|l| l == "english");
        let replacement = if english_side {
            CHAT_SPEAK_MAP.get(collapsed.as_str())
        } else {
            language
                .and_then(|l| VARIANT_MAP.get(l))
                .and_then(|variants| variants.get(collapsed.as_str()))
        };

        match replacement {
            Some(fixed) => (*fixed).to_string(),
            None => collapsed,
        }
    }

    fn normalize_token(&self, token: &str, language: Option<&str>) -> String {
        let (prefix, core, suffix) = split_punctuation(token);
        if core.is_empty() || !core.chars().all(|c| c.is_ascii_alphanumeric()) {
            return token.to_string();
        }

        let fixed = self.normalize_word(&core.to_ascii_lowercase(), language);
        format!("{}{}{}", prefix, match_case(core, &fixed), suffix)
    }
}

/// Collapse runs of three or more identical letters to one ("heyyyy" -> "hey")
pub fn collapse_repeats(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&other| other == c).count();
        if run >= 3 && c.is_alphabetic() {
            out.push(c);
        } else {
            out.extend(std::iter::repeat_n(c, run));
        }
        i += run;
    }

    out
}

/// Carry the capitalization of the first letter of `original` over to `replacement`
pub fn match_case(original: &str, replacement: &str) -> String {
    let capitalized = original.chars().next().is_some_and(char::is_uppercase);
    let mut chars = replacement.chars();

    match chars.next() {
        Some(first) if capitalized && first.is_lowercase() => {
            first.to_uppercase().chain(chars).collect()
        }
        _ => replacement.to_string(),
    }
}
