/*!
 * Per-language syllable tables.
 *
 * The Brahmic Unicode blocks share one internal layout inherited from ISCII:
 * ka sits at block base + 0x15 in Devanagari, Bengali, Tamil, Telugu and the
 * rest. A profile is therefore built from its block base plus a vowel system
 * and a list of per-script overrides. Languages that reuse another
 * language's script derive from that profile explicitly.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::language_utils::LanguageTag;

/// How short e/o and long vowels are spelled in romanized input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VowelSystem {
    /// Devanagari-style: plain "e"/"o" are the long vowels
    IndoAryan,
    /// South Indian scripts: plain "e"/"o" are the short vowels
    Dravidian,
}

const VIRAMA: u32 = 0x4D;
const ANUSVARA: u32 = 0x02;

const INDO_ARYAN_VOWELS: &[(&str, u32, Option<u32>)] = &[
    ("a", 0x05, None),
    ("aa", 0x06, Some(0x3E)),
    ("i", 0x07, Some(0x3F)),
    ("ii", 0x08, Some(0x40)),
    ("ee", 0x08, Some(0x40)),
    ("u", 0x09, Some(0x41)),
    ("uu", 0x0A, Some(0x42)),
    ("oo", 0x0A, Some(0x42)),
    ("e", 0x0F, Some(0x47)),
    ("ai", 0x10, Some(0x48)),
    ("o", 0x13, Some(0x4B)),
    ("au", 0x14, Some(0x4C)),
];

const DRAVIDIAN_VOWELS: &[(&str, u32, Option<u32>)] = &[
    ("a", 0x05, None),
    ("aa", 0x06, Some(0x3E)),
    ("i", 0x07, Some(0x3F)),
    ("ii", 0x08, Some(0x40)),
    ("ee", 0x08, Some(0x40)),
    ("u", 0x09, Some(0x41)),
    ("uu", 0x0A, Some(0x42)),
    ("oo", 0x0A, Some(0x42)),
    ("e", 0x0E, Some(0x46)),
    ("ai", 0x10, Some(0x48)),
    ("o", 0x12, Some(0x4A)),
    ("au", 0x14, Some(0x4C)),
];

/// Romanized consonant spellings and their offsets; clusters list every
/// component with the virama in between.
const CONSONANTS: &[(&str, &[u32])] = &[
    ("k", &[0x15]),
    ("q", &[0x15]),
    ("kh", &[0x16]),
    ("g", &[0x17]),
    ("gh", &[0x18]),
    ("c", &[0x1A]),
    ("ch", &[0x1A]),
    ("chh", &[0x1B]),
    ("j", &[0x1C]),
    ("z", &[0x1C]),
    ("jh", &[0x1D]),
    ("t", &[0x24]),
    ("th", &[0x25]),
    ("d", &[0x26]),
    ("dh", &[0x27]),
    ("n", &[0x28]),
    ("p", &[0x2A]),
    ("ph", &[0x2B]),
    ("f", &[0x2B]),
    ("b", &[0x2C]),
    ("bh", &[0x2D]),
    ("m", &[0x2E]),
    ("y", &[0x2F]),
    ("r", &[0x30]),
    ("l", &[0x32]),
    ("v", &[0x35]),
    ("w", &[0x35]),
    ("sh", &[0x36]),
    ("s", &[0x38]),
    ("h", &[0x39]),
    ("x", &[0x15, VIRAMA, 0x38]),
    ("ksh", &[0x15, VIRAMA, 0x37]),
    ("thr", &[0x24, VIRAMA, 0x30]),
];

/// Syllable tables for one native-script language
#[derive(Debug, Clone)]
pub struct ScriptProfile {
    language: &'static str,
    derives_from: Option<&'static str>,
    vowels: HashMap<&'static str, String>,
    vowel_signs: HashMap<&'static str, String>,
    consonants: HashMap<&'static str, String>,
    conjunct_marker: char,
    final_anusvara: bool,
    consonant_patterns: Vec<&'static str>,
    vowel_patterns: Vec<&'static str>,
}

fn glyphs(base: u32, offsets: &[u32]) -> String {
    offsets
        .iter()
        .filter_map(|offset| char::from_u32(base + offset))
        .collect()
}

impl ScriptProfile {
    /// Build a profile from a Brahmic block base code point
    pub fn brahmic(language: &'static str, base: u32, system: VowelSystem) -> Self {
        let vowel_table = match system {
            VowelSystem::IndoAryan => INDO_ARYAN_VOWELS,
            VowelSystem::Dravidian => DRAVIDIAN_VOWELS,
        };

        let mut vowels = HashMap::new();
        let mut vowel_signs = HashMap::new();
        for &(roman, independent, sign) in vowel_table {
            vowels.insert(roman, glyphs(base, &[independent]));
            vowel_signs.insert(roman, sign.map(|s| glyphs(base, &[s])).unwrap_or_default());
        }

        let consonants = CONSONANTS
            .iter()
            .map(|&(roman, offsets)| (roman, glyphs(base, offsets)))
            .collect();

        let conjunct_marker = char::from_u32(base + VIRAMA).unwrap_or('\u{094D}');

        let mut profile = Self {
            language,
            derives_from: None,
            vowels,
            vowel_signs,
            consonants,
            conjunct_marker,
            final_anusvara: false,
            consonant_patterns: Vec::new(),
            vowel_patterns: Vec::new(),
        };
        // "am" is only consulted when final_anusvara is enabled
        profile.vowels.insert("am", glyphs(base, &[0x05, ANUSVARA]));
        profile.vowel_signs.insert("am", glyphs(base, &[ANUSVARA]));
        profile.rebuild_patterns();
        profile
    }

    /// A new profile for `language` that starts from this one's tables
    pub fn derive(&self, language: &'static str) -> Self {
        let mut derived = self.clone();
        derived.language = language;
        derived.derives_from = Some(self.language);
        derived
    }

    /// Replace or add a consonant spelling
    pub fn with_consonant(mut self, roman: &'static str, native: &str) -> Self {
        self.consonants.insert(roman, native.to_string());
        self.rebuild_patterns();
        self
    }

    /// Map several spellings to one native consonant
    pub fn with_consonants(mut self, romans: &[&'static str], native: &str) -> Self {
        for &roman in romans {
            self.consonants.insert(roman, native.to_string());
        }
        self.rebuild_patterns();
        self
    }

    /// Drop a spelling the script has no letter for; it then passes through
    pub fn without_consonant(mut self, roman: &str) -> Self {
        self.consonants.remove(roman);
        self.rebuild_patterns();
        self
    }

    /// Render a word-final "am" with the anusvara
    pub fn with_final_anusvara(mut self) -> Self {
        self.final_anusvara = true;
        self
    }

    fn rebuild_patterns(&mut self) {
        self.consonant_patterns = longest_first(self.consonants.keys().copied());
        self.vowel_patterns = longest_first(self.vowels.keys().copied());
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Profile whose tables this one was derived from
    pub fn derives_from(&self) -> Option<&'static str> {
        self.derives_from
    }

    pub fn conjunct_marker(&self) -> char {
        self.conjunct_marker
    }

    pub fn consonant(&self, roman: &str) -> Option<&str> {
        self.consonants.get(roman).map(String::as_str)
    }

    /// Independent vowel letter
    pub fn vowel(&self, roman: &str) -> Option<&str> {
        self.vowels.get(roman).map(String::as_str)
    }

    /// Dependent vowel sign; the inherent "a" maps to the empty string
    pub fn vowel_sign(&self, roman: &str) -> Option<&str> {
        self.vowel_signs.get(roman).map(String::as_str)
    }

    /// Longest consonant spelling at the start of `rest`
    pub fn match_consonant(&self, rest: &str) -> Option<&'static str> {
        self.consonant_patterns
            .iter()
            .copied()
            .find(|pattern| rest.starts_with(pattern))
    }

    /// Longest vowel spelling at the start of `rest`
    pub fn match_vowel(&self, rest: &str) -> Option<&'static str> {
        self.vowel_patterns.iter().copied().find(|&pattern| {
            if pattern == "am" {
                self.final_anusvara && rest == "am"
            } else {
                rest.starts_with(pattern)
            }
        })
    }
}

fn longest_first(keys: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut patterns: Vec<&'static str> = keys.collect();
    patterns.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    patterns
}

fn build_profiles() -> HashMap<&'static str, ScriptProfile> {
    let hindi = ScriptProfile::brahmic("hindi", 0x0900, VowelSystem::IndoAryan)
        .with_consonant("z", "\u{091C}\u{093C}")
        .with_consonant("f", "\u{092B}\u{093C}");
    let marathi = hindi.derive("marathi").with_consonant("z", "\u{091D}");
    let nepali = hindi
        .derive("nepali")
        .with_consonant("z", "\u{091C}")
        .with_consonant("f", "\u{092B}");

    let bengali = ScriptProfile::brahmic("bengali", 0x0980, VowelSystem::IndoAryan)
        .with_consonants(&["v", "w"], "\u{09AC}")
        .with_consonant("y", "\u{09DF}");
    let assamese = bengali
        .derive("assamese")
        .with_consonant("r", "\u{09F0}")
        .with_consonants(&["v", "w"], "\u{09F1}");

    let punjabi = ScriptProfile::brahmic("punjabi", 0x0A00, VowelSystem::IndoAryan)
        .with_consonant("ksh", "\u{0A15}\u{0A4D}\u{0A36}")
        .with_consonant("z", "\u{0A5B}")
        .with_consonant("f", "\u{0A5E}");

    let gujarati = ScriptProfile::brahmic("gujarati", 0x0A80, VowelSystem::IndoAryan);

    let odia = ScriptProfile::brahmic("odia", 0x0B00, VowelSystem::IndoAryan)
        .with_consonant("y", "\u{0B5F}")
        .with_consonants(&["v", "w"], "\u{0B71}");

    // Tamil has no aspirated or voiced stops of its own
    let tamil = ScriptProfile::brahmic("tamil", 0x0B80, VowelSystem::Dravidian)
        .with_consonants(&["kh", "g", "gh", "q"], "\u{0B95}")
        .with_consonants(&["c", "ch", "chh", "jh"], "\u{0B9A}")
        .with_consonants(&["t", "d"], "\u{0B9F}")
        .with_consonants(&["th", "dh"], "\u{0BA4}")
        .with_consonants(&["p", "ph", "f", "b", "bh"], "\u{0BAA}")
        .with_consonant("zh", "\u{0BB4}")
        .without_consonant("z");

    let telugu = ScriptProfile::brahmic("telugu", 0x0C00, VowelSystem::Dravidian)
        .with_consonant("t", "\u{0C1F}")
        .with_consonant("th", "\u{0C24}")
        .with_final_anusvara();

    let kannada = ScriptProfile::brahmic("kannada", 0x0C80, VowelSystem::Dravidian)
        .with_consonant("t", "\u{0C9F}")
        .with_consonant("th", "\u{0CA4}")
        .with_final_anusvara();

    let malayalam = ScriptProfile::brahmic("malayalam", 0x0D00, VowelSystem::Dravidian)
        .with_consonant("t", "\u{0D1F}")
        .with_consonant("th", "\u{0D24}")
        .with_consonant("zh", "\u{0D34}")
        .with_final_anusvara();

    [
        hindi, marathi, nepali, bengali, assamese, punjabi, gujarati, odia, tamil, telugu,
        kannada, malayalam,
    ]
    .into_iter()
    .map(|profile| (profile.language, profile))
    .collect()
}

static PROFILES: Lazy<HashMap<&'static str, ScriptProfile>> = Lazy::new(build_profiles);

/// Profile for a canonical language name
pub fn profile_by_name(language: &str) -> Option<&'static ScriptProfile> {
    PROFILES.get(language)
}

/// Profile for a normalized language
pub fn profile_for(tag: &LanguageTag) -> Option<&'static ScriptProfile> {
    profile_by_name(tag.canonical_name())
}

/// Languages with a transliteration profile
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    PROFILES.keys().copied()
}
