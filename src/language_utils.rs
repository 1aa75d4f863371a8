use std::collections::{BTreeSet, HashMap};

use isolang::Language;
use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Language utilities for normalizing user-supplied language strings
///
/// This module owns the static language table. Every other component goes
/// through [`LanguageRegistry::normalize`] before it looks anything up, so
/// "bangla", "bn" and "Bengali " all land on the same [`LanguageTag`].
/// Writing system of a language or of a single code point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Sinhala,
    Thai,
    Lao,
    Tibetan,
    Myanmar,
    Khmer,
    Georgian,
    Armenian,
    Hangul,
    Kana,
    Han,
    Arabic,
    Hebrew,
    Cyrillic,
    Greek,
    Ethiopic,
}

impl Script {
    /// Whether this is the Latin alphabet
    pub fn is_latin(self) -> bool {
        matches!(self, Script::Latin)
    }
}

/// Coarse script classification used by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptKind {
    /// Written with the Latin alphabet
    Latin,
    /// Written with a non-Latin script
    Native,
}

/// A normalized language identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    canonical_name: String,
    iso_codes: BTreeSet<String>,
    script: ScriptKind,
    writing_system: Script,
    aliases: BTreeSet<String>,
    known: bool,
}

impl LanguageTag {
    /// Tag for a string that matched nothing in the table.
    ///
    /// The lowercased input is echoed back and the language is assumed to be
    /// written in Latin script.
    pub fn unknown(input: &str) -> Self {
        let name = input.trim().to_lowercase();
        let mut iso_codes = BTreeSet::new();
        if !name.is_empty() {
            iso_codes.insert(name.clone());
        }
        Self {
            canonical_name: name,
            iso_codes,
            script: ScriptKind::Latin,
            writing_system: Script::Latin,
            aliases: BTreeSet::new(),
            known: false,
        }
    }

    fn from_entry(entry: &LanguageEntry) -> Self {
        Self {
            canonical_name: entry.name.to_string(),
            iso_codes: entry.codes.iter().map(|c| c.to_string()).collect(),
            script: if entry.script.is_latin() { ScriptKind::Latin } else { ScriptKind::Native },
            writing_system: entry.script,
            aliases: entry.aliases.iter().map(|a| a.to_string()).collect(),
            known: true,
        }
    }

    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    pub fn iso_codes(&self) -> &BTreeSet<String> {
        &self.iso_codes
    }

    pub fn aliases(&self) -> &BTreeSet<String> {
        &self.aliases
    }

    pub fn script(&self) -> ScriptKind {
        self.script
    }

    pub fn writing_system(&self) -> Script {
        self.writing_system
    }

    /// Whether the tag came from the static table
    pub fn is_known(&self) -> bool {
        self.known
    }

    pub fn is_native_script(&self) -> bool {
        self.script == ScriptKind::Native
    }

    /// Code handed to external backends: the shortest ISO code, or the
    /// canonical name when the language is unknown.
    pub fn primary_code(&self) -> String {
        self.iso_codes
            .iter()
            .min_by_key(|c| (c.len(), c.as_str().to_owned()))
            .cloned()
            .unwrap_or_else(|| self.canonical_name.clone())
    }
}

/// Static table row
struct LanguageEntry {
    name: &'static str,
    codes: &'static [&'static str],
    script: Script,
    aliases: &'static [&'static str],
}

const fn lang(
    name: &'static str,
    codes: &'static [&'static str],
    script: Script,
    aliases: &'static [&'static str],
) -> LanguageEntry {
    LanguageEntry { name, codes, script, aliases }
}

const LANGUAGES: &[LanguageEntry] = &[
    lang("english", &["en", "eng"], Script::Latin, &[]),
    lang("hindi", &["hi", "hin"], Script::Devanagari, &["hindustani"]),
    lang("marathi", &["mr", "mar"], Script::Devanagari, &[]),
    lang("nepali", &["ne", "nep"], Script::Devanagari, &[]),
    lang("sanskrit", &["sa", "san"], Script::Devanagari, &[]),
    lang("bengali", &["bn", "ben"], Script::Bengali, &["bangla"]),
    lang("assamese", &["as", "asm"], Script::Bengali, &["asamiya"]),
    lang("punjabi", &["pa", "pan"], Script::Gurmukhi, &["panjabi", "gurmukhi"]),
    lang("gujarati", &["gu", "guj"], Script::Gujarati, &[]),
    lang("odia", &["or", "ori", "ory"], Script::Oriya, &["oriya"]),
    lang("tamil", &["ta", "tam"], Script::Tamil, &[]),
    lang("telugu", &["te", "tel"], Script::Telugu, &[]),
    lang("kannada", &["kn", "kan"], Script::Kannada, &["kanarese"]),
    lang("malayalam", &["ml", "mal"], Script::Malayalam, &[]),
    lang("sinhala", &["si", "sin"], Script::Sinhala, &["sinhalese"]),
    lang("urdu", &["ur", "urd"], Script::Arabic, &[]),
    lang("arabic", &["ar", "ara"], Script::Arabic, &[]),
    lang("persian", &["fa", "fas", "per"], Script::Arabic, &["farsi"]),
    lang("hebrew", &["he", "heb", "iw"], Script::Hebrew, &["ivrit"]),
    lang("russian", &["ru", "rus"], Script::Cyrillic, &[]),
    lang("ukrainian", &["uk", "ukr"], Script::Cyrillic, &[]),
    lang("bulgarian", &["bg", "bul"], Script::Cyrillic, &[]),
    lang("serbian", &["sr", "srp"], Script::Cyrillic, &[]),
    lang("greek", &["el", "ell", "gre"], Script::Greek, &[]),
    lang("armenian", &["hy", "hye", "arm"], Script::Armenian, &[]),
    lang("georgian", &["ka", "kat", "geo"], Script::Georgian, &[]),
    lang("amharic", &["am", "amh"], Script::Ethiopic, &[]),
    lang("tibetan", &["bo", "bod", "tib"], Script::Tibetan, &[]),
    lang("burmese", &["my", "mya", "bur"], Script::Myanmar, &["myanmar"]),
    lang("khmer", &["km", "khm"], Script::Khmer, &["cambodian"]),
    lang("lao", &["lo"], Script::Lao, &["laotian"]),
    lang("thai", &["th", "tha"], Script::Thai, &[]),
    lang("chinese", &["zh", "zho", "chi"], Script::Han, &["mandarin", "simplified chinese"]),
    lang("japanese", &["ja", "jpn"], Script::Kana, &["nihongo"]),
    lang("korean", &["ko", "kor"], Script::Hangul, &["hangul"]),
    lang("spanish", &["es", "spa"], Script::Latin, &["espanol", "español", "castilian"]),
    lang("french", &["fr", "fra", "fre"], Script::Latin, &["francais", "français"]),
    lang("german", &["de", "deu", "ger"], Script::Latin, &["deutsch"]),
    lang("italian", &["it", "ita"], Script::Latin, &["italiano"]),
    lang("portuguese", &["pt", "por"], Script::Latin, &["portugues", "português"]),
    lang("dutch", &["nl", "nld", "dut"], Script::Latin, &["flemish", "nederlands"]),
    lang("swedish", &["sv", "swe"], Script::Latin, &["svenska"]),
    lang("norwegian", &["no", "nor", "nb", "nob"], Script::Latin, &["bokmal"]),
    lang("danish", &["da", "dan"], Script::Latin, &["dansk"]),
    lang("finnish", &["fi", "fin"], Script::Latin, &["suomi"]),
    lang("polish", &["pl", "pol"], Script::Latin, &["polski"]),
    lang("czech", &["cs", "ces", "cze"], Script::Latin, &[]),
    lang("romanian", &["ro", "ron", "rum"], Script::Latin, &[]),
    lang("hungarian", &["hu", "hun"], Script::Latin, &["magyar"]),
    lang("turkish", &["tr", "tur"], Script::Latin, &["turkce"]),
    lang("vietnamese", &["vi", "vie"], Script::Latin, &[]),
    lang("indonesian", &["id", "ind"], Script::Latin, &["bahasa indonesia"]),
    lang("malay", &["ms", "msa", "may"], Script::Latin, &["bahasa melayu"]),
    lang("filipino", &["fil", "tl", "tgl"], Script::Latin, &["tagalog"]),
    lang("swahili", &["sw", "swa"], Script::Latin, &["kiswahili"]),
];

/// ISO 639-2/B codes that differ from their 639-2/T counterpart
fn bibliographic_to_terminology(code: &str) -> Option<&'static str> {
    match code {
        "fre" => Some("fra"),
        "ger" => Some("deu"),
        "dut" => Some("nld"),
        "gre" => Some("ell"),
        "chi" => Some("zho"),
        "cze" => Some("ces"),
        "ice" => Some("isl"),
        "alb" => Some("sqi"),
        "arm" => Some("hye"),
        "baq" => Some("eus"),
        "bur" => Some("mya"),
        "per" => Some("fas"),
        "geo" => Some("kat"),
        "may" => Some("msa"),
        "mac" => Some("mkd"),
        "rum" => Some("ron"),
        "slo" => Some("slk"),
        "wel" => Some("cym"),
        "tib" => Some("bod"),
        _ => None,
    }
}

/// Registry of every supported language
#[derive(Debug)]
pub struct LanguageRegistry {
    tags: Vec<LanguageTag>,
    by_alias: HashMap<String, usize>,
    by_code: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

static REGISTRY: Lazy<LanguageRegistry> = Lazy::new(LanguageRegistry::from_static_tables);

/// Process-wide registry, built on first use from the static table
pub fn registry() -> &'static LanguageRegistry {
    &REGISTRY
}

impl LanguageRegistry {
    fn from_static_tables() -> Self {
        let mut tags = Vec::with_capacity(LANGUAGES.len());
        let mut by_alias = HashMap::new();
        let mut by_code = HashMap::new();
        let mut by_name = HashMap::new();

        for (index, entry) in LANGUAGES.iter().enumerate() {
            tags.push(LanguageTag::from_entry(entry));
            by_name.insert(entry.name.to_string(), index);
            for code in entry.codes {
                by_code.insert(code.to_string(), index);
            }
            for alias in entry.aliases {
                by_alias.insert(alias.to_string(), index);
            }
        }

        Self { tags, by_alias, by_code, by_name }
    }

    /// Resolve a language string against the table without any fallback
    pub fn lookup(&self, input: &str) -> Option<&LanguageTag> {
        let key = input.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }

        if let Some(tag) = self.lookup_key(&key) {
            return Some(tag);
        }

        // Region subtags: "en-US", "pt_BR", "zh-Hans"
        if let Some(primary) = key.split(['-', '_']).next() {
            if primary != key {
                if let Some(tag) = self.lookup_key(primary) {
                    return Some(tag);
                }
            }
        }

        self.lookup_iso(&key)
    }

    fn lookup_key(&self, key: &str) -> Option<&LanguageTag> {
        self.by_alias
            .get(key)
            .or_else(|| self.by_code.get(key))
            .or_else(|| self.by_name.get(key))
            .map(|&index| &self.tags[index])
    }

    /// ISO codes missing from the table, resolved through their English name
    fn lookup_iso(&self, key: &str) -> Option<&LanguageTag> {
        let language = match key.len() {
            2 => Language::from_639_1(key),
            3 => Language::from_639_3(bibliographic_to_terminology(key).unwrap_or(key)),
            _ => None,
        }?;

        let name = language.to_name().to_lowercase();
        self.by_name.get(&name).map(|&index| &self.tags[index])
    }

    /// Normalize a user-supplied language string.
    ///
    /// Never fails: unmatched input comes back as an unknown Latin-script
    /// tag. A valid ISO code that is not in the table is echoed under its
    /// English name.
    pub fn normalize(&self, input: &str) -> LanguageTag {
        if let Some(tag) = self.lookup(input) {
            return tag.clone();
        }

        let key = input.trim().to_lowercase();
        let iso_name = match key.len() {
            2 => Language::from_639_1(&key),
            3 => Language::from_639_3(bibliographic_to_terminology(&key).unwrap_or(&key)),
            _ => None,
        }
        .map(|language| language.to_name().to_lowercase());

        debug!("Unknown language '{}', falling back to Latin script", input);

        match iso_name {
            Some(name) => {
                let mut tag = LanguageTag::unknown(&name);
                tag.iso_codes.clear();
                tag.iso_codes.insert(key);
                tag
            }
            None => LanguageTag::unknown(&key),
        }
    }

    /// Get a known language by canonical name
    pub fn get(&self, canonical_name: &str) -> Option<&LanguageTag> {
        self.by_name.get(canonical_name).map(|&index| &self.tags[index])
    }

    /// All known languages in table order
    pub fn languages(&self) -> impl Iterator<Item = &LanguageTag> {
        self.tags.iter()
    }

    pub fn is_native_script(&self, tag: &LanguageTag) -> bool {
        tag.is_native_script()
    }

    /// Check if two language strings name the same language
    pub fn is_same_language(&self, a: &str, b: &str) -> bool {
        let a = self.normalize(a);
        let b = self.normalize(b);
        !a.canonical_name.is_empty() && a.canonical_name == b.canonical_name
    }
}

/// Check if two language strings name the same language
pub fn is_same_language(a: &str, b: &str) -> bool {
    registry().is_same_language(a, b)
}

/// Normalize a language string through the process-wide registry
pub fn normalize_language(input: &str) -> LanguageTag {
    registry().normalize(input)
}
