/*!
 * Detection of romanized (phonetic) input for non-Latin-script languages.
 *
 * Each language carries a short list of frequent romanized function words
 * and a few regular expressions for constructions that are unambiguous on
 * their own (verb endings, fixed greetings).
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::latin;

/// Raw word list and patterns for one language
struct PhoneticTable {
    language: &'static str,
    words: &'static [&'static str],
    patterns: &'static [&'static str],
}

const PHONETIC_TABLES: &[PhoneticTable] = &[
    PhoneticTable {
        language: "hindi",
        words: &[
            "main", "mein", "hum", "tum", "aap", "hai", "hain", "ho", "hoon", "nahi", "nahin",
            "kya", "kyun", "kaise", "kaisa", "kaisi", "kab", "kahan", "mera", "meri", "tera",
            "teri", "tumhara", "apna", "accha", "acha", "theek", "thik", "bahut", "bhi", "kuch",
            "kar", "karo", "raha", "rahi", "rahe", "gaya", "gayi", "tha", "thi", "yaar", "haan",
            "abhi", "sab", "pyaar", "pyar", "dost", "matlab", "chalo", "bolo", "dekho", "batao",
        ],
        patterns: &[
            r"\b(kya|kaise|kyun) (hai|ho|hain)\b",
            r"\b(raha|rahi|rahe) (hai|hoon|hun|ho|hain|tha|thi)\b",
            r"\bkar (raha|rahi|rahe|rahein)\b",
        ],
    },
    PhoneticTable {
        language: "telugu",
        words: &[
            "nenu", "nuvvu", "nuvu", "meeru", "memu", "manam", "vaadu", "aame", "emi", "emiti",
            "enti", "ela", "ekkada", "eppudu", "enduku", "unnav", "unnavu", "unnanu", "unnaru",
            "undi", "ledu", "kaadu", "avunu", "chesanu", "cheppu", "cheyyi", "vachanu", "vellu",
            "baagunnava", "bagunnava", "baagundi", "bagundi", "andi", "garu", "naaku", "neeku",
            "meeku", "chala", "kooda", "inka", "ippudu", "tinnava",
        ],
        patterns: &[
            r"\b\w+(thunnav|tunnav|thunnanu|tunnanu|thunnaru|tunnaru)\w*\b",
            r"\b(ela|emi|enti|ekkada) (unnav|unnavu|unnaru|undi)\b",
        ],
    },
    PhoneticTable {
        language: "tamil",
        words: &[
            "naan", "neenga", "enna", "eppadi", "epdi", "enga", "inga", "irukken", "irukka",
            "irukkeenga", "iruku", "illai", "venum", "vendam", "sollu", "seri", "romba",
            "konjam", "saptiya", "saapadu", "vanakkam", "nandri", "vaa", "paaru", "theriyum",
            "machan", "unakku", "enakku", "namma",
        ],
        patterns: &[
            r"\b\w+(kkiren|kkeen|kkuren|ringa|reenga|kkinga)\b",
            r"\b(enna|eppadi|epdi) (panra|panringa|panreenga|iruka|irukka|irukeenga)\w*\b",
        ],
    },
    PhoneticTable {
        language: "kannada",
        words: &[
            "naanu", "neenu", "neevu", "nimma", "nanna", "yenu", "enu", "hegiddiya",
            "hegiddira", "hegide", "elli", "yaake", "beku", "beda", "ide", "houdu", "hodu",
            "maadu", "maadi", "banni", "hogu", "oota", "aaytha", "gottu", "gothilla", "swalpa",
            "tumba", "chennagide", "sakkat",
        ],
        patterns: &[r"\b\w+(iddiya|iddira|iddini|ttiya|ttini)\b"],
    },
    PhoneticTable {
        language: "malayalam",
        words: &[
            "njan", "ningal", "enthu", "entha", "enthanu", "evide", "engane", "sugham",
            "sukhamano", "aanu", "cheyyunnu", "poyi", "vannu", "kazhicho", "kazhichu", "enikku",
            "ninakku", "nalla", "kollam", "mathi", "venam", "venda", "chetta", "chechi", "mone",
            "parayu", "paranju",
        ],
        patterns: &[r"\b\w+(yunnu|kazhicho|aano)\b", r"\bsukham?ano\b"],
    },
    PhoneticTable {
        language: "bengali",
        words: &[
            "tumi", "apni", "amra", "tomar", "amar", "apnar", "kemon", "acho", "achen", "achi",
            "bhalo", "bhalobashi", "kothay", "keno", "kobe", "hobe", "korbo", "korchi", "korcho",
            "jabo", "khabo", "khub", "dhonnobad", "kichu", "ekhon", "tahole", "ache", "nei",
            "dada", "didi",
        ],
        patterns: &[
            r"\b(kemon|ki) (acho|achen|achis|korcho|korchen)\b",
            r"\bami (tomake|tomay|bhalobashi|jabo|khabo|achi|korchi)\b",
        ],
    },
    PhoneticTable {
        language: "marathi",
        words: &[
            "mala", "tula", "tumhi", "kay", "kaay", "kasa", "kashi", "kuthe", "ahe", "aahe",
            "ahes", "aahes", "kara", "zala", "zhala", "jhala", "hota", "hoti", "mhanun", "ani",
            "majha", "mazha", "tujha", "tuza", "udya", "changla", "khup",
        ],
        patterns: &[r"\b(kasa|kashi|kase) (ahes|aahes|ahat|aahat|ahe|aahe)\b"],
    },
    PhoneticTable {
        language: "gujarati",
        words: &[
            "tame", "maru", "taru", "tamaru", "kem", "cho", "chho", "chhe", "chhu", "nathi",
            "shu", "majama", "saru", "aavjo", "kevi", "ketla",
        ],
        patterns: &[r"\bkem (cho|chho)\b", r"\bmaja ?ma (cho|chhe|chho)\b"],
    },
    PhoneticTable {
        language: "punjabi",
        words: &[
            "tusi", "tussi", "tuhada", "mainu", "tenu", "kiddan", "kidda", "haal", "paaji",
            "paji", "veere", "changa", "vadiya", "kithe", "kivein", "karda", "kardi", "rehya",
            "oye",
        ],
        patterns: &[r"\b(kiddan|kidda|ki haal)\b", r"\bsat sri akal\b"],
    },
];

/// List words that are also everyday English words; they count toward a
/// match but never make one on their own.
const ENGLISH_HOMOGRAPHS: &[&str] = &[
    "main", "hum", "ho", "tum", "naan", "ide", "ache", "nei", "dada", "kay", "tame",
];

/// Compiled word list and patterns for one language
pub struct PhoneticProfile {
    pub language: &'static str,
    words: &'static [&'static str],
    patterns: Vec<Regex>,
}

impl PhoneticProfile {
    /// Distinct list words present among the tokens
    pub fn word_hits(&self, tokens: &[String]) -> usize {
        self.words
            .iter()
            .filter(|word| tokens.iter().any(|token| token == *word))
            .count()
    }

    /// Distinct list words present among the tokens that are not English homographs
    pub fn distinctive_hits(&self, tokens: &[String]) -> usize {
        self.words
            .iter()
            .filter(|word| !ENGLISH_HOMOGRAPHS.contains(word))
            .filter(|word| tokens.iter().any(|token| token == *word))
            .count()
    }

    /// Number of strong patterns matching the lowercased text
    pub fn pattern_hits(&self, lowered: &str) -> usize {
        self.patterns.iter().filter(|pattern| pattern.is_match(lowered)).count()
    }
}

static PROFILES: Lazy<Vec<PhoneticProfile>> = Lazy::new(|| {
    PHONETIC_TABLES
        .iter()
        .map(|table| PhoneticProfile {
            language: table.language,
            words: table.words,
            patterns: table
                .patterns
                .iter()
                .filter_map(|pattern| match Regex::new(pattern) {
                    Ok(regex) => Some(regex),
                    Err(e) => {
                        debug!("Skipping invalid phonetic pattern '{}': {}", pattern, e);
                        None
                    }
                })
                .collect(),
        })
        .collect()
});

/// All phonetic profiles in table order
pub fn profiles() -> &'static [PhoneticProfile] {
    &PROFILES
}

/// Phonetic profile for a canonical language name
pub fn profile_for(language: &str) -> Option<&'static PhoneticProfile> {
    PROFILES.iter().find(|profile| profile.language == language)
}

/// A successful phonetic match
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneticMatch {
    pub language: &'static str,
    pub match_count: usize,
    pub confidence: f32,
}

/// Confidence for a phonetic match: 0.7 + 0.05 per hit, capped at 0.9
pub fn phonetic_confidence(match_count: usize) -> f32 {
    (0.7 + 0.05 * match_count as f32).min(0.9)
}

/// Score one profile against the text.
///
/// `min_word_hits` is the number of distinct list words needed when no
/// strong pattern matched. At least one of those words must not be an
/// English homograph.
pub fn score_profile(
    profile: &'static PhoneticProfile,
    tokens: &[String],
    lowered: &str,
    min_word_hits: usize,
) -> Option<PhoneticMatch> {
    let words = profile.word_hits(tokens);
    let patterns = profile.pattern_hits(lowered);

    if patterns == 0 && (words < min_word_hits || profile.distinctive_hits(tokens) == 0) {
        return None;
    }

    let match_count = words + patterns;
    Some(PhoneticMatch {
        language: profile.language,
        match_count,
        confidence: phonetic_confidence(match_count),
    })
}

/// Best phonetic match across every profile; ties go to the earlier table entry.
///
/// English function words compete: a match without a strong pattern must
/// outnumber them, so "my head ache" stays English.
pub fn best_match(tokens: &[String], lowered: &str) -> Option<PhoneticMatch> {
    let min_word_hits = if tokens.len() <= 3 { 1 } else { 2 };
    let english_hits = latin::english_word_hits(tokens);

    let mut best: Option<PhoneticMatch> = None;
    for profile in profiles() {
        if let Some(found) = score_profile(profile, tokens, lowered, min_word_hits) {
            if profile.pattern_hits(lowered) == 0 && found.match_count <= english_hits {
                continue;
            }
            if best.as_ref().is_none_or(|b| found.match_count > b.match_count) {
                best = Some(found);
            }
        }
    }
    best
}
