/*!
 * Heuristics for Latin-alphabet European languages.
 *
 * Letters with diacritics that only one language in the table uses are the
 * strongest signal; frequent function words are the fallback for plain
 * ASCII text such as "Wie geht es dir?".
 */

/// Confidence reported for a diacritic hit or two or more word hits
pub const STRONG_LATIN_CONFIDENCE: f32 = 0.85;

/// Confidence reported for a single word hit in a short text
pub const WEAK_LATIN_CONFIDENCE: f32 = 0.8;

/// Checked in order: languages whose markers overlap with a later entry
/// come first (Turkish before German, Italian before French).
const DIACRITIC_MARKERS: &[(&str, &[char])] = &[
    ("turkish", &['ğ', 'ı', 'ş', 'Ğ', 'İ', 'Ş']),
    ("vietnamese", &['ơ', 'ư', 'ạ', 'ả', 'ấ', 'ầ', 'ậ', 'ế', 'ề', 'ệ', 'ố', 'ồ', 'ộ', 'ứ', 'ừ', 'đ']),
    ("polish", &['ą', 'ę', 'ł', 'ń', 'ś', 'ź', 'ż', 'Ł']),
    ("czech", &['ř', 'ě', 'ů', 'č', 'ď', 'ť', 'ň', 'Ř']),
    ("romanian", &['ă', 'ș', 'ț', 'Ș', 'Ț']),
    ("hungarian", &['ő', 'ű', 'Ő', 'Ű']),
    ("portuguese", &['ã', 'õ', 'Ã', 'Õ']),
    ("spanish", &['ñ', '¿', '¡', 'Ñ']),
    ("swedish", &['å', 'Å']),
    ("danish", &['ø', 'æ', 'Ø', 'Æ']),
    ("german", &['ß', 'ä', 'ö', 'ü', 'Ä', 'Ö', 'Ü']),
    ("italian", &['ì', 'ò', 'Ì', 'Ò']),
    ("french", &['ç', 'œ', 'è', 'ê', 'ë', 'î', 'ï', 'û', 'ù', 'à', 'â', 'Ç', 'É']),
];

const FUNCTION_WORDS: &[(&str, &[&str])] = &[
    ("english", &[
        "i", "you", "the", "a", "is", "am", "are", "here", "there", "come", "to", "me", "my",
        "we", "it", "and", "in", "on", "what", "how", "hello", "hi", "thanks", "thank", "please",
        "good", "yes", "no", "love",
    ]),
    ("german", &[
        "ich", "du", "wie", "geht", "dir", "nicht", "und", "ist", "das", "der", "ein", "eine",
        "mit", "danke", "bitte", "nein", "gut", "wo", "wer", "sehr", "auch", "heute", "hallo",
        "mein", "dein", "bin", "bist", "ihr", "wir",
    ]),
    ("spanish", &[
        "hola", "como", "estas", "que", "el", "los", "las", "es", "muy", "gracias", "por",
        "favor", "bien", "yo", "usted", "pero", "buenos", "dias", "noches", "donde", "quiero",
        "amo", "mucho", "hermano",
    ]),
    ("french", &[
        "bonjour", "salut", "merci", "je", "vous", "nous", "est", "les", "des", "une", "pas",
        "oui", "non", "tres", "comment", "ca", "va", "avec", "mon", "suis", "et", "aime",
    ]),
    ("italian", &[
        "ciao", "grazie", "sono", "stai", "bene", "molto", "che", "io", "questo", "buongiorno",
        "prego", "perche", "voglio",
    ]),
    ("portuguese", &[
        "ola", "obrigado", "obrigada", "voce", "tudo", "bem", "sim", "nao", "eu", "muito",
        "estou", "tchau", "bom", "dia",
    ]),
    ("dutch", &[
        "hallo", "dank", "wel", "ik", "jij", "niet", "het", "een", "goed", "hoe", "gaat", "ben",
        "bedankt", "alsjeblieft", "dag",
    ]),
];

/// Language whose exclusive diacritics occur in the text
pub fn diacritic_language(text: &str) -> Option<&'static str> {
    DIACRITIC_MARKERS
        .iter()
        .find(|(_, markers)| text.chars().any(|c| markers.contains(&c)))
        .map(|(language, _)| *language)
}

/// Distinct English function words among the tokens
pub fn english_word_hits(tokens: &[String]) -> usize {
    FUNCTION_WORDS
        .iter()
        .find(|(language, _)| *language == "english")
        .map_or(0, |(_, words)| {
            words
                .iter()
                .filter(|word| tokens.iter().any(|token| token == *word))
                .count()
        })
}

/// Language with the most function-word hits, with its hit count.
///
/// English competes in the same table so that short English phrases such as
/// "come here" are not claimed by a language that merely shares a word.
/// Returns `None` when English wins or nothing reaches the threshold.
pub fn function_word_language(tokens: &[String]) -> Option<(&'static str, usize)> {
    let min_hits = if tokens.len() <= 3 { 1 } else { 2 };

    let mut best: Option<(&'static str, usize)> = None;
    for (language, words) in FUNCTION_WORDS {
        let hits = words
            .iter()
            .filter(|word| tokens.iter().any(|token| token == *word))
            .count();
        if hits >= min_hits && best.is_none_or(|(_, best_hits)| hits > best_hits) {
            best = Some((*language, hits));
        }
    }

    match best {
        Some(("english", _)) | None => None,
        found => found,
    }
}
