/*!
 * Code-point classification by Unicode block.
 */

use crate::language_utils::Script;

/// Classify a single character by Unicode block.
///
/// Returns `None` for anything that is not a letter of a registered script
/// (digits, punctuation, whitespace, emoji).
pub fn script_of(c: char) -> Option<Script> {
    let code = c as u32;
    let script = match code {
        0x0041..=0x005A | 0x0061..=0x007A => Script::Latin,
        0x00D7 | 0x00F7 => return None,
        0x00C0..=0x024F | 0x1E00..=0x1EFF => Script::Latin,
        0x0370..=0x03FF | 0x1F00..=0x1FFF => Script::Greek,
        0x0400..=0x052F => Script::Cyrillic,
        0x0530..=0x058F => Script::Armenian,
        0x0590..=0x05FF => Script::Hebrew,
        0x0600..=0x06FF | 0x0750..=0x077F | 0x08A0..=0x08FF => Script::Arabic,
        0xFB50..=0xFDFF | 0xFE70..=0xFEFF => Script::Arabic,
        0x0900..=0x097F | 0xA8E0..=0xA8FF => Script::Devanagari,
        0x0980..=0x09FF => Script::Bengali,
        0x0A00..=0x0A7F => Script::Gurmukhi,
        0x0A80..=0x0AFF => Script::Gujarati,
        0x0B00..=0x0B7F => Script::Oriya,
        0x0B80..=0x0BFF => Script::Tamil,
        0x0C00..=0x0C7F => Script::Telugu,
        0x0C80..=0x0CFF => Script::Kannada,
        0x0D00..=0x0D7F => Script::Malayalam,
        0x0D80..=0x0DFF => Script::Sinhala,
        0x0E00..=0x0E7F => Script::Thai,
        0x0E80..=0x0EFF => Script::Lao,
        0x0F00..=0x0FFF => Script::Tibetan,
        0x1000..=0x109F => Script::Myanmar,
        0x10A0..=0x10FF => Script::Georgian,
        0x1100..=0x11FF | 0x3130..=0x318F | 0xAC00..=0xD7AF => Script::Hangul,
        0x1200..=0x137F => Script::Ethiopic,
        0x1780..=0x17FF => Script::Khmer,
        0x3040..=0x30FF | 0x31F0..=0x31FF => Script::Kana,
        0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF => Script::Han,
        _ => return None,
    };
    Some(script)
}

/// Order in which native scripts win when a text mixes several.
///
/// Kana precedes Han so Japanese text with kanji is not read as Chinese.
const SCRIPT_PRIORITY: &[Script] = &[
    Script::Devanagari,
    Script::Bengali,
    Script::Tamil,
    Script::Telugu,
    Script::Kannada,
    Script::Malayalam,
    Script::Gurmukhi,
    Script::Gujarati,
    Script::Oriya,
    Script::Sinhala,
    Script::Kana,
    Script::Hangul,
    Script::Han,
    Script::Thai,
    Script::Lao,
    Script::Khmer,
    Script::Myanmar,
    Script::Tibetan,
    Script::Arabic,
    Script::Hebrew,
    Script::Cyrillic,
    Script::Greek,
    Script::Armenian,
    Script::Georgian,
    Script::Ethiopic,
];

/// First native script in priority order that occurs anywhere in the text
pub fn dominant_native_script(text: &str) -> Option<Script> {
    let mut present = Vec::new();
    for script in text.chars().filter_map(script_of) {
        if !script.is_latin() && !present.contains(&script) {
            present.push(script);
        }
    }

    SCRIPT_PRIORITY.iter().copied().find(|script| present.contains(script))
}

/// Share of Latin letters among all letters, or `None` for a text without letters
pub fn latin_ratio(text: &str) -> Option<f32> {
    let mut letters = 0usize;
    let mut latin = 0usize;
    for script in text.chars().filter_map(script_of) {
        letters += 1;
        if script.is_latin() {
            latin += 1;
        }
    }

    if letters == 0 {
        None
    } else {
        Some(latin as f32 / letters as f32)
    }
}

/// Language a native script most likely stands for.
///
/// Languages sharing a script are told apart by letters only one of them
/// uses; otherwise the most widely used language of the script is returned.
pub fn language_for_script(script: Script, text: &str) -> &'static str {
    let has_any = |chars: &[char]| text.chars().any(|c| chars.contains(&c));

    match script {
        Script::Latin => "english",
        Script::Devanagari => {
            if has_any(&['\u{0933}']) { "marathi" } else { "hindi" }
        }
        Script::Bengali => {
            if has_any(&['\u{09F0}', '\u{09F1}']) { "assamese" } else { "bengali" }
        }
        Script::Gurmukhi => "punjabi",
        Script::Gujarati => "gujarati",
        Script::Oriya => "odia",
        Script::Tamil => "tamil",
        Script::Telugu => "telugu",
        Script::Kannada => "kannada",
        Script::Malayalam => "malayalam",
        Script::Sinhala => "sinhala",
        Script::Thai => "thai",
        Script::Lao => "lao",
        Script::Tibetan => "tibetan",
        Script::Myanmar => "burmese",
        Script::Khmer => "khmer",
        Script::Georgian => "georgian",
        Script::Armenian => "armenian",
        Script::Hangul => "korean",
        Script::Kana => "japanese",
        Script::Han => "chinese",
        Script::Arabic => {
            if has_any(&['\u{0679}', '\u{0688}', '\u{0691}', '\u{06BA}', '\u{06D2}', '\u{06C1}', '\u{06BE}']) {
                "urdu"
            } else if has_any(&['\u{067E}', '\u{0686}', '\u{0698}', '\u{06AF}', '\u{06A9}', '\u{06CC}']) {
                "persian"
            } else {
                "arabic"
            }
        }
        Script::Hebrew => "hebrew",
        Script::Cyrillic => {
            if has_any(&['і', 'ї', 'є', 'ґ', 'І', 'Ї', 'Є', 'Ґ']) { "ukrainian" } else { "russian" }
        }
        Script::Greek => "greek",
        Script::Ethiopic => "amharic",
    }
}
