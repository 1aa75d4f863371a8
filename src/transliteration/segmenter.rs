/*!
 * Consonant-vowel segmentation of a romanized word.
 */

use super::profile::ScriptProfile;

/// One parsed syllable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    /// Romanized consonant spelling, if the syllable starts with one
    pub consonant: Option<&'static str>,
    /// Romanized vowel; empty for a bare consonant, "a" for the inherent vowel
    pub vowel: &'static str,
    /// Whether the vowel was actually typed
    pub has_explicit_vowel: bool,
}

impl Syllable {
    /// Consonant with neither a typed nor an inherent vowel
    pub fn is_bare(&self) -> bool {
        self.consonant.is_some() && self.vowel.is_empty()
    }
}

/// Output of the segmenter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Syllable(Syllable),
    /// Latin text with no table entry, kept verbatim
    Literal(String),
}

impl Segment {
    fn starts_with_consonant(&self) -> bool {
        matches!(self, Segment::Syllable(Syllable { consonant: Some(_), .. }))
    }
}

/// Split a lowercase ASCII word into syllables.
///
/// Consonants and vowels are matched greedily, longest spelling first. A
/// consonant followed by another consonant or by the end of the word is
/// bare; a consonant followed by an unmapped letter keeps the inherent "a".
pub fn segment(word: &str, profile: &ScriptProfile) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pos = 0;

    while pos < word.len() {
        let rest = &word[pos..];

        if let Some(consonant) = profile.match_consonant(rest) {
            pos += consonant.len();
            let after = &word[pos..];

            let syllable = if let Some(vowel) = profile.match_vowel(after) {
                pos += vowel.len();
                Syllable { consonant: Some(consonant), vowel, has_explicit_vowel: true }
            } else if after.is_empty() || profile.match_consonant(after).is_some() {
                Syllable { consonant: Some(consonant), vowel: "", has_explicit_vowel: false }
            } else {
                Syllable { consonant: Some(consonant), vowel: "a", has_explicit_vowel: false }
            };
            segments.push(Segment::Syllable(syllable));
        } else if let Some(vowel) = profile.match_vowel(rest) {
            pos += vowel.len();
            segments.push(Segment::Syllable(Syllable {
                consonant: None,
                vowel,
                has_explicit_vowel: true,
            }));
        } else {
            let len = rest.chars().next().map_or(1, char::len_utf8);
            let unmapped = &rest[..len];
            pos += len;
            match segments.last_mut() {
                Some(Segment::Literal(literal)) => literal.push_str(unmapped),
                _ => segments.push(Segment::Literal(unmapped.to_string())),
            }
        }
    }

    segments
}

/// Render segments with the profile's glyphs
pub fn render(segments: &[Segment], profile: &ScriptProfile) -> String {
    let mut out = String::new();

    for (index, segment) in segments.iter().enumerate() {
        let syllable = match segment {
            Segment::Literal(literal) => {
                out.push_str(literal);
                continue;
            }
            Segment::Syllable(syllable) => syllable,
        };

        let Some(consonant) = syllable.consonant else {
            out.push_str(profile.vowel(syllable.vowel).unwrap_or(syllable.vowel));
            continue;
        };

        out.push_str(profile.consonant(consonant).unwrap_or(consonant));

        if syllable.vowel.is_empty() {
            let next = segments.get(index + 1);
            let word_final = next.is_none();
            if word_final || next.is_some_and(Segment::starts_with_consonant) {
                out.push(profile.conjunct_marker());
            }
        } else {
            out.push_str(profile.vowel_sign(syllable.vowel).unwrap_or(syllable.vowel));
        }
    }

    out
}
