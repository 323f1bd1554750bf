use serde::Serialize;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use super::{
    allophony,
    tables::{
        CODAS, GI_FRICATIVE, GI_VOWELS, MAX_CODA_GRAPHEMES, MAX_ONSET_GRAPHEMES, NUCLEI,
        OFFGLIDES, ONGLIDES, ONOFFGLIDES, ONSETS, ROUNDED_K, ROUNDING_GLIDE, SPECIAL_WORDS,
    },
    tone::{Tone, strip_tones},
};

/// A fully resolved syllable. Unresolvable words never become a `Syllable`;
/// they are reported as [`Analysis::OutOfVocabulary`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Syllable {
    pub onset: String,
    pub nucleus: String,
    pub coda: String,
    pub tone: Tone,
    /// Graphemes the coda spelling consumed; 0 when the coda came from a glide.
    #[serde(skip)]
    pub coda_graphemes: usize,
}

impl Syllable {
    pub fn ipa(&self) -> String {
        let mut out =
            String::with_capacity(self.onset.len() + self.nucleus.len() + self.coda.len());
        out.push_str(&self.onset);
        out.push_str(&self.nucleus);
        out.push_str(&self.coda);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    Resolved(Syllable),
    OutOfVocabulary { word: String },
}

impl Analysis {
    /// Phonetic form for resolved syllables, the bracketed word otherwise.
    pub fn render(&self) -> String {
        match self {
            Analysis::Resolved(syllable) => syllable.ipa(),
            Analysis::OutOfVocabulary { word } => format!("[{word}]"),
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Analysis::Resolved(syllable) => syllable.tone,
            Analysis::OutOfVocabulary { .. } => Tone::Ngang,
        }
    }

    pub fn is_out_of_vocabulary(&self) -> bool {
        matches!(self, Analysis::OutOfVocabulary { .. })
    }
}

/// How the material between onset and coda was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// `gi` followed directly by a coda: onset becomes /z/, nucleus /i/.
    GiBeforeCoda,
    Nucleus(&'static str),
    /// On-glide; the rounding glide joins the onset.
    Onglide(&'static str),
    /// On-glide after `qu`, which already carries the rounding.
    RoundedOnglide(&'static str),
    /// Triphthong; the final phoneme replaces any spelled coda.
    OnoffglideWithCodaOverride(&'static str),
    /// Off-glide; the final phoneme replaces any spelled coda.
    Offglide(&'static str),
    SpecialWord {
        onset: &'static str,
        nucleus: &'static str,
    },
    OutOfVocabulary,
}

/// Longest onset spelling at the start of `chars`, tried 3 → 2 → 1.
pub fn match_onset(chars: &[char]) -> Option<(&'static str, usize)> {
    (1..=MAX_ONSET_GRAPHEMES.min(chars.len()))
        .rev()
        .find_map(|len| {
            let prefix: String = chars[..len].iter().collect();
            ONSETS.get(prefix.as_str()).map(|&ipa| (ipa, len))
        })
}

/// Longest coda spelling at the end of `chars`, tried 2 → 1.
pub fn match_coda(chars: &[char]) -> Option<(&'static str, usize)> {
    (1..=MAX_CODA_GRAPHEMES.min(chars.len()))
        .rev()
        .find_map(|len| {
            let suffix: String = chars[chars.len() - len..].iter().collect();
            CODAS.get(suffix.as_str()).map(|&ipa| (ipa, len))
        })
}

fn is_gi_before_coda(lower: &[char], has_coda: bool) -> bool {
    has_coda && lower.len() == 3 && lower[0] == 'g' && GI_VOWELS.contains(&lower[1])
}

/// Picks the reading for the nucleus spelling, first match wins.
pub fn resolve_nucleus(
    lower: &[char],
    stripped_word: &str,
    onset: &str,
    nucleus: &str,
    has_coda: bool,
) -> Resolution {
    if is_gi_before_coda(lower, has_coda) {
        return Resolution::GiBeforeCoda;
    }
    if let Some(&ipa) = NUCLEI.get(nucleus) {
        return Resolution::Nucleus(ipa);
    }
    if let Some(&ipa) = ONGLIDES.get(nucleus) {
        return if onset == ROUNDED_K {
            Resolution::RoundedOnglide(ipa)
        } else {
            Resolution::Onglide(ipa)
        };
    }
    if let Some(&ipa) = ONOFFGLIDES.get(nucleus) {
        return Resolution::OnoffglideWithCodaOverride(ipa);
    }
    if let Some(&ipa) = OFFGLIDES.get(nucleus) {
        return Resolution::Offglide(ipa);
    }
    if let Some(&(onset, nucleus)) = SPECIAL_WORDS.get(stripped_word) {
        return Resolution::SpecialWord { onset, nucleus };
    }
    Resolution::OutOfVocabulary
}

fn round_onset(onset: &str) -> String {
    if onset == ROUNDED_K {
        onset.to_string()
    } else {
        format!("{onset}{ROUNDING_GLIDE}")
    }
}

/// Splits a glide value into (nucleus, coda) by peeling off the last phoneme.
fn peel_glide(value: &str) -> (String, String) {
    let mut chars: Vec<char> = value.chars().collect();
    let coda = chars.pop().map(String::from).unwrap_or_default();
    (chars.into_iter().collect(), coda)
}

/// Decomposes one cleaned word into onset, nucleus, coda and tone, then
/// applies the allophonic rewrites.
pub fn analyze(word: &str) -> Analysis {
    let lower: String = word.nfc().collect::<String>().to_lowercase();
    let lower_chars: Vec<char> = lower.chars().collect();
    let tone = Tone::extract(&lower);
    let stripped = strip_tones(&lower);
    let chars: Vec<char> = stripped.chars().collect();

    let (onset, onset_len) = match_onset(&chars).unwrap_or(("", 0));
    let rest = &chars[onset_len..];
    let (coda, coda_len) = match_coda(rest).unwrap_or(("", 0));
    let nucleus: String = rest[..rest.len() - coda_len].iter().collect();

    let resolution = resolve_nucleus(&lower_chars, &stripped, onset, &nucleus, coda_len > 0);
    let mut syllable = Syllable {
        onset: onset.to_string(),
        nucleus: String::new(),
        coda: coda.to_string(),
        tone,
        coda_graphemes: coda_len,
    };

    match resolution {
        Resolution::GiBeforeCoda => {
            syllable.onset = GI_FRICATIVE.to_string();
            syllable.nucleus = "i".to_string();
        }
        Resolution::Nucleus(ipa) | Resolution::RoundedOnglide(ipa) => {
            syllable.nucleus = ipa.to_string();
        }
        Resolution::Onglide(ipa) => {
            syllable.onset = round_onset(onset);
            syllable.nucleus = ipa.to_string();
        }
        Resolution::OnoffglideWithCodaOverride(value) => {
            let (nucleus, coda) = peel_glide(value);
            syllable.onset = round_onset(onset);
            syllable.nucleus = nucleus;
            syllable.coda = coda;
            syllable.coda_graphemes = 0;
        }
        Resolution::Offglide(value) => {
            let (nucleus, coda) = peel_glide(value);
            syllable.nucleus = nucleus;
            syllable.coda = coda;
            syllable.coda_graphemes = 0;
        }
        Resolution::SpecialWord { onset, nucleus } => {
            syllable.onset = onset.to_string();
            syllable.nucleus = nucleus.to_string();
        }
        Resolution::OutOfVocabulary => {
            debug!("'{word}' is outside the syllable grammar");
            return Analysis::OutOfVocabulary {
                word: word.to_string(),
            };
        }
    }

    allophony::apply(&mut syllable);
    Analysis::Resolved(syllable)
}
