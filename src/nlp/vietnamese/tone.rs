use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

/// The six Vietnamese tones, numbered by their orthographic level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// No diacritic.
    #[default]
    Ngang,
    /// Grave accent.
    Huyen,
    /// Tilde.
    Nga,
    /// Hook above.
    Hoi,
    /// Acute accent.
    Sac,
    /// Dot below.
    Nang,
}

impl Tone {
    pub fn from_mark(mark: char) -> Option<Self> {
        match mark {
            '\u{300}' => Some(Tone::Huyen),
            '\u{303}' => Some(Tone::Nga),
            '\u{309}' => Some(Tone::Hoi),
            '\u{301}' => Some(Tone::Sac),
            '\u{323}' => Some(Tone::Nang),
            _ => None,
        }
    }

    /// Tone carried by a single (possibly precomposed) character.
    pub fn of_char(ch: char) -> Option<Self> {
        std::iter::once(ch).nfd().find_map(Tone::from_mark)
    }

    /// First tone-bearing character wins; a word without one is level.
    pub fn extract(word: &str) -> Self {
        word.chars().find_map(Tone::of_char).unwrap_or_default()
    }

    pub fn level(&self) -> u8 {
        match self {
            Tone::Ngang => 1,
            Tone::Huyen => 2,
            Tone::Nga => 3,
            Tone::Hoi => 4,
            Tone::Sac => 5,
            Tone::Nang => 6,
        }
    }

    /// Tone id inside the Vietnamese block of the acoustic model's tone
    /// embedding, before the language offset is added.
    pub fn model_id(&self) -> i64 {
        match self {
            Tone::Ngang => 0,
            Tone::Sac => 1,
            Tone::Huyen => 2,
            Tone::Nga => 3,
            Tone::Hoi => 4,
            Tone::Nang => 5,
        }
    }
}

/// Removes tone diacritics, keeping vowel quality marks: `nghiệp` → `nghiêp`.
pub fn strip_tones(word: &str) -> String {
    word.nfd()
        .filter(|&c| Tone::from_mark(c).is_none())
        .nfc()
        .collect()
}
