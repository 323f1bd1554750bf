//! Grapheme tables for the Vietnamese syllable grammar (northern dialect).
//!
//! Keys are lower-case, NFC, with tone diacritics removed; vowel quality marks
//! (ă â ê ô ơ ư) and đ are kept. Tone is read separately from the original
//! spelling, so one key covers all six tonal variants.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Onset of `qu-`. Behaves as one unit: it never takes a second rounding glide.
pub const ROUNDED_K: &str = "kw";
/// Rounding glide folded into the onset by on-glide nuclei.
pub const ROUNDING_GLIDE: &str = "w";
/// Onset that `gi` takes when followed directly by a coda (`gìn`, `gin`).
pub const GI_FRICATIVE: &str = "z";

pub const PALATAL_NASAL: &str = "ɲ";
pub const VELAR_NASAL: &str = "ŋ";
pub const VELAR_STOP: &str = "k";
pub const LABIO_VELAR_NASAL: &str = "ŋ\u{361}m";
pub const LABIO_VELAR_STOP: &str = "k\u{361}p";

pub const MAX_ONSET_GRAPHEMES: usize = 3;
pub const MAX_CODA_GRAPHEMES: usize = 2;

pub static ONSETS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("b", "ɓ"),
        ("c", "k"),
        ("ch", "c"),
        ("d", "z"),
        ("đ", "ɗ"),
        ("g", "ɣ"),
        ("gh", "ɣ"),
        ("gi", "z"),
        ("h", "h"),
        ("k", "k"),
        ("kh", "x"),
        ("l", "l"),
        ("m", "m"),
        ("n", "n"),
        ("ng", "ŋ"),
        ("ngh", "ŋ"),
        ("nh", "ɲ"),
        ("p", "p"),
        ("ph", "f"),
        ("qu", ROUNDED_K),
        ("r", "ʐ"),
        ("s", "ʂ"),
        ("t", "t"),
        ("th", "tʰ"),
        ("tr", "ʈ"),
        ("v", "v"),
        ("x", "s"),
    ])
});

pub static CODAS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("c", "k"),
        ("ch", "k"),
        ("m", "m"),
        ("n", "n"),
        ("ng", "ŋ"),
        ("nh", "ɲ"),
        ("p", "p"),
        ("t", "t"),
    ])
});

pub static NUCLEI: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("a", "a"),
        ("ă", "ă"),
        ("â", "ɤ\u{306}"),
        ("e", "ɛ"),
        ("ê", "e"),
        ("i", "i"),
        ("o", "ɔ"),
        ("ô", "o"),
        ("ơ", "ɤ"),
        ("u", "u"),
        ("ư", "ɯ"),
        ("y", "i"),
        ("ia", "iə"),
        ("iê", "iə"),
        ("ya", "iə"),
        ("yê", "iə"),
        ("ua", "uə"),
        ("uô", "uə"),
        ("ưa", "ɯə"),
        ("ươ", "ɯə"),
        ("oo", "ɔ"),
        ("ôô", "o"),
    ])
});

/// Nuclei spelled with a leading rounding glide (`hoa`, `tuy`, `huyền`).
pub static ONGLIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("oa", "a"),
        ("oă", "ă"),
        ("oe", "ɛ"),
        ("uâ", "ɤ\u{306}"),
        ("uê", "e"),
        ("uơ", "ɤ"),
        ("uy", "i"),
        ("uya", "iə"),
        ("uyê", "iə"),
    ])
});

/// Nuclei spelled with a trailing semivowel; its last phoneme becomes the coda.
pub static OFFGLIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ai", "aj"),
        ("ao", "aw"),
        ("au", "ăw"),
        ("ay", "ăj"),
        ("âu", "ɤ\u{306}w"),
        ("ây", "ɤ\u{306}j"),
        ("eo", "ɛw"),
        ("êu", "ew"),
        ("iu", "iw"),
        ("oi", "ɔj"),
        ("ôi", "oj"),
        ("ơi", "ɤj"),
        ("ui", "uj"),
        ("ưi", "ɯj"),
        ("ưu", "ɯw"),
        ("iêu", "iəw"),
        ("yêu", "iəw"),
        ("uôi", "uəj"),
        ("ươi", "ɯəj"),
        ("ươu", "ɯəw"),
    ])
});

/// Triphthong spellings carrying both a rounding on-glide and an off-glide.
pub static ONOFFGLIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("oai", "aj"),
        ("oay", "ăj"),
        ("oao", "aw"),
        ("oeo", "ɛw"),
        ("uây", "ɤ\u{306}j"),
        ("uyu", "iw"),
    ])
});

/// Whole words the onset/nucleus split cannot produce: bare `gi` (and its
/// tonal variants) is read as /zi/.
pub static SPECIAL_WORDS: Lazy<HashMap<&'static str, (&'static str, &'static str)>> =
    Lazy::new(|| HashMap::from([("gi", (GI_FRICATIVE, "i"))]));

/// The `i` spellings that trigger the `gi` + coda reading. The hỏi variant
/// `ỉ` is deliberately absent.
pub const GI_VOWELS: [char; 5] = ['i', 'í', 'ì', 'ị', 'ĩ'];
