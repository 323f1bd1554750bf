pub mod tokenizer;
pub mod vietnamese;

use std::collections::HashMap;

use once_cell::sync::Lazy;

pub const PUNCTUATIONS: [&str; 9] = ["!", "?", "…", ",", ".", "'", "-", "¿", "¡"];
pub const PAD: &str = "_";

/// Symbol inventory the acoustic model was trained with: pad, the sorted
/// union of every language's symbols, then punctuation with `SP`/`UNK`.
pub static SYMBOLS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let punctuation_symbols = {
        let mut v = PUNCTUATIONS.to_vec();
        v.extend(["SP", "UNK"]);
        v
    };
    let mut normal = ZH_SYMBOLS.to_vec();
    for list in [
        JP_SYMBOLS, EN_SYMBOLS, KR_SYMBOLS, ES_SYMBOLS, FR_SYMBOLS, DE_SYMBOLS, RU_SYMBOLS,
        VI_SYMBOLS,
    ] {
        normal.extend(list);
    }
    normal.sort();
    normal.dedup();
    let mut symbols = Vec::with_capacity(1 + normal.len() + punctuation_symbols.len());
    symbols.push(PAD);
    symbols.extend(normal);
    symbols.extend(punctuation_symbols);
    symbols
});

pub static SYMBOL_ID_MAP: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    SYMBOLS
        .iter()
        .enumerate()
        .map(|(idx, &symbol)| (symbol, idx))
        .collect()
});

pub static LANGUAGE_ID_MAP: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    HashMap::from_iter([
        ("ZH", 0usize),
        ("JP", 1),
        ("EN", 2),
        ("ZH_MIX_EN", 3),
        ("KR", 4),
        ("ES", 5),
        ("SP", 5),
        ("FR", 6),
        ("VI", 7),
    ])
});

pub static LANGUAGE_TONE_START_MAP: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    let es = NUM_ZH_TONES + NUM_JP_TONES + NUM_EN_TONES + NUM_KR_TONES;
    HashMap::from_iter([
        ("ZH", 0usize),
        ("ZH_MIX_EN", 0),
        ("JP", NUM_ZH_TONES),
        ("EN", NUM_ZH_TONES + NUM_JP_TONES),
        ("KR", NUM_ZH_TONES + NUM_JP_TONES + NUM_EN_TONES),
        ("ES", es),
        ("SP", es),
        ("FR", es + NUM_ES_TONES),
        (
            "VI",
            es + NUM_ES_TONES + NUM_FR_TONES + NUM_DE_TONES + NUM_RU_TONES,
        ),
    ])
});

pub const NUM_ZH_TONES: usize = 6;
pub const NUM_JP_TONES: usize = 1;
pub const NUM_EN_TONES: usize = 4;
pub const NUM_KR_TONES: usize = 1;
pub const NUM_ES_TONES: usize = 1;
pub const NUM_FR_TONES: usize = 1;
pub const NUM_DE_TONES: usize = 1;
pub const NUM_RU_TONES: usize = 1;
// 6 lexical tones, the neutral slot and one spare kept for checkpoint compatibility.
pub const NUM_VI_TONES: usize = 8;
pub const NUM_TONES: usize = NUM_ZH_TONES
    + NUM_JP_TONES
    + NUM_EN_TONES
    + NUM_KR_TONES
    + NUM_ES_TONES
    + NUM_FR_TONES
    + NUM_DE_TONES
    + NUM_RU_TONES
    + NUM_VI_TONES;

pub static ZH_SYMBOLS: &[&str] = &[
    "E", "En", "a", "ai", "an", "ang", "ao", "b", "c", "ch", "d", "e", "ei", "en", "eng", "er",
    "f", "g", "h", "i", "i0", "ia", "ian", "iang", "iao", "ie", "in", "ing", "iong", "ir", "iu",
    "j", "k", "l", "m", "n", "o", "ong", "ou", "p", "q", "r", "s", "sh", "t", "u", "ua", "uai",
    "uan", "uang", "ui", "un", "uo", "v", "van", "ve", "vn", "w", "x", "y", "z", "zh", "AA",
    "EE", "OO",
];

pub static JP_SYMBOLS: &[&str] = &[
    "N", "a", "a:", "b", "by", "ch", "d", "dy", "e", "e:", "f", "g", "gy", "h", "hy", "i", "i:",
    "j", "k", "ky", "m", "my", "n", "ny", "o", "o:", "p", "py", "q", "r", "ry", "s", "sh", "t",
    "ts", "ty", "u", "u:", "w", "y", "z", "zy",
];

pub static EN_SYMBOLS: &[&str] = &[
    "aa", "ae", "ah", "ao", "aw", "ay", "b", "ch", "d", "dh", "eh", "er", "ey", "f", "g", "hh",
    "ih", "iy", "jh", "k", "l", "m", "n", "ng", "ow", "oy", "p", "r", "s", "sh", "t", "th",
    "uh", "uw", "V", "w", "y", "z", "zh",
];

pub static KR_SYMBOLS: &[&str] = &[
    "ᄌ", "ᅥ", "ᆫ", "ᅦ", "ᄋ", "ᅵ", "ᄅ", "ᅴ", "ᄀ", "ᅡ", "ᄎ", "ᅪ", "ᄑ", "ᅩ", "ᄐ", "ᄃ", "ᅢ", "ᅮ",
    "ᆼ", "ᅳ", "ᄒ", "ᄆ", "ᆯ", "ᆷ", "ᄂ", "ᄇ", "ᄉ", "ᆮ", "ᄁ", "ᅬ", "ᅣ", "ᄄ", "ᆨ", "ᄍ", "ᅧ", "ᄏ",
    "ᆸ", "ᅭ", "(", "ᄊ", ")", "ᅲ", "ᅨ", "ᄈ", "ᅱ", "ᅯ", "ᅫ", "ᅰ", "ᅤ", "~", "\\", "[", "]", "/",
    "^", ":", "ㄸ", "*",
];

pub static ES_SYMBOLS: &[&str] = &[
    "N", "Q", "a", "b", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "s",
    "t", "u", "v", "w", "x", "y", "z", "ɑ", "æ", "ʃ", "ʑ", "ç", "ɯ", "ɪ", "ɔ", "ɛ", "ɹ", "ð",
    "ə", "ɫ", "ɥ", "ɸ", "ʊ", "ɾ", "ʒ", "θ", "β", "ŋ", "ɦ", "ɡ", "r", "ɲ", "ʝ", "ɣ", "ʎ", "ˈ",
    "ˌ", "ː",
];

pub static FR_SYMBOLS: &[&str] = &[
    "\u{0303}", "œ", "ø", "ʁ", "ɒ", "ʌ", "ɜ", "ɐ",
];

pub static DE_SYMBOLS: &[&str] = &[
    "ʏ", "\u{0329}",
];

pub static RU_SYMBOLS: &[&str] = &[
    "ɭ", "ʲ", "ɕ", "\"", "ɵ", "^", "ɬ",
];

pub static VI_SYMBOLS: &[&str] = &[
    "ʈ", "ɖ", "ɗ", "ɓ", "ʰ", "ă", "ʷ", "\u{0306}", "\u{0361}", "ʤ", "ʧ", "т", "輪", "и", "л",
    "р", "µ", "ʂ", "ʐ", "ʔ", "ɣ", "tʰ", "kʰ", "kw", "tʃ", "ɹ", "ɤ", "ɐ", "ɑ", "ɨ", "ʉ", "ɜ",
    "əː", "aː", "ɜː", "ɑː", "ɔː", "iː", "uː", "eː", "oː", "iə", "ɨə", "uə", "ˑ", "\u{032a}",
    "˥", "˩", "˧", "˨", "˦", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "$", "%", "&",
    "«", "»", "–", "ı", "wʷ", "#", "ô", "ʃ", "ʒ", "θ", "ð", "æ", "ɪ", "ʊ", "ẩ", "ò", "à", "á",
    "ủ", "ờ", "ộ", "ả", "ó", "é", "ê", "ồ", "ấ", "ú", "ế", "ớ", "ì", "ọ", "ố", "ư", "ữ",
];
