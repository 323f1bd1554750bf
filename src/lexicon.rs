use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::{
    config::TtsConfig,
    constants::{BOUNDARY_SYMBOL, Language, UNKNOWN_SYMBOL},
    errors::{Result, TtsError},
    nlp::{LANGUAGE_ID_MAP, LANGUAGE_TONE_START_MAP, SYMBOL_ID_MAP, VI_SYMBOLS},
};

/// Read-only symbol table and language settings shared by every call.
///
/// Built once by the host and then only borrowed; nothing in the frontend
/// mutates it, so one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Lexicon {
    symbol_to_id: HashMap<String, i64>,
    phoneme_keys: HashSet<String>,
    unknown_id: i64,
    boundary_id: i64,
    language: Language,
    language_id: i64,
    tone_start: i64,
    add_blank: bool,
}

impl Lexicon {
    /// Lexicon matching the symbol inventory the released checkpoints were
    /// trained with.
    pub fn builtin() -> Self {
        let code = Language::Vi.as_code();
        let symbol_to_id: HashMap<String, i64> = SYMBOL_ID_MAP
            .iter()
            .map(|(&symbol, &id)| (symbol.to_string(), id as i64))
            .collect();
        Self {
            phoneme_keys: default_phoneme_keys(&symbol_to_id),
            symbol_to_id,
            unknown_id: SYMBOL_ID_MAP[UNKNOWN_SYMBOL] as i64,
            boundary_id: SYMBOL_ID_MAP[BOUNDARY_SYMBOL] as i64,
            language: Language::Vi,
            language_id: LANGUAGE_ID_MAP[code] as i64,
            tone_start: LANGUAGE_TONE_START_MAP[code] as i64,
            add_blank: true,
        }
    }

    pub fn from_config(config: &TtsConfig, language: Language) -> Result<Self> {
        let code = language.as_code();
        let language_id = *config.language_id_map.get(code).ok_or_else(|| {
            TtsError::Config(format!("language_id_map has no entry for {code}"))
        })?;
        let tone_start = *config.language_tone_start_map.get(code).ok_or_else(|| {
            TtsError::Config(format!("language_tone_start_map has no entry for {code}"))
        })?;

        let lexicon = Self::new(
            config
                .symbol_to_id
                .iter()
                .map(|(symbol, &id)| (symbol.clone(), id))
                .collect(),
            &config.unknown_symbol,
            &config.boundary_symbol,
            language,
            language_id,
            tone_start,
        )?
        .with_phoneme_keys(config.phoneme_symbols.iter().cloned())
        .with_add_blank(config.add_blank);

        info!(
            symbols = lexicon.len(),
            unknown_id = lexicon.unknown_id,
            boundary_id = lexicon.boundary_id,
            language_id,
            tone_start,
            "loaded lexicon for {language}"
        );
        Ok(lexicon)
    }

    /// Validates the reserved entries every downstream id depends on.
    pub fn new(
        symbol_to_id: HashMap<String, i64>,
        unknown_symbol: &str,
        boundary_symbol: &str,
        language: Language,
        language_id: i64,
        tone_start: i64,
    ) -> Result<Self> {
        let unknown_id = *symbol_to_id.get(unknown_symbol).ok_or_else(|| {
            TtsError::Config(format!("symbol table has no unknown entry '{unknown_symbol}'"))
        })?;
        let boundary_id = *symbol_to_id.get(boundary_symbol).ok_or_else(|| {
            TtsError::Config(format!(
                "symbol table has no boundary entry '{boundary_symbol}'"
            ))
        })?;
        if unknown_id == boundary_id {
            return Err(TtsError::Config(format!(
                "unknown and boundary symbols share id {unknown_id}"
            )));
        }
        if let Some((symbol, _)) = symbol_to_id
            .iter()
            .find(|(symbol, id)| **id == boundary_id && symbol.as_str() != boundary_symbol)
        {
            return Err(TtsError::Config(format!(
                "symbol '{symbol}' reuses boundary id {boundary_id}"
            )));
        }
        if tone_start < 0 {
            return Err(TtsError::Config(format!(
                "tone start offset must not be negative, got {tone_start}"
            )));
        }

        Ok(Self {
            phoneme_keys: default_phoneme_keys(&symbol_to_id),
            symbol_to_id,
            unknown_id,
            boundary_id,
            language,
            language_id,
            tone_start,
            add_blank: true,
        })
    }

    /// Adds multi-character keys that the tokenizer may match whole. Keys
    /// missing from the symbol table are ignored.
    pub fn with_phoneme_keys(mut self, keys: impl IntoIterator<Item = String>) -> Self {
        for key in keys {
            if key.chars().count() > 1 && self.symbol_to_id.contains_key(&key) {
                self.phoneme_keys.insert(key);
            }
        }
        self
    }

    pub fn with_add_blank(mut self, add_blank: bool) -> Self {
        self.add_blank = add_blank;
        self
    }

    pub fn symbol_id(&self, symbol: &str) -> Option<i64> {
        self.symbol_to_id.get(symbol).copied()
    }

    /// Whether a multi-character string is a phoneme the tokenizer matches
    /// as one unit.
    pub fn is_phoneme_key(&self, candidate: &str) -> bool {
        self.phoneme_keys.contains(candidate)
    }

    pub fn unknown_id(&self) -> i64 {
        self.unknown_id
    }

    pub fn boundary_id(&self) -> i64 {
        self.boundary_id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn language_id(&self) -> i64 {
        self.language_id
    }

    pub fn tone_start(&self) -> i64 {
        self.tone_start
    }

    pub fn add_blank(&self) -> bool {
        self.add_blank
    }

    pub fn len(&self) -> usize {
        self.symbol_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol_to_id.is_empty()
    }
}

/// Multi-character Vietnamese phonemes plus any tied symbol in the table.
///
/// Other languages' multi-letter symbols (`in`, `ang`, `sh`, ...) share the
/// table but must not capture Vietnamese letter sequences.
fn default_phoneme_keys(symbol_to_id: &HashMap<String, i64>) -> HashSet<String> {
    VI_SYMBOLS
        .iter()
        .map(|symbol| symbol.to_string())
        .chain(
            symbol_to_id
                .keys()
                .filter(|key| key.contains(TIE_BAR))
                .cloned(),
        )
        .filter(|key| key.chars().count() > 1 && symbol_to_id.contains_key(key))
        .collect()
}

const TIE_BAR: char = '\u{361}';
