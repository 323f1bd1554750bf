use std::{collections::BTreeMap, fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

use crate::{
    constants::{
        BOUNDARY_SYMBOL, DEFAULT_SAMPLING_RATE, DEFAULT_VI_LANGUAGE_ID, DEFAULT_VI_TONE_START,
        UNKNOWN_SYMBOL,
    },
    errors::Result,
};

/// Host configuration shipped next to the exported acoustic model
/// (`tts_config.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    pub symbol_to_id: BTreeMap<String, i64>,
    /// Filled with the Vietnamese default when absent or empty.
    #[serde(default)]
    pub language_id_map: BTreeMap<String, i64>,
    #[serde(default)]
    pub language_tone_start_map: BTreeMap<String, i64>,
    #[serde(default = "default_sampling_rate")]
    pub sample_rate: u32,
    #[serde(default = "default_add_blank")]
    pub add_blank: bool,
    #[serde(default)]
    pub spk2id: BTreeMap<String, i64>,
    #[serde(default = "default_unknown_symbol")]
    pub unknown_symbol: String,
    #[serde(default = "default_boundary_symbol")]
    pub boundary_symbol: String,
    /// Extra multi-character keys the tokenizer may match whole, on top of
    /// the Vietnamese inventory and tied symbols.
    #[serde(default)]
    pub phoneme_symbols: Vec<String>,
}

fn default_language_id_map() -> BTreeMap<String, i64> {
    BTreeMap::from([("VI".to_string(), DEFAULT_VI_LANGUAGE_ID)])
}

fn default_language_tone_start_map() -> BTreeMap<String, i64> {
    BTreeMap::from([("VI".to_string(), DEFAULT_VI_TONE_START)])
}

const fn default_sampling_rate() -> u32 {
    DEFAULT_SAMPLING_RATE
}

const fn default_add_blank() -> bool {
    true
}

fn default_unknown_symbol() -> String {
    UNKNOWN_SYMBOL.to_string()
}

fn default_boundary_symbol() -> String {
    BOUNDARY_SYMBOL.to_string()
}

impl TtsConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let buf = fs::read_to_string(&path).with_context(|| {
            format!("failed to read TTS config from {}", path.as_ref().display())
        })?;
        Self::from_json_str(&buf).with_context(|| {
            format!(
                "failed to parse TTS config JSON at {}",
                path.as_ref().display()
            )
        })
    }

    pub fn from_json_str(buf: &str) -> Result<Self> {
        let mut config: TtsConfig = serde_json::from_str(buf)?;
        if config.symbol_to_id.is_empty() {
            tracing::warn!("TTS config has an empty symbol_to_id table");
        }
        if config.language_id_map.is_empty() {
            tracing::warn!("TTS config has no language_id_map, using VI = {DEFAULT_VI_LANGUAGE_ID}");
            config.language_id_map = default_language_id_map();
        }
        if config.language_tone_start_map.is_empty() {
            tracing::warn!(
                "TTS config has no language_tone_start_map, using VI = {DEFAULT_VI_TONE_START}"
            );
            config.language_tone_start_map = default_language_tone_start_map();
        }
        Ok(config)
    }
}
