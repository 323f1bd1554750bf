use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::TtsError;

/// Languages the frontend can phonemize. Text in any other language is
/// passed through the Vietnamese grammar and ends up out-of-vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    Vi,
}

impl Language {
    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Vi => "VI",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for Language {
    type Err = TtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "VI" => Ok(Language::Vi),
            _ => Err(TtsError::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Symbol that marks the start and end of every sequence.
pub const BOUNDARY_SYMBOL: &str = "_";
/// Symbol that absorbs anything the table cannot resolve.
pub const UNKNOWN_SYMBOL: &str = "UNK";
/// Phoneme id used for interleaved blank positions.
pub const BLANK_ID: i64 = 0;

pub const DEFAULT_VI_LANGUAGE_ID: i64 = 7;
pub const DEFAULT_VI_TONE_START: i64 = 16;
pub const DEFAULT_SAMPLING_RATE: u32 = 44100;

pub const BERT_HIDDEN: usize = 1024;
pub const JA_BERT_HIDDEN: usize = 768;
