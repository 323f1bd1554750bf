//! Vietnamese text frontend for VITS-family acoustic models: normalizes
//! text, decomposes syllables, and assembles the phone, tone and language
//! id sequences the text encoder consumes.

pub mod config;
pub mod constants;
pub mod errors;
pub mod frontend;
pub mod lexicon;
pub mod model;
pub mod nlp;
pub mod sequence;

pub use config::TtsConfig;
pub use constants::Language;
pub use errors::{Result, TtsError};
pub use frontend::{Report, VietnameseFrontend, phonemize};
pub use lexicon::Lexicon;
pub use model::EncoderInputs;
pub use sequence::PhonemeSequence;
