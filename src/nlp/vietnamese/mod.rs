//! Northern Vietnamese grapheme-to-phoneme conversion.

pub mod allophony;
pub mod normalizer;
pub mod numbers;
pub mod segmenter;
pub mod syllable;
pub mod tables;
pub mod tone;

pub use normalizer::normalize_text;
pub use segmenter::{Token, segment};
pub use syllable::{Analysis, Syllable, analyze};
pub use tone::Tone;
