use serde::Serialize;

use crate::{constants::BLANK_ID, lexicon::Lexicon};

/// Model-ready id sequences. All three id vectors always have the same
/// length, and `word2ph` sums to that length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhonemeSequence {
    pub phone_ids: Vec<i64>,
    pub tone_ids: Vec<i64>,
    pub language_ids: Vec<i64>,
    pub word2ph: Vec<usize>,
}

impl PhonemeSequence {
    pub fn len(&self) -> usize {
        self.phone_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phone_ids.is_empty()
    }
}

/// Collects per-segment ids in order and produces the final sequence.
///
/// Tones are pushed as raw model tone ids; the language offset is added in
/// [`SequenceAssembler::finish`].
pub struct SequenceAssembler<'a> {
    lexicon: &'a Lexicon,
    phone_ids: Vec<i64>,
    tones: Vec<i64>,
    word2ph: Vec<usize>,
    segments: usize,
}

impl<'a> SequenceAssembler<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            phone_ids: vec![lexicon.boundary_id()],
            tones: vec![0],
            word2ph: vec![1],
            segments: 0,
        }
    }

    /// Appends one word or punctuation segment; every id in it shares `tone`.
    pub fn push_segment(&mut self, phone_ids: &[i64], tone: i64) {
        self.phone_ids.extend_from_slice(phone_ids);
        self.tones.extend(std::iter::repeat_n(tone, phone_ids.len()));
        self.word2ph.push(phone_ids.len());
        self.segments += 1;
    }

    /// Closes the sequence with a boundary, offsets tones and interleaves
    /// blanks when the lexicon asks for them. Blanks must stay last.
    ///
    /// Input without segments yields the lone opening boundary.
    pub fn finish(mut self) -> PhonemeSequence {
        if self.segments > 0 {
            self.phone_ids.push(self.lexicon.boundary_id());
            self.tones.push(0);
            self.word2ph.push(1);
        }

        let tone_start = self.lexicon.tone_start();
        let language_id = self.lexicon.language_id();
        let mut tone_ids: Vec<i64> = self.tones.iter().map(|tone| tone + tone_start).collect();
        let mut language_ids = vec![language_id; self.phone_ids.len()];
        let mut phone_ids = self.phone_ids;
        let mut word2ph = self.word2ph;

        if self.lexicon.add_blank() {
            phone_ids = intersperse(&phone_ids, BLANK_ID);
            tone_ids = intersperse(&tone_ids, 0);
            language_ids = intersperse(&language_ids, language_id);
            for val in &mut word2ph {
                *val *= 2;
            }
            if let Some(first) = word2ph.first_mut() {
                *first += 1;
            }
        }

        PhonemeSequence {
            phone_ids,
            tone_ids,
            language_ids,
            word2ph,
        }
    }
}

/// `[a, b]` → `[blank, a, blank, b, blank]`.
pub fn intersperse(values: &[i64], blank: i64) -> Vec<i64> {
    let mut result = Vec::with_capacity(values.len() * 2 + 1);
    for value in values {
        result.push(blank);
        result.push(*value);
    }
    result.push(blank);
    result
}
