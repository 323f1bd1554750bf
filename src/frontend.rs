use std::sync::Arc;

use serde::Serialize;

use crate::{
    lexicon::Lexicon,
    nlp::{
        tokenizer::tokenize,
        vietnamese::{Analysis, Token, analyze, normalize_text, segment},
    },
    sequence::{PhonemeSequence, SequenceAssembler},
};

/// Tone id (before the language offset) for punctuation and unknown words.
const NEUTRAL_TONE: i64 = 0;

/// Entry point shared by every host: text in, model ids out.
///
/// Cheap to clone; clones share one [`Lexicon`].
#[derive(Debug, Clone)]
pub struct VietnameseFrontend {
    lexicon: Arc<Lexicon>,
}

impl VietnameseFrontend {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn builtin() -> Self {
        Self::new(Arc::new(Lexicon::builtin()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Phonemizes text as written, without normalization.
    pub fn phonemize(&self, text: &str) -> PhonemeSequence {
        phonemize(&self.lexicon, text)
    }

    /// Normalizes numbers, dates and symbols first, then phonemizes.
    pub fn process(&self, text: &str) -> PhonemeSequence {
        phonemize(&self.lexicon, &normalize_text(text))
    }

    /// Per-segment breakdown alongside the final sequence.
    pub fn report(&self, text: &str, normalize: bool) -> Report {
        let normalized = normalize.then(|| normalize_text(text));
        let source = normalized.as_deref().unwrap_or(text);
        let segments: Vec<SegmentReport> = segment(source)
            .map(|token| resolve_token(&self.lexicon, token))
            .collect();

        let mut assembler = SequenceAssembler::new(&self.lexicon);
        for seg in &segments {
            assembler.push_segment(&seg.phone_ids, seg.tone_id);
        }

        Report {
            text: text.to_string(),
            normalized,
            segments,
            sequence: assembler.finish(),
        }
    }
}

/// Diagnostic view of one call.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<SegmentReport>,
    pub sequence: PhonemeSequence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Word,
    Punctuation,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentReport {
    pub text: String,
    pub kind: SegmentKind,
    /// Phonetic form; out-of-vocabulary words show as `[word]`.
    pub ipa: String,
    /// Orthographic tone level 1..=6, words only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_level: Option<u8>,
    pub out_of_vocabulary: bool,
    pub phone_ids: Vec<i64>,
    pub tone_id: i64,
}

/// Pure text → ids transform over a borrowed lexicon.
pub fn phonemize(lexicon: &Lexicon, text: &str) -> PhonemeSequence {
    let mut assembler = SequenceAssembler::new(lexicon);
    for token in segment(text) {
        let seg = resolve_token(lexicon, token);
        assembler.push_segment(&seg.phone_ids, seg.tone_id);
    }
    assembler.finish()
}

fn resolve_token(lexicon: &Lexicon, token: Token<'_>) -> SegmentReport {
    match token {
        Token::Word(word) => {
            let analysis = analyze(word);
            let ipa = analysis.render();
            let (phone_ids, tone_id) = match &analysis {
                Analysis::Resolved(syllable) => (tokenize(&ipa, lexicon), syllable.tone.model_id()),
                Analysis::OutOfVocabulary { .. } => (vec![lexicon.unknown_id()], NEUTRAL_TONE),
            };
            SegmentReport {
                text: word.to_string(),
                kind: SegmentKind::Word,
                ipa,
                tone_level: Some(analysis.tone().level()),
                out_of_vocabulary: analysis.is_out_of_vocabulary(),
                phone_ids,
                tone_id,
            }
        }
        Token::Punctuation(mark) => {
            let text = mark.to_string();
            SegmentReport {
                phone_ids: tokenize(&text, lexicon),
                ipa: text.clone(),
                text,
                kind: SegmentKind::Punctuation,
                tone_level: None,
                out_of_vocabulary: false,
                tone_id: NEUTRAL_TONE,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [&str; 6] = [
        "xin chào",
        "Việt Nam, đất nước tôi!",
        "ngân hàng quốc tế (không) nghiệp vụ",
        "hello world ng",
        "  ... ",
        "Người ta khuấy đường; gì cũng được?",
    ];

    fn bare() -> Lexicon {
        Lexicon::builtin().with_add_blank(false)
    }

    #[test]
    fn id_vectors_always_have_equal_length() {
        let frontend = VietnameseFrontend::builtin();
        for text in SAMPLES {
            let seq = frontend.phonemize(text);
            assert_eq!(seq.phone_ids.len(), seq.tone_ids.len(), "{text}");
            assert_eq!(seq.phone_ids.len(), seq.language_ids.len(), "{text}");
            assert_eq!(seq.word2ph.iter().sum::<usize>(), seq.len(), "{text}");
        }
    }

    #[test]
    fn blanks_give_twice_plus_one() {
        let bare = bare();
        let blanked = Lexicon::builtin();
        for text in SAMPLES {
            let n = phonemize(&bare, text).len();
            assert_eq!(phonemize(&blanked, text).len(), 2 * n + 1, "{text}");
        }
    }

    #[test]
    fn real_positions_carry_offset_tones() {
        let lexicon = Lexicon::builtin();
        let start = lexicon.tone_start();
        for text in SAMPLES {
            let seq = phonemize(&lexicon, text);
            for (idx, tone) in seq.tone_ids.iter().enumerate() {
                if idx % 2 == 1 {
                    assert!((start..=start + 5).contains(tone), "{text}: {tone} at {idx}");
                } else {
                    assert_eq!(*tone, 0, "{text}: blank at {idx}");
                }
            }
            assert!(seq.language_ids.iter().all(|&id| id == 7));
        }
    }

    #[test]
    fn boundary_only_at_both_ends() {
        let lexicon = bare();
        let boundary = lexicon.boundary_id();
        for text in SAMPLES {
            let seq = phonemize(&lexicon, text);
            let last = seq.len() - 1;
            assert_eq!(seq.phone_ids[0], boundary);
            assert_eq!(seq.phone_ids[last], boundary);
            assert!(
                seq.phone_ids[1..last].iter().all(|&id| id != boundary),
                "{text}"
            );
        }
    }

    #[test]
    fn same_input_same_output() {
        let frontend = VietnameseFrontend::builtin();
        for text in SAMPLES {
            assert_eq!(frontend.phonemize(text), frontend.phonemize(text));
        }
    }

    #[test]
    fn empty_input_is_a_lone_boundary() {
        let seq = VietnameseFrontend::builtin().phonemize("");
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.phone_ids, vec![0, 0, 0]);
        assert_eq!(seq.tone_ids, vec![0, 16, 0]);
    }

    #[test]
    fn xin_maps_to_known_ids() {
        let seq = phonemize(&bare(), "xin");
        assert_eq!(seq.phone_ids, vec![0, 108, 67, 93, 0]);
        assert_eq!(seq.tone_ids, vec![16; 5]);
        assert_eq!(seq.word2ph, vec![1, 3, 1]);
    }

    #[test]
    fn trailing_punctuation_gets_the_neutral_tone() {
        let lexicon = bare();
        let seq = phonemize(&lexicon, "chào,");
        let comma = lexicon.symbol_id(",").expect("comma in table");
        assert_eq!(seq.word2ph, vec![1, 3, 1, 1]);
        assert_eq!(seq.phone_ids[4], comma);
        assert_eq!(seq.tone_ids[4], lexicon.tone_start());
        assert_eq!(&seq.tone_ids[1..4], &[18, 18, 18]);
    }

    #[test]
    fn out_of_vocabulary_word_is_one_unknown_id() {
        let lexicon = bare();
        let seq = phonemize(&lexicon, "hello");
        assert_eq!(seq.phone_ids, vec![0, lexicon.unknown_id(), 0]);
        assert_eq!(seq.tone_ids, vec![16, 16, 16]);
    }

    #[test]
    fn process_normalizes_before_phonemizing() {
        let frontend = VietnameseFrontend::builtin();
        assert_eq!(frontend.process("2 giờ"), frontend.phonemize("hai giờ"));
        assert_ne!(frontend.process("2"), frontend.phonemize("2"));
    }

    #[test]
    fn report_lists_segments() {
        let report = VietnameseFrontend::builtin().report("Xin chào, bạn ABC", false);
        let kinds: Vec<_> = report.segments.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Word,
                SegmentKind::Word,
                SegmentKind::Punctuation,
                SegmentKind::Word,
                SegmentKind::Word,
            ]
        );
        assert_eq!(report.segments[0].ipa, "sin");
        assert_eq!(report.segments[1].tone_level, Some(2));
        assert!(report.segments[4].out_of_vocabulary);
        assert_eq!(report.segments[4].ipa, "[ABC]");
        assert!(report.normalized.is_none());
        assert_eq!(
            report.sequence,
            VietnameseFrontend::builtin().phonemize("Xin chào, bạn ABC")
        );
    }

    #[test]
    fn shared_lexicon_across_threads() {
        let frontend = VietnameseFrontend::builtin();
        let expected: Vec<_> = SAMPLES.iter().map(|t| frontend.phonemize(t)).collect();
        std::thread::scope(|scope| {
            let handles: Vec<_> = SAMPLES
                .iter()
                .map(|text| {
                    let frontend = frontend.clone();
                    scope.spawn(move || frontend.phonemize(text))
                })
                .collect();
            for (handle, want) in handles.into_iter().zip(&expected) {
                assert_eq!(&handle.join().expect("worker finished"), want);
            }
        });
    }
}
