use std::{fs, path::Path};

use ndarray::{Array1, Array2, Array3};
use ndarray_npy::write_npy;
use tracing::debug;

use crate::{
    constants::{BERT_HIDDEN, JA_BERT_HIDDEN},
    errors::Result,
    sequence::PhonemeSequence,
};

/// Text-encoder inputs in the layout the exported acoustic model takes,
/// batch size one. The BERT feature tensors are zero placeholders.
#[derive(Debug, Clone)]
pub struct EncoderInputs {
    pub x: Array2<i64>,
    pub x_lengths: Array1<i64>,
    pub tones: Array2<i64>,
    pub language: Array2<i64>,
    pub sid: Array1<i64>,
    pub bert: Array3<f32>,
    pub ja_bert: Array3<f32>,
}

impl EncoderInputs {
    pub fn from_sequence(sequence: &PhonemeSequence, speaker_id: i64) -> Result<Self> {
        let phones_len = sequence.len();
        Ok(Self {
            x: Array2::from_shape_vec((1, phones_len), sequence.phone_ids.clone())?,
            x_lengths: Array1::from_vec(vec![phones_len as i64]),
            tones: Array2::from_shape_vec((1, phones_len), sequence.tone_ids.clone())?,
            language: Array2::from_shape_vec((1, phones_len), sequence.language_ids.clone())?,
            sid: Array1::from_vec(vec![speaker_id]),
            bert: Array3::zeros((1, BERT_HIDDEN, phones_len)),
            ja_bert: Array3::zeros((1, JA_BERT_HIDDEN, phones_len)),
        })
    }

    pub fn len(&self) -> usize {
        self.x.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes one `.npy` file per input (`x.npy`, `tones.npy`, ...) into
    /// `dir`, creating it if needed.
    pub fn write_npy(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        write_npy(dir.join("x.npy"), &self.x)?;
        write_npy(dir.join("x_lengths.npy"), &self.x_lengths)?;
        write_npy(dir.join("tones.npy"), &self.tones)?;
        write_npy(dir.join("language.npy"), &self.language)?;
        write_npy(dir.join("sid.npy"), &self.sid)?;
        write_npy(dir.join("bert.npy"), &self.bert)?;
        write_npy(dir.join("ja_bert.npy"), &self.ja_bert)?;
        debug!(len = self.len(), "wrote encoder inputs to {}", dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::VietnameseFrontend;

    #[test]
    fn shapes_follow_sequence_length() {
        let seq = VietnameseFrontend::builtin().phonemize("xin chào");
        let inputs = EncoderInputs::from_sequence(&seq, 3).expect("inputs build");
        let len = seq.len();

        assert_eq!(inputs.x.shape(), &[1, len]);
        assert_eq!(inputs.tones.shape(), &[1, len]);
        assert_eq!(inputs.language.shape(), &[1, len]);
        assert_eq!(inputs.x_lengths[0], len as i64);
        assert_eq!(inputs.sid[0], 3);
        assert_eq!(inputs.bert.shape(), &[1, BERT_HIDDEN, len]);
        assert_eq!(inputs.ja_bert.shape(), &[1, JA_BERT_HIDDEN, len]);
        assert!(inputs.bert.iter().all(|&v| v == 0.0));
        assert_eq!(inputs.x.row(0).to_vec(), seq.phone_ids);
    }

    #[test]
    fn mismatched_sequence_is_a_shape_error() {
        let seq = PhonemeSequence {
            phone_ids: vec![0, 1, 0],
            tone_ids: vec![0, 16],
            language_ids: vec![7, 7, 7],
            word2ph: vec![3],
        };
        assert!(EncoderInputs::from_sequence(&seq, 0).is_err());
    }

    #[test]
    fn writes_every_input_file() {
        let dir = std::env::temp_dir().join(format!("vi-g2p-npy-{}", std::process::id()));
        let seq = VietnameseFrontend::builtin().phonemize("một");
        let inputs = EncoderInputs::from_sequence(&seq, 0).expect("inputs build");
        inputs.write_npy(&dir).expect("npy written");
        for name in ["x", "x_lengths", "tones", "language", "sid", "bert", "ja_bert"] {
            assert!(dir.join(format!("{name}.npy")).is_file(), "{name}.npy");
        }
        fs::remove_dir_all(&dir).expect("cleanup");
    }
}
