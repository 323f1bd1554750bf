//! Northern-dialect rewrites applied once nucleus and coda are final.

use super::{
    syllable::Syllable,
    tables::{LABIO_VELAR_NASAL, LABIO_VELAR_STOP, PALATAL_NASAL, VELAR_NASAL, VELAR_STOP},
};

const ROUNDED_BACK_NUCLEI: [&str; 3] = ["u", "o", "ɔ"];

/// Runs both rewrites in their fixed order.
pub fn apply(syllable: &mut Syllable) {
    front_before_palatal(syllable);
    merge_labial_coda(syllable);
}

/// `anh` → /ɛɲ/, `ach` → /ɛk/. The stop case only fires for the two-letter
/// `ch` spelling; `ac` stays /ak/.
fn front_before_palatal(syllable: &mut Syllable) {
    if syllable.nucleus != "a" {
        return;
    }
    let palatal = syllable.coda == PALATAL_NASAL;
    let spelled_ch = syllable.coda == VELAR_STOP && syllable.coda_graphemes == 2;
    if palatal || spelled_ch {
        syllable.nucleus = "ɛ".to_string();
    }
}

/// Velar codas after rounded back vowels close with the lips: `ông` → /oŋ͡m/.
fn merge_labial_coda(syllable: &mut Syllable) {
    if !ROUNDED_BACK_NUCLEI.contains(&syllable.nucleus.as_str()) {
        return;
    }
    if syllable.coda == VELAR_NASAL {
        syllable.coda = LABIO_VELAR_NASAL.to_string();
    } else if syllable.coda == VELAR_STOP {
        syllable.coda = LABIO_VELAR_STOP.to_string();
    }
}
