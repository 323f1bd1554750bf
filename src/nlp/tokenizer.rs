use tracing::debug;
use unicode_normalization::char::is_combining_mark;

use crate::lexicon::Lexicon;

/// Longest symbol key tried during matching, in characters.
pub const MAX_SYMBOL_CHARS: usize = 4;

/// Rounding, aspiration and length marks. They extend the phoneme before them.
const MODIFIERS: [char; 3] = ['ʷ', 'ʰ', 'ː'];
const TIE_BARS: [char; 2] = ['\u{361}', '\u{35c}'];

/// Splits a phonetic string into symbol strings using the lexicon's keys.
///
/// Multi-character phoneme keys (`tʰ`, `aː`, `iə`, or a tied `k͡p` if the
/// table has one) are matched whole first. Anything left over is handled one character
/// at a time: combining marks and tie bars vanish, modifiers attach to the
/// previous symbol, other characters stand alone.
pub fn split_symbols(ipa: &str, lexicon: &Lexicon) -> Vec<String> {
    let chars: Vec<char> = ipa.chars().collect();
    let mut symbols: Vec<String> = Vec::with_capacity(chars.len());
    let mut idx = 0;

    'outer: while idx < chars.len() {
        let longest = MAX_SYMBOL_CHARS.min(chars.len() - idx);
        for len in (2..=longest).rev() {
            let candidate: String = chars[idx..idx + len].iter().collect();
            if lexicon.is_phoneme_key(&candidate) {
                symbols.push(candidate);
                idx += len;
                continue 'outer;
            }
        }

        let ch = chars[idx];
        idx += 1;
        if TIE_BARS.contains(&ch) || is_combining_mark(ch) {
            continue;
        }
        if MODIFIERS.contains(&ch) {
            if let Some(last) = symbols.last_mut() {
                last.push(ch);
            }
            continue;
        }
        symbols.push(ch.to_string());
    }

    symbols
}

/// Maps a phonetic string to symbol ids; unresolvable symbols become the
/// unknown id.
pub fn tokenize(ipa: &str, lexicon: &Lexicon) -> Vec<i64> {
    split_symbols(ipa, lexicon)
        .iter()
        .map(|symbol| {
            lexicon.symbol_id(symbol).unwrap_or_else(|| {
                debug!("symbol '{symbol}' not in table, using unknown id");
                lexicon.unknown_id()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::constants::Language;

    fn builtin() -> Lexicon {
        Lexicon::builtin()
    }

    #[test]
    fn matches_longest_keys_first() {
        let lexicon = builtin();
        assert_eq!(split_symbols("tʰiə", &lexicon), vec!["tʰ", "iə"]);
        assert_eq!(split_symbols("kwa", &lexicon), vec!["kw", "a"]);
        assert_eq!(split_symbols("aːn", &lexicon), vec!["aː", "n"]);
    }

    #[test]
    fn foreign_multi_letter_symbols_do_not_capture_letters() {
        let lexicon = builtin();
        assert_eq!(split_symbols("sin", &lexicon), vec!["s", "i", "n"]);
        assert_eq!(split_symbols("xaŋ", &lexicon), vec!["x", "a", "ŋ"]);
    }

    #[test]
    fn drops_combining_marks_and_tie_bars() {
        let lexicon = builtin();
        assert_eq!(split_symbols("xoŋ\u{361}m", &lexicon), vec!["x", "o", "ŋ", "m"]);
        assert_eq!(split_symbols("ɤ\u{306}n", &lexicon), vec!["ɤ", "n"]);
    }

    #[test]
    fn modifiers_extend_previous_symbol() {
        let lexicon = builtin();
        assert_eq!(split_symbols("bʷa", &lexicon), vec!["bʷ", "a"]);
        assert_eq!(split_symbols("ʰa", &lexicon), vec!["a"]);
    }

    #[test]
    fn tied_symbols_match_whole_when_the_table_has_them() {
        let table: HashMap<String, i64> = [("_", 0), ("UNK", 1), ("k\u{361}p", 2), ("o", 3)]
            .iter()
            .map(|(s, id)| (s.to_string(), *id))
            .collect();
        let lexicon =
            Lexicon::new(table, "UNK", "_", Language::Vi, 7, 16).expect("valid lexicon");
        assert_eq!(tokenize("ok\u{361}p", &lexicon), vec![3, 2]);
    }

    #[test]
    fn unresolved_symbols_map_to_unknown() {
        let lexicon = builtin();
        let ids = tokenize("sin", &lexicon);
        assert_eq!(ids, vec![108, 67, 93]);
        let ids = tokenize("bʷ", &lexicon);
        assert_eq!(ids, vec![lexicon.unknown_id()]);
        assert_eq!(tokenize("☃", &lexicon), vec![lexicon.unknown_id()]);
    }

    #[test]
    fn punctuation_is_a_single_symbol() {
        let lexicon = builtin();
        assert_eq!(tokenize(",", &lexicon), vec![298]);
        assert_eq!(tokenize(";", &lexicon), vec![lexicon.unknown_id()]);
    }
}
