use std::{collections::VecDeque, str::SplitWhitespace};

/// Punctuation peeled off word edges before syllable analysis.
pub const SEGMENT_PUNCTUATION: [char; 14] = [
    ',', '.', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}',
];

pub fn is_segment_punctuation(ch: char) -> bool {
    SEGMENT_PUNCTUATION.contains(&ch)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Word(&'a str),
    Punctuation(char),
}

/// Lazy token stream over whitespace-separated pieces of the input. Cloning
/// it restarts from the same position.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    pieces: SplitWhitespace<'a>,
    pending: VecDeque<Token<'a>>,
}

pub fn segment(text: &str) -> Segments<'_> {
    Segments {
        pieces: text.split_whitespace(),
        pending: VecDeque::new(),
    }
}

impl<'a> Segments<'a> {
    fn split_piece(&mut self, piece: &'a str) {
        let body_start = piece
            .char_indices()
            .find(|&(_, ch)| !is_segment_punctuation(ch))
            .map(|(idx, _)| idx)
            .unwrap_or(piece.len());
        let (leading, rest) = piece.split_at(body_start);
        let body = rest.trim_end_matches(is_segment_punctuation);
        let trailing = &rest[body.len()..];

        self.pending
            .extend(leading.chars().map(Token::Punctuation));
        if !body.is_empty() {
            self.pending.push_back(Token::Word(body));
        }
        self.pending
            .extend(trailing.chars().map(Token::Punctuation));
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            let piece = self.pieces.next()?;
            self.split_piece(piece);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::Token::{Punctuation as P, Word as W};

    #[test]
    fn splits_on_whitespace_runs() {
        let tokens: Vec<_> = segment("  xin \t chào\nbạn ").collect();
        assert_eq!(tokens, vec![W("xin"), W("chào"), W("bạn")]);
    }

    #[test]
    fn peels_trailing_punctuation_in_order() {
        let tokens: Vec<_> = segment("chào, bạn?!").collect();
        assert_eq!(
            tokens,
            vec![W("chào"), P(','), W("bạn"), P('?'), P('!')]
        );
    }

    #[test]
    fn punctuation_only_pieces_emit_no_word() {
        let tokens: Vec<_> = segment("xin ... chào").collect();
        assert_eq!(
            tokens,
            vec![W("xin"), P('.'), P('.'), P('.'), W("chào")]
        );
    }

    #[test]
    fn peels_leading_punctuation() {
        let tokens: Vec<_> = segment("(xin) \"chào\"").collect();
        assert_eq!(
            tokens,
            vec![P('('), W("xin"), P(')'), P('"'), W("chào"), P('"')]
        );
    }

    #[test]
    fn inner_punctuation_stays_in_the_word() {
        let tokens: Vec<_> = segment("a.b").collect();
        assert_eq!(tokens, vec![W("a.b")]);
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert_eq!(segment("").count(), 0);
        assert_eq!(segment(" \n\t ").count(), 0);
    }

    #[test]
    fn clones_restart_the_stream() {
        let stream = segment("một, hai");
        let first: Vec<_> = stream.clone().collect();
        let second: Vec<_> = stream.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
