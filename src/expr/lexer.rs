//! Tokenizer
//!
//! Splits input into maximal [`Lexeme`] spans using the character-kind
//! boundary rule. Tokenizing is total: every input, including the empty
//! string, produces a lexeme list whose texts concatenate back to the input.

use super::char_class::CharKind;
use super::lexeme::Lexeme;
use std::str::CharIndices;

/// Lazy lexeme iterator over a source string
pub struct Tokenizer<'src> {
    source: &'src str,
    chars: CharIndices<'src>,
    start: usize,
    prev: Option<CharKind>,
}

impl<'src> Tokenizer<'src> {
    /// Create a tokenizer over `source`
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices(),
            start: 0,
            prev: None,
        }
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Lexeme<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, ch) in self.chars.by_ref() {
            let kind = CharKind::of(ch);
            let boundary = self
                .prev
                .is_some_and(|prev| kind.starts_new_lexeme(prev));
            self.prev = Some(kind);

            if boundary {
                let lexeme = Lexeme::new(self.source, self.start, index);
                self.start = index;
                return Some(lexeme);
            }
        }

        if self.start < self.source.len() {
            let lexeme = Lexeme::new(self.source, self.start, self.source.len());
            self.start = self.source.len();
            return Some(lexeme);
        }
        None
    }
}

/// Split `source` into lexemes
pub fn tokenize(source: &str) -> Vec<Lexeme<'_>> {
    Tokenizer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<&str> {
        tokenize(source).iter().map(|l| l.text()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_words_and_spaces() {
        assert_eq!(texts("a  bc"), vec!["a", "  ", "bc"]);
        assert_eq!(texts(" $foo_1 "), vec![" ", "$foo_1", " "]);
        assert_eq!(texts("12ab"), vec!["12ab"]);
    }

    #[test]
    fn test_punctuation_runs() {
        assert_eq!(texts("a!==b"), vec!["a", "!==", "b"]);
        assert_eq!(texts("x<<<=y"), vec!["x", "<<<=", "y"]);
        assert_eq!(texts("a, b"), vec!["a", ",", " ", "b"]);
    }

    #[test]
    fn test_brackets_and_quotes_stand_alone() {
        assert_eq!(texts("(())"), vec!["(", "(", ")", ")"]);
        assert_eq!(texts("'``'"), vec!["'", "`", "`", "'"]);
        assert_eq!(texts("f(x)"), vec!["f", "(", "x", ")"]);
        assert_eq!(texts("\"a b\""), vec!["\"", "a", " ", "b", "\""]);
    }

    #[test]
    fn test_other_characters_stand_alone() {
        assert_eq!(texts("→→"), vec!["→", "→"]);
        assert_eq!(texts("a→b"), vec!["a", "→", "b"]);
    }

    #[test]
    fn test_unicode_letters_group() {
        assert_eq!(texts("héllo wörld"), vec!["héllo", " ", "wörld"]);
    }

    #[test]
    fn test_offsets() {
        let lexemes = tokenize("ab + c");
        let spans: Vec<(usize, usize)> = lexemes.iter().map(|l| (l.start(), l.end())).collect();
        assert_eq!(spans, vec![(0, 2), (2, 3), (3, 4), (4, 5), (5, 6)]);
    }

    #[test]
    fn test_round_trip() {
        for source in ["", "a", "  a + (b) ", "'it''s'", "x.y:z", "é→1_2"] {
            let joined: String = tokenize(source).iter().map(|l| l.text()).collect();
            assert_eq!(joined, source);
        }
    }
}
