//! Character kinds and the tokenizer boundary rule
//!
//! Every character of the input falls into exactly one [`CharKind`]. ASCII
//! characters are resolved through a 128-entry table built at compile time;
//! anything outside ASCII falls back to the general Unicode predicates.
//!
//! The kind of the previous character together with the kind of the current
//! one decides whether a new lexeme starts (see [`CharKind::starts_new_lexeme`]).

use serde::{Deserialize, Serialize};

/// Identifier symbols that behave like letters
pub const ID_SYMBOLS: &[u8] = b"$_";

/// Operator-forming punctuation
pub const PUNCTUATION: &[u8] = b"~!@#%^&*-=+:;\\/|<>.,?";

/// Bracket characters, each of which forms its own lexeme
pub const BRACKETS: &[u8] = b"()[]{}";

/// Quote characters, each of which forms its own lexeme
pub const QUOTES: &[u8] = b"`'\"";

/// Character kind used by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharKind {
    /// Any whitespace character
    Whitespace,
    /// Decimal digit
    Digit,
    /// Alphabetic character
    Letter,
    /// `$` or `_`
    Id,
    /// Operator-forming punctuation
    Punctuation,
    /// One of `()[]{}`
    Brackets,
    /// One of `` ` ' " ``
    Quote,
    /// Everything else
    Other,
}

/// Pre-computed kinds for the ASCII range
pub struct CharKindTable {
    kinds: [CharKind; 128],
}

impl CharKindTable {
    /// Build the table at compile time
    pub const fn new() -> Self {
        let mut kinds = [CharKind::Other; 128];
        let mut i = 0;
        while i < 128 {
            kinds[i] = classify_ascii(i as u8);
            i += 1;
        }
        Self { kinds }
    }

    /// Look up the kind of an ASCII byte
    #[inline]
    pub const fn get(&self, byte: u8) -> CharKind {
        self.kinds[(byte & 0x7f) as usize]
    }
}

impl Default for CharKindTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Global ASCII kind table
pub static ASCII_KINDS: CharKindTable = CharKindTable::new();

const fn contains(set: &[u8], byte: u8) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] == byte {
            return true;
        }
        i += 1;
    }
    false
}

// Precedence: whitespace, digit, letter, id, bracket, quote, punctuation.
const fn classify_ascii(byte: u8) -> CharKind {
    if matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c) {
        CharKind::Whitespace
    } else if byte.is_ascii_digit() {
        CharKind::Digit
    } else if byte.is_ascii_alphabetic() {
        CharKind::Letter
    } else if contains(ID_SYMBOLS, byte) {
        CharKind::Id
    } else if contains(BRACKETS, byte) {
        CharKind::Brackets
    } else if contains(QUOTES, byte) {
        CharKind::Quote
    } else if contains(PUNCTUATION, byte) {
        CharKind::Punctuation
    } else {
        CharKind::Other
    }
}

impl CharKind {
    /// Classify a single character
    #[inline]
    pub fn of(ch: char) -> Self {
        if ch.is_ascii() {
            return ASCII_KINDS.get(ch as u8);
        }
        if ch.is_whitespace() {
            CharKind::Whitespace
        } else if ch.is_numeric() {
            CharKind::Digit
        } else if ch.is_alphabetic() {
            CharKind::Letter
        } else {
            CharKind::Other
        }
    }

    /// Whether a character of this kind begins a new lexeme after a
    /// character of kind `prev`
    ///
    /// - whitespace and punctuation runs group together
    /// - digits, letters and id symbols group together, and only break
    ///   after whitespace, punctuation, brackets, quotes or other
    /// - brackets, quotes and other characters always stand alone
    #[inline]
    pub fn starts_new_lexeme(self, prev: CharKind) -> bool {
        match self {
            CharKind::Whitespace | CharKind::Punctuation => prev != self,
            CharKind::Digit | CharKind::Letter | CharKind::Id => matches!(
                prev,
                CharKind::Whitespace
                    | CharKind::Punctuation
                    | CharKind::Brackets
                    | CharKind::Quote
                    | CharKind::Other
            ),
            CharKind::Brackets | CharKind::Quote | CharKind::Other => true,
        }
    }
}
