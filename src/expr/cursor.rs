//! Token cursor
//!
//! A lexeme list plus the index of the next lexeme to read. Reads past either
//! end yield the terminal lexeme instead of failing. Whitespace-skipping moves
//! skip at most one lexeme, since the tokenizer never emits two whitespace
//! lexemes in a row.
//!
//! Moves return `&mut Self` so they chain:
//!
//! ```rust
//! use exprsyntax::expr::TokenCursor;
//!
//! let mut cursor = TokenCursor::from_source(" a + b");
//! assert_eq!(cursor.skip_if_whitespace().peek_next().text(), "a");
//! assert_eq!(cursor.skip_one().peek_next_non_whitespace().text(), "+");
//! ```

use super::lexeme::Lexeme;
use super::lexer::tokenize;

/// Position-tracking reader over lexemes
#[derive(Debug, Clone)]
pub struct TokenCursor<'src> {
    lexemes: Vec<Lexeme<'src>>,
    next: usize,
    terminal: Lexeme<'src>,
}

impl<'src> TokenCursor<'src> {
    /// Cursor over an explicit lexeme list
    pub fn new(lexemes: Vec<Lexeme<'src>>) -> Self {
        let terminal = match lexemes.last() {
            Some(last) => last.terminal_after(),
            None => Lexeme::from_text(""),
        };
        Self {
            lexemes,
            next: 0,
            terminal,
        }
    }

    /// Tokenize `source` and position the cursor at its start
    pub fn from_source(source: &'src str) -> Self {
        Self::new(tokenize(source))
    }

    /// Cursor over standalone lexeme texts
    pub fn from_texts(texts: &[&'src str]) -> Self {
        Self::new(texts.iter().map(|&text| Lexeme::from_text(text)).collect())
    }

    /// Index of the next lexeme
    #[inline]
    pub fn position(&self) -> usize {
        self.next
    }

    /// Move back (or forward) to a previously saved position
    pub fn reset_to(&mut self, position: usize) -> &mut Self {
        self.next = position.min(self.lexemes.len());
        self
    }

    /// All lexemes, consumed or not
    pub fn lexemes(&self) -> &[Lexeme<'src>] {
        &self.lexemes
    }

    fn at(&self, index: usize) -> Lexeme<'src> {
        self.lexemes.get(index).copied().unwrap_or(self.terminal)
    }

    /// Lexeme at `position - back`, or terminal before the start
    fn behind(&self, back: usize) -> Lexeme<'src> {
        match self.next.checked_sub(back) {
            Some(index) => self.at(index),
            None => self.terminal,
        }
    }

    // ------------------------------------------------------------------------
    // Forward
    // ------------------------------------------------------------------------

    /// Whether a lexeme is left to read
    #[inline]
    pub fn has_next(&self) -> bool {
        self.next < self.lexemes.len()
    }

    /// Next lexeme without moving
    #[inline]
    pub fn peek_next(&self) -> Lexeme<'src> {
        self.at(self.next)
    }

    /// Next lexeme, moving past it
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Lexeme<'src> {
        let lexeme = self.peek_next();
        if self.has_next() {
            self.next += 1;
        }
        lexeme
    }

    /// Next lexeme, looking past one whitespace lexeme
    pub fn peek_next_non_whitespace(&self) -> Lexeme<'src> {
        let lexeme = self.peek_next();
        if lexeme.is_whitespace() {
            self.at(self.next + 1)
        } else {
            lexeme
        }
    }

    /// Skip one whitespace lexeme if present, then read the next lexeme
    pub fn next_non_whitespace(&mut self) -> Lexeme<'src> {
        self.skip_if_whitespace().next()
    }

    /// Move forward one lexeme
    pub fn skip_one(&mut self) -> &mut Self {
        self.next();
        self
    }

    /// Move forward over one whitespace lexeme, if the next one is whitespace
    pub fn skip_if_whitespace(&mut self) -> &mut Self {
        if self.peek_next().is_whitespace() {
            self.next += 1;
        }
        self
    }

    /// Skip one whitespace lexeme if present, then the lexeme after it
    pub fn skip_whitespace_and_next(&mut self) -> &mut Self {
        self.skip_if_whitespace().skip_one()
    }

    /// Nothing but (at most one) whitespace lexeme is left
    pub fn is_at_the_end(&self) -> bool {
        self.peek_next_non_whitespace().is_terminal()
    }

    // ------------------------------------------------------------------------
    // Backward
    // ------------------------------------------------------------------------

    /// Whether a lexeme has been read
    #[inline]
    pub fn has_prev(&self) -> bool {
        self.next > 0
    }

    /// Last read lexeme without moving
    #[inline]
    pub fn peek_last(&self) -> Lexeme<'src> {
        self.behind(1)
    }

    /// Last read lexeme, moving back before it
    pub fn prev(&mut self) -> Lexeme<'src> {
        let lexeme = self.peek_last();
        if self.has_prev() {
            self.next -= 1;
        }
        lexeme
    }

    /// Last read lexeme, looking back past one whitespace lexeme
    pub fn peek_last_non_whitespace(&self) -> Lexeme<'src> {
        let lexeme = self.peek_last();
        if lexeme.is_whitespace() {
            self.behind(2)
        } else {
            lexeme
        }
    }

    /// Move back one lexeme
    pub fn skip_back_one(&mut self) -> &mut Self {
        self.prev();
        self
    }

    /// Move back over one whitespace lexeme, if the last read one is whitespace
    pub fn skip_back_if_whitespace(&mut self) -> &mut Self {
        if self.peek_last().is_whitespace() {
            self.next -= 1;
        }
        self
    }
}
