//! Lexemes and their classification
//!
//! A [`Lexeme`] is a span of the input produced by the tokenizer. It borrows
//! the source text, so classification and AST construction never copy.
//! Equality and hashing look at the text only.
//!
//! Classification runs the categories in a fixed order, against a given
//! [`SyntaxOptions`]:
//!
//! terminal, whitespace, identifier, numeric, prefix, infix, postfix, quote,
//! bracket, separator, other.
//!
//! A disabled operator, quote, bracket or separator falls through to the next
//! category. Identifiers and numerics are mandatory shapes: a lexeme that looks
//! like one but is disabled is a [`ParseError::Disallowed`].

use super::error::{Expected, ParseResult};
use super::options::SyntaxOptions;
use super::vocab::{Bracket, InfixOp, PostfixOp, PrefixOp, Quote, Separator, Symbol};
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
static NUMERIC: OnceLock<Regex> = OnceLock::new();

fn identifier_pattern() -> &'static Regex {
    IDENTIFIER.get_or_init(|| {
        Regex::new(r"^[_$a-zA-Z][_$a-zA-Z0-9]*$").expect("identifier pattern must compile")
    })
}

fn numeric_pattern() -> &'static Regex {
    NUMERIC.get_or_init(|| {
        Regex::new(r"^[0-9][_a-zA-Z0-9]*$").expect("numeric pattern must compile")
    })
}

/// A span of source text
#[derive(Clone, Copy)]
pub struct Lexeme<'src> {
    source: &'src str,
    start: usize,
    end: usize,
}

impl<'src> Lexeme<'src> {
    /// Lexeme covering `source[start..end]`
    ///
    /// # Panics
    ///
    /// Panics if the range is not on char boundaries of `source`.
    pub fn new(source: &'src str, start: usize, end: usize) -> Self {
        assert!(
            source.is_char_boundary(start) && source.is_char_boundary(end) && start <= end,
            "lexeme range {}..{} out of bounds",
            start,
            end
        );
        Self { source, start, end }
    }

    /// Lexeme covering the whole of `text`
    pub fn from_text(text: &'src str) -> Self {
        Self {
            source: text,
            start: 0,
            end: text.len(),
        }
    }

    /// Empty lexeme at `offset`, marking the end of input
    pub fn terminal_at(source: &'src str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        Self {
            source,
            start: offset,
            end: offset,
        }
    }

    /// Empty lexeme right after this one
    pub fn terminal_after(&self) -> Self {
        Self {
            source: self.source,
            start: self.end,
            end: self.end,
        }
    }

    /// Lexeme text
    #[inline]
    pub fn text(&self) -> &'src str {
        &self.source[self.start..self.end]
    }

    /// Byte offset of the first character
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last character
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Source text from this lexeme to the end of input
    pub fn remainder(&self) -> &'src str {
        &self.source[self.start..]
    }

    /// The terminal (end of input) lexeme is empty
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.start == self.end
    }

    /// Non-empty and made of whitespace only
    pub fn is_whitespace(&self) -> bool {
        !self.is_terminal() && self.text().chars().all(char::is_whitespace)
    }

    /// Matches `[_$a-zA-Z][_$a-zA-Z0-9]*`
    pub fn is_identifier(&self) -> bool {
        identifier_pattern().is_match(self.text())
    }

    /// Matches `[0-9][_a-zA-Z0-9]*`
    pub fn is_numeric(&self) -> bool {
        numeric_pattern().is_match(self.text())
    }

    /// Merge with the lexeme that directly follows this one in the same source
    pub fn join(self, next: Lexeme<'src>) -> Option<Lexeme<'src>> {
        if std::ptr::eq(self.source, next.source) && self.end == next.start {
            Some(Lexeme {
                source: self.source,
                start: self.start,
                end: next.end,
            })
        } else {
            None
        }
    }

    // ------------------------------------------------------------------------
    // Per-category conversions
    // ------------------------------------------------------------------------

    /// Identifier text, if the lexeme has identifier shape and is allowed
    pub fn to_identifier(&self, options: &SyntaxOptions) -> ParseResult<Option<&'src str>> {
        if !self.is_identifier() {
            return Ok(None);
        }
        options
            .identifiers()
            .allow_or_err(self.text(), Expected::Identifier, self.start)
            .map(Some)
    }

    /// Numeric text, if the lexeme has numeric shape and is allowed
    pub fn to_numeric(&self, options: &SyntaxOptions) -> ParseResult<Option<&'src str>> {
        if !self.is_numeric() {
            return Ok(None);
        }
        options
            .numerics()
            .allow_or_err(self.text(), Expected::Numeric, self.start)
            .map(Some)
    }

    /// Allowed prefix operator
    pub fn to_prefix_op(&self, options: &SyntaxOptions) -> Option<PrefixOp> {
        options
            .prefixes()
            .allow_or_none(PrefixOp::from_symbol(self.text()))
    }

    /// Allowed infix operator
    pub fn to_infix_op(&self, options: &SyntaxOptions) -> Option<InfixOp> {
        options
            .infixes()
            .allow_or_none(InfixOp::from_symbol(self.text()))
    }

    /// Allowed postfix operator
    pub fn to_postfix_op(&self, options: &SyntaxOptions) -> Option<PostfixOp> {
        options
            .postfixes()
            .allow_or_none(PostfixOp::from_symbol(self.text()))
    }

    /// Allowed quote
    pub fn to_quote(&self, options: &SyntaxOptions) -> Option<Quote> {
        options.quotes().allow_or_none(Quote::from_symbol(self.text()))
    }

    /// Allowed bracket, opening or closing
    pub fn to_bracket(&self, options: &SyntaxOptions) -> Option<Bracket> {
        options
            .brackets()
            .allow_or_none(Bracket::from_symbol(self.text()))
    }

    /// Allowed separator; any whitespace lexeme is [`Separator::Space`]
    pub fn to_separator(&self, options: &SyntaxOptions) -> Option<Separator> {
        let separator = if self.is_whitespace() {
            Some(Separator::Space)
        } else {
            Separator::from_symbol(self.text())
        };
        options.separators().allow_or_none(separator)
    }

    /// Assign the lexeme its category under `options`
    pub fn classify(&self, options: &SyntaxOptions) -> ParseResult<LexemeCategory<'src>> {
        if self.is_terminal() {
            return Ok(LexemeCategory::Terminal);
        }
        if self.is_whitespace() {
            return Ok(LexemeCategory::Whitespace);
        }
        if let Some(name) = self.to_identifier(options)? {
            return Ok(LexemeCategory::Identifier(name));
        }
        if let Some(value) = self.to_numeric(options)? {
            return Ok(LexemeCategory::Numeric(value));
        }
        if let Some(op) = self.to_prefix_op(options) {
            return Ok(LexemeCategory::PrefixOp(op));
        }
        if let Some(op) = self.to_infix_op(options) {
            return Ok(LexemeCategory::InfixOp(op));
        }
        if let Some(op) = self.to_postfix_op(options) {
            return Ok(LexemeCategory::PostfixOp(op));
        }
        if let Some(quote) = self.to_quote(options) {
            return Ok(LexemeCategory::Quote(quote));
        }
        if let Some(bracket) = self.to_bracket(options) {
            return Ok(LexemeCategory::Bracket {
                bracket,
                open: Bracket::is_open(self.text()),
            });
        }
        if let Some(separator) = self.to_separator(options) {
            return Ok(LexemeCategory::Separator(separator));
        }
        Ok(LexemeCategory::Other(self.text()))
    }

    /// The category this lexeme would have if the options did not disable it
    ///
    /// Returns `None` when the lexeme is outside every base vocabulary, or when
    /// at least one category that knows the symbol is enabled.
    pub fn disallowed_category(&self, options: &SyntaxOptions) -> Option<Expected> {
        let text = self.text();
        let closing = if Bracket::is_open(text) {
            Expected::OpenBracket
        } else {
            Expected::CloseBracket
        };
        let candidates = [
            (
                PrefixOp::from_symbol(text).map(|op| options.prefixes().allows(&op)),
                Expected::PrefixOp,
            ),
            (
                InfixOp::from_symbol(text).map(|op| options.infixes().allows(&op)),
                Expected::InfixOp,
            ),
            (
                PostfixOp::from_symbol(text).map(|op| options.postfixes().allows(&op)),
                Expected::PostfixOp,
            ),
            (
                Quote::from_symbol(text).map(|quote| options.quotes().allows(&quote)),
                Expected::Quote,
            ),
            (
                Bracket::from_symbol(text).map(|bracket| options.brackets().allows(&bracket)),
                closing,
            ),
            (
                Separator::from_symbol(text).map(|sep| options.separators().allows(&sep)),
                Expected::Separator,
            ),
        ];

        if candidates.iter().any(|(allowed, _)| *allowed == Some(true)) {
            return None;
        }
        candidates
            .iter()
            .find(|(allowed, _)| allowed.is_some())
            .map(|&(_, category)| category)
    }

    /// Text as a borrowed `Cow`
    pub(crate) fn to_cow(self) -> Cow<'src, str> {
        Cow::Borrowed(self.text())
    }
}

impl PartialEq for Lexeme<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.text() == other.text()
    }
}

impl Eq for Lexeme<'_> {}

impl PartialEq<str> for Lexeme<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text() == other
    }
}

impl PartialEq<&str> for Lexeme<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text() == *other
    }
}

impl Hash for Lexeme<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text().hash(state);
    }
}

impl fmt::Debug for Lexeme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`@{}", self.text(), self.start)
    }
}

impl fmt::Display for Lexeme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.text())
    }
}

/// Semantic category of a lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexemeCategory<'src> {
    /// End of input
    Terminal,
    /// Whitespace run
    Whitespace,
    /// Identifier name
    Identifier(&'src str),
    /// Numeric text
    Numeric(&'src str),
    /// Prefix operator
    PrefixOp(PrefixOp),
    /// Infix operator
    InfixOp(InfixOp),
    /// Postfix operator
    PostfixOp(PostfixOp),
    /// Quote
    Quote(Quote),
    /// Bracket with its direction
    Bracket {
        /// Bracket kind
        bracket: Bracket,
        /// Opening (`true`) or closing (`false`)
        open: bool,
    },
    /// Separator
    Separator(Separator),
    /// Anything else
    Other(&'src str),
}

/// Accumulates the text of consecutive lexemes
///
/// Stays borrowed while the lexemes are adjacent in one source.
#[derive(Debug, Default)]
pub(crate) enum TextBuilder<'src> {
    #[default]
    Empty,
    Span(Lexeme<'src>),
    Owned(String),
}

impl<'src> TextBuilder<'src> {
    pub(crate) fn push(&mut self, lexeme: Lexeme<'src>) {
        *self = match std::mem::take(self) {
            TextBuilder::Empty => TextBuilder::Span(lexeme),
            TextBuilder::Span(span) => match span.join(lexeme) {
                Some(joined) => TextBuilder::Span(joined),
                None => TextBuilder::Owned(format!("{}{}", span.text(), lexeme.text())),
            },
            TextBuilder::Owned(mut text) => {
                text.push_str(lexeme.text());
                TextBuilder::Owned(text)
            }
        };
    }

    pub(crate) fn finish(self) -> Cow<'src, str> {
        match self {
            TextBuilder::Empty => Cow::Borrowed(""),
            TextBuilder::Span(span) => Cow::Borrowed(span.text()),
            TextBuilder::Owned(text) => Cow::Owned(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::error::ParseError;
    use crate::expr::options::Allowed;

    fn lex(text: &str) -> Lexeme<'_> {
        Lexeme::from_text(text)
    }

    #[test]
    fn test_terminal_and_whitespace() {
        assert!(lex("").is_terminal());
        assert!(!lex("").is_whitespace());
        assert!(lex(" \t\n").is_whitespace());
        assert!(!lex(" a ").is_whitespace());
    }

    #[test]
    fn test_identifier_shape() {
        for text in ["a", "_", "$", "$a1", "foo_bar", "A_$9"] {
            assert!(lex(text).is_identifier(), "{}", text);
        }
        for text in ["", "1a", "a-b", " a", "é"] {
            assert!(!lex(text).is_identifier(), "{}", text);
        }
    }

    #[test]
    fn test_numeric_shape() {
        for text in ["0", "123", "0x1F", "1_000", "12L"] {
            assert!(lex(text).is_numeric(), "{}", text);
        }
        for text in ["", "a1", "1.5", "$1"] {
            assert!(!lex(text).is_numeric(), "{}", text);
        }
    }

    #[test]
    fn test_equality_by_text() {
        let source = "a a";
        let first = Lexeme::new(source, 0, 1);
        let second = Lexeme::new(source, 2, 3);
        assert_eq!(first, second);
        assert_eq!(first, "a");
        assert_ne!(first.start(), second.start());
    }

    #[test]
    fn test_classify_order() {
        let options = SyntaxOptions::new();
        assert_eq!(lex("").classify(&options).unwrap(), LexemeCategory::Terminal);
        assert_eq!(lex("  ").classify(&options).unwrap(), LexemeCategory::Whitespace);
        assert_eq!(
            lex("foo").classify(&options).unwrap(),
            LexemeCategory::Identifier("foo")
        );
        assert_eq!(
            lex("42").classify(&options).unwrap(),
            LexemeCategory::Numeric("42")
        );
        // prefix wins over infix and postfix
        assert_eq!(
            lex("+").classify(&options).unwrap(),
            LexemeCategory::PrefixOp(PrefixOp::Plus)
        );
        assert_eq!(
            lex("**").classify(&options).unwrap(),
            LexemeCategory::InfixOp(InfixOp::Pow)
        );
        // infix wins over postfix and separator
        assert_eq!(
            lex("?").classify(&options).unwrap(),
            LexemeCategory::InfixOp(InfixOp::Question)
        );
        assert_eq!(
            lex(":").classify(&options).unwrap(),
            LexemeCategory::InfixOp(InfixOp::Colon)
        );
        assert_eq!(
            lex("\"").classify(&options).unwrap(),
            LexemeCategory::Quote(Quote::Double)
        );
        assert_eq!(
            lex(",").classify(&options).unwrap(),
            LexemeCategory::Separator(Separator::Comma)
        );
        assert_eq!(lex("#").classify(&options).unwrap(), LexemeCategory::Other("#"));
        assert_eq!(lex("é").classify(&options).unwrap(), LexemeCategory::Other("é"));
    }

    #[test]
    fn test_classify_brackets() {
        let options = SyntaxOptions::new();
        assert_eq!(
            lex("[").classify(&options).unwrap(),
            LexemeCategory::Bracket {
                bracket: Bracket::Square,
                open: true
            }
        );
        assert_eq!(
            lex("}").classify(&options).unwrap(),
            LexemeCategory::Bracket {
                bracket: Bracket::Curly,
                open: false
            }
        );
        // `<` and `>` are comparison operators first
        assert_eq!(
            lex("<").classify(&options).unwrap(),
            LexemeCategory::InfixOp(InfixOp::Lt)
        );
    }

    #[test]
    fn test_classify_falls_through_disabled_operators() {
        let options = SyntaxOptions::new()
            .with_prefixes(Allowed::None)
            .with_infixes(Allowed::except([InfixOp::Colon]));

        assert_eq!(
            lex("+").classify(&options).unwrap(),
            LexemeCategory::InfixOp(InfixOp::Plus)
        );
        assert_eq!(
            lex(":").classify(&options).unwrap(),
            LexemeCategory::Separator(Separator::Colon)
        );

        let options = options.with_infixes(Allowed::None);
        assert_eq!(
            lex("<").classify(&options).unwrap(),
            LexemeCategory::Bracket {
                bracket: Bracket::Angle,
                open: true
            }
        );
    }

    #[test]
    fn test_classify_disabled_identifier_is_error() {
        let options = SyntaxOptions::new().with_identifiers(Allowed::only(["x".to_string()]));

        assert_eq!(
            lex("x").classify(&options).unwrap(),
            LexemeCategory::Identifier("x")
        );
        let err = lex("y").classify(&options).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Disallowed {
                category: Expected::Identifier,
                ..
            }
        ));
        assert!(err.to_string().contains("does not match syntax rules"));

        let options = SyntaxOptions::new().with_numerics(Allowed::None);
        assert!(lex("7").classify(&options).is_err());
    }

    #[test]
    fn test_classify_is_idempotent() {
        let options = SyntaxOptions::new().with_postfixes(Allowed::None);
        for text in ["a", "1", "++", "?", "(", ")", ",", "'", " ", "", "~"] {
            let lexeme = lex(text);
            assert_eq!(lexeme.classify(&options), lexeme.classify(&options));
        }
    }

    #[test]
    fn test_to_separator() {
        let options = SyntaxOptions::new();
        assert_eq!(lex("\t ").to_separator(&options), Some(Separator::Space));
        assert_eq!(lex(".").to_separator(&options), Some(Separator::Dot));
        assert_eq!(lex(";").to_separator(&options), None);

        let options = options.with_separators(Allowed::except([Separator::Space]));
        assert_eq!(lex(" ").to_separator(&options), None);
    }

    #[test]
    fn test_disallowed_category() {
        let options = SyntaxOptions::new().with_infixes(Allowed::except([InfixOp::Pow]));
        assert_eq!(lex("**").disallowed_category(&options), Some(Expected::InfixOp));
        assert_eq!(lex("*").disallowed_category(&options), None);
        assert_eq!(lex("#").disallowed_category(&options), None);

        // `+` is still usable as a prefix
        let options = SyntaxOptions::new().with_infixes(Allowed::None);
        assert_eq!(lex("+").disallowed_category(&options), None);

        let options = options
            .with_prefixes(Allowed::None)
            .with_postfixes(Allowed::None);
        assert_eq!(lex("+").disallowed_category(&options), Some(Expected::PrefixOp));
    }

    #[test]
    fn test_join_and_text_builder() {
        let source = "ab cd";
        let a = Lexeme::new(source, 0, 2);
        let space = Lexeme::new(source, 2, 3);
        let c = Lexeme::new(source, 3, 5);
        assert_eq!(a.join(space).map(|l| l.text()), Some("ab "));
        assert!(a.join(c).is_none());

        let mut builder = TextBuilder::default();
        builder.push(a);
        builder.push(space);
        builder.push(c);
        assert!(matches!(builder.finish(), Cow::Borrowed("ab cd")));

        let mut builder = TextBuilder::default();
        builder.push(Lexeme::from_text("x"));
        builder.push(Lexeme::from_text("y"));
        assert!(matches!(builder.finish(), Cow::Owned(ref s) if s == "xy"));

        assert_eq!(TextBuilder::default().finish(), "");
    }

    #[test]
    fn test_remainder() {
        let source = "a + b";
        assert_eq!(Lexeme::new(source, 2, 3).remainder(), "+ b");
        assert_eq!(Lexeme::terminal_at(source, 99).remainder(), "");
    }
}
