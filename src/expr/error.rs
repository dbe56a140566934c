//! Parse errors
//!
//! Every failure carries the offending lexeme text, the byte offset where it
//! starts and, where it applies, the category the parser expected there.

use super::source_location::{SourceFormatter, SourcePosition};
use super::vocab::{Bracket, Quote, Separator, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a parse operation
pub type ParseResult<T> = Result<T, ParseError>;

/// Lexeme category named in an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    /// Identifier, numeric, literal, bracketed expression or prefixed term
    Term,
    /// Identifier
    Identifier,
    /// Numeric
    Numeric,
    /// Prefix operator
    PrefixOp,
    /// Infix operator
    InfixOp,
    /// Postfix operator
    PostfixOp,
    /// Opening quote
    Quote,
    /// Opening bracket
    OpenBracket,
    /// Closing bracket
    CloseBracket,
    /// Sequence separator
    Separator,
    /// End of input
    Terminal,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Expected::Term => "term",
            Expected::Identifier => "identifier",
            Expected::Numeric => "numeric",
            Expected::PrefixOp => "prefix operator",
            Expected::InfixOp => "infix operator",
            Expected::PostfixOp => "postfix operator",
            Expected::Quote => "quote",
            Expected::OpenBracket => "opening bracket",
            Expected::CloseBracket => "closing bracket",
            Expected::Separator => "sequence separator",
            Expected::Terminal => "end of input",
        };
        f.write_str(name)
    }
}

/// Broad error class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A lexeme matched a category that the dialect disables
    Lexical,
    /// The lexeme sequence does not fit the grammar
    Structural,
    /// Parsing finished before the end of input
    TrailingInput,
    /// A configured limit was hit
    Limit,
}

/// Errors that can occur while parsing an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Lexeme belongs to a category disabled in the syntax options
    Disallowed {
        /// Category the lexeme matched
        category: Expected,
        /// Lexeme text
        lexeme: String,
        /// Byte offset of the lexeme
        offset: usize,
    },

    /// Lexeme does not fit the grammar at this point
    Unexpected {
        /// What the parser was looking for
        expected: Expected,
        /// Lexeme text (empty at end of input)
        found: String,
        /// Byte offset of the lexeme
        offset: usize,
    },

    /// A closing bracket where a term should start
    UnexpectedClosingBracket {
        /// Bracket kind
        bracket: Bracket,
        /// Byte offset of the bracket
        offset: usize,
    },

    /// Opening and closing brackets differ in kind
    BracketMismatch {
        /// Opening kind
        open: Bracket,
        /// Closing kind
        close: Bracket,
        /// Byte offset of the closing bracket
        offset: usize,
    },

    /// End of input reached inside a quoted literal
    UnterminatedLiteral {
        /// Opening quote
        quote: Quote,
        /// Byte offset of the opening quote
        offset: usize,
    },

    /// A sequence mixes separator kinds
    SeparatorMismatch {
        /// Separator the sequence started with
        expected: Separator,
        /// Separator found
        found: Separator,
        /// Byte offset of the separator
        offset: usize,
    },

    /// Input left over after a complete parse
    Unresolved {
        /// Unconsumed input
        remainder: String,
        /// Byte offset of the remainder
        offset: usize,
    },

    /// Nesting exceeded the configured depth
    RecursionLimitExceeded {
        /// Depth reached
        depth: usize,
        /// Maximum allowed depth
        max_depth: usize,
    },
}

impl ParseError {
    /// Broad class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Disallowed { .. } => ErrorKind::Lexical,
            ParseError::Unresolved { .. } => ErrorKind::TrailingInput,
            ParseError::RecursionLimitExceeded { .. } => ErrorKind::Limit,
            _ => ErrorKind::Structural,
        }
    }

    /// Text of the offending lexeme
    pub fn lexeme(&self) -> &str {
        match self {
            ParseError::Disallowed { lexeme, .. } => lexeme,
            ParseError::Unexpected { found, .. } => found,
            ParseError::UnexpectedClosingBracket { bracket, .. } => bracket.close(),
            ParseError::BracketMismatch { close, .. } => close.close(),
            ParseError::UnterminatedLiteral { quote, .. } => quote.symbol(),
            ParseError::SeparatorMismatch { found, .. } => found.symbol(),
            ParseError::Unresolved { remainder, .. } => remainder,
            ParseError::RecursionLimitExceeded { .. } => "",
        }
    }

    /// Category the parser expected at the failure point
    pub fn expected(&self) -> Option<Expected> {
        match self {
            ParseError::Disallowed { category, .. } => Some(*category),
            ParseError::Unexpected { expected, .. } => Some(*expected),
            ParseError::UnexpectedClosingBracket { .. } => Some(Expected::Term),
            ParseError::BracketMismatch { .. } => Some(Expected::CloseBracket),
            ParseError::UnterminatedLiteral { .. } => Some(Expected::Quote),
            ParseError::SeparatorMismatch { .. } => Some(Expected::Separator),
            ParseError::Unresolved { .. } => Some(Expected::Terminal),
            ParseError::RecursionLimitExceeded { .. } => None,
        }
    }

    /// Byte offset of the failure, when known
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::Disallowed { offset, .. }
            | ParseError::Unexpected { offset, .. }
            | ParseError::UnexpectedClosingBracket { offset, .. }
            | ParseError::BracketMismatch { offset, .. }
            | ParseError::UnterminatedLiteral { offset, .. }
            | ParseError::SeparatorMismatch { offset, .. }
            | ParseError::Unresolved { offset, .. } => Some(*offset),
            ParseError::RecursionLimitExceeded { .. } => None,
        }
    }

    /// Line and column of the failure within `input`
    pub fn position(&self, input: &str) -> Option<SourcePosition> {
        self.offset()
            .map(|offset| SourcePosition::from_offset(input, offset))
    }

    /// Message followed by the offending source line and a caret
    pub fn format_with_source(&self, input: &str) -> String {
        match self.position(input) {
            Some(position) => format!(
                "{} at {}\n{}",
                self,
                position,
                SourceFormatter::format_line(input, position.offset, 0)
            ),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Disallowed {
                category, lexeme, ..
            } => {
                write!(
                    f,
                    "Syntax error. `{}` does not match syntax rules: {} is not allowed",
                    lexeme, category
                )
            }
            ParseError::Unexpected {
                expected, found, ..
            } => {
                if found.is_empty() {
                    write!(f, "Expected {}, but reached end of input", expected)
                } else {
                    write!(f, "Expected {}, but got: `{}`", expected, found)
                }
            }
            ParseError::UnexpectedClosingBracket { bracket, .. } => {
                write!(f, "Unexpected closing bracket: `{}`", bracket.close())
            }
            ParseError::BracketMismatch { open, close, .. } => {
                write!(
                    f,
                    "Brackets mismatch: `{}` closed by `{}`",
                    open.open(),
                    close.close()
                )
            }
            ParseError::UnterminatedLiteral { quote, .. } => {
                write!(f, "Expected literal closed by {}, but terminated", quote)
            }
            ParseError::SeparatorMismatch {
                expected, found, ..
            } => {
                write!(
                    f,
                    "Expected `{}` separator, but got: `{}`",
                    expected, found
                )
            }
            ParseError::Unresolved { remainder, .. } => {
                write!(f, "Unresolved expression: `{}`", remainder)
            }
            ParseError::RecursionLimitExceeded { depth, max_depth } => {
                write!(
                    f,
                    "Recursion limit exceeded: depth {} exceeds limit of {}",
                    depth, max_depth
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
