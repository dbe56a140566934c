//! Expression parser
//!
//! Recursive descent over a [`TokenCursor`], with single-step lookahead and
//! lookbehind and no backtracking. The grammar, loosely:
//!
//! ```text
//! sequence  := operation (separator operand)*
//! operation := operand (infix operand)*
//!            | operand separator operand (separator operand)*
//! operand   := prefix? term postfix?
//! term      := identifier | numeric | literal | '(' operation ')' | prefix operation
//! literal   := quote any* quote
//! ```
//!
//! There is no precedence: a run of two operands becomes [`Expr::Binary`],
//! a longer run becomes one flat [`Expr::MultiAri`]. Whitespace acts as a
//! separator only at the sequence level, detected by looking back at the
//! lexeme just consumed.
//!
//! Each method leaves the cursor after what it parsed, past one trailing
//! whitespace lexeme at most.

use super::ast::Expr;
use super::cursor::TokenCursor;
use super::error::{Expected, ParseError, ParseResult};
use super::lexeme::{Lexeme, LexemeCategory, TextBuilder};
use super::options::SyntaxOptions;
use super::vocab::{Bracket, Separator};

/// Logging macros - no-op when logging feature is disabled
#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Logging macros - use log crate when logging feature is enabled
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

pub(crate) use log_debug;

/// Default maximum nesting of operations (brackets and stacked prefixes)
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser state for one input
pub struct ExprParser<'o, 'src> {
    options: &'o SyntaxOptions,
    cursor: TokenCursor<'src>,
    depth: usize,
    max_depth: usize,
}

impl<'o, 'src> ExprParser<'o, 'src> {
    /// Parser over an existing cursor
    pub fn new(options: &'o SyntaxOptions, cursor: TokenCursor<'src>) -> Self {
        Self {
            options,
            cursor,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Tokenize `source` and build a parser over it
    pub fn for_source(options: &'o SyntaxOptions, source: &'src str) -> Self {
        Self::new(options, TokenCursor::from_source(source))
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Current cursor
    pub fn cursor(&self) -> &TokenCursor<'src> {
        &self.cursor
    }

    /// Mutable cursor, for driving sub-steps by hand
    pub fn cursor_mut(&mut self) -> &mut TokenCursor<'src> {
        &mut self.cursor
    }

    /// Options in effect
    pub fn options(&self) -> &'o SyntaxOptions {
        self.options
    }

    // ========================================================================
    // Grammar
    // ========================================================================

    /// Parse an operation, then any further operands joined by one separator
    /// kind; a whitespace gap after the first item counts as the separator
    pub fn parse_sequence(&mut self) -> ParseResult<Expr<'src>> {
        log_debug!("parse_sequence at {}", self.cursor.peek_next());

        let first = self.parse_operation()?;
        if matches!(first, Expr::Sequence { .. }) {
            return Ok(first);
        }

        let after_whitespace = self.cursor.peek_last().is_whitespace();
        let lexeme = self.cursor.peek_next_non_whitespace();
        if let Some(separator) = lexeme.to_separator(self.options) {
            self.cursor.skip_whitespace_and_next();
            return self.parse_sequence_from_first(first, separator);
        }
        if lexeme.is_terminal() {
            return Ok(first);
        }
        if after_whitespace && self.options.separators().allows(&Separator::Space) {
            return self.parse_sequence_from_first(first, Separator::Space);
        }
        Err(self.unexpected(Expected::Separator, lexeme))
    }

    /// Parse a single term: identifier, numeric, literal, bracketed
    /// expression, or a prefix operator applied to an operation
    pub fn parse_term(&mut self) -> ParseResult<Expr<'src>> {
        let lexeme = self.cursor.skip_if_whitespace().peek_next();
        log_debug!("parse_term at {}", lexeme);

        match lexeme.classify(self.options)? {
            LexemeCategory::Identifier(name) => {
                self.cursor.skip_one().skip_if_whitespace();
                Ok(Expr::identifier(name))
            }
            LexemeCategory::Numeric(value) => {
                self.cursor.skip_one().skip_if_whitespace();
                Ok(Expr::numeric(value))
            }
            LexemeCategory::PrefixOp(_) => self.parse_operation(),
            LexemeCategory::Quote(_) => self.parse_literal(),
            LexemeCategory::Bracket { open: true, .. } => self.parse_expr_in_brackets(),
            LexemeCategory::Bracket {
                bracket,
                open: false,
            } => Err(ParseError::UnexpectedClosingBracket {
                bracket,
                offset: lexeme.start(),
            }),
            LexemeCategory::Terminal
            | LexemeCategory::Whitespace
            | LexemeCategory::InfixOp(_)
            | LexemeCategory::PostfixOp(_)
            | LexemeCategory::Separator(_)
            | LexemeCategory::Other(_) => Err(self.unexpected(Expected::Term, lexeme)),
        }
    }

    /// Parse quoted text; everything up to the matching quote kind is kept
    /// verbatim, other quote kinds included
    pub fn parse_literal(&mut self) -> ParseResult<Expr<'src>> {
        let open = self.cursor.next_non_whitespace();
        log_debug!("parse_literal at {}", open);

        let quote = match open.to_quote(self.options) {
            Some(quote) => quote,
            None => return Err(self.unexpected(Expected::Quote, open)),
        };

        let mut text = TextBuilder::default();
        loop {
            let lexeme = self.cursor.next();
            if lexeme.is_terminal() {
                return Err(ParseError::UnterminatedLiteral {
                    quote,
                    offset: open.start(),
                });
            }
            if lexeme.to_quote(self.options) == Some(quote) {
                self.cursor.skip_if_whitespace();
                return Ok(Expr::literal(quote, text.finish()));
            }
            text.push(lexeme);
        }
    }

    /// Parse an operation enclosed in one bracket pair of the same kind
    pub fn parse_expr_in_brackets(&mut self) -> ParseResult<Expr<'src>> {
        let open = self.cursor.next_non_whitespace();
        log_debug!("parse_expr_in_brackets at {}", open);

        let opening = match open.to_bracket(self.options) {
            Some(bracket) if Bracket::is_open(open.text()) => bracket,
            _ => return Err(self.unexpected(Expected::OpenBracket, open)),
        };

        let inner = self.parse_operation()?;

        let close = self.cursor.next_non_whitespace();
        let closing = match close.to_bracket(self.options) {
            Some(bracket) if Bracket::is_close(close.text()) => bracket,
            _ => return Err(self.unexpected(Expected::CloseBracket, close)),
        };
        self.cursor.skip_if_whitespace();

        if opening != closing {
            return Err(ParseError::BracketMismatch {
                open: opening,
                close: closing,
                offset: close.start(),
            });
        }
        Ok(Expr::in_brackets(opening, inner))
    }

    /// Parse operands joined by infix operators, or by one non-whitespace
    /// separator kind
    pub fn parse_operation(&mut self) -> ParseResult<Expr<'src>> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::RecursionLimitExceeded {
                depth: self.depth,
                max_depth: self.max_depth,
            });
        }
        let result = self.parse_operation_run();
        self.depth -= 1;
        result
    }

    fn parse_operation_run(&mut self) -> ParseResult<Expr<'src>> {
        log_debug!("parse_operation at {}", self.cursor.peek_next());

        let left = self.parse_operand()?;

        let lexeme = self.cursor.peek_next_non_whitespace();
        let Some(op) = lexeme.to_infix_op(self.options) else {
            return match lexeme.to_separator(self.options) {
                Some(separator) if !separator.is_whitespace() => {
                    self.cursor.next_non_whitespace();
                    self.parse_sequence_from_first(left, separator)
                }
                _ => Ok(left),
            };
        };
        self.cursor.next_non_whitespace();

        let right = self.parse_operand()?;
        let mut lexeme = self.cursor.skip_if_whitespace().peek_next();
        let Some(mut next_op) = lexeme.to_infix_op(self.options) else {
            return Ok(Expr::binary(left, op, right));
        };

        let mut rest = vec![(op, right)];
        loop {
            self.cursor.next_non_whitespace();
            let operand = self.parse_operand()?;
            rest.push((next_op, operand));

            lexeme = self.cursor.skip_if_whitespace().peek_next();
            match lexeme.to_infix_op(self.options) {
                Some(op) => next_op = op,
                None => return Ok(Expr::multi_ari(left, rest)),
            }
        }
    }

    /// Parse a term with an optional prefix and an optional postfix operator
    pub fn parse_operand(&mut self) -> ParseResult<Expr<'src>> {
        let lexeme = self.cursor.skip_if_whitespace().peek_next();
        log_debug!("parse_operand at {}", lexeme);

        let prefix = lexeme.to_prefix_op(self.options);
        if prefix.is_some() {
            self.cursor.skip_whitespace_and_next();
        }

        let term = self.parse_term()?;

        let lexeme = self.cursor.skip_if_whitespace().peek_next_non_whitespace();
        let mut postfix = lexeme.to_postfix_op(self.options);
        if postfix.is_some() && self.continues_as_infix(lexeme) {
            postfix = None;
        }
        if postfix.is_some() {
            self.cursor.skip_whitespace_and_next();
        }
        self.cursor.skip_if_whitespace();

        let operand = match prefix {
            Some(op) => Expr::prefix(op, term),
            None => term,
        };
        Ok(match postfix {
            Some(op) => Expr::postfix(operand, op),
            None => operand,
        })
    }

    /// Continue a sequence whose first item and separator are known
    pub fn parse_sequence_from_first(
        &mut self,
        first: Expr<'src>,
        separator: Separator,
    ) -> ParseResult<Expr<'src>> {
        log_debug!(
            "parse_sequence_from_first `{}` at {}",
            separator,
            self.cursor.peek_next()
        );

        let by_whitespace = separator.is_whitespace();
        let mut terms = vec![first];
        loop {
            terms.push(self.parse_operand()?);

            let lexeme = if by_whitespace {
                self.cursor.skip_back_if_whitespace().peek_next()
            } else {
                self.cursor.peek_next_non_whitespace()
            };
            let Some(found) = lexeme.to_separator(self.options) else {
                return Ok(Expr::sequence(separator, terms));
            };
            if found != separator {
                return Err(ParseError::SeparatorMismatch {
                    expected: separator,
                    found,
                    offset: lexeme.start(),
                });
            }

            if by_whitespace {
                if self.cursor.skip_if_whitespace().is_at_the_end() {
                    return Ok(Expr::sequence(separator, terms));
                }
            } else {
                self.cursor.next_non_whitespace();
            }
        }
    }

    /// Check that nothing but whitespace is left
    pub fn assert_at_the_end(&self) -> ParseResult<()> {
        let lexeme = self.cursor.peek_next_non_whitespace();
        if lexeme.is_terminal() {
            return Ok(());
        }
        if let Some(category) = lexeme.disallowed_category(self.options) {
            return Err(ParseError::Disallowed {
                category,
                lexeme: lexeme.text().to_string(),
                offset: lexeme.start(),
            });
        }
        Err(ParseError::Unresolved {
            remainder: lexeme.remainder().to_string(),
            offset: lexeme.start(),
        })
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Whether `lexeme`, sitting in postfix position, reads better as an
    /// infix operator because an operand follows it
    fn continues_as_infix(&mut self, lexeme: Lexeme<'src>) -> bool {
        if lexeme.to_infix_op(self.options).is_none() {
            return false;
        }
        let saved = self.cursor.position();
        let after = self
            .cursor
            .skip_whitespace_and_next()
            .peek_next_non_whitespace();
        self.cursor.reset_to(saved);
        self.starts_operand(after)
    }

    fn starts_operand(&self, lexeme: Lexeme<'src>) -> bool {
        if lexeme.is_identifier() || lexeme.is_numeric() {
            return true;
        }
        matches!(
            lexeme.classify(self.options),
            Ok(LexemeCategory::PrefixOp(_)
                | LexemeCategory::Quote(_)
                | LexemeCategory::Bracket { open: true, .. })
        )
    }

    /// Structural error, reported as disallowed when the lexeme is a known
    /// symbol whose every category is disabled
    fn unexpected(&self, expected: Expected, lexeme: Lexeme<'src>) -> ParseError {
        if let Some(category) = lexeme.disallowed_category(self.options) {
            return ParseError::Disallowed {
                category,
                lexeme: lexeme.text().to_string(),
                offset: lexeme.start(),
            };
        }
        ParseError::Unexpected {
            expected,
            found: lexeme.text().to_string(),
            offset: lexeme.start(),
        }
    }
}
