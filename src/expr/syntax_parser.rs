//! Parser facade
//!
//! [`SyntaxParser`] owns a [`SyntaxOptions`] and runs one grammar entry point
//! over a fresh cursor per call. Single-item entry points require the whole
//! input to be consumed; list entry points repeat until it is.
//!
//! # Example
//!
//! ```rust
//! use exprsyntax::expr::{Expr, InfixOp, SyntaxParser};
//!
//! let parser = SyntaxParser::new();
//! let expr = parser.parse_expression("1 + 2").unwrap();
//! assert_eq!(
//!     expr,
//!     Expr::binary(Expr::numeric("1"), InfixOp::Plus, Expr::numeric("2"))
//! );
//!
//! assert!(parser.parse_expression("1 + 2 3").is_err());
//! assert_eq!(parser.parse_expressions_list("1 + 2 3").unwrap().len(), 2);
//! ```

use super::ast::Expr;
use super::error::{ParseError, ParseResult};
use super::options::SyntaxOptions;
use super::parser::{log_debug, ExprParser, DEFAULT_MAX_DEPTH};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Entry points over one dialect
#[derive(Debug, Clone)]
pub struct SyntaxParser {
    options: SyntaxOptions,
    max_depth: usize,
}

impl SyntaxParser {
    /// Parser accepting every category
    pub fn new() -> Self {
        Self::with_options(SyntaxOptions::ALL_ALLOWED)
    }

    /// Parser for a specific dialect
    pub fn with_options(options: SyntaxOptions) -> Self {
        Self {
            options,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Dialect in use
    pub fn options(&self) -> &SyntaxOptions {
        &self.options
    }

    fn parser<'p, 'src>(&'p self, input: &'src str) -> ExprParser<'p, 'src> {
        ExprParser::for_source(&self.options, input).with_max_depth(self.max_depth)
    }

    fn parse_one<'src>(
        &self,
        input: &'src str,
        step: impl FnOnce(&mut ExprParser<'_, 'src>) -> ParseResult<Expr<'src>>,
    ) -> ParseResult<Expr<'src>> {
        let mut parser = self.parser(input);
        let expr = step(&mut parser)?;
        parser.assert_at_the_end()?;
        Ok(expr)
    }

    fn parse_list<'src>(
        &self,
        input: &'src str,
        mut step: impl FnMut(&mut ExprParser<'_, 'src>) -> ParseResult<Expr<'src>>,
    ) -> ParseResult<Vec<Expr<'src>>> {
        let mut parser = self.parser(input);
        let mut items = Vec::new();
        while !parser.cursor().is_at_the_end() {
            items.push(step(&mut parser)?);
        }
        Ok(items)
    }

    /// One sequence (or a single operation) covering the whole input
    pub fn parse_sequence<'src>(&self, input: &'src str) -> ParseResult<Expr<'src>> {
        log_debug!("parse_sequence: {:?}", input);
        self.parse_one(input, |parser| parser.parse_sequence())
    }

    /// One term covering the whole input
    pub fn parse_term<'src>(&self, input: &'src str) -> ParseResult<Expr<'src>> {
        log_debug!("parse_term: {:?}", input);
        self.parse_one(input, |parser| parser.parse_term())
    }

    /// One operation covering the whole input
    pub fn parse_expression<'src>(&self, input: &'src str) -> ParseResult<Expr<'src>> {
        log_debug!("parse_expression: {:?}", input);
        self.parse_one(input, |parser| parser.parse_operation())
    }

    /// Terms, one after another, until the input is exhausted
    pub fn parse_terms_list<'src>(&self, input: &'src str) -> ParseResult<Vec<Expr<'src>>> {
        log_debug!("parse_terms_list: {:?}", input);
        self.parse_list(input, |parser| parser.parse_term())
    }

    /// Operations, one after another, until the input is exhausted
    pub fn parse_expressions_list<'src>(
        &self,
        input: &'src str,
    ) -> ParseResult<Vec<Expr<'src>>> {
        log_debug!("parse_expressions_list: {:?}", input);
        self.parse_list(input, |parser| parser.parse_operation())
    }
}

impl Default for SyntaxParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse many independent inputs with [`SyntaxParser::parse_expression`]
///
/// Results come back in input order. With the `parallel` feature the inputs
/// are spread over the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn parse_batch<'src>(
    parser: &SyntaxParser,
    inputs: &[&'src str],
) -> Vec<Result<Expr<'src>, ParseError>> {
    inputs
        .par_iter()
        .map(|&input| parser.parse_expression(input))
        .collect()
}

/// Parse many independent inputs with [`SyntaxParser::parse_expression`]
///
/// Results come back in input order. With the `parallel` feature the inputs
/// are spread over the rayon thread pool.
#[cfg(not(feature = "parallel"))]
pub fn parse_batch<'src>(
    parser: &SyntaxParser,
    inputs: &[&'src str],
) -> Vec<Result<Expr<'src>, ParseError>> {
    inputs
        .iter()
        .map(|&input| parser.parse_expression(input))
        .collect()
}
