//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from exprsyntax.
//! Importing this module with a wildcard import brings the core types into scope:
//!
//! ```
//! use exprsyntax::prelude::*;
//!
//! let expr = SyntaxParser::new().parse_expression("!a").unwrap();
//! assert_eq!(expr, Expr::prefix(PrefixOp::Not, Expr::identifier("a")));
//! ```
//!
//! # Re-exported Items
//!
//! ## Parsing
//! - [`SyntaxParser`] - Whole-input entry points
//! - [`ExprParser`] - Grammar over a cursor
//! - [`Expr`] - Expression tree
//! - [`ParseError`] - Parse error type
//! - [`ParseResult`] - Result of a parse operation
//!
//! ## Dialects
//! - [`SyntaxOptions`] - Allowed vocabulary per category
//! - [`Allowed`] - Allow list for one category
//!
//! ## Vocabulary
//! - [`InfixOp`], [`PrefixOp`], [`PostfixOp`] - Operators
//! - [`Quote`], [`Bracket`], [`Separator`] - Delimiters
//! - [`Symbol`] - Symbol text lookup
//!
//! ## Lexing
//! - [`tokenize()`] - Split text into lexemes
//! - [`Lexeme`] - Borrowed lexeme
//! - [`TokenCursor`] - Cursor over lexemes
//!
//! ## Evaluation
//! - [`Evaluator`] - Callback per expression shape
//! - [`EvalValue`] - Values built by default callbacks
//! - [`Value`] - Dynamic value type

// ============================================================================
// Parsing
// ============================================================================

pub use crate::expr::{Expr, ExprParser, ParseError, ParseResult, SyntaxParser};

// ============================================================================
// Dialects
// ============================================================================

pub use crate::expr::{Allowed, SyntaxOptions};

// ============================================================================
// Vocabulary
// ============================================================================

pub use crate::expr::{Bracket, InfixOp, PostfixOp, PrefixOp, Quote, Separator, Symbol};

// ============================================================================
// Lexing
// ============================================================================

pub use crate::expr::{tokenize, Lexeme, TokenCursor};

// ============================================================================
// Evaluation
// ============================================================================

pub use crate::expr::{EvalValue, Evaluator, Value};
