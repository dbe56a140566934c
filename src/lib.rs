//! Exprsyntax - Configurable Expression Syntax Parser
//!
//! Parses small expression languages such as filter queries, attribute
//! conditions or calculator input. It provides:
//! - A character-kind lexer producing zero-copy lexemes
//! - A bidirectional token cursor with whitespace skipping
//! - A recursive descent parser for prefix, infix and postfix operators,
//!   quoted literals, brackets and separated sequences
//! - Dialects that enable or disable each vocabulary category
//! - An evaluator trait for giving meaning to parsed trees
//!
//! ## Quick Start
//!
//! ```rust
//! use exprsyntax::{Expr, InfixOp, SyntaxParser};
//!
//! let parser = SyntaxParser::new();
//! let expr = parser.parse_expression("a == 'x'").unwrap();
//!
//! assert_eq!(
//!     expr,
//!     Expr::binary(
//!         Expr::identifier("a"),
//!         InfixOp::Eq2,
//!         Expr::literal(exprsyntax::Quote::Single, "x"),
//!     )
//! );
//! ```
//!
//! ## Restricting the Dialect
//!
//! ```rust
//! use exprsyntax::{Allowed, InfixOp, SyntaxOptions, SyntaxParser};
//!
//! let options = SyntaxOptions::new()
//!     .with_infixes(Allowed::only([InfixOp::Eq, InfixOp::And2, InfixOp::Or2]));
//! let parser = SyntaxParser::with_options(options);
//!
//! assert!(parser.parse_expression("a = 1 && b = 2").is_ok());
//! assert!(parser.parse_expression("a + 1").is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `logging` - Enable debug logging using the `log` crate
//! - `parallel` - Parse batches of inputs on the rayon thread pool

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Prelude module for convenient imports
pub mod prelude;

pub mod expr;

/// Re-export commonly used types for convenience
pub use expr::{
    // Lexing
    lexer::tokenize,
    Lexeme,
    TokenCursor,
    // Vocabulary
    Bracket,
    InfixOp,
    PostfixOp,
    PrefixOp,
    Quote,
    Separator,
    // Dialects
    Allowed,
    SyntaxOptions,
    // Parsing
    Expr,
    ExprParser,
    ParseError,
    ParseResult,
    SyntaxParser,
    // Evaluation
    Evaluator,
    Value,
};
