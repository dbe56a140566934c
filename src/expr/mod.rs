//! Expression syntax core
//!
//! Tokenizes text into lexemes and parses them into expression trees under a
//! configurable dialect.
//!
//! # Module Organization
//!
//! ## Lexing
//! - [`char_class`] - Character kinds and lexeme boundaries
//! - [`lexeme`] - Borrowed text slices and their classification
//! - [`lexer`] - Splitting text into lexemes
//! - [`cursor`] - Bidirectional cursor over lexemes
//!
//! ## Vocabulary and Dialects
//! - [`vocab`] - Operators, quotes, brackets and separators
//! - [`options`] - Per-category allow lists
//!
//! ## Parsing
//! - [`parser`] - Recursive descent grammar over a cursor
//! - [`syntax_parser`] - Whole-input entry points
//! - [`ast`] - Expression tree
//! - [`evaluator`] - Bottom-up evaluation
//!
//! ## Diagnostics
//! - [`error`] - Parse errors
//! - [`source_location`] - Line/column tracking
//! - [`debug`] - Tree printer

// ============================================================================
// Module Declarations
// ============================================================================

pub mod ast;
pub mod char_class;
pub mod cursor;
pub mod debug;
pub mod error;
pub mod evaluator;
pub mod lexeme;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod source_location;
pub mod syntax_parser;
pub mod vocab;

// ============================================================================
// Core Types
// ============================================================================

pub use ast::Expr;
pub use error::{ErrorKind, Expected, ParseError, ParseResult};
pub use options::{Allowed, SyntaxOptions};
pub use parser::{ExprParser, DEFAULT_MAX_DEPTH};
pub use syntax_parser::{parse_batch, SyntaxParser};

// ============================================================================
// Lexing
// ============================================================================

pub use char_class::CharKind;
pub use cursor::TokenCursor;
pub use lexeme::{Lexeme, LexemeCategory};
pub use lexer::{tokenize, Tokenizer};

// ============================================================================
// Vocabulary
// ============================================================================

pub use vocab::{Bracket, InfixCategory, InfixOp, PostfixOp, PrefixOp, Quote, Separator, Symbol};

// ============================================================================
// Evaluation and Diagnostics
// ============================================================================

pub use debug::TreePrinter;
pub use evaluator::{EvalValue, Evaluator, Value};
pub use source_location::{SourceFormatter, SourcePosition};
