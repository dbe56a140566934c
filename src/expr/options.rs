//! Syntax configuration
//!
//! [`SyntaxOptions`] holds one [`Allowed`] list per lexeme category and decides
//! which symbols of the base vocabularies are valid in a dialect. It is
//! immutable once built: every `with_*` call returns a new value.
//!
//! # Example
//!
//! ```rust
//! use exprsyntax::expr::{Allowed, InfixOp, SyntaxOptions};
//!
//! let options = SyntaxOptions::new()
//!     .with_infixes(Allowed::only([InfixOp::Eq, InfixOp::And2, InfixOp::Or2]))
//!     .with_postfixes(Allowed::None);
//!
//! assert!(options.infixes().allows(&InfixOp::Eq));
//! assert!(!options.infixes().allows(&InfixOp::Plus));
//! ```

use super::error::{Expected, ParseError, ParseResult};
use super::vocab::{Bracket, InfixOp, PostfixOp, PrefixOp, Quote, Separator};
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::hash::Hash;

/// Allow-list over a set of values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "snake_case",
    tag = "mode",
    content = "values",
    bound(
        serialize = "T: Serialize + Eq + Hash",
        deserialize = "T: Deserialize<'de> + Eq + Hash"
    )
)]
pub enum Allowed<T: Eq + Hash> {
    /// Every value is allowed
    All,
    /// No value is allowed
    None,
    /// Only the listed values are allowed
    Only(HashSet<T>),
    /// Everything except the listed values is allowed
    Except(HashSet<T>),
}

impl<T: Eq + Hash> Allowed<T> {
    /// Whitelist
    pub fn only(values: impl IntoIterator<Item = T>) -> Self {
        Allowed::Only(values.into_iter().collect())
    }

    /// Blacklist
    pub fn except(values: impl IntoIterator<Item = T>) -> Self {
        Allowed::Except(values.into_iter().collect())
    }

    /// Check a single value
    pub fn allows<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self {
            Allowed::All => true,
            Allowed::None => false,
            Allowed::Only(set) => set.contains(value),
            Allowed::Except(set) => !set.contains(value),
        }
    }

    /// Pass a value through when it is allowed, drop it otherwise
    pub fn allow_or_none(&self, value: Option<T>) -> Option<T> {
        value.filter(|value| self.allows(value))
    }
}

impl<T: Eq + Hash> Default for Allowed<T> {
    fn default() -> Self {
        Allowed::All
    }
}

impl Allowed<String> {
    /// Pass a textual value through, or fail with a disallowed error naming `category`
    pub fn allow_or_err<'a>(
        &self,
        text: &'a str,
        category: Expected,
        offset: usize,
    ) -> ParseResult<&'a str> {
        if self.allows(text) {
            Ok(text)
        } else {
            Err(ParseError::Disallowed {
                category,
                lexeme: text.to_string(),
                offset,
            })
        }
    }
}

/// Per-category allow-lists for one dialect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxOptions {
    identifiers: Allowed<String>,
    numerics: Allowed<String>,
    prefixes: Allowed<PrefixOp>,
    infixes: Allowed<InfixOp>,
    postfixes: Allowed<PostfixOp>,
    separators: Allowed<Separator>,
    quotes: Allowed<Quote>,
    brackets: Allowed<Bracket>,
}

impl SyntaxOptions {
    /// Every category fully enabled
    pub const ALL_ALLOWED: SyntaxOptions = SyntaxOptions {
        identifiers: Allowed::All,
        numerics: Allowed::All,
        prefixes: Allowed::All,
        infixes: Allowed::All,
        postfixes: Allowed::All,
        separators: Allowed::All,
        quotes: Allowed::All,
        brackets: Allowed::All,
    };

    /// Same as [`SyntaxOptions::ALL_ALLOWED`]
    pub fn new() -> Self {
        Self::ALL_ALLOWED
    }

    /// Replace the identifier allow-list
    pub fn with_identifiers(mut self, identifiers: Allowed<String>) -> Self {
        self.identifiers = identifiers;
        self
    }

    /// Replace the numeric allow-list
    pub fn with_numerics(mut self, numerics: Allowed<String>) -> Self {
        self.numerics = numerics;
        self
    }

    /// Replace the prefix operator allow-list
    pub fn with_prefixes(mut self, prefixes: Allowed<PrefixOp>) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// Replace the infix operator allow-list
    pub fn with_infixes(mut self, infixes: Allowed<InfixOp>) -> Self {
        self.infixes = infixes;
        self
    }

    /// Replace the postfix operator allow-list
    pub fn with_postfixes(mut self, postfixes: Allowed<PostfixOp>) -> Self {
        self.postfixes = postfixes;
        self
    }

    /// Replace the separator allow-list
    pub fn with_separators(mut self, separators: Allowed<Separator>) -> Self {
        self.separators = separators;
        self
    }

    /// Replace the quote allow-list
    pub fn with_quotes(mut self, quotes: Allowed<Quote>) -> Self {
        self.quotes = quotes;
        self
    }

    /// Replace the bracket allow-list
    pub fn with_brackets(mut self, brackets: Allowed<Bracket>) -> Self {
        self.brackets = brackets;
        self
    }

    /// Identifier allow-list
    pub fn identifiers(&self) -> &Allowed<String> {
        &self.identifiers
    }

    /// Numeric allow-list
    pub fn numerics(&self) -> &Allowed<String> {
        &self.numerics
    }

    /// Prefix operator allow-list
    pub fn prefixes(&self) -> &Allowed<PrefixOp> {
        &self.prefixes
    }

    /// Infix operator allow-list
    pub fn infixes(&self) -> &Allowed<InfixOp> {
        &self.infixes
    }

    /// Postfix operator allow-list
    pub fn postfixes(&self) -> &Allowed<PostfixOp> {
        &self.postfixes
    }

    /// Separator allow-list
    pub fn separators(&self) -> &Allowed<Separator> {
        &self.separators
    }

    /// Quote allow-list
    pub fn quotes(&self) -> &Allowed<Quote> {
        &self.quotes
    }

    /// Bracket allow-list
    pub fn brackets(&self) -> &Allowed<Bracket> {
        &self.brackets
    }

    /// Load a dialect from its JSON form
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize this dialect to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for SyntaxOptions {
    fn default() -> Self {
        Self::ALL_ALLOWED
    }
}
