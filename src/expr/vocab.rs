//! Base vocabularies: operators, quotes, brackets and separators
//!
//! Each vocabulary is a closed enum implementing [`Symbol`]. Symbol lookup
//! goes through a hash index built once per vocabulary.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::sync::OnceLock;

/// A closed set of symbols with a textual spelling
pub trait Symbol: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every member of the vocabulary
    const ALL: &'static [Self];

    /// Canonical spelling
    fn symbol(self) -> &'static str;

    /// Look up a member by its exact spelling
    fn from_symbol(text: &str) -> Option<Self>;
}

fn index_by_symbol<T: Symbol>() -> HashMap<&'static str, T> {
    T::ALL.iter().map(|&item| (item.symbol(), item)).collect()
}

// ============================================================================
// Infix operators
// ============================================================================

/// Category tag attached to every infix operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InfixCategory {
    /// `+ - * ** / // % %%`
    Arithmetic,
    /// `&& ||`
    Logical,
    /// `& | ^ ^^ << <<< >> >>>`
    Bitwise,
    /// Equality and ordering
    Compare,
    /// Assignment, arrow, ternary parts
    Other,
}

/// Infix (binary) operator
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InfixOp {
    Plus,
    Minus,
    Mult,
    Pow,
    Div,
    Div2,
    Mod,
    Mod2,
    And,
    And2,
    Or,
    Or2,
    Xor,
    Xor2,
    Lsh,
    Lsh3,
    Rsh,
    Rsh3,
    Eq,
    Eq2,
    Eq3,
    Neq,
    Neq3,
    Gt,
    Lt,
    Ge,
    Le,
    Assign,
    Arrow,
    Question,
    Colon,
}

impl InfixOp {
    /// Category of this operator
    pub fn category(self) -> InfixCategory {
        use InfixOp::*;
        match self {
            Plus | Minus | Mult | Pow | Div | Div2 | Mod | Mod2 => InfixCategory::Arithmetic,
            And2 | Or2 => InfixCategory::Logical,
            And | Or | Xor | Xor2 | Lsh | Lsh3 | Rsh | Rsh3 => InfixCategory::Bitwise,
            Eq | Eq2 | Eq3 | Neq | Neq3 | Gt | Lt | Ge | Le => InfixCategory::Compare,
            Assign | Arrow | Question | Colon => InfixCategory::Other,
        }
    }
}

impl Symbol for InfixOp {
    const ALL: &'static [Self] = &[
        InfixOp::Plus,
        InfixOp::Minus,
        InfixOp::Mult,
        InfixOp::Pow,
        InfixOp::Div,
        InfixOp::Div2,
        InfixOp::Mod,
        InfixOp::Mod2,
        InfixOp::And,
        InfixOp::And2,
        InfixOp::Or,
        InfixOp::Or2,
        InfixOp::Xor,
        InfixOp::Xor2,
        InfixOp::Lsh,
        InfixOp::Lsh3,
        InfixOp::Rsh,
        InfixOp::Rsh3,
        InfixOp::Eq,
        InfixOp::Eq2,
        InfixOp::Eq3,
        InfixOp::Neq,
        InfixOp::Neq3,
        InfixOp::Gt,
        InfixOp::Lt,
        InfixOp::Ge,
        InfixOp::Le,
        InfixOp::Assign,
        InfixOp::Arrow,
        InfixOp::Question,
        InfixOp::Colon,
    ];

    fn symbol(self) -> &'static str {
        use InfixOp::*;
        match self {
            Plus => "+",
            Minus => "-",
            Mult => "*",
            Pow => "**",
            Div => "/",
            Div2 => "//",
            Mod => "%",
            Mod2 => "%%",
            And => "&",
            And2 => "&&",
            Or => "|",
            Or2 => "||",
            Xor => "^",
            Xor2 => "^^",
            Lsh => "<<",
            Lsh3 => "<<<",
            Rsh => ">>",
            Rsh3 => ">>>",
            Eq => "=",
            Eq2 => "==",
            Eq3 => "===",
            Neq => "!=",
            Neq3 => "!==",
            Gt => ">",
            Lt => "<",
            Ge => ">=",
            Le => "<=",
            Assign => ":=",
            Arrow => "->",
            Question => "?",
            Colon => ":",
        }
    }

    fn from_symbol(text: &str) -> Option<Self> {
        static INDEX: OnceLock<HashMap<&'static str, InfixOp>> = OnceLock::new();
        INDEX.get_or_init(index_by_symbol).get(text).copied()
    }
}

// ============================================================================
// Unary operators
// ============================================================================

/// Prefix (unary) operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrefixOp {
    /// `!`
    Not,
    /// `!!`
    Not2,
    /// `~`
    Tilde,
    /// `+`
    Plus,
    /// `++`
    Plus2,
    /// `-`
    Minus,
    /// `--`
    Minus2,
    /// `&`
    Amp,
    /// `*`
    Star,
    /// `@`
    At,
}

impl Symbol for PrefixOp {
    const ALL: &'static [Self] = &[
        PrefixOp::Not,
        PrefixOp::Not2,
        PrefixOp::Tilde,
        PrefixOp::Plus,
        PrefixOp::Plus2,
        PrefixOp::Minus,
        PrefixOp::Minus2,
        PrefixOp::Amp,
        PrefixOp::Star,
        PrefixOp::At,
    ];

    fn symbol(self) -> &'static str {
        match self {
            PrefixOp::Not => "!",
            PrefixOp::Not2 => "!!",
            PrefixOp::Tilde => "~",
            PrefixOp::Plus => "+",
            PrefixOp::Plus2 => "++",
            PrefixOp::Minus => "-",
            PrefixOp::Minus2 => "--",
            PrefixOp::Amp => "&",
            PrefixOp::Star => "*",
            PrefixOp::At => "@",
        }
    }

    fn from_symbol(text: &str) -> Option<Self> {
        static INDEX: OnceLock<HashMap<&'static str, PrefixOp>> = OnceLock::new();
        INDEX.get_or_init(index_by_symbol).get(text).copied()
    }
}

/// Postfix (unary) operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostfixOp {
    /// `+`
    Plus,
    /// `++`
    Plus2,
    /// `-`
    Minus,
    /// `--`
    Minus2,
    /// `?`
    Question,
    /// `!!`
    Not2,
}

impl Symbol for PostfixOp {
    const ALL: &'static [Self] = &[
        PostfixOp::Plus,
        PostfixOp::Plus2,
        PostfixOp::Minus,
        PostfixOp::Minus2,
        PostfixOp::Question,
        PostfixOp::Not2,
    ];

    fn symbol(self) -> &'static str {
        match self {
            PostfixOp::Plus => "+",
            PostfixOp::Plus2 => "++",
            PostfixOp::Minus => "-",
            PostfixOp::Minus2 => "--",
            PostfixOp::Question => "?",
            PostfixOp::Not2 => "!!",
        }
    }

    fn from_symbol(text: &str) -> Option<Self> {
        static INDEX: OnceLock<HashMap<&'static str, PostfixOp>> = OnceLock::new();
        INDEX.get_or_init(index_by_symbol).get(text).copied()
    }
}

// ============================================================================
// Quotes, brackets, separators
// ============================================================================

/// Quote kind; a literal is closed only by the same kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Quote {
    /// `'`
    Single,
    /// `"`
    Double,
    /// `` ` ``
    Backtick,
}

impl Symbol for Quote {
    const ALL: &'static [Self] = &[Quote::Single, Quote::Double, Quote::Backtick];

    fn symbol(self) -> &'static str {
        match self {
            Quote::Single => "'",
            Quote::Double => "\"",
            Quote::Backtick => "`",
        }
    }

    fn from_symbol(text: &str) -> Option<Self> {
        Quote::ALL.iter().copied().find(|quote| quote.symbol() == text)
    }
}

/// Bracket kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bracket {
    /// `( )`
    Parenthesis,
    /// `[ ]`
    Square,
    /// `{ }`
    Curly,
    /// `< >`
    Angle,
}

impl Bracket {
    /// Opening spelling
    pub fn open(self) -> &'static str {
        match self {
            Bracket::Parenthesis => "(",
            Bracket::Square => "[",
            Bracket::Curly => "{",
            Bracket::Angle => "<",
        }
    }

    /// Closing spelling
    pub fn close(self) -> &'static str {
        match self {
            Bracket::Parenthesis => ")",
            Bracket::Square => "]",
            Bracket::Curly => "}",
            Bracket::Angle => ">",
        }
    }

    /// Whether `text` is the opening character of some bracket kind
    pub fn is_open(text: &str) -> bool {
        Bracket::ALL.iter().any(|bracket| bracket.open() == text)
    }

    /// Whether `text` is the closing character of some bracket kind
    pub fn is_close(text: &str) -> bool {
        Bracket::ALL.iter().any(|bracket| bracket.close() == text)
    }
}

impl Symbol for Bracket {
    const ALL: &'static [Self] = &[
        Bracket::Parenthesis,
        Bracket::Square,
        Bracket::Curly,
        Bracket::Angle,
    ];

    /// The opening spelling
    fn symbol(self) -> &'static str {
        self.open()
    }

    /// Matches both the opening and the closing spelling
    fn from_symbol(text: &str) -> Option<Self> {
        Bracket::ALL
            .iter()
            .copied()
            .find(|bracket| bracket.open() == text || bracket.close() == text)
    }
}

/// Separator between the terms of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Separator {
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// Any whitespace run
    Space,
}

impl Separator {
    /// Whether this separator is the implicit whitespace one
    #[inline]
    pub fn is_whitespace(self) -> bool {
        self == Separator::Space
    }
}

impl Symbol for Separator {
    const ALL: &'static [Self] = &[
        Separator::Comma,
        Separator::Dot,
        Separator::Colon,
        Separator::Space,
    ];

    fn symbol(self) -> &'static str {
        match self {
            Separator::Comma => ",",
            Separator::Dot => ".",
            Separator::Colon => ":",
            Separator::Space => " ",
        }
    }

    /// Exact match only; whitespace runs are mapped to [`Separator::Space`]
    /// by the lexeme classifier
    fn from_symbol(text: &str) -> Option<Self> {
        match text {
            "," => Some(Separator::Comma),
            "." => Some(Separator::Dot),
            ":" => Some(Separator::Colon),
            " " => Some(Separator::Space),
            _ => None,
        }
    }
}

macro_rules! display_symbol {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.symbol())
                }
            }
        )*
    };
}

display_symbol!(InfixOp, PrefixOp, PostfixOp, Quote, Separator);

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.open(), self.close())
    }
}
