//! Expression tree
//!
//! [`Expr`] borrows identifier, numeric and literal text from the parsed
//! input. Use [`Expr::into_owned`] to detach a tree from its source.

use super::evaluator::Evaluator;
use super::vocab::{Bracket, InfixOp, PostfixOp, PrefixOp, Quote, Separator, Symbol};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Parsed expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expr<'src> {
    /// Name matching the identifier shape
    Identifier {
        /// Identifier text
        name: Cow<'src, str>,
    },
    /// Number-like token, kept as text
    Numeric {
        /// Numeric text
        value: Cow<'src, str>,
    },
    /// Quoted text, quotes excluded
    Literal {
        /// Quote kind used on both ends
        quote: Quote,
        /// Text between the quotes, whitespace preserved
        value: Cow<'src, str>,
    },
    /// `op operand`
    UnaryPrefix {
        /// Operator
        op: PrefixOp,
        /// Operand
        operand: Box<Expr<'src>>,
    },
    /// `operand op`
    UnaryPostfix {
        /// Operand
        operand: Box<Expr<'src>>,
        /// Operator
        op: PostfixOp,
    },
    /// Exactly two operands joined by one infix operator
    Binary {
        /// Left operand
        left: Box<Expr<'src>>,
        /// Operator
        op: InfixOp,
        /// Right operand
        right: Box<Expr<'src>>,
    },
    /// Three or more operands in one flat run, left to right
    ///
    /// `rest` always has at least two entries.
    MultiAri {
        /// Leading operand
        first: Box<Expr<'src>>,
        /// Operator and operand pairs following `first`
        rest: Vec<(InfixOp, Expr<'src>)>,
    },
    /// Expression wrapped in a matching bracket pair
    InBrackets {
        /// Bracket kind
        bracket: Bracket,
        /// Wrapped expression
        inner: Box<Expr<'src>>,
    },
    /// Two or more terms joined by one separator kind
    Sequence {
        /// Terms in order
        terms: Vec<Expr<'src>>,
        /// Separator used between all terms
        separator: Separator,
    },
}

impl<'src> Expr<'src> {
    /// Identifier node
    pub fn identifier(name: impl Into<Cow<'src, str>>) -> Self {
        Expr::Identifier { name: name.into() }
    }

    /// Numeric node
    pub fn numeric(value: impl Into<Cow<'src, str>>) -> Self {
        Expr::Numeric {
            value: value.into(),
        }
    }

    /// Literal node
    pub fn literal(quote: Quote, value: impl Into<Cow<'src, str>>) -> Self {
        Expr::Literal {
            quote,
            value: value.into(),
        }
    }

    /// Prefix node
    pub fn prefix(op: PrefixOp, operand: Expr<'src>) -> Self {
        Expr::UnaryPrefix {
            op,
            operand: Box::new(operand),
        }
    }

    /// Postfix node
    pub fn postfix(operand: Expr<'src>, op: PostfixOp) -> Self {
        Expr::UnaryPostfix {
            operand: Box::new(operand),
            op,
        }
    }

    /// Binary node
    pub fn binary(left: Expr<'src>, op: InfixOp, right: Expr<'src>) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Flat operator chain
    pub fn multi_ari(first: Expr<'src>, rest: Vec<(InfixOp, Expr<'src>)>) -> Self {
        Expr::MultiAri {
            first: Box::new(first),
            rest,
        }
    }

    /// Bracketed node
    pub fn in_brackets(bracket: Bracket, inner: Expr<'src>) -> Self {
        Expr::InBrackets {
            bracket,
            inner: Box::new(inner),
        }
    }

    /// Sequence node
    pub fn sequence(separator: Separator, terms: Vec<Expr<'src>>) -> Self {
        Expr::Sequence { terms, separator }
    }

    /// Evaluate bottom-up, children left to right
    pub fn eval<E: Evaluator + ?Sized>(&self, evaluator: &mut E) -> E::Value {
        match self {
            Expr::Identifier { name } => evaluator.eval_identifier(name),
            Expr::Numeric { value } => evaluator.eval_numeric(value),
            Expr::Literal { quote, value } => evaluator.eval_literal(*quote, value),
            Expr::UnaryPrefix { op, operand } => {
                let value = operand.eval(evaluator);
                evaluator.eval_prefix(*op, value)
            }
            Expr::UnaryPostfix { operand, op } => {
                let value = operand.eval(evaluator);
                evaluator.eval_postfix(value, *op)
            }
            Expr::Binary { left, op, right } => {
                let left = left.eval(evaluator);
                let right = right.eval(evaluator);
                evaluator.eval_binary(left, *op, right)
            }
            Expr::MultiAri { first, rest } => {
                let first = first.eval(evaluator);
                let rest = rest
                    .iter()
                    .map(|(op, operand)| (*op, operand.eval(evaluator)))
                    .collect();
                evaluator.eval_multi_ari(first, rest)
            }
            Expr::InBrackets { bracket, inner } => {
                let value = inner.eval(evaluator);
                evaluator.eval_bracketed(*bracket, value)
            }
            Expr::Sequence { terms, separator } => {
                let values = terms.iter().map(|term| term.eval(evaluator)).collect();
                evaluator.eval_sequence(values, *separator)
            }
        }
    }

    /// Copy all borrowed text so the tree outlives its source
    pub fn into_owned(self) -> Expr<'static> {
        fn own(text: Cow<'_, str>) -> Cow<'static, str> {
            Cow::Owned(text.into_owned())
        }
        fn own_box(expr: Box<Expr<'_>>) -> Box<Expr<'static>> {
            Box::new(expr.into_owned())
        }

        match self {
            Expr::Identifier { name } => Expr::Identifier { name: own(name) },
            Expr::Numeric { value } => Expr::Numeric { value: own(value) },
            Expr::Literal { quote, value } => Expr::Literal {
                quote,
                value: own(value),
            },
            Expr::UnaryPrefix { op, operand } => Expr::UnaryPrefix {
                op,
                operand: own_box(operand),
            },
            Expr::UnaryPostfix { operand, op } => Expr::UnaryPostfix {
                operand: own_box(operand),
                op,
            },
            Expr::Binary { left, op, right } => Expr::Binary {
                left: own_box(left),
                op,
                right: own_box(right),
            },
            Expr::MultiAri { first, rest } => Expr::MultiAri {
                first: own_box(first),
                rest: rest
                    .into_iter()
                    .map(|(op, operand)| (op, operand.into_owned()))
                    .collect(),
            },
            Expr::InBrackets { bracket, inner } => Expr::InBrackets {
                bracket,
                inner: own_box(inner),
            },
            Expr::Sequence { terms, separator } => Expr::Sequence {
                terms: terms.into_iter().map(Expr::into_owned).collect(),
                separator,
            },
        }
    }

    /// Whether the rendering opens with a prefix operator
    fn starts_with_prefix(&self) -> bool {
        match self {
            Expr::UnaryPrefix { .. } => true,
            Expr::UnaryPostfix { operand, .. } => operand.starts_with_prefix(),
            Expr::Binary { left, .. } => left.starts_with_prefix(),
            Expr::MultiAri { first, .. } => first.starts_with_prefix(),
            Expr::Sequence { terms, .. } => terms.first().is_some_and(Expr::starts_with_prefix),
            _ => false,
        }
    }

    /// Whether the rendering closes with a postfix operator
    fn ends_with_postfix(&self) -> bool {
        match self {
            Expr::UnaryPostfix { .. } => true,
            Expr::UnaryPrefix { operand, .. } => operand.ends_with_postfix(),
            Expr::Binary { right, .. } => right.ends_with_postfix(),
            Expr::MultiAri { rest, .. } => rest
                .last()
                .is_some_and(|(_, operand)| operand.ends_with_postfix()),
            Expr::Sequence { terms, .. } => terms.last().is_some_and(Expr::ends_with_postfix),
            _ => false,
        }
    }
}

/// Single-line rendering with normalized spacing
///
/// Infix operators and whitespace separators are surrounded by single spaces,
/// other separators are followed by one. Operator symbols never touch each
/// other, since adjacent punctuation would tokenize as one lexeme: a prefix
/// operator is spaced from a nested prefix and a separator from a preceding
/// postfix.
impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier { name } => f.write_str(name),
            Expr::Numeric { value } => f.write_str(value),
            Expr::Literal { quote, value } => write!(f, "{}{}{}", quote, value, quote),
            Expr::UnaryPrefix { op, operand } if operand.starts_with_prefix() => {
                write!(f, "{} {}", op, operand)
            }
            Expr::UnaryPrefix { op, operand } => write!(f, "{}{}", op, operand),
            Expr::UnaryPostfix { operand, op } => write!(f, "{}{}", operand, op),
            Expr::Binary { left, op, right } => write!(f, "{} {} {}", left, op, right),
            Expr::MultiAri { first, rest } => {
                write!(f, "{}", first)?;
                for (op, operand) in rest {
                    write!(f, " {} {}", op, operand)?;
                }
                Ok(())
            }
            Expr::InBrackets { bracket, inner } => {
                write!(f, "{}{}{}", bracket.open(), inner, bracket.close())
            }
            Expr::Sequence { terms, separator } => {
                let mut previous: Option<&Expr<'_>> = None;
                for term in terms {
                    match (previous, separator) {
                        (None, _) => {}
                        (Some(_), Separator::Space) => f.write_str(" ")?,
                        (Some(prev), other) if prev.ends_with_postfix() => {
                            write!(f, " {} ", other.symbol())?
                        }
                        (Some(_), other) => write!(f, "{} ", other.symbol())?,
                    }
                    write!(f, "{}", term)?;
                    previous = Some(term);
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expr<'static> {
        Expr::multi_ari(
            Expr::identifier("a"),
            vec![
                (
                    InfixOp::Plus,
                    Expr::in_brackets(
                        Bracket::Parenthesis,
                        Expr::binary(Expr::numeric("1"), InfixOp::Mult, Expr::identifier("b")),
                    ),
                ),
                (
                    InfixOp::Minus,
                    Expr::postfix(
                        Expr::prefix(PrefixOp::Not, Expr::literal(Quote::Single, "x y")),
                        PostfixOp::Question,
                    ),
                ),
            ],
        )
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "a + (1 * b) - !'x y'?");

        let seq = Expr::sequence(
            Separator::Comma,
            vec![Expr::identifier("a"), Expr::identifier("b")],
        );
        assert_eq!(seq.to_string(), "a, b");

        let seq = Expr::sequence(
            Separator::Space,
            vec![Expr::identifier("a"), Expr::numeric("2")],
        );
        assert_eq!(seq.to_string(), "a 2");
    }

    #[test]
    fn test_display_keeps_operator_symbols_apart() {
        let stacked = Expr::prefix(
            PrefixOp::Minus,
            Expr::binary(
                Expr::prefix(PrefixOp::Minus, Expr::identifier("a")),
                InfixOp::Plus,
                Expr::identifier("b"),
            ),
        );
        assert_eq!(stacked.to_string(), "- -a + b");

        let stacked = Expr::prefix(
            PrefixOp::Not,
            Expr::postfix(
                Expr::prefix(PrefixOp::Minus, Expr::identifier("x")),
                PostfixOp::Plus2,
            ),
        );
        assert_eq!(stacked.to_string(), "! -x++");

        let seq = Expr::sequence(
            Separator::Comma,
            vec![
                Expr::postfix(Expr::identifier("a"), PostfixOp::Question),
                Expr::identifier("b"),
                Expr::postfix(Expr::identifier("c"), PostfixOp::Minus2),
            ],
        );
        assert_eq!(seq.to_string(), "a? , b, c--");
    }

    #[test]
    fn test_into_owned_keeps_structure() {
        let source = String::from("name");
        let owned: Expr<'static> = Expr::identifier(source.as_str()).into_owned();
        drop(source);
        assert_eq!(owned, Expr::identifier("name"));

        assert_eq!(sample().into_owned(), sample());
    }

    #[test]
    fn test_serialize() {
        let expr = Expr::binary(Expr::identifier("a"), InfixOp::Eq2, Expr::numeric("1"));
        let json = serde_json::to_value(&expr).unwrap();

        assert_eq!(json["type"], "binary");
        assert_eq!(json["op"], "EQ2");
        assert_eq!(json["left"]["name"], "a");
        assert_eq!(json["right"]["value"], "1");
    }
}
