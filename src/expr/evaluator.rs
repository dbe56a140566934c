//! Evaluation of expression trees
//!
//! Implement [`Evaluator`] to give meaning to an [`Expr`](super::ast::Expr).
//! Children are evaluated before their parent, left to right, and each node
//! shape gets its own callback. Numeric, literal, bracketed and sequence nodes
//! have default callbacks; they build values through [`EvalValue`].
//!
//! # Example
//!
//! ```rust
//! use exprsyntax::expr::{Evaluator, InfixOp, PostfixOp, PrefixOp, SyntaxParser, Value};
//!
//! struct Names;
//!
//! impl Evaluator for Names {
//!     type Value = Value;
//!
//!     fn eval_identifier(&mut self, name: &str) -> Value {
//!         Value::string(name.to_uppercase())
//!     }
//!     fn eval_binary(&mut self, left: Value, _: InfixOp, right: Value) -> Value {
//!         Value::array(vec![left, right])
//!     }
//!     fn eval_multi_ari(&mut self, first: Value, _: Vec<(InfixOp, Value)>) -> Value {
//!         first
//!     }
//!     fn eval_prefix(&mut self, _: PrefixOp, value: Value) -> Value {
//!         value
//!     }
//!     fn eval_postfix(&mut self, value: Value, _: PostfixOp) -> Value {
//!         value
//!     }
//! }
//!
//! let expr = SyntaxParser::new().parse_expression("a = (b)").unwrap();
//! let value = expr.eval(&mut Names);
//! assert_eq!(value, Value::array(vec![Value::string("A"), Value::string("B")]));
//! ```

use super::vocab::{Bracket, InfixOp, PostfixOp, PrefixOp, Quote, Separator};
use serde::{Deserialize, Serialize};

/// Values that the default callbacks know how to build
pub trait EvalValue: Sized {
    /// Value of a numeric or literal node
    fn from_text(text: &str) -> Self;

    /// Value of a sequence node
    fn from_tuple(values: Vec<Self>) -> Self;
}

/// One callback per expression shape
pub trait Evaluator {
    /// Result of evaluating a node
    type Value: EvalValue;

    /// Identifier by name
    fn eval_identifier(&mut self, name: &str) -> Self::Value;

    /// Numeric text; defaults to the text itself
    fn eval_numeric(&mut self, value: &str) -> Self::Value {
        Self::Value::from_text(value)
    }

    /// Literal text without quotes; defaults to the text itself
    fn eval_literal(&mut self, _quote: Quote, value: &str) -> Self::Value {
        Self::Value::from_text(value)
    }

    /// Two operands and their operator
    fn eval_binary(&mut self, left: Self::Value, op: InfixOp, right: Self::Value) -> Self::Value;

    /// Flat chain of three or more operands
    fn eval_multi_ari(
        &mut self,
        first: Self::Value,
        rest: Vec<(InfixOp, Self::Value)>,
    ) -> Self::Value;

    /// Prefix operator applied to a value
    fn eval_prefix(&mut self, op: PrefixOp, value: Self::Value) -> Self::Value;

    /// Postfix operator applied to a value
    fn eval_postfix(&mut self, value: Self::Value, op: PostfixOp) -> Self::Value;

    /// Bracketed value; defaults to the inner value
    fn eval_bracketed(&mut self, _bracket: Bracket, inner: Self::Value) -> Self::Value {
        inner
    }

    /// Sequence of values; defaults to a tuple of them
    fn eval_sequence(&mut self, values: Vec<Self::Value>, _separator: Separator) -> Self::Value {
        Self::Value::from_tuple(values)
    }
}

/// Dynamic value for general-purpose evaluators
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value
    #[default]
    Nil,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
    /// Text
    String(String),
    /// Ordered values
    Array(Vec<Value>),
}

impl Value {
    /// Nil
    pub fn nil() -> Self {
        Value::Nil
    }

    /// Boolean value
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Integer value
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Float value
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Text value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Array value
    pub fn array(values: Vec<Value>) -> Self {
        Value::Array(values)
    }

    /// Check for nil
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Boolean content
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer content
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Float content, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Text content
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Array content
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }
}

impl EvalValue for Value {
    fn from_text(text: &str) -> Self {
        Value::String(text.to_string())
    }

    fn from_tuple(values: Vec<Self>) -> Self {
        Value::Array(values)
    }
}

impl EvalValue for String {
    fn from_text(text: &str) -> Self {
        text.to_string()
    }

    /// Space-joined
    fn from_tuple(values: Vec<Self>) -> Self {
        values.join(" ")
    }
}
