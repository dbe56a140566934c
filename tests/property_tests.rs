//! Property-based tests using proptest
//!
//! These tests check tokenizer and parser invariants over generated inputs.

use exprsyntax::expr::{tokenize, Expr, InfixOp, Symbol, SyntaxOptions, SyntaxParser};
use proptest::prelude::*;

/// Infix operators that are never read as postfix operators or separators
const PLAIN_INFIXES: &[InfixOp] = &[
    InfixOp::Mult,
    InfixOp::Pow,
    InfixOp::Div,
    InfixOp::Mod,
    InfixOp::And2,
    InfixOp::Or2,
    InfixOp::Eq,
    InfixOp::Eq2,
    InfixOp::Neq,
    InfixOp::Gt,
    InfixOp::Ge,
    InfixOp::Le,
];

fn operand() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,6}",
        "[0-9]{1,4}",
        "'[a-z ]{0,6}'",
        "\\([a-z]{1,4}\\)",
    ]
}

fn chain() -> impl Strategy<Value = (String, Vec<(InfixOp, String)>)> {
    (
        operand(),
        prop::collection::vec((prop::sample::select(PLAIN_INFIXES), operand()), 1..6),
    )
}

/// Operand wrapped in optional, possibly stacked, prefix operators and an
/// optional postfix operator
fn decorated_operand() -> impl Strategy<Value = String> {
    let prefixes = prop::sample::select(vec!["", "-", "!", "~", "- -", "! -", "- !", "!! ~"]);
    let postfixes = prop::sample::select(vec!["", "++", "--", "!!", "?"]);
    (prefixes, operand(), postfixes)
        .prop_map(|(prefix, operand, postfix)| format!("{}{}{}", prefix, operand, postfix))
}

fn decorated_chain() -> impl Strategy<Value = String> {
    (
        decorated_operand(),
        prop::collection::vec(
            (prop::sample::select(PLAIN_INFIXES), decorated_operand()),
            0..5,
        ),
    )
        .prop_map(|(first, rest)| {
            rest.iter().fold(first, |input, (op, operand)| {
                format!("{} {} {}", input, op.symbol(), operand)
            })
        })
}

// =============================================================================
// Tokenizer Properties
// =============================================================================

proptest! {
    /// Lexeme texts concatenate back to the input
    #[test]
    fn test_tokenize_round_trip(input in "\\PC{0,40}") {
        let joined: String = tokenize(&input).iter().map(|l| l.text()).collect();
        prop_assert_eq!(joined, input);
    }

    /// Lexemes are non-empty and contiguous
    #[test]
    fn test_tokenize_contiguous(input in "[ a-z0-9+*=(),.'\"!?-]{0,40}") {
        let mut offset = 0;
        for lexeme in tokenize(&input) {
            prop_assert!(!lexeme.is_terminal());
            prop_assert_eq!(lexeme.start(), offset);
            offset = lexeme.end();
        }
        prop_assert_eq!(offset, input.len());
    }

    /// Classifying a lexeme twice gives the same answer
    #[test]
    fn test_classification_idempotent(input in "[ a-z0-9+*=<>(),.:'!?&|-]{0,30}") {
        let options = SyntaxOptions::ALL_ALLOWED;
        for lexeme in tokenize(&input) {
            prop_assert_eq!(lexeme.classify(&options), lexeme.classify(&options));
        }
    }
}

// =============================================================================
// Parser Properties
// =============================================================================

proptest! {
    /// Two operands make a binary node, more make one flat chain
    #[test]
    fn test_flat_chain((first, rest) in chain()) {
        let mut input = first;
        for (op, operand) in &rest {
            input.push(' ');
            input.push_str(op.symbol());
            input.push(' ');
            input.push_str(operand);
        }

        let expr = SyntaxParser::new().parse_expression(&input).unwrap();
        match (rest.len(), expr) {
            (1, Expr::Binary { op, .. }) => prop_assert_eq!(op, rest[0].0),
            (n, Expr::MultiAri { rest: parsed, .. }) => {
                prop_assert!(n >= 2);
                prop_assert_eq!(parsed.len(), n);
                let ops: Vec<InfixOp> = parsed.iter().map(|(op, _)| *op).collect();
                let expected: Vec<InfixOp> = rest.iter().map(|(op, _)| *op).collect();
                prop_assert_eq!(ops, expected);
            }
            (_, other) => prop_assert!(false, "unexpected shape: {:?}", other),
        }
    }

    /// Rendering a parsed expression and parsing it again gives the same tree
    #[test]
    fn test_display_reparses((first, rest) in chain()) {
        let mut input = first;
        for (op, operand) in &rest {
            input.push_str(op.symbol());
            input.push_str(operand);
        }

        let parser = SyntaxParser::new();
        if let Ok(expr) = parser.parse_expression(&input) {
            let rendered = expr.to_string();
            prop_assert_eq!(parser.parse_expression(&rendered).unwrap(), expr);
        }
    }

    /// Stacked prefix and postfix operators survive rendering
    #[test]
    fn test_display_reparses_unary_operators(input in decorated_chain()) {
        let parser = SyntaxParser::new();
        let expr = parser.parse_expression(&input).unwrap();
        let rendered = expr.to_string();
        prop_assert_eq!(parser.parse_expression(&rendered).unwrap(), expr, "{}", rendered);
    }

    /// Arbitrary input either parses or fails with an error, never a panic
    #[test]
    fn test_parse_never_panics(input in "\\PC{0,40}") {
        let parser = SyntaxParser::new();
        let _ = parser.parse_sequence(&input);
        let _ = parser.parse_expressions_list(&input);
        let _ = parser.parse_terms_list(&input);
    }
}
