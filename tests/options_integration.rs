//! Integration tests for syntax options
//!
//! These tests cover dialect restrictions and loading dialects from JSON.

use exprsyntax::expr::{
    Allowed, Bracket, Expected, Expr, InfixOp, ParseError, PostfixOp, PrefixOp, Quote, Separator,
    SyntaxOptions, SyntaxParser,
};

/// Attribute-filter dialect: comparisons and logic over names and literals
fn attrs_options() -> SyntaxOptions {
    SyntaxOptions::new()
        .with_prefixes(Allowed::only([PrefixOp::Not]))
        .with_infixes(Allowed::only([
            InfixOp::Eq,
            InfixOp::Neq,
            InfixOp::And2,
            InfixOp::Or2,
        ]))
        .with_postfixes(Allowed::None)
        .with_separators(Allowed::only([Separator::Comma]))
        .with_quotes(Allowed::only([Quote::Single, Quote::Double]))
        .with_brackets(Allowed::only([Bracket::Parenthesis]))
}

// ============================================================================
// Gating Tests
// ============================================================================

#[test]
fn test_excluded_infix_is_disallowed() {
    let parser = SyntaxParser::with_options(
        SyntaxOptions::new().with_infixes(Allowed::except([InfixOp::Pow])),
    );

    let err = parser.parse_expression("2 ** 3").unwrap_err();
    assert_eq!(
        err,
        ParseError::Disallowed {
            category: Expected::InfixOp,
            lexeme: "**".to_string(),
            offset: 2,
        }
    );
    assert_eq!(
        err.to_string(),
        "Syntax error. `**` does not match syntax rules: infix operator is not allowed"
    );

    assert!(SyntaxParser::new().parse_expression("2 ** 3").is_ok());
}

#[test]
fn test_disabled_identifier() {
    let parser = SyntaxParser::with_options(
        SyntaxOptions::new().with_identifiers(Allowed::only(["a".to_string(), "b".to_string()])),
    );

    assert!(parser.parse_expression("a + b").is_ok());
    assert_eq!(
        parser.parse_expression("a + c").unwrap_err(),
        ParseError::Disallowed {
            category: Expected::Identifier,
            lexeme: "c".to_string(),
            offset: 4,
        }
    );
}

#[test]
fn test_disabled_numerics() {
    let parser = SyntaxParser::with_options(SyntaxOptions::new().with_numerics(Allowed::None));
    let err = parser.parse_expression("x = 1").unwrap_err();
    assert_eq!(err.expected(), Some(Expected::Numeric));
    assert_eq!(err.lexeme(), "1");
}

#[test]
fn test_disabled_quote() {
    let parser = SyntaxParser::with_options(attrs_options());
    let err = parser.parse_expression("`x`").unwrap_err();
    assert_eq!(
        err,
        ParseError::Disallowed {
            category: Expected::Quote,
            lexeme: "`".to_string(),
            offset: 0,
        }
    );
}

#[test]
fn test_whitespace_separator_requires_space() {
    let parser = SyntaxParser::with_options(attrs_options());

    assert_eq!(
        parser.parse_sequence("a, b").unwrap(),
        Expr::sequence(
            Separator::Comma,
            vec![Expr::identifier("a"), Expr::identifier("b")]
        )
    );
    assert_eq!(
        parser.parse_sequence("a b").unwrap_err(),
        ParseError::Unexpected {
            expected: Expected::Separator,
            found: "b".to_string(),
            offset: 2,
        }
    );
}

#[test]
fn test_disabled_postfix_reads_as_infix() {
    let parser = SyntaxParser::with_options(SyntaxOptions::new().with_postfixes(Allowed::None));
    assert_eq!(
        parser.parse_expression("a ? b").unwrap(),
        Expr::binary(
            Expr::identifier("a"),
            InfixOp::Question,
            Expr::identifier("b")
        )
    );
}

#[test]
fn test_disabled_infix_reads_as_postfix() {
    let parser = SyntaxParser::with_options(
        SyntaxOptions::new().with_infixes(Allowed::except([InfixOp::Question])),
    );
    assert_eq!(
        parser.parse_expressions_list("a ? b").unwrap(),
        vec![
            Expr::postfix(Expr::identifier("a"), PostfixOp::Question),
            Expr::identifier("b"),
        ]
    );
}

#[test]
fn test_attrs_dialect() {
    let parser = SyntaxParser::with_options(attrs_options());

    let expr = parser
        .parse_expression("type = 'pdf' && !(draft || size != 0)")
        .unwrap();
    match &expr {
        Expr::MultiAri { rest, .. } => {
            let ops: Vec<InfixOp> = rest.iter().map(|(op, _)| *op).collect();
            assert_eq!(ops, vec![InfixOp::Eq, InfixOp::And2]);
        }
        other => panic!("expected a chain, got {:?}", other),
    }

    assert!(parser.parse_expression("a + b").is_err());
    assert!(parser.parse_expression("[a]").is_err());
}

// ============================================================================
// JSON Tests
// ============================================================================

#[test]
fn test_options_from_json() {
    let json = r#"{
        "infixes": { "mode": "only", "values": ["EQ", "AND2", "OR2"] },
        "postfixes": { "mode": "none" },
        "brackets": { "mode": "except", "values": ["ANGLE"] }
    }"#;

    let options = SyntaxOptions::from_json(json).unwrap();
    assert!(options.infixes().allows(&InfixOp::And2));
    assert!(!options.infixes().allows(&InfixOp::Plus));
    assert!(!options.postfixes().allows(&PostfixOp::Question));
    assert!(!options.brackets().allows(&Bracket::Angle));
    assert_eq!(options.quotes(), &Allowed::All);

    let parser = SyntaxParser::with_options(options);
    assert!(parser.parse_expression("a = 1 || b = 2").is_ok());
}

#[test]
fn test_options_json_round_trip() {
    let options = attrs_options();
    let json = options.to_json().unwrap();
    assert_eq!(SyntaxOptions::from_json(&json).unwrap(), options);
}

#[test]
fn test_options_json_rejects_unknown_symbol() {
    let json = r#"{ "infixes": { "mode": "only", "values": ["SPACESHIP"] } }"#;
    assert!(SyntaxOptions::from_json(json).is_err());
}
