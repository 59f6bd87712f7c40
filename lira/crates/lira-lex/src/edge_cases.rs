//! Edge-case and property tests for the lexer.

use proptest::prelude::*;

use lira_util::SourcePosition;

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

fn lex_to_end(source: &str) -> Result<Vec<Token>, crate::LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

/// Every operator spelling lexes to exactly one non-EOF token of the
/// expected kind when surrounded by whitespace.
#[test]
fn operator_round_trip() {
    let table: &[(&str, TokenKind)] = &[
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("<", TokenKind::Less),
        ("<=", TokenKind::LessEqual),
        (">", TokenKind::Greater),
        (">=", TokenKind::GreaterEqual),
        ("==", TokenKind::Equal),
        ("!=", TokenKind::NotEqual),
        ("&&", TokenKind::And),
        ("||", TokenKind::Or),
        ("!", TokenKind::Not),
        ("=", TokenKind::Assign),
        ("+=", TokenKind::PlusAssign),
        ("-=", TokenKind::MinusAssign),
        ("->", TokenKind::Arrow),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        ("{", TokenKind::LBrace),
        ("}", TokenKind::RBrace),
        (".", TokenKind::Dot),
        (",", TokenKind::Comma),
        (";", TokenKind::Semicolon),
        (":", TokenKind::Colon),
    ];

    for (spelling, expected) in table {
        let source = format!(" {spelling} ");
        let tokens = lex_to_end(&source).unwrap();
        assert_eq!(tokens.len(), 2, "{spelling:?} should lex to one token");
        assert_eq!(&tokens[0].kind, expected, "wrong kind for {spelling:?}");
        assert_eq!(tokens[0].position, SourcePosition::new(1, 2));
    }
}

#[test]
fn zero_then_float_fraction() {
    let tokens = lex_to_end("0.5").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::FloatConst(0.5));
}

#[test]
fn dense_transfer_statement() {
    let tokens = lex_to_end("from a->30->b;").unwrap();
    let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::From,
            TokenKind::Ident("a".into()),
            TokenKind::Arrow,
            TokenKind::IntConst(30),
            TokenKind::Arrow,
            TokenKind::Ident("b".into()),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn minus_at_end_of_input() {
    let tokens = lex_to_end("a -").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Minus);
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn comment_between_tokens_keeps_positions() {
    let tokens = lex_to_end("a # middle\nb").unwrap();
    assert_eq!(tokens[0].position, SourcePosition::new(1, 1));
    assert_eq!(tokens[1].kind, TokenKind::Comment(" middle".into()));
    assert_eq!(tokens[2].position, SourcePosition::new(2, 1));
}

proptest! {
    /// Token positions are non-decreasing in lexicographic (line, column)
    /// order, whatever the input.
    #[test]
    fn positions_are_monotonic(source in "[a-z0-9+*/<>=!&|.,;:(){} \n\"#-]{0,80}") {
        let mut lexer = Lexer::new(&source);
        let mut previous = SourcePosition::START;
        loop {
            match lexer.next_token() {
                Ok(token) => {
                    prop_assert!(token.position >= previous);
                    previous = token.position;
                    if token.kind == TokenKind::Eof {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    }

    /// Any non-keyword lowercase name survives lexing unchanged.
    #[test]
    fn identifier_round_trip(name in "[a-z][a-z0-9_]{0,20}") {
        prop_assume!(crate::token::keyword_from_ident(&name).is_none());
        let tokens = lex_to_end(&name).unwrap();
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Ident(name));
    }

    /// Decimal integers below the digit limit round-trip through lexing.
    #[test]
    fn int_round_trip(value in 0i64..1_000_000_000_000) {
        let source = value.to_string();
        let tokens = lex_to_end(&source).unwrap();
        prop_assert_eq!(&tokens[0].kind, &TokenKind::IntConst(value));
    }
}
