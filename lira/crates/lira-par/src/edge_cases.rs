//! Edge-case tests spanning multiple parser productions.

use lira_util::SourcePosition;

use crate::test_support::{parse_program, parse_stmt};
use crate::{ParseError, Stmt};

const ACCOUNTING: &str = r#"
# moves the balance between two accounts
void main() {
    cur wallet = 100 USD;
    cur savings = 0 USD;
    dict book = {"wallet": wallet, "savings": savings};

    while wallet > 10 USD {
        from wallet -> 30 USD -> savings;
    }

    for entry in book {
        print(entry.name);
        print(entry.value);
    }

    if savings >= 90 USD || wallet == 0 USD {
        print("drained");
    } else {
        print(to_str(wallet));
    }
}

float ratio(cur part, cur whole) {
    return 1.0;
}
"#;

/// Parsing the same input twice produces structurally equal ASTs.
#[test]
fn grammar_idempotence() {
    let first = parse_program(ACCOUNTING).unwrap();
    let second = parse_program(ACCOUNTING).unwrap();
    assert_eq!(first, second);
}

#[test]
fn full_program_shape() {
    let program = parse_program(ACCOUNTING).unwrap();
    assert_eq!(program.functions.len(), 2);
    assert_eq!(program.functions["main"].block.statements.len(), 6);
    assert_eq!(program.functions["ratio"].params.len(), 2);
}

#[test]
fn error_position_is_the_offending_token() {
    let err = parse_program("void main() {\n    int a = ;\n}").unwrap_err();
    let ParseError::Syntax { position, .. } = err else { panic!() };
    assert_eq!(position, SourcePosition::new(2, 13));
}

#[test]
fn keywords_cannot_name_functions() {
    let err = parse_program("void while() {}").unwrap_err();
    assert!(err.to_string().contains("expected an identifier"));
}

#[test]
fn unbalanced_block_is_reported() {
    let err = parse_program("void main() { int a = 1;").unwrap_err();
    assert!(err.to_string().contains("expected '}'"));
}

#[test]
fn statement_after_unclosed_call() {
    let err = parse_stmt("print(1;").unwrap_err();
    assert!(err.to_string().contains("expected ')'"));
}

#[test]
fn negated_call_condition() {
    let stmt = parse_stmt("if !empty(d) { }").unwrap();
    assert!(matches!(stmt, Stmt::If(_)));
}

#[test]
fn chained_elif_positions_increase() {
    let program =
        parse_program("void main() {\n  if a { }\n  elif b { }\n  elif c { }\n}").unwrap();
    let Stmt::If(if_stmt) = &program.functions["main"].block.statements[0] else {
        panic!();
    };
    assert_eq!(if_stmt.elif_branches.len(), 2);
    let first = if_stmt.elif_branches[0].condition.position();
    let second = if_stmt.elif_branches[1].condition.position();
    assert!(second > first);
}

#[test]
fn dict_inside_call_arguments() {
    let stmt = parse_stmt("show({\"a\": 1 USD}, 2);").unwrap();
    let Stmt::Expression(access) = stmt else { panic!() };
    let crate::Segment::Call(call) = &access.segments[0] else { panic!() };
    assert_eq!(call.args.len(), 2);
}

#[test]
fn currency_literal_in_arithmetic() {
    let stmt = parse_stmt("a = 2 * 10 USD + b;").unwrap();
    assert!(matches!(stmt, Stmt::Assign(_)));
}

#[test]
fn program_position_error_format() {
    let err = parse_program("void main() { a; }").unwrap_err();
    assert_eq!(
        err.to_string(),
        "SyntaxError: Ln 1 Col 15 : expected assignment after identifier"
    );
}
