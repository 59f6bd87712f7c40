//! Whole-program interpreter tests.
//!
//! Programs run through the real lexer and parser against a fixed rate
//! table (USD -> 1.1, PLN -> 4.3, EUR -> 1.0) with captured output.

use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::rc::Rc;

use rustc_hash::FxHashSet;

use lira_lex::Lexer;
use lira_par::Parser;

use crate::exchange::Exchange;
use crate::interp::Interpreter;

/// A clonable byte sink so the test can read what the interpreter wrote.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn currencies() -> FxHashSet<String> {
    ["USD", "PLN", "EUR"].iter().map(|s| s.to_string()).collect()
}

fn exchange() -> Exchange {
    Exchange::from_pairs(&[("USD", 1.1), ("PLN", 4.3), ("EUR", 1.0)])
}

/// Runs a program, feeding `stdin` and returning captured stdout.
fn run_with_input(source: &str, stdin: &str) -> Result<String, String> {
    let lexer = Lexer::new(source).with_currencies(currencies());
    let mut parser = Parser::new(lexer).map_err(|e| e.to_string())?;
    let program = parser.parse().map_err(|e| e.to_string())?;

    let buf = SharedBuf::default();
    let mut interpreter = Interpreter::with_io(
        exchange(),
        Box::new(buf.clone()),
        Box::new(Cursor::new(stdin.as_bytes().to_vec())),
    );
    interpreter.run(&program).map_err(|e| e.to_string())?;

    let bytes = buf.0.borrow().clone();
    Ok(String::from_utf8(bytes).expect("output was not utf-8"))
}

fn run(source: &str) -> Result<String, String> {
    run_with_input(source, "")
}

fn run_err(source: &str) -> String {
    run(source).expect_err("program should have failed")
}

#[test]
fn hello_world() {
    let out = run(r#"void main() { print("hi"); }"#).unwrap();
    assert_eq!(out, "hi\n");
}

#[test]
fn currency_literal_print() {
    let out = run("void main() { cur a = 10 USD; print(a); }").unwrap();
    assert_eq!(out, "10.00 USD\n");
}

#[test]
fn cross_currency_add() {
    let out =
        run("void main() { cur a = 11 USD; cur b = 43 PLN; a = a + b; print(a); }").unwrap();
    assert_eq!(out, "22.00 USD\n");
}

#[test]
fn comparison_across_tags() {
    let source = r#"
        void main() {
            cur a = 11 USD;
            cur b = 43 PLN;
            if (a == b) { print("eq"); } else { print("ne"); }
        }
    "#;
    assert_eq!(run(source).unwrap(), "eq\n");
}

#[test]
fn transfer_between_accounts() {
    let source = r#"
        void main() {
            cur a = 100 USD;
            cur b = 0 USD;
            from a -> 30 USD -> b;
            print(a);
            print(b);
        }
    "#;
    assert_eq!(run(source).unwrap(), "70.00 USD\n30.00 USD\n");
}

#[test]
fn transfer_conserves_value_across_tags() {
    let source = r#"
        void main() {
            cur a = 110 USD;
            cur b = 0 PLN;
            from a -> 55 USD -> b;
            print(a);
            print(b);
        }
    "#;
    // 55 USD = 50 reference = 215 PLN.
    assert_eq!(run(source).unwrap(), "55.00 USD\n215.00 PLN\n");
}

#[test]
fn transfer_two_expression_forms() {
    let source = r#"
        void main() {
            cur a = 100 USD;
            from a -> 30 USD;
            print(a);
            cur b = 10 USD;
            from 5 USD -> b;
            print(b);
        }
    "#;
    assert_eq!(run(source).unwrap(), "70.00 USD\n15.00 USD\n");
}

#[test]
fn dict_iteration_mutates_entries() {
    let source = r#"
        void main() {
            dict d = {"x": 10 USD, "y": 20 USD};
            for e in d {
                e.value.set_value(0);
            }
            print(d.get("x"));
        }
    "#;
    assert_eq!(run(source).unwrap(), "0.00 USD\n");
}

#[test]
fn dict_entry_fields() {
    let source = r#"
        void main() {
            dict d = {"wallet": 10 USD};
            for e in d {
                print(e.name);
                print(e.value);
            }
        }
    "#;
    assert_eq!(run(source).unwrap(), "wallet\n10.00 USD\n");
}

#[test]
fn dict_filter_by_curtype() {
    let source = r#"
        void main() {
            dict d = {"a": 1 USD, "b": 2 PLN, "c": 3 USD};
            dict only = d.get(USD);
            print(only);
        }
    "#;
    assert_eq!(run(source).unwrap(), "{\"a\": 1.00 USD, \"c\": 3.00 USD}\n");
}

#[test]
fn dict_add_and_get() {
    let source = r#"
        void main() {
            dict d = {};
            d.add("x", 5 USD);
            print(d.get("x"));
        }
    "#;
    assert_eq!(run(source).unwrap(), "5.00 USD\n");
}

#[test]
fn dict_add_duplicate_fails() {
    let source = r#"
        void main() {
            dict d = {"x": 1 USD};
            d.add("x", 2 USD);
        }
    "#;
    assert!(run_err(source).contains("this name already exists"));
}

#[test]
fn dict_missing_key_fails() {
    let source = r#"void main() { dict d = {}; print(d.get("nope")); }"#;
    let err = run_err(source);
    assert!(err.contains("no such name in dictionary"));
}

#[test]
fn dict_assignment_shares_contents() {
    let source = r#"
        void main() {
            dict d = {"x": 1 USD};
            dict alias = d;
            alias.get("x").set_value(9);
            print(d.get("x"));
        }
    "#;
    assert_eq!(run(source).unwrap(), "9.00 USD\n");
}

#[test]
fn entry_value_is_assignable() {
    let source = r#"
        void main() {
            dict d = {"x": 1 USD};
            for e in d {
                e.value = 7 USD;
            }
            print(d.get("x"));
        }
    "#;
    assert_eq!(run(source).unwrap(), "7.00 USD\n");
}

#[test]
fn function_call_mutates_through_handles() {
    let source = r#"
        void drain(cur account) {
            account.set_value(0);
        }
        void main() {
            cur a = 50 USD;
            drain(a);
            print(a);
        }
    "#;
    assert_eq!(run(source).unwrap(), "0.00 USD\n");
}

#[test]
fn transfer_through_function_parameters() {
    let source = r#"
        void pay(cur from_acc, cur to_acc) {
            from from_acc -> 10 USD -> to_acc;
        }
        void main() {
            cur a = 30 USD;
            cur b = 0 USD;
            pay(a, b);
            print(a);
            print(b);
        }
    "#;
    assert_eq!(run(source).unwrap(), "20.00 USD\n10.00 USD\n");
}

#[test]
fn declaration_copies_currency_values() {
    let source = r#"
        void main() {
            cur a = 10 USD;
            cur b = a;
            b.set_value(0);
            print(a);
        }
    "#;
    assert_eq!(run(source).unwrap(), "10.00 USD\n");
}

#[test]
fn return_values_flow_back() {
    let source = r#"
        int double(int x) {
            return x * 2;
        }
        void main() {
            print(double(21));
        }
    "#;
    assert_eq!(run(source).unwrap(), "42\n");
}

#[test]
fn recursion_works() {
    let source = r#"
        int fact(int n) {
            if n <= 1 { return 1; }
            return n * fact(n - 1);
        }
        void main() {
            print(fact(6));
        }
    "#;
    assert_eq!(run(source).unwrap(), "720\n");
}

#[test]
fn while_loop_counts() {
    let source = r#"
        void main() {
            int i = 0;
            while i < 3 {
                print(i);
                i += 1;
            }
        }
    "#;
    assert_eq!(run(source).unwrap(), "0\n1\n2\n");
}

#[test]
fn elif_chain_picks_first_true() {
    let source = r#"
        void main() {
            int x = 2;
            if x == 1 { print("one"); }
            elif x == 2 { print("two"); }
            elif x == 2 { print("again"); }
            else { print("other"); }
        }
    "#;
    assert_eq!(run(source).unwrap(), "two\n");
}

#[test]
fn short_circuit_skips_the_call() {
    let source = r#"
        bool touched() {
            print("called");
            return true;
        }
        void main() {
            bool a = false && touched();
            bool b = true || touched();
            print(a);
            print(b);
        }
    "#;
    assert_eq!(run(source).unwrap(), "false\ntrue\n");
}

#[test]
fn string_operations() {
    let source = r#"
        void main() {
            str s = "ab" + "cd";
            print(s);
            print(s * 2);
            print(2 * "x");
        }
    "#;
    assert_eq!(run(source).unwrap(), "abcd\nabcdabcd\nxx\n");
}

#[test]
fn builtin_conversions() {
    let source = r#"
        void main() {
            print(to_int(2.9));
            print(to_float(3));
            print(to_int("41") + 1);
            print(to_str(5 USD));
        }
    "#;
    assert_eq!(run(source).unwrap(), "2\n3.0\n42\n5.00 USD\n");
}

#[test]
fn input_builtin_reads_a_line() {
    let source = r#"
        void main() {
            str name = input("who? ");
            print("hello " + name);
        }
    "#;
    let out = run_with_input(source, "ada\n").unwrap();
    assert_eq!(out, "who? hello ada\n");
}

#[test]
fn compound_assign_on_currency() {
    let source = r#"
        void main() {
            cur a = 10 USD;
            a += 43 PLN;
            print(a);
        }
    "#;
    // 43 PLN = 10 reference = 11 USD.
    assert_eq!(run(source).unwrap(), "21.00 USD\n");
}

#[test]
fn scope_isolation_after_block() {
    let source = r#"
        void main() {
            if true { int x = 1; }
            x = 2;
        }
    "#;
    assert!(run_err(source).contains("undefined variable 'x'"));
}

#[test]
fn shadowing_in_inner_block_is_allowed() {
    let source = r#"
        void main() {
            int x = 1;
            if true {
                int x = 2;
                print(x);
            }
            print(x);
        }
    "#;
    assert_eq!(run(source).unwrap(), "2\n1\n");
}

#[test]
fn redeclaration_in_same_scope_fails() {
    let source = "void main() { int x = 1; int x = 2; }";
    assert!(run_err(source).contains("redeclaration of a variable 'x'"));
}

#[test]
fn undeclared_identifier_fails() {
    let err = run_err("void main() { print(ghost); }");
    assert!(err.contains("'ghost' was not declared in this scope"));
}

#[test]
fn uninitialised_declaration_then_assignment() {
    let source = r#"
        void main() {
            int x;
            x = 5;
            print(x);
        }
    "#;
    assert_eq!(run(source).unwrap(), "5\n");
}

#[test]
fn use_before_assignment_fails() {
    let source = "void main() { int x; print(x); }";
    assert!(run_err(source).contains("'x' used before assignment"));
}

#[test]
fn first_assignment_must_match_declared_type() {
    let source = "void main() { int x; x = 1.5; }";
    assert!(run_err(source).contains("type mismatch, expected int, got float"));
}

#[test]
fn declaration_type_mismatch_fails() {
    let err = run_err("void main() { int x = \"one\"; }");
    assert!(err.contains("type mismatch in declaration of 'x'"));
}

#[test]
fn assignment_type_mismatch_fails() {
    let err = run_err("void main() { int x = 1; x = \"two\"; }");
    assert!(err.contains("type mismatch, expected int, got str"));
}

#[test]
fn condition_must_be_bool() {
    let err = run_err("void main() { if 1 { } }");
    assert!(err.contains("condition must be a bool, got int"));
}

#[test]
fn return_type_mismatch_fails() {
    let source = "int f() { return 1.5; } void main() { print(f()); }";
    let err = run_err(source);
    assert!(err.contains("wrong return type, expected int, got float"));
}

#[test]
fn void_function_must_not_return_a_value() {
    let err = run_err("void main() { return 1; }");
    assert!(err.contains("wrong return type, expected void, got int"));
}

#[test]
fn non_void_function_bare_return_fails() {
    let source = "int f() { return; } void main() { print(f()); }";
    assert!(run_err(source).contains("expected return of a type int"));
}

#[test]
fn missing_main_fails() {
    let err = run_err("void helper() { }");
    assert_eq!(err, "SemanticError: Ln 1 Col 1 : missing main function");
}

#[test]
fn non_void_main_fails() {
    assert!(run_err("int main() { return 1; }").contains("main function has to be void type"));
}

#[test]
fn main_with_parameters_fails() {
    assert!(run_err("void main(int x) { }").contains("main function takes no parameters"));
}

#[test]
fn wrong_argument_count_fails() {
    let source = "void f(int a) { } void main() { f(1, 2); }";
    let err = run_err(source);
    assert!(err.contains("wrong number of arguments for 'f', expected 1, got 2"));
}

#[test]
fn argument_type_mismatch_fails() {
    let source = "void f(int a) { } void main() { f(1.5); }";
    let err = run_err(source);
    assert!(err.contains("parameter type mismatch for 'a', expected int, got float"));
}

#[test]
fn unknown_function_fails() {
    assert!(run_err("void main() { conjure(); }").contains("function 'conjure' not found"));
}

#[test]
fn void_call_used_as_value_fails() {
    let source = "void f() { } void main() { int x = f(); }";
    assert!(run_err(source).contains("void function call used as a value"));
}

#[test]
fn builtins_shadow_user_functions() {
    let source = r#"
        void print(str ignored) { }
        void main() { print("still works"); }
    "#;
    assert_eq!(run(source).unwrap(), "still works\n");
}

#[test]
fn transfer_requires_currency_values() {
    let source = "void main() { cur a = 1 USD; from a -> 2; }";
    assert!(run_err(source).contains("expected a cur expression in transfer"));
}

#[test]
fn dict_values_must_be_currency() {
    let err = run_err(r#"void main() { dict d = {"x": 1}; }"#);
    assert!(err.contains("expected cur in dict value for 'x'"));
}

#[test]
fn duplicate_dict_literal_keys_fail() {
    let err = run_err(r#"void main() { dict d = {"x": 1 USD, "x": 2 USD}; }"#);
    assert!(err.contains("multiple account name 'x' defined"));
}

#[test]
fn for_over_non_dict_fails() {
    let err = run_err("void main() { int x = 1; for e in x { } }");
    assert!(err.contains("for loop expects a dict, got int"));
}

#[test]
fn return_breaks_loops() {
    let source = r#"
        int first(dict d) {
            for e in d {
                return 1;
            }
            return 0;
        }
        void main() {
            print(first({"a": 1 USD, "b": 2 USD}));
        }
    "#;
    assert_eq!(run(source).unwrap(), "1\n");
}

#[test]
fn set_value_rejects_strings() {
    let source = r#"void main() { cur a = 1 USD; a.set_value("x"); }"#;
    assert!(run_err(source).contains("cur.set_value() accepts only int or float"));
}

#[test]
fn unknown_method_fails() {
    let source = "void main() { cur a = 1 USD; a.explode(); }";
    assert!(run_err(source).contains("'cur' has no method 'explode'"));
}

#[test]
fn value_size_overflow_is_reported() {
    let source = r#"
        void main() {
            int big = 999999999999999;
            while true {
                big = big * big;
            }
        }
    "#;
    assert!(run_err(source).contains("value size exceeded"));
}

#[test]
fn error_carries_position() {
    let err = run_err("void main() {\n    print(ghost);\n}");
    assert!(err.starts_with("SemanticError: Ln 2 Col 11 : "));
}
