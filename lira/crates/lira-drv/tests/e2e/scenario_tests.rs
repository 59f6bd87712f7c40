//! The end-to-end scenarios: whole programs through the real binary,
//! rate table supplying USD -> 1.1 and PLN -> 4.3.

use tempfile::TempDir;

use crate::fixtures::lira_run;

#[test]
fn hello_world() {
    let dir = TempDir::new().unwrap();
    lira_run(&dir, r#"void main(){ print("hi"); }"#)
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn currency_literal_print() {
    let dir = TempDir::new().unwrap();
    lira_run(&dir, "void main(){ cur a = 10 USD; print(a); }")
        .assert()
        .success()
        .stdout("10.00 USD\n");
}

#[test]
fn cross_currency_add() {
    let dir = TempDir::new().unwrap();
    let source = "void main(){ cur a = 11 USD; cur b = 43 PLN; a = a + b; print(a); }";
    lira_run(&dir, source)
        .assert()
        .success()
        .stdout("22.00 USD\n");
}

#[test]
fn comparison_across_tags() {
    let dir = TempDir::new().unwrap();
    let source = r#"
        void main(){
            cur a = 11 USD;
            cur b = 43 PLN;
            if (a == b) { print("eq"); } else { print("ne"); }
        }
    "#;
    lira_run(&dir, source).assert().success().stdout("eq\n");
}

#[test]
fn transfer() {
    let dir = TempDir::new().unwrap();
    let source = r#"
        void main(){
            cur a = 100 USD;
            cur b = 0 USD;
            from a -> 30 USD -> b;
            print(a);
            print(b);
        }
    "#;
    lira_run(&dir, source)
        .assert()
        .success()
        .stdout("70.00 USD\n30.00 USD\n");
}

#[test]
fn dict_iteration() {
    let dir = TempDir::new().unwrap();
    let source = r#"
        void main(){
            dict d = {"x": 10 USD, "y": 20 USD};
            for e in d { e.value.set_value(0); }
            print(d.get("x"));
        }
    "#;
    lira_run(&dir, source)
        .assert()
        .success()
        .stdout("0.00 USD\n");
}

#[test]
fn input_round_trip() {
    let dir = TempDir::new().unwrap();
    let source = r#"
        void main(){
            str amount = input("amount: ");
            cur a = to_int(amount) * 1 USD;
            print(a);
        }
    "#;
    lira_run(&dir, source)
        .write_stdin("25\n")
        .assert()
        .success()
        .stdout("amount: 25.00 USD\n");
}

#[test]
fn comments_are_ignored() {
    let dir = TempDir::new().unwrap();
    let source = "# banner\nvoid main(){ print(1); # trailing\n}\n";
    lira_run(&dir, source).assert().success().stdout("1\n");
}
