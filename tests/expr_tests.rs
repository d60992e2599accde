use parsec_core::expr::{expr, Expr};

fn eval(source: &str) -> f64 {
    let pair = expr().run_str(source).get();
    assert!(
        pair.second.is_empty(),
        "expression left input behind: {:?}",
        pair.second.mk_string("")
    );
    pair.first.eval()
}

#[test]
fn test_plain_number() {
    assert_eq!(eval("7"), 7.0);
    assert_eq!(eval("  2.25  "), 2.25);
}

#[test]
fn test_each_operator() {
    assert_eq!(eval("(+ 1 2)"), 3.0);
    assert_eq!(eval("(- 10 4)"), 6.0);
    assert_eq!(eval("(* 3 5)"), 15.0);
    assert_eq!(eval("(/ 9 2)"), 4.5);
}

#[test]
fn test_nested_operands() {
    assert_eq!(eval("(+ (* 2 3) (- 10 4))"), 12.0);
    assert_eq!(eval("(/ (+ 1 2) (* 2 (+ 1 0.5)))"), 1.0);
}

#[test]
fn test_whitespace_between_tokens() {
    assert_eq!(eval("( +   1\n\t2 )"), 3.0);
}

#[test]
fn test_parse_produces_expected_tree() {
    let parsed = expr().run_str("(+ 1 2)").get().first;
    match parsed {
        Expr::Add(left, right) => {
            assert_eq!(*left, Expr::Value(1.0));
            assert_eq!(*right, Expr::Value(2.0));
        }
        other => panic!("expected an addition node, got {other:?}"),
    }
}

#[test]
fn test_malformed_expressions_fail() {
    assert!(expr().run_str("(% 1 2)").is_failure());
    assert!(expr().run_str("(+ 1)").is_failure());
    assert!(expr().run_str("()").is_failure());
}
