use std::collections::HashMap;

use shunt::{
    evaluate,
    evaluator::{
        lexer::{tokenize, Token},
        shunting::to_postfix,
        vars::{collect_identifiers, ValueSource},
    },
    EvalError, EvalResult,
};

fn eval(src: &str) -> EvalResult<f64> {
    let mut vars: HashMap<String, f64> = HashMap::new();
    evaluate(src, &mut vars)
}

fn eval_with(src: &str, bindings: &[(&str, f64)]) -> EvalResult<f64> {
    let mut vars: HashMap<String, f64> =
        bindings.iter().map(|(n, v)| ((*n).to_string(), *v)).collect();
    evaluate(src, &mut vars)
}

fn assert_value(src: &str, expected: f64) {
    match eval(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

#[test]
fn simple_expressions() {
    assert_value("2 + 3", 5.0);
    assert_value("5 * 2", 10.0);
    assert_value("5 / 2", 2.5);
    assert_value("5 - 2", 3.0);
}

#[test]
fn parenthesized_expressions() {
    assert_value("2 * (5 + 2)", 14.0);
    assert_value("(2 + 3) * (4 - 1)", 15.0);
    assert_value("(10 + 4) / 2", 7.0);
    assert_value("((2))", 2.0);
}

#[test]
fn multiplication_binds_before_addition() {
    assert_value("2 * 3 + 4 * 5", 26.0);
    assert_value("3 + 4 * 5", 23.0);
    assert_value("(3 + 4) * 5", 35.0);
    assert_value("10 - 6 / 2", 7.0);
}

#[test]
fn operators_are_left_associative() {
    assert_value("8 - 3 - 2", 3.0);
    assert_value("100 / 5 / 2", 10.0);
    assert_value("10 - 4 + 1", 7.0);
}

#[test]
fn decimal_literals() {
    assert_value("1.5 + 2.5", 4.0);
    assert_value(".5 * 4", 2.0);
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert!(matches!(eval("(2 + 3"), Err(EvalError::UnbalancedParentheses)));
    assert!(matches!(eval("2 + 3)"), Err(EvalError::UnbalancedParentheses)));
    assert!(matches!(eval(")2 + 3("), Err(EvalError::UnbalancedParentheses)));
}

#[test]
fn division_by_zero_is_rejected() {
    assert!(matches!(eval("5 / 0"), Err(EvalError::DivisionByZero)));
    assert!(matches!(eval("1 / (2 - 2)"), Err(EvalError::DivisionByZero)));
}

#[test]
fn malformed_literals_are_rejected() {
    match eval("1.2.3 + 1") {
        Err(EvalError::InvalidNumber { text }) => assert_eq!(text, "1.2.3"),
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
}

#[test]
fn missing_operands_are_rejected() {
    assert!(matches!(eval("2 +"), Err(EvalError::InsufficientOperands { .. })));
    assert!(matches!(eval("* 2"), Err(EvalError::InsufficientOperands { .. })));
}

#[test]
fn leftover_operands_are_rejected() {
    assert!(matches!(eval(""), Err(EvalError::MalformedExpression { .. })));
    assert!(matches!(eval("(2)(3)"), Err(EvalError::MalformedExpression { .. })));
}

#[test]
fn variables_resolve_through_the_source() {
    match eval_with("x + y + 12", &[("x", 10.0), ("y", 20.0)]) {
        Ok(value) => assert!((value - 42.0).abs() < 1e-9),
        Err(e) => panic!("evaluation failed: {e}"),
    }
}

#[test]
fn repeated_variables_resolve_once() {
    struct Counting {
        asked: Vec<String>,
    }

    impl ValueSource for Counting {
        fn value_for(&mut self, name: &str) -> String {
            self.asked.push(name.to_string());
            "3".to_string()
        }
    }

    let mut source = Counting { asked: Vec::new() };
    let value = evaluate("x * x + x", &mut source).unwrap();

    assert!((value - 12.0).abs() < 1e-9);
    assert_eq!(source.asked, vec!["x".to_string()]);
}

#[test]
fn prefix_colliding_names_substitute_whole_tokens() {
    match eval_with("a + ab", &[("a", 2.0), ("ab", 5.0)]) {
        Ok(value) => assert!((value - 7.0).abs() < 1e-9),
        Err(e) => panic!("evaluation failed: {e}"),
    }
}

#[test]
fn unbound_variable_is_an_error_not_zero() {
    assert!(matches!(eval("x + 1"),
                     Err(EvalError::InvalidVariableValue { .. })));
}

#[test]
fn non_numeric_variable_value_is_rejected() {
    struct Gibberish;

    impl ValueSource for Gibberish {
        fn value_for(&mut self, _name: &str) -> String {
            "twelve".to_string()
        }
    }

    match evaluate("x + 1", &mut Gibberish) {
        Err(EvalError::InvalidVariableValue { name, text }) => {
            assert_eq!(name, "x");
            assert_eq!(text, "twelve");
        },
        other => panic!("expected InvalidVariableValue, got {other:?}"),
    }
}

#[test]
fn identifiers_collect_in_discovery_order() {
    assert_eq!(collect_identifiers("b+a*b-c"),
               vec!["b".to_string(), "a".to_string(), "c".to_string()]);
    // A trailing identifier is still collected.
    assert_eq!(collect_identifiers("1+rate"), vec!["rate".to_string()]);
    assert_eq!(collect_identifiers("1+2"), Vec::<String>::new());
}

#[test]
fn converter_preserves_every_token_but_parens() {
    for src in ["2+3*4", "(2+3)*(4-1)", "1+2-3*4/5", "((1))"] {
        let tokens = tokenize(src);
        let parens = tokens.iter()
                           .filter(|t| matches!(t, Token::LParen | Token::RParen))
                           .count();
        let expected = tokens.len() - parens;

        assert_eq!(to_postfix(tokens).len(),
                   expected,
                   "token count changed for '{src}'");
    }
}

#[test]
fn repeated_calls_are_pure() {
    for _ in 0..3 {
        assert_value("2 * 3 + 4 * 5", 26.0);
    }
}
