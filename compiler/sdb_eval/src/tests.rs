use super::*;
use crate::test_helpers::MockMachine;
use pretty_assertions::assert_eq;
use sdb_lexer::LexErrorKind;

#[test]
fn expr_evaluates_text() {
    let machine = MockMachine::new().with_register("t0", 3);
    assert_eq!(expr("($t0 + 1) * 0x10", &machine), Ok(64));
}

#[test]
fn expr_blank_input_is_empty_expression() {
    let machine = MockMachine::new();
    let err = expr("   ", &machine);
    assert_eq!(
        err,
        Err(ExprError::Eval(EvalError::from_kind(
            EvalErrorKind::EmptyExpression
        )))
    );
}

#[test]
fn expr_lex_error_keeps_position() {
    let machine = MockMachine::new();
    let err = match expr("1 + #", &machine) {
        Ok(v) => panic!("expected lex error, got {v}"),
        Err(e) => e,
    };
    assert_eq!(err.span().map(|s| s.start), Some(4));
    assert!(matches!(
        err,
        ExprError::Lex(ref e) if e.kind == LexErrorKind::NoMatch { position: 4 }
    ));
    assert!(!err.is_fatal());
}

#[test]
fn expr_token_overflow_is_fatal() {
    let machine = MockMachine::new();
    let source = vec!["1"; 20].join("+");
    let err = expr(&source, &machine).err();
    assert_eq!(err.as_ref().map(ExprError::is_fatal), Some(true));
}

#[test]
fn expr_never_substitutes_a_default() {
    let machine = MockMachine::new();
    for source in ["1+", "(1+2", "$nosuchreg", "1/0", "*0"] {
        assert!(expr(source, &machine).is_err(), "{source} should fail");
    }
}

#[test]
fn expr_is_reentrant_across_calls() {
    let machine = MockMachine::new().with_word(0, 5);
    let outer = expr("*0 + 1", &machine);
    let inner = expr("2*3", &machine);
    assert_eq!(outer, Ok(6));
    assert_eq!(inner, Ok(6));
    assert_eq!(expr("*0 + 1", &machine), outer);
}

mod proptest_eval {
    use super::super::expr;
    use crate::test_helpers::MockMachine;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decimal_literal_round_trips(n in any::<u64>()) {
            let machine = MockMachine::new();
            prop_assert_eq!(expr(&n.to_string(), &machine), Ok(n));
        }

        #[test]
        fn hex_literal_round_trips(n in any::<u64>()) {
            let machine = MockMachine::new();
            prop_assert_eq!(expr(&format!("{n:#x}"), &machine), Ok(n));
        }

        #[test]
        fn parentheses_are_transparent(n in any::<u64>(), depth in 0usize..10) {
            let machine = MockMachine::new();
            let wrapped = format!("{}{n}{}", "(".repeat(depth), ")".repeat(depth));
            prop_assert_eq!(expr(&wrapped, &machine), expr(&n.to_string(), &machine));
        }

        #[test]
        fn subtraction_is_left_associative(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
            let machine = MockMachine::new();
            let expected = a.wrapping_sub(b).wrapping_sub(c);
            prop_assert_eq!(expr(&format!("{a}-{b}-{c}"), &machine), Ok(expected));
        }

        #[test]
        fn division_is_left_associative(a in any::<u64>(), b in 1u64.., c in 1u64..) {
            let machine = MockMachine::new();
            prop_assert_eq!(expr(&format!("{a}/{b}/{c}"), &machine), Ok(a / b / c));
        }
    }
}
