//! Property-based tests for the evaluation pipeline.

use calc_core::{
    ErrorKind,
    charset::{first_invalid_char, is_valid_expression_char},
    evaluate,
    tokenizer::token::{TokenizerError, tokenize},
};
use proptest::prelude::*;

/// Operands small enough that every result below is exact in `f64`.
fn operand() -> impl Strategy<Value = i64> {
    -10_000i64..10_000
}

fn literal(n: i64) -> String {
    if n < 0 {
        format!("(-{})", n.unsigned_abs())
    } else {
        n.to_string()
    }
}

/// Strings over the expression alphabet plus a few characters outside it.
fn expression_like() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            '0', '1', '2', '9', '.', '+', '-', '*', '/', '(', ')', ' ', 'x', '&', '\n',
        ]),
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn evaluate_never_panics(input in any::<String>()) {
        let _ = evaluate(&input);
    }

    #[test]
    fn evaluate_is_idempotent(input in expression_like()) {
        let first = evaluate(&input);
        let second = evaluate(&input);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.to_bits(), b.to_bits()),
            (a, b) => prop_assert_eq!(a, b),
        }
    }

    #[test]
    fn lexer_rejects_what_the_charset_rejects(input in expression_like()) {
        if first_invalid_char(&input).is_some() {
            prop_assert_eq!(
                evaluate(&input).map_err(|e| e.kind()),
                Err(ErrorKind::InvalidCharacter)
            );
        }
    }

    #[test]
    fn lexer_only_rejects_outside_charset_or_second_decimal_point(input in expression_like()) {
        if let Err(TokenizerError::InvalidCharacter { character, .. }) = tokenize(&input) {
            prop_assert!(character == '.' || !is_valid_expression_char(character));
        }
    }

    #[test]
    fn precedence_and_associativity(a in operand(), b in operand(), c in operand()) {
        let (a_s, b_s, c_s) = (literal(a), literal(b), literal(c));
        let (a, b, c) = (a as f64, b as f64, c as f64);

        prop_assert_eq!(evaluate(&format!("{a_s} + {b_s} * {c_s}")), Ok(a + b * c));
        prop_assert_eq!(evaluate(&format!("{a_s} * {b_s} + {c_s}")), Ok(a * b + c));
        prop_assert_eq!(evaluate(&format!("{a_s} - {b_s} - {c_s}")), Ok((a - b) - c));
        prop_assert_eq!(evaluate(&format!("{a_s} - {b_s} + {c_s}")), Ok((a - b) + c));
        prop_assert_eq!(evaluate(&format!("({a_s} + {b_s}) * {c_s}")), Ok((a + b) * c));
        prop_assert_eq!(evaluate(&format!("{a_s} * ({b_s} - {c_s})")), Ok(a * (b - c)));
    }

    #[test]
    fn division_matches_f64(a in operand(), b in operand(), c in operand()) {
        prop_assume!(b != 0 && c != 0);
        let input = format!("{} / {} / {}", literal(a), literal(b), literal(c));
        prop_assert_eq!(evaluate(&input), Ok((a as f64 / b as f64) / c as f64));
    }

    #[test]
    fn zero_divisor_is_reported(a in operand()) {
        let input = format!("{} / (5 - 5)", literal(a));
        prop_assert_eq!(evaluate(&input).map_err(|e| e.kind()), Err(ErrorKind::DivisionByZero));
    }
}
