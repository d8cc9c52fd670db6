use calc_core::{Calculator, ErrorKind, EvaluationError, EvaluatorConfig, evaluate};
use pretty_assertions::assert_eq;

fn kind(input: &str) -> ErrorKind {
    match evaluate(input) {
        Ok(value) => panic!("{input:?} evaluated to {value}"),
        Err(error) => error.kind(),
    }
}

#[test]
fn it_evaluates_arithmetic() {
    assert_eq!(evaluate("2+2"), Ok(4.0));
    assert_eq!(evaluate("2*(3+4)"), Ok(14.0));
    assert_eq!(evaluate("10/2/5"), Ok(1.0));
    assert_eq!(evaluate("-3+5"), Ok(2.0));
    assert_eq!(evaluate("0.5 + .25"), Ok(0.75));
    assert_eq!(evaluate("3. * 2"), Ok(6.0));
    assert_eq!(evaluate("1 +\n 2"), Ok(3.0));
}

#[test]
fn it_applies_precedence_and_left_associativity() {
    assert_eq!(evaluate("2+3*4"), Ok(14.0));
    assert_eq!(evaluate("2-3-4"), Ok(-5.0));
    assert_eq!(evaluate("2-3+4"), Ok(3.0));
    assert_eq!(evaluate("16/4*2"), Ok(8.0));
    assert_eq!(evaluate("-2*3"), Ok(-6.0));
    assert_eq!(evaluate("-(2+3)*2"), Ok(-10.0));
}

#[test]
fn it_classifies_errors() {
    assert_eq!(evaluate(""), Err(EvaluationError::EmptyExpression));
    assert_eq!(evaluate("   "), Err(EvaluationError::EmptyExpression));
    assert_eq!(kind("1/0"), ErrorKind::DivisionByZero);
    assert_eq!(kind("1/(2-2)"), ErrorKind::DivisionByZero);
    assert_eq!(kind("(1+2"), ErrorKind::UnbalancedParens);
    assert_eq!(kind("1+2)"), ErrorKind::UnbalancedParens);
    assert_eq!(kind("1++2"), ErrorKind::UnexpectedToken);
    assert_eq!(kind("1 2"), ErrorKind::TrailingInput);
    assert_eq!(kind("1&2"), ErrorKind::InvalidCharacter);
    assert_eq!(kind("1.2.3"), ErrorKind::InvalidCharacter);
    assert_eq!(kind("1+-2"), ErrorKind::UnexpectedToken);
    assert_eq!(kind("1 - -1"), ErrorKind::UnexpectedToken);
    assert_eq!(kind("--5"), ErrorKind::UnexpectedToken);
    assert_eq!(kind("(1 2)"), ErrorKind::UnexpectedToken);
    assert_eq!(kind("()"), ErrorKind::UnexpectedToken);
    assert_eq!(kind("1+"), ErrorKind::UnexpectedToken);
    // no exponent notation
    assert_eq!(kind("1e5"), ErrorKind::InvalidCharacter);
}

#[test]
fn it_reports_overflow() {
    let huge = format!("1{}", "0".repeat(400));
    assert_eq!(kind(&huge), ErrorKind::NumericOverflow);
    assert_eq!(kind(&format!("1/{huge}")), ErrorKind::NumericOverflow);

    let large = format!("1{}", "0".repeat(308));
    assert_eq!(kind(&format!("{large}*10")), ErrorKind::NumericOverflow);
}

#[test]
fn it_accepts_signs_after_multiplicative_operators() {
    assert_eq!(evaluate("2*-3"), Ok(-6.0));
    assert_eq!(evaluate("2/-1"), Ok(-2.0));
    assert_eq!(evaluate("(1)*-1"), Ok(-1.0));
    assert_eq!(evaluate("1+2*-3"), Ok(-5.0));
}

#[test]
fn it_accepts_parenthesized_signs() {
    assert_eq!(evaluate("-(-3)"), Ok(3.0));
    assert_eq!(evaluate("2*(-3)"), Ok(-6.0));
    assert_eq!(evaluate("+4"), Ok(4.0));
}

#[test]
fn it_formats_error_messages_with_positions() {
    assert_eq!(
        evaluate("1 + (2").unwrap_err().to_string(),
        "unbalanced parentheses: missing ')' at position 6"
    );
    assert_eq!(
        evaluate("1 & 2").unwrap_err().to_string(),
        "invalid character '&' at line 1, column 3"
    );
    assert_eq!(
        evaluate("1 2").unwrap_err().to_string(),
        "unexpected trailing input 2 at position 2"
    );
}

#[test]
fn it_uses_configured_limits() {
    let calculator = Calculator::new(EvaluatorConfig {
        max_expression_length: 8,
        max_nesting_depth: 1,
    });
    assert_eq!(calculator.evaluate("(1+2)*3"), Ok(9.0));
    assert_eq!(
        calculator.evaluate("((1+2))").unwrap_err().kind(),
        ErrorKind::NestingTooDeep
    );
    assert_eq!(
        calculator.evaluate("1+2+3+4+5").unwrap_err(),
        EvaluationError::ExpressionTooLong {
            length: 9,
            limit: 8,
        }
    );
}

#[test]
fn it_shares_a_calculator_across_threads() {
    let calculator = Calculator::default();
    std::thread::scope(|scope| {
        for n in 1..=4 {
            let calculator = &calculator;
            scope.spawn(move || {
                let input = format!("{n} * (1 + 1)");
                assert_eq!(calculator.evaluate(&input), Ok(n as f64 * 2.0));
            });
        }
    });
}
