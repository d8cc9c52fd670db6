//! The evaluation pipeline: admission checks, tokenizer, analyzer, evaluator.

use tracing::debug;

use crate::analyzer::parse_tokens;
use crate::ast::Expression;
use crate::config::EvaluatorConfig;
use crate::error::{EvaluationError, EvaluationResult};
use crate::eval::ExpressionEvaluator;
use crate::tokenizer::token::tokenize;

/// Evaluates expressions under a fixed [`EvaluatorConfig`].
///
/// A `Calculator` holds no state besides its configuration; one instance can
/// be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: EvaluatorConfig,
    evaluator: ExpressionEvaluator,
}

impl Calculator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            config,
            evaluator: ExpressionEvaluator::new(),
        }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Parses `expression` without evaluating it.
    ///
    /// Surrounding whitespace is ignored; positions in the returned errors
    /// are byte offsets into the trimmed text.
    #[tracing::instrument(level = "debug", skip(self, expression), fields(length = expression.len()))]
    pub fn parse(&self, expression: &str) -> EvaluationResult<Expression> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(EvaluationError::EmptyExpression);
        }

        let length = expression.chars().count();
        let limit = self.config.max_expression_length;
        if length > limit {
            return Err(EvaluationError::ExpressionTooLong { length, limit });
        }

        let tokens = tokenize(expression)?;
        let ast = parse_tokens(&tokens, self.config.max_nesting_depth)?;
        debug!(tokens = tokens.len(), depth = ast.depth(), "parsed");
        Ok(ast)
    }

    /// Parses and evaluates `expression`.
    #[tracing::instrument(level = "debug", skip(self, expression))]
    pub fn evaluate(&self, expression: &str) -> EvaluationResult<f64> {
        let ast = self.parse(expression)?;
        let value = self.evaluator.eval_expression(&ast)?;
        debug!(value, "evaluated");
        Ok(value)
    }
}

/// Evaluates `expression` with the default [`EvaluatorConfig`].
///
/// ```
/// assert_eq!(calc_core::evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(calc_core::evaluate("(2 + 3) * 4").unwrap(), 20.0);
/// assert!(calc_core::evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> EvaluationResult<f64> {
    Calculator::default().evaluate(expression)
}

/// Parses `expression` with the default [`EvaluatorConfig`].
pub fn parse(expression: &str) -> EvaluationResult<Expression> {
    Calculator::default().parse(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate("1+1"), Ok(2.0));
        assert_eq!(evaluate("  7 / 2  "), Ok(3.5));
        assert_eq!(evaluate("-(-3)"), Ok(3.0));
        assert_eq!(evaluate("2*(-3)"), Ok(-6.0));
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(evaluate(""), Err(EvaluationError::EmptyExpression));
        assert_eq!(evaluate(" \t\n"), Err(EvaluationError::EmptyExpression));
    }

    #[test]
    fn test_expression_too_long() {
        let calculator = Calculator::new(EvaluatorConfig {
            max_expression_length: 5,
            ..Default::default()
        });
        // surrounding whitespace does not count
        assert_eq!(calculator.evaluate("  1+2+3  "), Ok(6.0));
        assert_eq!(
            calculator.evaluate("1+2+3+4"),
            Err(EvaluationError::ExpressionTooLong {
                length: 7,
                limit: 5,
            })
        );
    }

    #[test]
    fn test_nesting_limit() {
        let calculator = Calculator::new(EvaluatorConfig {
            max_nesting_depth: 2,
            ..Default::default()
        });
        assert_eq!(calculator.evaluate("((1))"), Ok(1.0));
        assert_eq!(
            calculator.evaluate("(((1)))").unwrap_err().kind(),
            ErrorKind::NestingTooDeep
        );
    }

    #[test]
    fn test_deep_nesting_rejected_by_default() {
        let input = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        let calculator = Calculator::new(EvaluatorConfig {
            max_expression_length: 100_000,
            ..Default::default()
        });
        assert_eq!(
            calculator.evaluate(&input).unwrap_err().kind(),
            ErrorKind::NestingTooDeep
        );
    }

    #[test]
    fn test_parse_renders_grouping() {
        assert_eq!(parse("2-3-4").unwrap().to_string(), "((2 - 3) - 4)");
        assert_eq!(parse("2+3*4").unwrap().to_string(), "(2 + (3 * 4))");
    }

    #[test]
    fn test_positions_are_relative_to_trimmed_text() {
        let error = evaluate("   1 + x").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidCharacter);
        assert_eq!(error.position(), Some(4));
    }
}
