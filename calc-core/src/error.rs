use serde::Serialize;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

use crate::analyzer::core::SyntaxError;
use crate::eval::EvalError;
use crate::tokenizer::token::TokenizerError;

pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Every way evaluating an expression can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("expression is {length} characters long, the limit is {limit}")]
    ExpressionTooLong { length: usize, limit: usize },
    #[error(transparent)]
    Tokenize(#[from] TokenizerError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Flat classification of [`EvaluationError`], suitable for matching in
/// callers and for machine-readable responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyExpression,
    ExpressionTooLong,
    InvalidCharacter,
    UnbalancedParens,
    UnexpectedToken,
    TrailingInput,
    NestingTooDeep,
    DivisionByZero,
    NumericOverflow,
}

impl EvaluationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvaluationError::EmptyExpression => ErrorKind::EmptyExpression,
            EvaluationError::ExpressionTooLong { .. } => ErrorKind::ExpressionTooLong,
            EvaluationError::Tokenize(TokenizerError::InvalidCharacter { .. }) => {
                ErrorKind::InvalidCharacter
            }
            EvaluationError::Syntax(error) => match error {
                SyntaxError::UnbalancedParens { .. } => ErrorKind::UnbalancedParens,
                SyntaxError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
                SyntaxError::TrailingInput { .. } => ErrorKind::TrailingInput,
                SyntaxError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
            },
            EvaluationError::Eval(EvalError::DivisionByZero) => ErrorKind::DivisionByZero,
            EvaluationError::Eval(EvalError::NumericOverflow) => ErrorKind::NumericOverflow,
        }
    }

    /// Byte offset into the trimmed expression, for errors tied to one spot.
    pub fn position(&self) -> Option<usize> {
        match self {
            EvaluationError::Tokenize(error) => Some(error.position()),
            EvaluationError::Syntax(error) => Some(error.position()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::core::Imbalance;
    use crate::tokenizer::token::Span;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_mapping() {
        let cases = [
            (EvaluationError::EmptyExpression, ErrorKind::EmptyExpression),
            (
                EvaluationError::ExpressionTooLong {
                    length: 5,
                    limit: 4,
                },
                ErrorKind::ExpressionTooLong,
            ),
            (
                TokenizerError::InvalidCharacter {
                    character: 'x',
                    span: Span {
                        start: 2,
                        end: 3,
                        line: 1,
                        column: 3,
                    },
                }
                .into(),
                ErrorKind::InvalidCharacter,
            ),
            (
                SyntaxError::UnbalancedParens {
                    imbalance: Imbalance::MissingClose,
                    position: 4,
                }
                .into(),
                ErrorKind::UnbalancedParens,
            ),
            (
                SyntaxError::TrailingInput {
                    found: "2".to_string(),
                    position: 2,
                }
                .into(),
                ErrorKind::TrailingInput,
            ),
            (EvalError::DivisionByZero.into(), ErrorKind::DivisionByZero),
            (EvalError::NumericOverflow.into(), ErrorKind::NumericOverflow),
        ];
        for (error, kind) in cases {
            assert_eq!(error.kind(), kind, "{error}");
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            EvaluationError::EmptyExpression.to_string(),
            "empty expression"
        );
        assert_eq!(
            EvaluationError::ExpressionTooLong {
                length: 5000,
                limit: 4096
            }
            .to_string(),
            "expression is 5000 characters long, the limit is 4096"
        );
        assert_eq!(
            EvaluationError::from(EvalError::DivisionByZero).to_string(),
            "division by zero"
        );
    }

    #[test]
    fn test_position() {
        let error: EvaluationError = SyntaxError::UnexpectedToken {
            found: "'+'".to_string(),
            position: 2,
        }
        .into();
        assert_eq!(error.position(), Some(2));
        assert_eq!(EvaluationError::EmptyExpression.position(), None);
    }

    #[test]
    fn test_kind_names() {
        let names: Vec<String> = ErrorKind::iter().map(|kind| kind.to_string()).collect();
        assert_eq!(names.len(), 9);
        assert!(names.contains(&"division_by_zero".to_string()));
        assert_eq!(
            serde_json::to_string(&ErrorKind::UnbalancedParens).unwrap(),
            "\"unbalanced_parens\""
        );
    }
}
