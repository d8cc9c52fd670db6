use thiserror::Error;

use crate::ast::{BinaryOperator, Expression};

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("numeric overflow")]
    NumericOverflow,
}

#[derive(Debug, Clone, Copy)]
pub struct ExpressionEvaluator;

impl Default for ExpressionEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `expr` to a finite value. Every node is checked, literals
    /// included: a literal with more digits than `f64` can hold parses to
    /// infinity and is reported as [`EvalError::NumericOverflow`].
    pub fn eval_expression(&self, expr: &Expression) -> EvalResult<f64> {
        let value = match expr {
            Expression::Literal(value) => *value,
            Expression::UnaryMinus(operand) => -self.eval_expression(operand)?,
            Expression::BinaryOp { op, left, right } => self.eval_binary_op(op, left, right)?,
        };
        Self::check_finite(value)
    }

    // 二項演算の評価
    fn eval_binary_op(
        &self,
        op: &BinaryOperator,
        left: &Expression,
        right: &Expression,
    ) -> EvalResult<f64> {
        let left_val = self.eval_expression(left)?;
        let right_val = self.eval_expression(right)?;

        match op {
            BinaryOperator::Add => Ok(left_val + right_val),
            BinaryOperator::Subtract => Ok(left_val - right_val),
            BinaryOperator::Multiply => Ok(left_val * right_val),
            BinaryOperator::Divide => Self::eval_divide(left_val, right_val),
        }
    }

    fn eval_divide(left: f64, right: f64) -> EvalResult<f64> {
        // -0.0 == 0.0
        if right == 0.0 {
            tracing::debug!(dividend = left, "division by zero");
            return Err(EvalError::DivisionByZero);
        }
        Ok(left / right)
    }

    fn check_finite(value: f64) -> EvalResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            tracing::debug!(value, "non-finite intermediate result");
            Err(EvalError::NumericOverflow)
        }
    }
}
