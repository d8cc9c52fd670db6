//! Evaluation of expression trees.
//!
//! The [`ExpressionEvaluator`] walks an [`Expression`](crate::ast::Expression)
//! bottom-up in IEEE-754 double precision. It fails with [`EvalError`] when a
//! divisor is zero or when any intermediate value stops being finite.

pub mod expression;

pub use expression::{EvalError, EvalResult, ExpressionEvaluator};
