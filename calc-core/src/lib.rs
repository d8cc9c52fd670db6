//! # calc-core: Arithmetic Expression Evaluation
//!
//! Evaluates arithmetic expressions written as text: decimal numbers, the four
//! operators `+ - * /`, parentheses and unary signs. Each call yields
//! one `f64` or one precisely classified [`EvaluationError`].
//!
//! ```
//! use calc_core::{evaluate, ErrorKind};
//!
//! assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
//! assert_eq!(evaluate("1 / 0").unwrap_err().kind(), ErrorKind::DivisionByZero);
//! assert_eq!(evaluate("(1 + 2").unwrap_err().kind(), ErrorKind::UnbalancedParens);
//! ```
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source Text → Tokenizer → Analyzer → Evaluator
//! ```
//!
//! ### Stage 1: Tokenization (Lexical Analysis)
//!
//! The [`tokenizer`] module turns the text into numbers, operators and
//! parentheses, each tagged with its source position. Characters outside the
//! [`charset`] are rejected here.
//!
//! ### Stage 2: Parsing (Syntactic Analysis)
//!
//! The [`analyzer`] module builds an [`Expression`] tree with parser
//! combinators, applying the usual precedence and left associativity.
//!
//! ### Stage 3: Evaluation
//!
//! The [`eval`] module folds the tree into a value in IEEE-754 double
//! precision, rejecting division by zero and non-finite results.
//!
//! The [`calculator`] module ties the stages together and applies the
//! admission limits from [`config`].
//!
//! ## Logging
//!
//! The crate emits `tracing` spans and events at `debug` and `trace` level only
//! and never installs a subscriber.

pub mod analyzer;
pub mod ast;
pub mod calculator;
pub mod charset;
pub mod config;
pub mod error;
pub mod eval;
pub mod tokenizer;

// Re-exports
pub use ast::*;
pub use calculator::{Calculator, evaluate, parse};
pub use config::{ConfigError, EvaluatorConfig};
pub use error::*;
pub use eval::EvalError;

#[cfg(test)]
mod tests {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    #[ctor::ctor]
    fn init_tests() {
        // テストの前に一度だけ実行したい処理
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}
