//! # Analyzer (Parser)
//!
//! Turns the token stream produced by the [tokenizer](crate::tokenizer) into an
//! [`Expression`](crate::ast::Expression) tree using parser combinators.
//!
//! ## Core Components
//!
//! * **Parser Trait**: the parsing contract, `parse(&self, input, pos)`
//! * **Combinators**: small composable units (`satisfy`, `choice`, `many`, ...)
//! * **Grammar**: the arithmetic grammar in [`parsers::expression`]
//! * **Error Handling**: recoverable [`ParseError`]s for backtracking, and
//!   classified [`SyntaxError`]s once a `commit` point has been passed
//!
//! ## Position in the Pipeline
//!
//! ```text
//! Source Text → Tokenizer → Analyzer → Evaluator
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use calc_core::analyzer::parse_tokens;
//! use calc_core::tokenizer::token::tokenize;
//!
//! let tokens = tokenize("2 + 3 * 4").unwrap();
//! let expression = parse_tokens(&tokens, 64).unwrap();
//! assert_eq!(expression.to_string(), "(2 + (3 * 4))");
//! ```

pub mod combinators;
pub mod core;
pub mod parsers;
pub mod prelude;

pub use core::ParseError;
pub use core::ParseResult;
pub use core::Parser;
pub use core::{Imbalance, SyntaxError};
pub use parsers::parse_tokens;
