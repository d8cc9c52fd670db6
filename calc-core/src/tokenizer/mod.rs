//! # Tokenizer Component
//!
//! The tokenizer performs the lexical analysis of an arithmetic expression,
//! turning raw text into a finite stream of tokens for the analyzer.
//!
//! ## Design Principles
//!
//! * **Position Information**: Each token carries its byte range and 1-based
//!   line/column so that every later error can point at the offending input.
//! * **Laziness**: [`Tokenizer`](token::Tokenizer) is an iterator; tokens are
//!   produced on demand and the stream can be restarted by creating a new
//!   tokenizer over the same text.
//! * **Termination**: Every successful stream ends with exactly one
//!   [`Token::End`](token::Token::End), even for blank input.
//! * **Whitespace Skipping**: Whitespace separates tokens and is never emitted.
//!
//! ## Component Structure
//!
//! * [`token`]: Token types, spans, errors and the tokenizer itself
//! * [`literal`]: Number literal parsing
//! * [`symbol`]: Operators and parentheses
//! * [`whitespace`]: Whitespace skipping
//!
//! ## Integration Points
//!
//! 1. **Input**: Raw expression text
//! 2. **Processing**: Lexical analysis via [`tokenize`](token::tokenize)
//! 3. **Output**: `Vec` of [`TokenSpan`](token::TokenSpan) ending with `End`
//! 4. **Next Stage**: The analyzer consumes the token slice to build the AST
//!
//! ## Usage Example
//!
//! ```rust
//! use calc_core::tokenizer::token::{Token, tokenize};
//! use calc_core::tokenizer::symbol::Operator;
//!
//! let tokens = tokenize("1 + 2").unwrap();
//! let kinds: Vec<Token> = tokens.into_iter().map(|span| span.token).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         Token::Number(1.0),
//!         Token::Operator(Operator::Plus),
//!         Token::Number(2.0),
//!         Token::End,
//!     ]
//! );
//! ```

pub mod literal;
pub mod symbol;
pub mod token;
pub mod whitespace;
