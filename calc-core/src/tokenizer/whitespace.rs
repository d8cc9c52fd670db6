//! # Whitespace Handling
//!
//! Whitespace only separates tokens in an arithmetic expression, so unlike the
//! other token families it is consumed and discarded rather than emitted.
//! Anything `char::is_whitespace` accepts counts, matching
//! [`is_valid_expression_char`](crate::charset::is_valid_expression_char).

use nom::{bytes::complete::take_while, error::context};

use super::token::ParserResult;

/// Consumes any run of whitespace (possibly empty) and returns it.
///
/// # Examples
///
/// ```
/// # use calc_core::tokenizer::whitespace::parse_whitespace;
/// let (rest, ws) = parse_whitespace(" \t 42").unwrap();
/// assert_eq!(ws, " \t ");
/// assert_eq!(rest, "42");
/// ```
pub fn parse_whitespace(input: &str) -> ParserResult<&str> {
    context("whitespace", take_while(char::is_whitespace))(input)
}
