//! # Symbol Token Handling
//!
//! This module defines the symbols (operators and parentheses) recognized in an
//! arithmetic expression and provides the nom parsers that produce them.
//!
//! Every symbol is a single character, so there is no longest-match concern;
//! operator precedence is entirely the analyzer's business.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{map, value},
    error::context,
};

use super::token::{ParserResult, Token};

/// Arithmetic operators.
///
/// `Plus` and `Minus` double as unary signs; the analyzer decides which role
/// a given occurrence plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIter)]
pub enum Operator {
    /// Addition operator or unary plus (`+`)
    #[strum(serialize = "+")]
    Plus,
    /// Subtraction operator or unary minus (`-`)
    #[strum(serialize = "-")]
    Minus,
    /// Multiplication operator (`*`)
    #[strum(serialize = "*")]
    Multiply,
    /// Division operator (`/`)
    #[strum(serialize = "/")]
    Divide,
}

/// Grouping delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIter)]
pub enum Delimiter {
    /// Opening parenthesis (`(`)
    #[strum(serialize = "(")]
    OpenParen,
    /// Closing parenthesis (`)`)
    #[strum(serialize = ")")]
    CloseParen,
}

/// Parses an operator token from the input string.
///
/// # Examples
///
/// ```
/// # use calc_core::tokenizer::symbol::{parse_operator, Operator};
/// # use calc_core::tokenizer::token::Token;
/// let (rest, token) = parse_operator("* 3").unwrap();
/// assert_eq!(token, Token::Operator(Operator::Multiply));
/// assert_eq!(rest, " 3");
/// ```
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_operator(input: &str) -> ParserResult<Token> {
    context(
        "operator",
        map(
            alt((
                value(Operator::Plus, tag("+")),
                value(Operator::Minus, tag("-")),
                value(Operator::Multiply, tag("*")),
                value(Operator::Divide, tag("/")),
            )),
            Token::Operator,
        ),
    )(input)
}

/// Parses a parenthesis token from the input string.
///
/// # Examples
///
/// ```
/// # use calc_core::tokenizer::symbol::{parse_delimiter, Delimiter};
/// # use calc_core::tokenizer::token::Token;
/// let (rest, token) = parse_delimiter("(1)").unwrap();
/// assert_eq!(token, Token::Delimiter(Delimiter::OpenParen));
/// assert_eq!(rest, "1)");
/// ```
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_delimiter(input: &str) -> ParserResult<Token> {
    context(
        "delimiter",
        map(
            alt((
                value(Delimiter::OpenParen, tag("(")),
                value(Delimiter::CloseParen, tag(")")),
            )),
            Token::Delimiter,
        ),
    )(input)
}
