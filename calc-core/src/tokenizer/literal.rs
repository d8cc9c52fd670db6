use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1},
    combinator::{map_res, opt, recognize},
    error::context,
    sequence::pair,
};

use super::token::{ParserResult, Token};

/// `12`, `12.5` and `12.`
#[tracing::instrument(level = "trace", skip(input))]
fn parse_digits_first(input: &str) -> ParserResult<&str> {
    context(
        "number with integer part",
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
    )(input)
}

/// `.5`
#[tracing::instrument(level = "trace", skip(input))]
fn parse_fraction_only(input: &str) -> ParserResult<&str> {
    context("fraction", recognize(pair(char('.'), digit1)))(input)
}

/// Parses a number literal into a [`Token::Number`].
///
/// Signs are not part of the literal; `-5` is a minus operator followed by
/// `5`. A second decimal point is left in the input for the tokenizer to
/// reject.
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_number(input: &str) -> ParserResult<Token> {
    context(
        "number literal",
        map_res(
            alt((parse_digits_first, parse_fraction_only)),
            |s: &str| s.parse::<f64>().map(Token::Number),
        ),
    )(input)
}
