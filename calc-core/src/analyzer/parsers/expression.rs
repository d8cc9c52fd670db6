//! Arithmetic grammar.
//!
//! ```text
//! root       := expression End
//! expression := leading (('+' | '-') term)*
//! leading    := unary (('*' | '/') unary)*
//! term       := primary (('*' | '/') unary)*
//! unary      := ('+' | '-')? primary
//! primary    := Number | '(' expression ')'
//! ```
//!
//! A sign is accepted in front of any operand except one that directly
//! follows `+` or `-`. `2*-3` and `1+2/-4` parse; `1++2`, `1+-2` and `--5`
//! are rejected.
//!
//! Every operand position is committed: once an operator or `(` has been
//! consumed, a missing operand or `)` is reported as a [`SyntaxError`] and
//! never backtracked over.

use super::super::{core::*, prelude::*};
use crate::ast::{BinaryOperator, Expression};
use crate::tokenizer::{
    symbol::{Delimiter, Operator},
    token::{Token, TokenSpan},
};

pub fn parse_root() -> impl Parser<TokenSpan, Expression> {
    with_context(
        map(
            tuple2(parse_expression(), commit(parse_end(), trailing_input)),
            |(expression, _)| expression,
        ),
        "root",
    )
}

pub fn parse_expression() -> impl Parser<TokenSpan, Expression> {
    with_context(lazy(parse_additive), "expression")
}

fn parse_additive() -> impl Parser<TokenSpan, Expression> {
    with_context(
        map(
            tuple2(
                parse_leading_term(),
                many(tuple2(parse_additive_operator(), parse_term())),
            ),
            fold_left,
        ),
        "additive",
    )
}

fn parse_leading_term() -> impl Parser<TokenSpan, Expression> {
    with_context(
        map(
            tuple2(
                parse_unary(),
                many(tuple2(parse_multiplicative_operator(), parse_unary())),
            ),
            fold_left,
        ),
        "leading term",
    )
}

// 乗除算 (*, /)
fn parse_term() -> impl Parser<TokenSpan, Expression> {
    with_context(
        map(
            tuple2(
                parse_primary(),
                many(tuple2(parse_multiplicative_operator(), parse_unary())),
            ),
            fold_left,
        ),
        "term",
    )
}

fn parse_unary() -> impl Parser<TokenSpan, Expression> {
    with_context(
        map(
            tuple2(optional(parse_sign()), parse_primary()),
            |(sign, operand)| match sign {
                Some(Operator::Minus) => Expression::negate(operand),
                _ => operand,
            },
        ),
        "unary",
    )
}

fn parse_primary() -> impl Parser<TokenSpan, Expression> {
    with_context(
        commit(
            choice(vec![Box::new(parse_number()), Box::new(parse_group())]),
            missing_operand,
        ),
        "primary",
    )
}

fn parse_group() -> impl Parser<TokenSpan, Expression> {
    with_context(
        delimited(
            as_unit(parse_delimiter(Delimiter::OpenParen)),
            lazy(parse_expression),
            as_unit(commit(
                parse_delimiter(Delimiter::CloseParen),
                missing_close_paren,
            )),
        ),
        "group",
    )
}

fn parse_number() -> impl Parser<TokenSpan, Expression> {
    satisfy(|span: &TokenSpan| match span.token {
        Token::Number(value) => Some(Expression::literal(value)),
        _ => None,
    })
}

fn parse_sign() -> impl Parser<TokenSpan, Operator> {
    satisfy(|span: &TokenSpan| match span.token {
        Token::Operator(op @ (Operator::Plus | Operator::Minus)) => Some(op),
        _ => None,
    })
}

fn parse_additive_operator() -> impl Parser<TokenSpan, BinaryOperator> {
    satisfy(|span: &TokenSpan| match span.token {
        Token::Operator(Operator::Plus) => Some(BinaryOperator::Add),
        Token::Operator(Operator::Minus) => Some(BinaryOperator::Subtract),
        _ => None,
    })
}

fn parse_multiplicative_operator() -> impl Parser<TokenSpan, BinaryOperator> {
    satisfy(|span: &TokenSpan| match span.token {
        Token::Operator(Operator::Multiply) => Some(BinaryOperator::Multiply),
        Token::Operator(Operator::Divide) => Some(BinaryOperator::Divide),
        _ => None,
    })
}

fn parse_delimiter(delimiter: Delimiter) -> impl Parser<TokenSpan, Delimiter> {
    satisfy(move |span: &TokenSpan| match span.token {
        Token::Delimiter(found) if found == delimiter => Some(found),
        _ => None,
    })
}

fn parse_end() -> impl Parser<TokenSpan, ()> {
    satisfy(|span: &TokenSpan| match span.token {
        Token::End => Some(()),
        _ => None,
    })
}

fn fold_left((first, rest): (Expression, Vec<(BinaryOperator, Expression)>)) -> Expression {
    rest.into_iter()
        .fold(first, |left, (op, right)| Expression::binary(op, left, right))
}

/// Token at `pos` and its source offset. Positions past the slice (only
/// possible for input that lacks an `End`) resolve to the end of the last
/// token.
fn found_at(input: &[TokenSpan], pos: usize) -> (Token, usize) {
    match input.get(pos) {
        Some(span) => (span.token.clone(), span.start),
        None => (Token::End, input.last().map_or(0, |span| span.end)),
    }
}

fn missing_operand(input: &[TokenSpan], pos: usize) -> SyntaxError {
    let (found, position) = found_at(input, pos);
    SyntaxError::UnexpectedToken {
        found: found.to_string(),
        position,
    }
}

fn missing_close_paren(input: &[TokenSpan], pos: usize) -> SyntaxError {
    match found_at(input, pos) {
        (Token::End, position) => SyntaxError::UnbalancedParens {
            imbalance: Imbalance::MissingClose,
            position,
        },
        (found, position) => SyntaxError::UnexpectedToken {
            found: found.to_string(),
            position,
        },
    }
}

fn trailing_input(input: &[TokenSpan], pos: usize) -> SyntaxError {
    match found_at(input, pos) {
        (Token::Delimiter(Delimiter::CloseParen), position) => SyntaxError::UnbalancedParens {
            imbalance: Imbalance::UnmatchedClose,
            position,
        },
        (found, position) => SyntaxError::TrailingInput {
            found: found.to_string(),
            position,
        },
    }
}

/// Rejects input whose parentheses open more than `limit` levels deep,
/// before any recursive parsing happens.
pub fn check_nesting_depth(tokens: &[TokenSpan], limit: usize) -> Result<(), SyntaxError> {
    let mut depth = 0usize;
    for span in tokens {
        match span.token {
            Token::Delimiter(Delimiter::OpenParen) => {
                depth += 1;
                if depth > limit {
                    return Err(SyntaxError::NestingTooDeep {
                        limit,
                        position: span.start,
                    });
                }
            }
            Token::Delimiter(Delimiter::CloseParen) => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}
