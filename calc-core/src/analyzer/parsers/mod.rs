pub mod expression;

use tracing::debug;

use super::core::{ParseError, Parser, SyntaxError};
use crate::ast::Expression;
use crate::tokenizer::token::TokenSpan;

/// Parses a complete token stream, as produced by
/// [`tokenize`](crate::tokenizer::token::tokenize), into an [`Expression`].
///
/// `tokens` must end with [`Token::End`](crate::tokenizer::token::Token::End).
/// Parentheses nested deeper than `max_nesting_depth` are rejected before the
/// grammar runs.
#[tracing::instrument(level = "debug", skip(tokens), fields(tokens = tokens.len()))]
pub fn parse_tokens(tokens: &[TokenSpan], max_nesting_depth: usize) -> Result<Expression, SyntaxError> {
    expression::check_nesting_depth(tokens, max_nesting_depth)?;

    match expression::parse_root().parse(tokens, 0) {
        Ok((_, expression)) => Ok(expression),
        Err(ParseError::Syntax { error, context }) => {
            debug!(?context, "syntax error: {}", error);
            Err(error)
        }
        Err(other) => {
            // Every operand and closing position is committed, so this only
            // happens for token streams that were not produced by the tokenizer.
            debug!("uncommitted parse error: {}", other);
            let index = other.get_position();
            let (found, position) = match tokens.get(index) {
                Some(span) => (span.token.to_string(), span.start),
                None => (
                    "end of expression".to_string(),
                    tokens.last().map_or(0, |span| span.end),
                ),
            };
            Err(SyntaxError::UnexpectedToken { found, position })
        }
    }
}
