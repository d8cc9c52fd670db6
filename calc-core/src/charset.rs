//! Character-level admission shared by the tokenizer and the front ends.
//!
//! The HTTP layer pre-filters request bodies with [`first_invalid_char`]
//! before evaluating them, and the tokenizer
//! reports [`InvalidCharacter`](crate::tokenizer::token::TokenizerError) for
//! exactly the characters [`is_valid_expression_char`] rejects. Keeping the
//! predicate in one place keeps the two layers from drifting apart.

/// Returns `true` for characters that may appear in an expression: ASCII
/// digits, the decimal point, `+ - * /`, parentheses and whitespace.
pub fn is_valid_expression_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')') || c.is_whitespace()
}

/// First character rejected by [`is_valid_expression_char`], with its byte
/// offset.
pub fn first_invalid_char(expression: &str) -> Option<(usize, char)> {
    expression
        .char_indices()
        .find(|(_, c)| !is_valid_expression_char(*c))
}
