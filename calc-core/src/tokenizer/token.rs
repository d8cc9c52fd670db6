use std::fmt;

use nom::{
    IResult,
    branch::alt,
    error::{VerboseError, context},
};
use thiserror::Error;

use super::{
    literal::parse_number,
    symbol::{Delimiter, Operator, parse_delimiter, parse_operator},
    whitespace::parse_whitespace,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Number(f64),
    // Symbols
    Operator(Operator),
    Delimiter(Delimiter),
    // End marker, always the last token of a stream
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(op) => write!(f, "'{}'", op),
            Token::Delimiter(delimiter) => write!(f, "'{}'", delimiter),
            Token::End => write!(f, "end of expression"),
        }
    }
}

/// Lazy tokenizer over a single expression.
///
/// Yields `Ok` tokens up to and including one [`Token::End`], or a single
/// `Err` on the first invalid character; after either it yields `None`.
/// Tokenizing the same text again only requires a new `Tokenizer`.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    remaining: &'a str,
    current_position: usize,
    current_line: usize,
    current_column: usize,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            remaining: input,
            current_position: 0,
            current_line: 1,   // 1-based
            current_column: 1, // 1-based
            finished: false,
        }
    }

    fn next_token(&mut self) -> TokenizerResult<TokenSpan> {
        if let Ok((rest, skipped)) = parse_whitespace(self.remaining) {
            self.update_position(skipped);
            self.remaining = rest;
        }

        let start_position = self.current_position;
        let start_line = self.current_line;
        let start_column = self.current_column;

        if self.remaining.is_empty() {
            return Ok(TokenSpan {
                token: Token::End,
                start: start_position,
                end: start_position,
                line: start_line,
                column: start_column,
            });
        }

        let result = context(
            "token",
            alt((parse_number, parse_operator, parse_delimiter)),
        )(self.remaining);

        match result {
            Ok((new_remaining, token)) => {
                let consumed = &self.remaining[..(self.remaining.len() - new_remaining.len())];
                self.update_position(consumed);
                self.remaining = new_remaining;

                // "1.2.3": a number may hold only one decimal point
                if matches!(token, Token::Number(_)) && self.remaining.starts_with('.') {
                    return Err(self.invalid_character('.'));
                }

                Ok(TokenSpan {
                    token,
                    start: start_position,
                    end: self.current_position,
                    line: start_line,
                    column: start_column,
                })
            }
            Err(_) => {
                let character = self.remaining.chars().next().unwrap_or_default();
                Err(self.invalid_character(character))
            }
        }
    }

    fn invalid_character(&self, character: char) -> TokenizerError {
        let error = TokenizerError::InvalidCharacter {
            character,
            span: Span {
                start: self.current_position,
                end: self.current_position + character.len_utf8(),
                line: self.current_line,
                column: self.current_column,
            },
        };
        tracing::debug!("{}", error);
        error
    }

    fn update_position(&mut self, text: &str) {
        for c in text.chars() {
            self.current_position += c.len_utf8();
            if c == '\n' {
                self.current_line += 1;
                self.current_column = 1;
            } else {
                self.current_column += 1;
            }
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = TokenizerResult<TokenSpan>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = match &result {
            Ok(span) => span.token == Token::End,
            Err(_) => true,
        };
        Some(result)
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Tokenizes a whole expression, stopping at the first invalid character.
///
/// The returned tokens always end with [`Token::End`].
#[tracing::instrument(level = "debug", skip(input))]
pub fn tokenize(input: &str) -> TokenizerResult<Vec<TokenSpan>> {
    Tokenizer::new(input).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenSpan {
    pub token: Token,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

pub type TokenizerResult<T> = Result<T, TokenizerError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenizerError {
    #[error("invalid character '{character}' at {span}")]
    InvalidCharacter { character: char, span: Span },
}

impl TokenizerError {
    /// Byte offset of the offending character.
    pub fn position(&self) -> usize {
        match self {
            TokenizerError::InvalidCharacter { span, .. } => span.start,
        }
    }
}
