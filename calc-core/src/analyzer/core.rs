//! # Core Parser Definitions
//!
//! This module defines the fundamental parser interface and the error types
//! shared by every combinator and by the arithmetic grammar.

use strum_macros::Display;
use thiserror::Error;

/// Parser trait defines the core parsing interface.
///
/// All parsers in the system implement this trait, which takes an input slice
/// and a position, and returns either a success result with a new position and
/// output value, or a parse error.
///
/// # Type Parameters
///
/// * `I` - The input token type
/// * `O` - The output value type
pub trait Parser<I, O> {
    /// Attempts to parse the input starting at the given position.
    ///
    /// # Returns
    ///
    /// * `Ok((new_pos, output))` - If parsing succeeds, returns the new position and the parsed value
    /// * `Err(error)` - If parsing fails, returns a ParseError
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O>;
}

/// Result type for parsing operations.
pub type ParseResult<O> = Result<(usize, O), ParseError>;

/// Error type for parsing operations.
///
/// All variants except [`ParseError::Syntax`] are recoverable: a combinator
/// such as `choice`, `many` or `optional` may swallow them and try something
/// else. `Syntax` is produced by `commit` once the grammar has seen enough to
/// know the input is wrong; it is never backtracked over.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Ran past the end of the input
    #[error("Unexpected EOF: {message} at position {position}, context: {context:?}")]
    UnexpectedEOF {
        message: String,
        position: usize,
        context: Option<String>,
    },
    /// Unexpected token
    #[error(
        "Unexpected: expected {expected}, parsed {parsed} at position {position}, context: {context:?}"
    )]
    Unexpected {
        expected: String,
        parsed: String,
        position: usize,
        context: Option<String>,
    },
    /// No alternative matched
    #[error("No alternative matched at position {position}, context: {context:?}")]
    NoAlternative {
        position: usize,
        context: Option<String>,
    },
    /// Explicit failure
    #[error("Failure: {message} at position {position}, context: {context:?}")]
    Failure {
        message: String,
        position: usize,
        context: Option<String>,
    },
    /// Committed, classified grammar violation
    #[error("{error}")]
    Syntax {
        error: SyntaxError,
        context: Option<String>,
    },
}

impl ParseError {
    pub fn with_context(self, ctx: &str) -> Self {
        let chain = |context: Option<String>| match context {
            Some(c) => Some(format!("{} -> {}", c, ctx)),
            None => Some(ctx.to_string()),
        };
        match self {
            ParseError::UnexpectedEOF {
                message,
                position,
                context,
            } => ParseError::UnexpectedEOF {
                message,
                position,
                context: chain(context),
            },
            ParseError::Unexpected {
                expected,
                parsed,
                position,
                context,
            } => ParseError::Unexpected {
                expected,
                parsed,
                position,
                context: chain(context),
            },
            ParseError::NoAlternative { position, context } => ParseError::NoAlternative {
                position,
                context: chain(context),
            },
            ParseError::Failure {
                message,
                position,
                context,
            } => ParseError::Failure {
                message,
                position,
                context: chain(context),
            },
            ParseError::Syntax { error, context } => ParseError::Syntax {
                error,
                context: chain(context),
            },
        }
    }

    /// Position in the parser input (an index into the token slice, not a
    /// source offset) at which the error was raised. For committed errors
    /// this is the source offset carried by the [`SyntaxError`].
    pub fn get_position(&self) -> usize {
        match self {
            ParseError::UnexpectedEOF { position, .. } => *position,
            ParseError::Unexpected { position, .. } => *position,
            ParseError::NoAlternative { position, .. } => *position,
            ParseError::Failure { position, .. } => *position,
            ParseError::Syntax { error, .. } => error.position(),
        }
    }

    pub fn get_context(&self) -> Option<&str> {
        match self {
            ParseError::UnexpectedEOF { context, .. }
            | ParseError::Unexpected { context, .. }
            | ParseError::NoAlternative { context, .. }
            | ParseError::Failure { context, .. }
            | ParseError::Syntax { context, .. } => context.as_deref(),
        }
    }

    /// Whether backtracking combinators must propagate this error as is.
    pub fn is_committed(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }
}

/// Which way a parenthesis pair failed to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Imbalance {
    #[strum(serialize = "missing ')'")]
    MissingClose,
    #[strum(serialize = "unmatched ')'")]
    UnmatchedClose,
}

/// Grammar violations reported to callers. Positions are byte offsets into
/// the source text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("unbalanced parentheses: {imbalance} at position {position}")]
    UnbalancedParens {
        imbalance: Imbalance,
        position: usize,
    },
    #[error("unexpected {found} at position {position}")]
    UnexpectedToken { found: String, position: usize },
    #[error("unexpected trailing input {found} at position {position}")]
    TrailingInput { found: String, position: usize },
    #[error("parentheses nested deeper than {limit} levels at position {position}")]
    NestingTooDeep { limit: usize, position: usize },
}

impl SyntaxError {
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnbalancedParens { position, .. }
            | SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::TrailingInput { position, .. }
            | SyntaxError::NestingTooDeep { position, .. } => *position,
        }
    }
}
