use thiserror::Error;

use crate::ast::BinaryOperator;
use crate::source_loc::*;
use crate::token::*;

// Everything that can go wrong turning one line into an integer.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EvalError {
    #[error("{}", describe_unexpected(.token_type, .lexeme))]
    UnexpectedToken {
        token_type: TokenType,
        lexeme: String,
        source_loc: SourceLoc,
    },

    // The location is that of the opening paren.
    #[error("expected ')' to close '('")]
    UnmatchedParen { source_loc: SourceLoc },

    // The location is that of the first paren past the limit.
    #[error("parentheses nested deeper than {limit}")]
    NestingTooDeep { limit: usize, source_loc: SourceLoc },

    #[error("malformed number {text:?}")]
    MalformedNumber { text: String, source_loc: SourceLoc },

    #[error("division by zero")]
    DivisionByZero { source_loc: SourceLoc },

    #[error("unexpected trailing input {remainder:?}")]
    TrailingInput { remainder: String, source_loc: SourceLoc },

    // No operator means a literal that doesn't fit.
    #[error("integer overflow {}", describe_overflow(.operator))]
    IntegerOverflow {
        operator: Option<BinaryOperator>,
        source_loc: SourceLoc,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
    Semantic,
    Conversion,
}

impl EvalError {
    pub fn unexpected(token: &Token) -> EvalError {
        EvalError::UnexpectedToken {
            token_type: token.token_type,
            lexeme: token.lexeme.to_string(),
            source_loc: SourceLoc::from(token),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EvalError::UnexpectedToken { token_type: TokenType::Error, .. } => ErrorCategory::Lexical,
            EvalError::UnexpectedToken { .. }
            | EvalError::UnmatchedParen { .. }
            | EvalError::NestingTooDeep { .. }
            | EvalError::TrailingInput { .. } => ErrorCategory::Syntax,
            EvalError::DivisionByZero { .. }
            | EvalError::IntegerOverflow { .. } => ErrorCategory::Semantic,
            EvalError::MalformedNumber { .. } => ErrorCategory::Conversion,
        }
    }

    pub fn source_loc(&self) -> SourceLoc {
        match self {
            EvalError::UnexpectedToken { source_loc, .. }
            | EvalError::UnmatchedParen { source_loc }
            | EvalError::NestingTooDeep { source_loc, .. }
            | EvalError::MalformedNumber { source_loc, .. }
            | EvalError::DivisionByZero { source_loc }
            | EvalError::TrailingInput { source_loc, .. }
            | EvalError::IntegerOverflow { source_loc, .. } => *source_loc,
        }
    }
}

fn describe_unexpected(token_type: &TokenType, lexeme: &str) -> String {
    match token_type {
        TokenType::Eof => "unexpected end of input".to_string(),
        TokenType::Error => format!("unrecognized character '{}'", lexeme),
        _ => format!("unexpected token '{}'", lexeme),
    }
}

fn describe_overflow(operator: &Option<BinaryOperator>) -> String {
    match operator {
        None => "in literal".to_string(),
        Some(op) => format!("evaluating '{}'", op),
    }
}
