use std::mem;
use std::num::IntErrorKind;

use log::{trace, warn};

use crate::ast::*;
use crate::error::*;
use crate::options::TrailingInput;
use crate::scanner::*;
use crate::source_loc::*;
use crate::token::*;

// Parse a whole line, rejecting anything after the expression.
pub fn parse_expression(source: &str) -> Result<Expr, EvalError> {
    parse(source, TrailingInput::Reject)
}

pub fn parse(source: &str, trailing_input: TrailingInput) -> Result<Expr, EvalError> {
    let mut parser = Parser::new(source);
    let expr = parser.parse_expression()?;
    parser.finish(trailing_input)?;

    Ok(expr)
}

// Each level of parens costs a few stack frames in the descent below.
pub const MAX_NESTING_DEPTH: usize = 256;

// Recursive descent over:
//
//   expression := term (('+' | '-') term)*
//   term       := factor (('*' | '/') factor)*
//   factor     := Number | '(' expression ')'
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    // The lookahead: the next token not yet in the tree.
    current: Token<'a>,
    // How many parens are open right now.
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Parser<'a> {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token();

        Parser {
            scanner,
            current,
            depth: 0,
        }
    }

    pub fn parse_expression(&mut self) -> Result<Expr, EvalError> {
        trace!("expression at {:?}", self.current.lexeme);
        let mut expr = self.parse_term()?;

        while let Some((operator, loc)) = self.matches(&[BinaryOperator::Plus, BinaryOperator::Minus]) {
            let right = self.parse_term()?;
            expr = Expr::binary(expr, operator, right, loc);
        }

        Ok(expr)
    }

    pub fn parse_term(&mut self) -> Result<Expr, EvalError> {
        trace!("term at {:?}", self.current.lexeme);
        let mut expr = self.parse_factor()?;

        while let Some((operator, loc)) = self.matches(&[BinaryOperator::Multiply, BinaryOperator::Divide]) {
            let right = self.parse_factor()?;
            expr = Expr::binary(expr, operator, right, loc);
        }

        Ok(expr)
    }

    pub fn parse_factor(&mut self) -> Result<Expr, EvalError> {
        trace!("factor at {:?}", self.current.lexeme);
        match self.current.token_type {
            TokenType::Number => {
                let token = self.advance();

                literal(&token)
            }
            TokenType::LeftParen => {
                if self.depth >= MAX_NESTING_DEPTH {
                    return Err(EvalError::NestingTooDeep {
                        limit: MAX_NESTING_DEPTH,
                        source_loc: SourceLoc::from(&self.current),
                    });
                }
                let open = self.advance();
                self.depth += 1;
                let result = self.parse_expression();
                self.depth -= 1;
                let expr = result?;
                if self.current.token_type != TokenType::RightParen {
                    return Err(EvalError::UnmatchedParen { source_loc: SourceLoc::from(&open) });
                }
                self.advance();

                // Parens only group; they leave no node behind.
                Ok(expr)
            }
            TokenType::Operator(_) |
            TokenType::RightParen |
            TokenType::Error |
            TokenType::Eof => Err(EvalError::unexpected(&self.current)),
        }
    }

    // Check that the expression used up the whole line.
    pub fn finish(&self, trailing_input: TrailingInput) -> Result<(), EvalError> {
        if self.current.is_eof() {
            return Ok(());
        }

        let remainder = self.scanner.source()[self.current.offset..].trim_end();
        match trailing_input {
            TrailingInput::Reject => Err(EvalError::TrailingInput {
                remainder: remainder.to_string(),
                source_loc: SourceLoc::from(&self.current),
            }),
            TrailingInput::Ignore => {
                warn!("ignoring trailing input {:?}", remainder);
                Ok(())
            }
        }
    }

    // Consume the lookahead if it's one of the operators.
    fn matches(&mut self, operators: &[BinaryOperator]) -> Option<(BinaryOperator, SourceLoc)> {
        match self.current.token_type {
            TokenType::Operator(operator) if operators.contains(&operator) => {
                let token = self.advance();

                Some((operator, SourceLoc::from(&token)))
            }
            _ => None,
        }
    }

    // Pull the next token, returning the one it replaces.
    fn advance(&mut self) -> Token<'a> {
        let next = self.scanner.next_token();

        mem::replace(&mut self.current, next)
    }
}

fn literal(token: &Token) -> Result<Expr, EvalError> {
    let source_loc = SourceLoc::from(token);
    match token.lexeme.parse::<Integer>() {
        Ok(value) => Ok(Expr::Literal(value)),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(EvalError::IntegerOverflow { operator: None, source_loc })
            }
            _ => Err(EvalError::MalformedNumber { text: token.lexeme.to_string(), source_loc }),
        },
    }
}
