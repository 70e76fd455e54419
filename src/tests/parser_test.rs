use crate::ast::*;
use crate::ast::Expr::*;
use crate::error::*;
use crate::options::TrailingInput;
use crate::parser::*;
use crate::source_loc::*;
use crate::token::TokenType;

#[test]
fn test_parse_literal() {
    assert_eq!(parse_expression("42"), Ok(Literal(42)));
    assert_eq!(parse_expression("007"), Ok(Literal(7)));
    assert_eq!(parse_expression("9223372036854775807"), Ok(Literal(i64::MAX)));
}

#[test]
fn test_parse_binary_op() {
    assert_eq!(parse_expression("40 + 2"), Ok(Expr::binary(Literal(40),
                                                           BinaryOperator::Plus,
                                                           Literal(2),
                                                           SourceLoc::new(1, 4))));
}

#[test]
fn test_parse_precedence() {
    assert_eq!(parse_expression("1 + 2 * 3"),
               Ok(Expr::binary(Literal(1),
                               BinaryOperator::Plus,
                               Expr::binary(Literal(2), BinaryOperator::Multiply, Literal(3), SourceLoc::new(1, 7)),
                               SourceLoc::new(1, 3))));
    assert_eq!(parse_expression("8/4-1").map(|e| e.to_string()), Ok("((8 / 4) - 1)".to_string()));
}

#[test]
fn test_parse_left_associative() {
    assert_eq!(parse_expression("10-2-3"),
               Ok(Expr::binary(Expr::binary(Literal(10), BinaryOperator::Minus, Literal(2), SourceLoc::new(1, 3)),
                               BinaryOperator::Minus,
                               Literal(3),
                               SourceLoc::new(1, 5))));
    assert_eq!(parse_expression("8/4/2").map(|e| e.to_string()), Ok("((8 / 4) / 2)".to_string()));
}

#[test]
fn test_parse_grouping() {
    // Parens leave no node of their own.
    assert_eq!(parse_expression("(40)"), Ok(Literal(40)));
    assert_eq!(parse_expression("((40))"), Ok(Literal(40)));
    assert_eq!(parse_expression("(2+3)*4"),
               Ok(Expr::binary(Expr::binary(Literal(2), BinaryOperator::Plus, Literal(3), SourceLoc::new(1, 3)),
                               BinaryOperator::Multiply,
                               Literal(4),
                               SourceLoc::new(1, 6))));
    assert_eq!(parse_expression("2*(3-(4+5))").map(|e| e.to_string()), Ok("(2 * (3 - (4 + 5)))".to_string()));
}

#[test]
fn test_parse_empty() {
    let err = EvalError::UnexpectedToken { token_type: TokenType::Eof,
                                           lexeme: "".to_string(),
                                           source_loc: SourceLoc::new(1, 1) };
    assert_eq!(parse_expression(""), Err(err));
    assert!(matches!(parse_expression("   "), Err(EvalError::UnexpectedToken { token_type: TokenType::Eof, .. })));
}

#[test]
fn test_parse_unary_minus_is_unexpected() {
    let err = EvalError::UnexpectedToken { token_type: TokenType::Operator(BinaryOperator::Minus),
                                           lexeme: "-".to_string(),
                                           source_loc: SourceLoc::new(1, 1) };
    assert_eq!(parse_expression("-5"), Err(err));
}

#[test]
fn test_parse_invalid() {
    assert_eq!(parse_expression("1 + $"), Err(EvalError::UnexpectedToken { token_type: TokenType::Error,
                                                                          lexeme: "$".to_string(),
                                                                          source_loc: SourceLoc::new(1, 5) }));
    assert_eq!(parse_expression("()"), Err(EvalError::UnexpectedToken { token_type: TokenType::RightParen,
                                                                       lexeme: ")".to_string(),
                                                                       source_loc: SourceLoc::new(1, 2) }));
    assert_eq!(parse_expression("1 +"), Err(EvalError::UnexpectedToken { token_type: TokenType::Eof,
                                                                        lexeme: "".to_string(),
                                                                        source_loc: SourceLoc::new(1, 4) }));
    assert_eq!(parse_expression("1 * * 2"), Err(EvalError::UnexpectedToken {
                                                    token_type: TokenType::Operator(BinaryOperator::Multiply),
                                                    lexeme: "*".to_string(),
                                                    source_loc: SourceLoc::new(1, 5) }));
}

#[test]
fn test_parse_unmatched_paren() {
    assert_eq!(parse_expression("(1+2"), Err(EvalError::UnmatchedParen { source_loc: SourceLoc::new(1, 1) }));
    // The outer paren is the one left open.
    assert_eq!(parse_expression("((1)"), Err(EvalError::UnmatchedParen { source_loc: SourceLoc::new(1, 1) }));
    assert_eq!(parse_expression("2*(3 4)"), Err(EvalError::UnmatchedParen { source_loc: SourceLoc::new(1, 3) }));
}

#[test]
fn test_parse_trailing_input() {
    assert_eq!(parse_expression("1+2)"), Err(EvalError::TrailingInput { remainder: ")".to_string(),
                                                                       source_loc: SourceLoc::new(1, 4) }));
    assert_eq!(parse_expression("1 2  "), Err(EvalError::TrailingInput { remainder: "2".to_string(),
                                                                        source_loc: SourceLoc::new(1, 3) }));
    assert_eq!(parse_expression("3 $ 4"), Err(EvalError::TrailingInput { remainder: "$ 4".to_string(),
                                                                        source_loc: SourceLoc::new(1, 3) }));
}

#[test]
fn test_parse_ignoring_trailing_input() {
    assert_eq!(parse("1+2)", TrailingInput::Ignore),
               Ok(Expr::binary(Literal(1), BinaryOperator::Plus, Literal(2), SourceLoc::new(1, 2))));
    assert_eq!(parse("1 2", TrailingInput::Ignore), Ok(Literal(1)));
    // Errors inside the expression still count.
    assert!(parse("(1 2", TrailingInput::Ignore).is_err());
}

#[test]
fn test_parse_literal_overflow() {
    assert_eq!(parse_expression("1 + 9223372036854775808"),
               Err(EvalError::IntegerOverflow { operator: None, source_loc: SourceLoc::new(1, 5) }));
}

#[test]
fn test_parser_steps() {
    let mut parser = Parser::new("2*3 + 4");
    assert_eq!(parser.parse_term().map(|e| e.to_string()), Ok("(2 * 3)".to_string()));
    assert!(parser.finish(TrailingInput::Reject).is_err());
    assert_eq!(parser.parse_factor(), Err(EvalError::UnexpectedToken {
                                              token_type: TokenType::Operator(BinaryOperator::Plus),
                                              lexeme: "+".to_string(),
                                              source_loc: SourceLoc::new(1, 5) }));
}

#[test]
fn test_parse_long_chain() {
    let code = format!("1{}", "-1".repeat(200_000));
    let ast = parse_expression(&code);
    assert!(ast.is_ok());

    // Printing and dropping a left-deep tree don't recurse per node.
    let text = ast.map(|e| e.to_string()).unwrap_or_default();
    assert!(text.starts_with("(((("));
    assert!(text.ends_with(" - 1)"));
}

#[test]
fn test_parse_nesting_at_limit() {
    let code = format!("{}7{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert_eq!(parse_expression(&code), Ok(Literal(7)));
}

#[test]
fn test_parse_nesting_past_limit() {
    let depth = MAX_NESTING_DEPTH + 1;
    let code = format!("{}7{}", "(".repeat(depth), ")".repeat(depth));
    let column = depth as u16;
    assert_eq!(parse_expression(&code), Err(EvalError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                                       source_loc: SourceLoc::new(1, column) }));

    // Far past the limit, and never closed.
    let code = format!("{}7", "(".repeat(30_000));
    assert!(matches!(parse_expression(&code), Err(EvalError::NestingTooDeep { .. })));
}
