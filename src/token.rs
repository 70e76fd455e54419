use crate::ast::BinaryOperator;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TokenType {
    // The digit text is the token's lexeme.
    Number,
    Operator(BinaryOperator),
    LeftParen,
    RightParen,
    // An unrecognized character.  The parser decides what to do with it.
    Error,
    Eof,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token<'a> {
    pub token_type: TokenType,
    pub lexeme: &'a str,
    // Byte offset of the lexeme in the input.
    pub offset: usize,
    pub line: u32,
    pub column: u16,
}

impl<'a> Token<'a> {
    pub fn new(token_type: TokenType,
               lexeme: &'a str,
               offset: usize,
               line: u32,
               column: u16)
        -> Token<'a>
    {
        Token {
            token_type,
            lexeme,
            offset,
            line,
            column,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }
}
