use std::iter::Peekable;

use fnv::FnvHashMap;
use log::trace;
use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};

use crate::ast::BinaryOperator;
use crate::token::*;
use crate::util::*;

lazy_static! {
    static ref OPERATORS: FnvHashMap<&'static str, BinaryOperator> = {
        let mut m = FnvHashMap::default();
        m.insert("+", BinaryOperator::Plus);
        m.insert("-", BinaryOperator::Minus);
        m.insert("*", BinaryOperator::Multiply);
        m.insert("/", BinaryOperator::Divide);

        m
    };
}

// Produces tokens on demand.  Once advanced it can't be rewound; scan again
// with a new Scanner.
#[derive(Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    grapheme_indices: Peekable<GraphemeIndices<'a>>,
    line: u32,
    column: u16,
    // Set once the iterator has handed out Eof.
    exhausted: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            grapheme_indices: source.grapheme_indices(true).peekable(),
            line: 1,
            column: 1,
            exhausted: false,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    // Scan the next token.  At the end of input this keeps returning Eof.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let line = self.line;
        let column = self.column;
        let (start, grapheme_cluster) = match self.advance() {
            None => return Token::new(TokenType::Eof, "", self.source.len(), line, column),
            Some(pair) => pair,
        };

        let token_type = match grapheme_cluster {
            "(" => TokenType::LeftParen,
            ")" => TokenType::RightParen,
            _ => {
                if is_digit(grapheme_cluster) {
                    self.scan_number();
                    TokenType::Number
                }
                else {
                    match OPERATORS.get(grapheme_cluster) {
                        Some(operator) => TokenType::Operator(*operator),
                        None => TokenType::Error,
                    }
                }
            }
        };

        let lexeme = &self.source[start..self.peek_index()];
        trace!("scanned {:?} {:?} at {}:{}", token_type, lexeme, line, column);

        Token::new(token_type, lexeme, start, line, column)
    }

    fn skip_whitespace(&mut self) {
        loop {
            let newline = match self.grapheme_indices.peek() {
                None => break,
                Some((_, grapheme_cluster)) => {
                    if ! is_whitespace(grapheme_cluster) {
                        break;
                    }
                    is_newline(grapheme_cluster)
                }
            };
            self.advance();
            if newline {
                self.line = self.line.saturating_add(1);
                self.column = 1;
            }
        }
    }

    // Consume the rest of a run of digits.  The first one is already taken.
    fn scan_number(&mut self) {
        loop {
            match self.grapheme_indices.peek() {
                None => break,
                Some((_, grapheme_cluster)) => {
                    if ! is_digit(grapheme_cluster) {
                        break;
                    }
                }
            };
            self.advance();
        }
    }

    fn advance(&mut self) -> Option<(usize, &'a str)> {
        let next = self.grapheme_indices.next();
        if next.is_some() {
            self.column = self.column.saturating_add(1);
        }

        next
    }

    fn peek_index(&mut self) -> usize {
        match self.grapheme_indices.peek() {
            None => self.source.len(),
            Some((i, _)) => *i,
        }
    }
}

// Yields every token through the first Eof.
impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();
        if token.is_eof() {
            self.exhausted = true;
        }

        Some(token)
    }
}
