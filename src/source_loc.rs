use std::fmt;

use crate::token::Token;

// Where a token starts.  Columns count grapheme clusters, not bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SourceLoc {
    pub line: u32,
    pub column: u16,
}

impl SourceLoc {
    pub fn new(line: u32, column: u16) -> SourceLoc {
        SourceLoc { line, column }
    }
}

// The first column of a single-line input.
impl Default for SourceLoc {
    fn default() -> SourceLoc {
        SourceLoc::new(1, 1)
    }
}

impl fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.line == 1 {
            write!(f, "column {}", self.column)
        } else {
            write!(f, "line {}, column {}", self.line, self.column)
        }
    }
}

impl<'a> From<&Token<'a>> for SourceLoc {
    fn from(token: &Token<'a>) -> SourceLoc {
        SourceLoc::new(token.line, token.column)
    }
}
