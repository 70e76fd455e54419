use std::fmt;
use std::mem;

use crate::source_loc::*;

// Width of every value the evaluator produces.
pub type Integer = i64;

// A chain like 1+1+...+1 nests as deep as it is long, so nothing that walks
// an Expr may recurse on the left operand: dropping, printing, and evaluating
// all use explicit stacks.
#[derive(Debug, Eq, PartialEq)]
pub enum Expr {
    Literal(Integer),
    // The location is the operator's.
    Binary(Box<Expr>, BinaryOperator, Box<Expr>, SourceLoc),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Expr {
    pub fn binary(left: Expr, operator: BinaryOperator, right: Expr, loc: SourceLoc) -> Expr {
        Expr::Binary(Box::new(left), operator, Box::new(right), loc)
    }

    // Swap any Binary children out for literals, handing back the old ones.
    fn take_children(&mut self, pending: &mut Vec<Expr>) {
        if let Expr::Binary(left, _, right, _) = self {
            for child in [left, right] {
                if let Expr::Binary(..) = **child {
                    pending.push(mem::replace(&mut **child, Expr::Literal(0)));
                }
            }
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            // Leaves only literals behind, so dropping expr doesn't recurse.
            expr.take_children(&mut pending);
        }
    }
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

enum Piece<'e> {
    Node(&'e Expr),
    Text(&'static str),
}

// Fully parenthesized, so grouping is visible in logs.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(Expr::Literal(value)) => write!(f, "{}", value)?,
                Piece::Node(Expr::Binary(left, operator, right, _)) => {
                    // Pushed in reverse of the order they print.
                    pieces.push(Piece::Text(")"));
                    pieces.push(Piece::Node(right));
                    pieces.push(Piece::Text(" "));
                    pieces.push(Piece::Text(operator.symbol()));
                    pieces.push(Piece::Text(" "));
                    pieces.push(Piece::Node(left));
                    pieces.push(Piece::Text("("));
                }
            }
        }

        Ok(())
    }
}
