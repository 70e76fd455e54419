#[macro_use]
extern crate lazy_static;
extern crate unicode_segmentation;

pub mod ast;
pub mod error;
pub mod interpreter;
pub mod options;
pub mod parser;
pub mod scanner;
pub mod source_loc;
pub mod token;
pub mod util;

#[cfg(test)]
mod tests;

use log::debug;

pub use crate::ast::{BinaryOperator, Expr, Integer};
pub use crate::error::{ErrorCategory, EvalError};
pub use crate::interpreter::Interpreter;
pub use crate::options::{EvalOptions, Overflow, TrailingInput};

// Evaluate one line with the default options: trailing input is an error and
// arithmetic is checked.
pub fn evaluate_expression(input: &str) -> Result<Integer, EvalError> {
    evaluate_expression_with(input, &EvalOptions::default())
}

// Each call scans, parses, and evaluates from scratch.  Nothing carries over
// between lines.
pub fn evaluate_expression_with(input: &str, options: &EvalOptions) -> Result<Integer, EvalError> {
    let ast = parser::parse(input, options.trailing_input)?;
    debug!("parsed {:?} as {}", input, ast);

    let value = Interpreter::new(options.overflow).evaluate(&ast)?;
    debug!("evaluated {} to {}", ast, value);

    Ok(value)
}
