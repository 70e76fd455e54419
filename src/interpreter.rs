use log::trace;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, PrimInt, WrappingAdd, WrappingMul, WrappingSub};

use crate::ast::*;
use crate::error::*;
use crate::options::Overflow;
use crate::source_loc::*;

// Every Apply finds both of its operands on the value stack.
macro_rules! pop {
    ( $values:expr ) => {
        $values.pop().expect("popped past the end of the value stack")
    };
}

enum Step<'e> {
    Visit(&'e Expr),
    Apply(BinaryOperator, SourceLoc),
}

// Walks an expression tree.  Holds nothing but its overflow policy, so one
// Interpreter can evaluate any number of trees.
#[derive(Copy, Clone, Debug, Default)]
pub struct Interpreter {
    overflow: Overflow,
}

impl Interpreter {
    pub fn new(overflow: Overflow) -> Interpreter {
        Interpreter {
            overflow,
        }
    }

    // Post-order walk with explicit stacks: left subtree, then right, then
    // the operator.  Tree depth never becomes call depth.
    pub fn evaluate(&self, expr: &Expr) -> Result<Integer, EvalError> {
        let mut steps = vec![Step::Visit(expr)];
        let mut values: Vec<Integer> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Expr::Literal(value)) => values.push(*value),
                Step::Visit(Expr::Binary(left, op, right, loc)) => {
                    steps.push(Step::Apply(*op, *loc));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                }
                Step::Apply(op, loc) => {
                    let right_val = pop!(values);
                    let left_val = pop!(values);
                    let value = self.apply(op, loc, left_val, right_val)?;
                    values.push(value);
                }
            }
        }

        Ok(pop!(values))
    }

    fn apply(&self, op: BinaryOperator, loc: SourceLoc, left_val: Integer, right_val: Integer)
        -> Result<Integer, EvalError>
    {
        trace!("{} {} {}", left_val, op, right_val);

        // Both sides are already evaluated, even for division.
        if op == BinaryOperator::Divide && right_val == 0 {
            return Err(EvalError::DivisionByZero { source_loc: loc });
        }

        match self.overflow {
            Overflow::Checked => {
                apply_checked(op, &left_val, &right_val)
                    .ok_or_else(|| overflow(op, loc))
            }
            Overflow::Wrapping => Ok(apply_wrapping(op, &left_val, &right_val)),
        }
    }
}

pub fn evaluate(expr: &Expr) -> Result<Integer, EvalError> {
    Interpreter::default().evaluate(expr)
}

// Division truncates toward zero.  The divisor must already be known nonzero.
fn apply_checked<T>(op: BinaryOperator, x: &T, y: &T) -> Option<T>
    where T: CheckedAdd + CheckedSub + CheckedMul + CheckedDiv
{
    match op {
        BinaryOperator::Plus => x.checked_add(y),
        BinaryOperator::Minus => x.checked_sub(y),
        BinaryOperator::Multiply => x.checked_mul(y),
        BinaryOperator::Divide => x.checked_div(y),
    }
}

fn apply_wrapping<T>(op: BinaryOperator, x: &T, y: &T) -> T
    where T: PrimInt + WrappingAdd + WrappingSub + WrappingMul
{
    match op {
        BinaryOperator::Plus => x.wrapping_add(y),
        BinaryOperator::Minus => x.wrapping_sub(y),
        BinaryOperator::Multiply => x.wrapping_mul(y),
        // With a nonzero divisor only MIN / -1 fails, and it wraps to MIN.
        BinaryOperator::Divide => x.checked_div(y).unwrap_or_else(T::min_value),
    }
}

fn overflow(operator: BinaryOperator, source_loc: SourceLoc) -> EvalError {
    EvalError::IntegerOverflow {
        operator: Some(operator),
        source_loc,
    }
}
