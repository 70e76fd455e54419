// What to do when a complete expression is followed by more tokens, e.g.
// "1+2)" or "1 2".
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TrailingInput {
    #[default]
    Reject,
    // Legacy behavior: evaluate the prefix and drop the rest.
    Ignore,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Overflow {
    #[default]
    Checked,
    // Two's-complement wraparound.
    Wrapping,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct EvalOptions {
    pub trailing_input: TrailingInput,
    pub overflow: Overflow,
}

impl EvalOptions {
    pub fn new(trailing_input: TrailingInput, overflow: Overflow) -> EvalOptions {
        EvalOptions {
            trailing_input,
            overflow,
        }
    }
}
