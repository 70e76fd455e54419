use std::io;
use std::io::prelude::*;
use std::process;

use argparse::{ArgumentParser, Print, StoreOption, StoreTrue};

use intcalc::util;
use intcalc::{evaluate_expression_with, ErrorCategory, EvalError, EvalOptions, Integer, Overflow, TrailingInput};

fn main() {
    env_logger::init();

    let mut expression: Option<String> = None;
    let mut allow_trailing_input = false;
    let mut wrapping = false;
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Integer arithmetic expression evaluator");
        ap.add_option(
            &["--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version",
        );
        ap.refer(&mut allow_trailing_input)
            .add_option(&["--allow-trailing-input"], StoreTrue,
                        "Evaluate the leading expression and ignore anything after it.");
        ap.refer(&mut wrapping)
            .add_option(&["--wrapping"], StoreTrue,
                        "Wrap on integer overflow instead of reporting an error.");
        ap.refer(&mut expression)
            .add_argument("expression", StoreOption,
                          "Expression to evaluate.  Omit to run an interactive REPL.");
        ap.parse_args_or_exit();
    }

    let options = EvalOptions::new(
        if allow_trailing_input { TrailingInput::Ignore } else { TrailingInput::Reject },
        if wrapping { Overflow::Wrapping } else { Overflow::Checked },
    );

    match expression {
        // An empty argument is still an expression, and an invalid one.
        Some(expression) => {
            let result = evaluate_expression_with(&expression, &options);
            print_result(&result, false);

            if let Err(err) = result {
                process::exit(exit_code(&err));
            }
        }
        None => run_repl(&options),
    }
}

fn run_repl(options: &EvalOptions) {
    let stdin = io::stdin();
    loop {
        print!("$ ");
        io::stdout().flush().expect("run_repl: unable to flush stdout");

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            // End of input.
            Ok(0) => break,
            Ok(_) => {
                let line = input.trim_end_matches(&['\n', '\r'][..]);
                if line == "exit" {
                    break;
                }

                let result = evaluate_expression_with(line, options);
                print_result(&result, true);
            }
            Err(error) => {
                println!("Error reading stdin: {:?}", error);
                break;
            }
        }
    }
}

fn print_result(result: &Result<Integer, EvalError>, for_repl: bool) {
    match result {
        Ok(value) => {
            if for_repl {
                println!("Result: {}", value);
            }
            else {
                println!("{}", value);
            }
        }
        Err(err) => util::error(&err.source_loc(), &err.to_string()),
    }
}

fn exit_code(err: &EvalError) -> i32 {
    match err.category() {
        ErrorCategory::Lexical |
        ErrorCategory::Syntax |
        ErrorCategory::Conversion => 65,
        ErrorCategory::Semantic => 70,
    }
}
