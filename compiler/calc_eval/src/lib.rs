//! Calc Eval - tree-walking evaluator for the calc interpreter.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Interpreter`: entry points; owns the print handler
//! - `Environment`: runtime scopes, one fresh frame per call activation
//! - `fold_math` / `compare`: direct enum-based operator dispatch
//! - `Value`: integers, strings, and "no value"
//!
//! Evaluation is lenient: operands of the wrong type degrade to `0` or `Nil`.
//! The only hard stops are an unknown identifier at the top level, division
//! by zero, and calling something that is not a function.

mod environment;
mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::{Binding, Environment};
pub use interpreter::Interpreter;
pub use operators::{compare, fold_math, DivisionByZero};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::Value;

/// Evaluate `text` as a file called `name`, printing to stdout.
pub fn eval_file(name: &str, text: &str) -> Option<Value> {
    Interpreter::new().eval_file(name, text)
}

/// Evaluate `text` as an unnamed file, printing to stdout.
pub fn eval_expr(text: &str) -> Option<Value> {
    Interpreter::new().eval_expr(text)
}
