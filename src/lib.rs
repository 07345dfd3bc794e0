//! # c-mini-runner
//!
//! An offline interpreter for a small subset of C centered on a single
//! `int main(...)` function: declarations, assignment, `if`/`while`/`for`,
//! `printf`, and `return`.
//!
//! ## Pipeline
//!
//! Source text passes through four stages:
//!
//! 1. **Preprocessor** - normalizes line endings, folds smart punctuation,
//!    strips `#` directive lines
//! 2. **Lexer** - tokenizes the normalized source
//! 3. **Parser** - recursive-descent parse into a statement tree rooted at
//!    `main`
//! 4. **Interpreter** - tree-walks the statements over an explicit scope
//!    stack
//!
//! ## Example
//!
//! ```rust,no_run
//! use c_mini_runner::driver::{run, RunOutcome};
//!
//! let source = std::fs::read_to_string("program.c").unwrap();
//! match run(&source) {
//!     RunOutcome::Success { output, .. } => print!("{output}"),
//!     RunOutcome::Failure(err) => eprintln!("{err}"),
//! }
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod preprocess;
