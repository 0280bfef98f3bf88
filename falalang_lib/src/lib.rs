//! Interpreter for FALA, a tiny line-oriented language with Portuguese keywords.
//!
//! A program is one statement per line:
//!
//! ```text
//! definir <name> como "<value>"
//! mostrar "<text>"
//! se <condition> então <statement>
//! enquanto <condition> faça <statement>
//! ```
//!
//! Only the literal `verdadeiro` is a true condition. An `enquanto` body runs at most once.
//! `mostrar` prints its text as written, with one layer of quotes removed and no variable
//! substitution.

pub mod environment;
pub mod falalang_errors;
pub mod interpreter;
pub mod lexer;
pub mod parser;

pub use environment::Environment;
pub use interpreter::{Emitted, Interpreter, InterpreterConfig, Transcript, DEFAULT_MAX_DEPTH};

/// The example program shipped with the interpreter.
pub const SAMPLE_PROGRAM: &str = r#"
definir nome como "lalala"
mostrar "O nome é " + nome
se verdadeiro então mostrar "Isso é verdadeiro"
enquanto verdadeiro faça mostrar "Dentro do laço"
"#;

/// Runs `program` in a fresh interpreter and returns every emitted line, diagnostics included.
pub fn run(program: &str) -> Vec<String> {
    Interpreter::new().run(program).rendered()
}
