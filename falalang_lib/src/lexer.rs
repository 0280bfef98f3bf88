//! This module breaks FALA program text into statement candidates: one trimmed, non-empty line per
//! statement.
//!
//! It provides the `SourceLine` struct binding a statement candidate to its line number, and the
//! `Lines` iterator produced by `split_lines`. Reading a program from disk is done with
//! `read_program`.

use crate::falalang_errors::LexerError;
use std::fs;
use std::path::Path;

/// A single statement candidate and the 1-based line it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub text: &'a str,
    pub line: usize,
}

/// Lazy iterator over the statement candidates of a program.
///
/// Cloning a `Lines` yields an independent cursor starting at the same position.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    raw: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = SourceLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, raw_line) in self.raw.by_ref() {
            let text = raw_line.trim();

            // Blank lines carry no statement
            if text.is_empty() {
                continue;
            }

            return Some(SourceLine {
                text,
                line: index + 1,
            });
        }

        None
    }
}

/// Splits program text on line boundaries, trimming every line and dropping the empty ones.
/// Blank lines still count towards line numbering.
pub fn split_lines(program: &str) -> Lines<'_> {
    Lines {
        raw: program.lines().enumerate(),
    }
}

/// Reads the program stored at `file_path`.
///
/// # Returns
///
/// The program text, or a `LexerError` if the file cannot be read as UTF-8 text.
pub fn read_program(file_path: &Path) -> Result<String, LexerError> {
    Ok(fs::read_to_string(file_path)?)
}
