use std::io;
use thiserror::Error;

// LEXER errors: File read errors
#[derive(Debug, Error)]
pub enum LexerError {
    #[error("Error while trying to read file")]
    IoError(#[from] io::Error),
}

// PARSER errors: statements that cannot be classified or split
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("Comando não reconhecido: {text}")]
    UnrecognizedStatement { line: usize, text: String },

    #[error("[Linha {line}]: Definição malformada ({reason}): {text}")]
    MalformedDefinition {
        line: usize,
        reason: &'static str,
        text: String,
    },

    #[error("[Linha {line}]: Comando '{keyword}' sem o separador '{separator}': {text}")]
    MalformedCompound {
        line: usize,
        keyword: &'static str,
        separator: &'static str,
        text: String,
    },
}

impl ParserError {
    /// Source line the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            ParserError::UnrecognizedStatement { line, .. }
            | ParserError::MalformedDefinition { line, .. }
            | ParserError::MalformedCompound { line, .. } => *line,
        }
    }
}

// INTERPRETER errors: failures while executing a statement
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InterpreterError {
    #[error(transparent)]
    Parse(#[from] ParserError),

    #[error("[Linha {line}]: Aninhamento excede o limite de {limit} níveis: {text}")]
    NestingTooDeep {
        line: usize,
        limit: usize,
        text: String,
    },
}

impl InterpreterError {
    pub fn line(&self) -> usize {
        match self {
            InterpreterError::Parse(error) => error.line(),
            InterpreterError::NestingTooDeep { line, .. } => *line,
        }
    }
}
