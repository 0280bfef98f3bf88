use crate::environment::Environment;
use crate::falalang_errors::{InterpreterError, ParserError};
use crate::lexer::{split_lines, SourceLine};
use crate::parser::{parse_statement, Condition, Statement};
use std::fmt;

/// Default limit on how many if / while bodies may be nested inside each other.
pub const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Deepest level a nested body may execute at; top-level lines run at depth 0.
    pub max_depth: usize,
    /// Stop the run after the first diagnostic.
    pub strict: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict: false,
        }
    }
}

/// One line of program output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    /// Text produced by a `mostrar` statement
    Text(String),
    /// A statement that was skipped
    Diagnostic(InterpreterError),
}

impl fmt::Display for Emitted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emitted::Text(text) => f.write_str(text),
            Emitted::Diagnostic(error) => write!(f, "{error}"),
        }
    }
}

/// Everything a run emitted, in program order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<Emitted>,
    halted: bool,
}

impl Transcript {
    pub fn entries(&self) -> &[Emitted] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Emitted> {
        self.entries
    }

    /// True when strict mode stopped the run before the end of the program.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn texts(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Emitted::Text(text) => Some(text.as_str()),
                Emitted::Diagnostic(_) => None,
            })
            .collect()
    }

    pub fn diagnostics(&self) -> Vec<&InterpreterError> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Emitted::Diagnostic(error) => Some(error),
                Emitted::Text(_) => None,
            })
            .collect()
    }

    /// All entries as they are printed.
    pub fn rendered(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

pub struct Interpreter {
    environment: Environment,
    config: InterpreterConfig,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    // Constructor
    pub fn new() -> Self {
        Self::with_config(InterpreterConfig::default())
    }

    pub fn with_config(config: InterpreterConfig) -> Self {
        Self {
            environment: Environment::new(),
            config,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Executes every statement of `program` in order.
    ///
    /// A statement that fails is reported as a diagnostic and the run carries on with the next
    /// line, unless the interpreter is in strict mode. Bindings made by this run stay in the
    /// interpreter's environment for the next call.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, program: &str) -> Transcript {
        let mut transcript = Transcript::default();

        for SourceLine { text, line } in split_lines(program) {
            tracing::trace!(line, text, "executing line");

            if let Err(error) = self.execute_line(text, line, 0, &mut transcript.entries) {
                tracing::warn!(line, %error, "statement skipped");
                transcript.entries.push(Emitted::Diagnostic(error));

                if self.config.strict {
                    transcript.halted = true;
                    break;
                }
            }
        }

        transcript
    }

    /// Parses and executes a single statement. Nested bodies re-enter here one level deeper.
    pub fn execute_line(
        &mut self,
        text: &str,
        line: usize,
        depth: usize,
        out: &mut Vec<Emitted>,
    ) -> Result<(), InterpreterError> {
        let statement = parse_statement(text, line)?;
        self.execute(statement, depth, out)
    }

    fn execute(
        &mut self,
        statement: Statement,
        depth: usize,
        out: &mut Vec<Emitted>,
    ) -> Result<(), InterpreterError> {
        match statement {
            Statement::Define { name, value, .. } => {
                self.eval_definition(name, value);
                Ok(())
            }
            Statement::Show { text, .. } => {
                out.push(Emitted::Text(text));
                Ok(())
            }
            Statement::If {
                condition,
                body,
                line,
            } => self.eval_if_statement(&condition, &body, line, depth, out),
            Statement::While {
                condition,
                body,
                line,
            } => self.eval_while_statement(&condition, &body, line, depth, out),
            Statement::Unrecognized { text, line } => {
                Err(ParserError::UnrecognizedStatement { line, text }.into())
            }
        }
    }

    fn eval_definition(&mut self, name: String, value: String) {
        tracing::debug!(%name, %value, "binding variable");
        self.environment.define(name, value);
    }

    fn eval_if_statement(
        &mut self,
        condition: &Condition,
        body: &str,
        line: usize,
        depth: usize,
        out: &mut Vec<Emitted>,
    ) -> Result<(), InterpreterError> {
        if condition.holds() {
            self.execute_body(body, line, depth, out)?;
        }

        Ok(())
    }

    // The condition is a literal the body cannot change, so a true condition runs the body
    // exactly once and the loop ends.
    fn eval_while_statement(
        &mut self,
        condition: &Condition,
        body: &str,
        line: usize,
        depth: usize,
        out: &mut Vec<Emitted>,
    ) -> Result<(), InterpreterError> {
        if condition.holds() {
            self.execute_body(body, line, depth, out)?;
        }

        Ok(())
    }

    fn execute_body(
        &mut self,
        body: &str,
        line: usize,
        depth: usize,
        out: &mut Vec<Emitted>,
    ) -> Result<(), InterpreterError> {
        let depth = depth + 1;
        if depth > self.config.max_depth {
            return Err(InterpreterError::NestingTooDeep {
                line,
                limit: self.config.max_depth,
                text: body.to_string(),
            });
        }

        tracing::debug!(line, depth, body, "entering nested statement");
        self.execute_line(body, line, depth, out)
    }
}
