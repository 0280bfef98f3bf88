use crate::falalang_errors::ParserError;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_until},
    combinator::value,
    sequence::terminated,
    IResult,
};

/// Represents the leading keyword of a statement, in the order the classifier tries them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Definir,
    Mostrar,
    Se,
    Enquanto,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Definir => "definir",
            Keyword::Mostrar => "mostrar",
            Keyword::Se => "se",
            Keyword::Enquanto => "enquanto",
        }
    }
}

const DEFINITION_SEPARATOR: &str = " como ";
const IF_SEPARATOR: &str = " então ";
const WHILE_SEPARATOR: &str = " faça ";
const TRUE_LITERAL: &str = "verdadeiro";

/// Represents the condition of an if / while statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition(pub String);

impl Condition {
    /// Only the literal `verdadeiro` holds; every other token is false.
    pub fn holds(&self) -> bool {
        self.0 == TRUE_LITERAL
    }
}

/// Represents a single classified statement.
// Bodies of if / while statements are kept as raw text and classified again when executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// definir <name> como "<value>"
    Define {
        name: String,
        value: String,
        line: usize,
    },
    /// mostrar "<text>"
    Show { text: String, line: usize },
    /// se <condition> então <statement>
    If {
        condition: Condition,
        body: String,
        line: usize,
    },
    /// enquanto <condition> faça <statement>
    While {
        condition: Condition,
        body: String,
        line: usize,
    },
    /// Any line without a known keyword
    Unrecognized { text: String, line: usize },
}

impl Statement {
    pub fn line(&self) -> usize {
        match self {
            Statement::Define { line, .. }
            | Statement::Show { line, .. }
            | Statement::If { line, .. }
            | Statement::While { line, .. }
            | Statement::Unrecognized { line, .. } => *line,
        }
    }
}

fn keyword(input: &str) -> IResult<&str, Keyword> {
    alt((
        value(Keyword::Definir, tag("definir")),
        value(Keyword::Mostrar, tag("mostrar")),
        value(Keyword::Se, tag("se")),
        value(Keyword::Enquanto, tag("enquanto")),
    ))(input)
}

/// Splits `input` around the first occurrence of `separator`.
fn split_on<'a>(input: &'a str, separator: &'static str) -> Option<(&'a str, &'a str)> {
    let parsed: IResult<&'a str, &'a str> =
        terminated(take_until(separator), tag(separator))(input);

    parsed.ok().map(|(rest, head)| (head, rest))
}

/// Removes one leading and one trailing double quote, each only if present.
pub fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

/// Matches the keyword prefix of a trimmed line.
///
/// Matching is case-sensitive and tries `definir`, `mostrar`, `se` and `enquanto` in that order.
/// Returns the keyword with the untouched text following it, or `None` for an unrecognized line.
pub fn classify(line: &str) -> Option<(Keyword, &str)> {
    keyword(line).ok().map(|(rest, keyword)| (keyword, rest))
}

/// Parses one trimmed line into a `Statement`.
/// Returns a `ParserError` when a definition or an if / while statement is missing its separator.
pub fn parse_statement(text: &str, line: usize) -> Result<Statement, ParserError> {
    match classify(text) {
        Some((Keyword::Definir, rest)) => definition(text, rest, line),
        Some((Keyword::Mostrar, rest)) => Ok(Statement::Show {
            text: strip_quotes(rest.trim()).to_string(),
            line,
        }),
        Some((Keyword::Se, rest)) => {
            let (condition, body) = compound(Keyword::Se, IF_SEPARATOR, text, rest, line)?;
            Ok(Statement::If {
                condition,
                body,
                line,
            })
        }
        Some((Keyword::Enquanto, rest)) => {
            let (condition, body) =
                compound(Keyword::Enquanto, WHILE_SEPARATOR, text, rest, line)?;
            Ok(Statement::While {
                condition,
                body,
                line,
            })
        }
        None => Ok(Statement::Unrecognized {
            text: text.to_string(),
            line,
        }),
    }
}

/// Parses the text following `definir` into a definition node
fn definition(text: &str, rest: &str, line: usize) -> Result<Statement, ParserError> {
    let malformed = |reason| ParserError::MalformedDefinition {
        line,
        reason,
        text: text.to_string(),
    };

    let rest = rest.trim_start();
    let (name, value) = match split_on(rest, DEFINITION_SEPARATOR) {
        Some(parts) => parts,
        // `definir como "x"`: trimming took the separator's leading space along with the name
        None if rest.starts_with(DEFINITION_SEPARATOR.trim_start()) => {
            return Err(malformed("nome vazio"))
        }
        None => return Err(malformed("falta 'como'")),
    };

    Ok(Statement::Define {
        name: name.trim().to_string(),
        value: strip_quotes(value.trim()).to_string(),
        line,
    })
}

/// Splits the text following `se` / `enquanto` into its condition and nested statement
fn compound(
    keyword: Keyword,
    separator: &'static str,
    text: &str,
    rest: &str,
    line: usize,
) -> Result<(Condition, String), ParserError> {
    let malformed = || ParserError::MalformedCompound {
        line,
        keyword: keyword.as_str(),
        separator: separator.trim(),
        text: text.to_string(),
    };

    let (condition, body) = split_on(rest, separator).ok_or_else(malformed)?;

    Ok((Condition(condition.trim().to_string()), body.trim().to_string()))
}
