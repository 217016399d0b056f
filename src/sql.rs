//! Value escaping and the statement builder shared by all dialects.

use std::{fmt, io};

use crate::Record;

const QUOTE: char = '\'';
const ESCAPED_QUOTE: &str = "''";
const TERMINATOR: &str = ";\n";

/// Double every quote character in `value`.
pub fn escape(value: &str) -> String {
    value.replace(QUOTE, ESCAPED_QUOTE)
}

pub fn quote(value: &str) -> String {
    format!("{}{}{}", QUOTE, value, QUOTE)
}

/// Column names and quoted values of the fields of `record` that carry a
/// value, in declaration order. Blank values are left out.
pub fn filter_record<R: Record + ?Sized>(record: &R) -> Vec<(&'static str, String)> {
    record
        .fields()
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(column, value)| (column, quote(&escape(value))))
        .collect()
}

/// A single SQL statement, built from space-separated tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    tokens: Vec<String>,
}

impl Statement {
    pub fn new(keyword: impl Into<String>) -> Self {
        Statement {
            tokens: vec![keyword.into()],
        }
    }

    /// `<verb> <table> (<columns>) VALUES (<values>)`, with blank fields
    /// left out.
    pub fn insert<R: Record + ?Sized>(verb: &str, table: &str, record: &R) -> Self {
        let (columns, values): (Vec<_>, Vec<_>) = filter_record(record).into_iter().unzip();
        Statement::new(verb)
            .token(table)
            .group(columns)
            .token("VALUES")
            .group(values)
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    /// Append a parenthesized, comma-separated list.
    pub fn group<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let joined = items
            .into_iter()
            .map(|item| item.as_ref().to_owned())
            .collect::<Vec<String>>()
            .join(", ");
        self.token(format!("({})", joined))
    }

    /// Write the statement as one terminated line.
    pub fn write_to(&self, mut out: impl io::Write) -> io::Result<()> {
        let mut line = self.to_string();
        line.push_str(TERMINATOR);
        out.write_all(line.as_bytes())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
