use std::{fmt, io, str::FromStr};

pub mod convert;
pub mod mysql;
pub mod postgres;
pub mod record;
pub mod split;
pub mod sql;

pub use convert::{run, Converter, Stats};
pub use record::{normalize, ArityError, Role};
pub use sql::Statement;

/// A row to be inserted, as an ordered list of column names and raw values.
///
/// `columns` and `values` must have the same length and order.
pub trait Record {
    fn columns(&self) -> &'static [&'static str];
    fn values(&self) -> Vec<&str>;

    fn fields(&self) -> Vec<(&'static str, &str)> {
        self.columns()
            .iter()
            .copied()
            .zip(self.values())
            .collect()
    }
}

/// SQL syntax of a destination database.
pub trait Dialect {
    /// Statement selecting the target database or schema, if any.
    fn preamble(&self, db_name: Option<&str>) -> Result<Option<Statement>, Error>;

    /// Render a list of plain values as a single column literal.
    fn list_literal(&self, items: &[&str]) -> String;

    /// Render an insert for `record` that skips rows already present.
    fn insert_statement(&self, table: &str, record: &dyn Record) -> Statement;

    fn insert(&self, out: &mut dyn io::Write, table: &str, record: &dyn Record) -> io::Result<()> {
        self.insert_statement(table, record).write_to(out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialectKind {
    MySql,
    Postgres,
}

impl DialectKind {
    pub const NAMES: &'static [&'static str] = &["mysql", "postgres"];

    pub fn build(self) -> Box<dyn Dialect> {
        match self {
            DialectKind::MySql => Box::new(mysql::MySql),
            DialectKind::Postgres => Box::new(postgres::Postgres),
        }
    }
}

impl FromStr for DialectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(DialectKind::MySql),
            "postgres" => Ok(DialectKind::Postgres),
            _ => Err(Error::UnknownDialect(s.to_owned())),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DialectKind::MySql => f.write_str("mysql"),
            DialectKind::Postgres => f.write_str("postgres"),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    UnknownDialect(String),
    MissingDatabase(DialectKind),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::UnknownDialect(name) => write!(
                f,
                "unknown dialect '{}', expected one of: {}",
                name,
                DialectKind::NAMES.join(", ")
            ),
            Error::MissingDatabase(kind) => {
                write!(f, "the {} dialect requires a database name", kind)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}
