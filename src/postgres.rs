use crate::{sql::Statement, Dialect, Error, Record};

/// PostgreSQL syntax: `ON CONFLICT DO NOTHING` and array columns.
#[derive(Debug, Default, Clone, Copy)]
pub struct Postgres;

impl Dialect for Postgres {
    fn preamble(&self, db_name: Option<&str>) -> Result<Option<Statement>, Error> {
        Ok(db_name
            .filter(|name| !name.trim().is_empty())
            .map(|name| Statement::new("SET search_path TO").token(name)))
    }

    // Array elements are enum labels and need no quoting.
    fn list_literal(&self, items: &[&str]) -> String {
        format!("{{{}}}", items.join(","))
    }

    fn insert_statement(&self, table: &str, record: &dyn Record) -> Statement {
        Statement::insert("INSERT INTO", table, record).token("ON CONFLICT DO NOTHING")
    }
}
