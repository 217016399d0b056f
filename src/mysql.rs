use crate::{sql::Statement, Dialect, DialectKind, Error, Record};

/// MySQL syntax: `INSERT IGNORE` and `SET` columns.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySql;

impl Dialect for MySql {
    fn preamble(&self, db_name: Option<&str>) -> Result<Option<Statement>, Error> {
        let db_name = db_name
            .filter(|name| !name.trim().is_empty())
            .ok_or(Error::MissingDatabase(DialectKind::MySql))?;
        Ok(Some(Statement::new("USE").token(db_name)))
    }

    // SET values must not contain spaces after the separating comma.
    fn list_literal(&self, items: &[&str]) -> String {
        items.join(",")
    }

    fn insert_statement(&self, table: &str, record: &dyn Record) -> Statement {
        Statement::insert("INSERT IGNORE", table, record)
    }
}
