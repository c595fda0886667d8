use crate::libs::config::DatabaseLocation;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::{Context, Result};
use rusqlite::Connection;

const SCHEMA: &str = "
PRAGMA foreign_keys = ON;
CREATE TABLE IF NOT EXISTS department (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS role (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    salary REAL NOT NULL,
    department_id INTEGER NOT NULL,
    FOREIGN KEY (department_id) REFERENCES department(id)
);
CREATE TABLE IF NOT EXISTS employee (
    id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    role_id INTEGER NOT NULL,
    manager_id INTEGER,
    FOREIGN KEY (role_id) REFERENCES role(id),
    FOREIGN KEY (manager_id) REFERENCES employee(id)
);
";

/// Shared database handle passed to every handler.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open(location: &DatabaseLocation) -> Result<Db> {
        let conn = match location {
            DatabaseLocation::File(path) => {
                Connection::open(path).with_context(|| Message::DatabaseOpenFailed(location.to_string()).to_string())?
            }
            DatabaseLocation::InMemory => Connection::open_in_memory()?,
        };
        msg_debug!(Message::DatabaseOpened(location.to_string()));

        let db = Db { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn in_memory() -> Result<Db> {
        Self::open(&DatabaseLocation::InMemory)
    }

    /// Enables foreign keys and creates missing tables. Safe to run on every
    /// start; existing tables and rows are left untouched.
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        msg_debug!(Message::SchemaReady);
        Ok(())
    }
}

/// Logs a statement about to be executed, collapsed onto one line.
pub(crate) fn trace_statement(sql: &str) {
    msg_debug!(Message::ExecutingStatement(sql.split_whitespace().collect::<Vec<_>>().join(" ")));
}
