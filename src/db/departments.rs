use crate::db::db::{trace_statement, Db};
use anyhow::Result;
use rusqlite::{params, Connection};

const SELECT_ALL_DEPARTMENTS: &str = "SELECT id, name FROM department ORDER BY id";
const INSERT_DEPARTMENT: &str = "INSERT INTO department (name) VALUES (?1)";

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

pub struct Departments<'a> {
    conn: &'a Connection,
}

impl<'a> Departments<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Get all departments
    pub fn list(&self) -> Result<Vec<Department>> {
        trace_statement(SELECT_ALL_DEPARTMENTS);
        let mut stmt = self.conn.prepare(SELECT_ALL_DEPARTMENTS)?;
        let department_iter = stmt.query_map([], |row| {
            Ok(Department {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut departments = Vec::new();
        for department in department_iter {
            departments.push(department?);
        }
        Ok(departments)
    }

    /// Insert a department and return its id. Names are not checked for
    /// uniqueness.
    pub fn insert(&self, name: &str) -> Result<i64> {
        trace_statement(INSERT_DEPARTMENT);
        self.conn.execute(INSERT_DEPARTMENT, params![name])?;
        Ok(self.conn.last_insert_rowid())
    }
}
