use crate::db::db::{trace_statement, Db};
use anyhow::Result;
use rusqlite::{params, Connection};

const SELECT_ROLES_WITH_DEPARTMENT: &str = "
    SELECT role.id, role.title, role.salary, department.name
    FROM role
    JOIN department ON role.department_id = department.id
    ORDER BY role.id
";
const SELECT_ROLE_OPTIONS: &str = "SELECT id, title FROM role ORDER BY id";
const INSERT_ROLE: &str = "INSERT INTO role (title, salary, department_id) VALUES (?1, ?2, ?3)";

/// A role as shown by "View All Roles".
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i64,
    pub title: String,
    pub salary: f64,
    pub department: String,
}

/// A role as offered in a choice list.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleOption {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

pub struct Roles<'a> {
    conn: &'a Connection,
}

impl<'a> Roles<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Get all roles with their department name
    pub fn list(&self) -> Result<Vec<Role>> {
        trace_statement(SELECT_ROLES_WITH_DEPARTMENT);
        let mut stmt = self.conn.prepare(SELECT_ROLES_WITH_DEPARTMENT)?;
        let role_iter = stmt.query_map([], |row| {
            Ok(Role {
                id: row.get(0)?,
                title: row.get(1)?,
                salary: row.get(2)?,
                department: row.get(3)?,
            })
        })?;

        let mut roles = Vec::new();
        for role in role_iter {
            roles.push(role?);
        }
        Ok(roles)
    }

    /// Get id and title of every role
    pub fn options(&self) -> Result<Vec<RoleOption>> {
        trace_statement(SELECT_ROLE_OPTIONS);
        let mut stmt = self.conn.prepare(SELECT_ROLE_OPTIONS)?;
        let option_iter = stmt.query_map([], |row| {
            Ok(RoleOption {
                id: row.get(0)?,
                title: row.get(1)?,
            })
        })?;

        let mut options = Vec::new();
        for option in option_iter {
            options.push(option?);
        }
        Ok(options)
    }

    pub fn insert(&self, role: &NewRole) -> Result<i64> {
        trace_statement(INSERT_ROLE);
        self.conn.execute(INSERT_ROLE, params![role.title, role.salary, role.department_id])?;
        Ok(self.conn.last_insert_rowid())
    }
}
