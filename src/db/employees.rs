use crate::db::db::{trace_statement, Db};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection};

// Outer join on the manager so employees without one still appear.
const SELECT_EMPLOYEES_WITH_DETAILS: &str = "
    SELECT e.id, e.first_name, e.last_name, role.title, department.name, role.salary,
           m.first_name || ' ' || m.last_name
    FROM employee e
    JOIN role ON e.role_id = role.id
    JOIN department ON role.department_id = department.id
    LEFT JOIN employee m ON e.manager_id = m.id
    ORDER BY e.id
";
const SELECT_EMPLOYEE_OPTIONS: &str = "SELECT id, first_name, last_name FROM employee ORDER BY id";
const INSERT_EMPLOYEE: &str = "INSERT INTO employee (first_name, last_name, role_id, manager_id) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_EMPLOYEE_ROLE: &str = "UPDATE employee SET role_id = ?1 WHERE id = ?2";

/// An employee as shown by "View All Employees".
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub department: String,
    pub salary: f64,
    /// Full name of the manager, `None` when no manager is set.
    pub manager: Option<String>,
}

/// An employee as offered in a choice list.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeOption {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl EmployeeOption {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub manager_id: Option<i64>,
}

pub struct Employees<'a> {
    conn: &'a Connection,
}

impl<'a> Employees<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Get all employees with role, department and manager
    pub fn list(&self) -> Result<Vec<Employee>> {
        trace_statement(SELECT_EMPLOYEES_WITH_DETAILS);
        let mut stmt = self.conn.prepare(SELECT_EMPLOYEES_WITH_DETAILS)?;
        let employee_iter = stmt.query_map([], |row| {
            Ok(Employee {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                title: row.get(3)?,
                department: row.get(4)?,
                salary: row.get(5)?,
                manager: row.get(6)?,
            })
        })?;

        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }
        Ok(employees)
    }

    /// Get id and name of every employee
    pub fn options(&self) -> Result<Vec<EmployeeOption>> {
        trace_statement(SELECT_EMPLOYEE_OPTIONS);
        let mut stmt = self.conn.prepare(SELECT_EMPLOYEE_OPTIONS)?;
        let option_iter = stmt.query_map([], |row| {
            Ok(EmployeeOption {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
            })
        })?;

        let mut options = Vec::new();
        for option in option_iter {
            options.push(option?);
        }
        Ok(options)
    }

    pub fn insert(&self, employee: &NewEmployee) -> Result<i64> {
        trace_statement(INSERT_EMPLOYEE);
        self.conn.execute(
            INSERT_EMPLOYEE,
            params![employee.first_name, employee.last_name, employee.role_id, employee.manager_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Point one employee at a new role
    pub fn update_role(&self, employee_id: i64, role_id: i64) -> Result<()> {
        trace_statement(UPDATE_EMPLOYEE_ROLE);
        let affected = self.conn.execute(UPDATE_EMPLOYEE_ROLE, params![role_id, employee_id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::EmployeeNotFound(employee_id)));
        }
        Ok(())
    }
}
