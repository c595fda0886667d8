pub mod add;
pub mod menu;
pub mod update;
pub mod view;

use crate::db::db::Db;
use crate::libs::config::{Config, ConfigError, DatabaseLocation};
use crate::libs::messages::Message;
use crate::libs::prompt::{Prompt, Terminal};
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::Parser;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file to use, or ":memory:" for a throwaway database
    #[arg(short, long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Route output through structured logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Opens the configured database and runs the menu until Exit is chosen.
    pub fn run(&self) -> Result<()> {
        let db = Db::open(&self.database_location()?)?;
        menu::run(&db, &mut Terminal::new())
    }

    pub fn database_location(&self) -> Result<DatabaseLocation, ConfigError> {
        Config::locate_database(self.database.as_deref())
    }
}

/// What a handler ended with.
#[derive(Debug)]
pub enum Outcome {
    Completed,
    /// Nothing was prompted or written because required rows are missing.
    MissingPrerequisite(Message),
    Failed(anyhow::Error),
}

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl Action {
    /// Menu order.
    pub const ALL: [Action; 8] = [
        Action::ViewDepartments,
        Action::ViewRoles,
        Action::ViewEmployees,
        Action::AddDepartment,
        Action::AddRole,
        Action::AddEmployee,
        Action::UpdateEmployeeRole,
        Action::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::ViewDepartments => "View All Departments",
            Action::ViewRoles => "View All Roles",
            Action::ViewEmployees => "View All Employees",
            Action::AddDepartment => "Add Department",
            Action::AddRole => "Add Role",
            Action::AddEmployee => "Add Employee",
            Action::UpdateEmployeeRole => "Update Employee Role",
            Action::Exit => "Exit",
        }
    }

    /// Prefix used when the action's handler fails.
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Action::ViewDepartments => "Error fetching departments",
            Action::ViewRoles => "Error fetching roles",
            Action::ViewEmployees => "Error fetching employees",
            Action::AddDepartment => "Error adding department",
            Action::AddRole => "Error adding role",
            Action::AddEmployee => "Error adding employee",
            Action::UpdateEmployeeRole => "Error updating employee role",
            Action::Exit => "Error exiting",
        }
    }

    /// Message printed when this action ends the session.
    pub fn closing_message(self) -> Option<Message> {
        match self {
            Action::Exit => Some(Message::Farewell),
            _ => None,
        }
    }

    /// Runs the handler for this action. Errors are folded into
    /// [`Outcome::Failed`]; nothing escapes.
    pub fn handle(self, db: &Db, prompt: &mut dyn Prompt) -> Outcome {
        let result = match self {
            Action::ViewDepartments => view::departments(db),
            Action::ViewRoles => view::roles(db),
            Action::ViewEmployees => view::employees(db),
            Action::AddDepartment => add::department(db, prompt),
            Action::AddRole => add::role(db, prompt),
            Action::AddEmployee => add::employee(db, prompt),
            Action::UpdateEmployeeRole => update::employee_role(db, prompt),
            Action::Exit => Ok(Outcome::Completed),
        };

        result.unwrap_or_else(Outcome::Failed)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Entry at `index` of a list the user just chose from.
fn chosen<T>(items: &[T], index: usize) -> Result<&T> {
    items.get(index).ok_or_else(|| msg_error_anyhow!(Message::NoSelection))
}
