//! Display implementation for roster application messages.
//!
//! All user-facing text lives here, in one match over [`Message`]. Handlers
//! and the menu never format console strings themselves; they pick a variant
//! and hand it to one of the `msg_*` macros.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::MenuPrompt => "What would you like to do?".to_string(),
            Message::Farewell => "Goodbye!".to_string(),
            Message::ReturningToMenu => "Returning to the main menu...".to_string(),
            Message::HandlerFailed(prefix, error) => format!("{}: {}", prefix, error),

            // === DEPARTMENT MESSAGES ===
            Message::DepartmentAdded(name) => format!("Added {} to the database.", name),
            Message::NoDepartments => "No departments available. Please add a department first.".to_string(),
            Message::DepartmentChoice(name, id) => format!("{} (ID: {})", name, id),
            Message::DepartmentsHeader => "Departments".to_string(),

            // === ROLE MESSAGES ===
            Message::RoleAdded(title) => format!("Added {} to the database.", title),
            Message::NoRoles => "No roles available. Please add a role first.".to_string(),
            Message::RolesHeader => "Roles".to_string(),

            // === EMPLOYEE MESSAGES ===
            Message::EmployeeAdded(first, last) => format!("Added {} {} to the database.", first, last),
            Message::EmployeeRoleUpdated => "Employee role updated successfully.".to_string(),
            Message::EmployeeNotFound(id) => format!("Employee with ID {} not found", id),
            Message::NoEmployees => "No employees available. Please add an employee first.".to_string(),
            Message::NoManager => "No Manager".to_string(),
            Message::EmployeesHeader => "Employees".to_string(),

            // === PROMPTS ===
            Message::PromptDepartmentName => "Enter the name of the department".to_string(),
            Message::PromptRoleTitle => "Enter the role title".to_string(),
            Message::PromptSalary => "Enter the salary".to_string(),
            Message::PromptRoleDepartment => "Select the department".to_string(),
            Message::PromptFirstName => "Enter the first name".to_string(),
            Message::PromptLastName => "Enter the last name".to_string(),
            Message::PromptEmployeeRole => "Select the role".to_string(),
            Message::PromptManager => "Select the manager (optional)".to_string(),
            Message::PromptEmployeeToUpdate => "Select an employee to update".to_string(),
            Message::PromptNewRole => "Select the new role".to_string(),
            Message::InvalidSalary => "Please enter a valid number without symbols (e.g., 120000)".to_string(),
            Message::NoSelection => "No option was selected".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::StartupFailed(error) => format!("Failed to start: {}", error),
            Message::DatabaseOpened(path) => format!("Opened database at {}", path),
            Message::DatabaseOpenFailed(path) => format!("Failed to open database at {}", path),
            Message::SchemaReady => "Database schema is ready".to_string(),
            Message::ExecutingStatement(sql) => format!("Executing: {}", sql),
        };

        write!(f, "{}", text)
    }
}
