use super::{chosen, Outcome};
use crate::db::{db::Db, employees::Employees, roles::Roles};
use crate::libs::{messages::Message, prompt::Prompt};
use crate::msg_success;
use anyhow::Result;

pub fn employee_role(db: &Db, prompt: &mut dyn Prompt) -> Result<Outcome> {
    let employees_db = Employees::new(db);
    let employees = employees_db.options()?;
    let roles = Roles::new(db).options()?;
    if employees.is_empty() {
        return Ok(Outcome::MissingPrerequisite(Message::NoEmployees));
    }
    if roles.is_empty() {
        return Ok(Outcome::MissingPrerequisite(Message::NoRoles));
    }

    let names: Vec<String> = employees.iter().map(|e| e.full_name()).collect();
    let employee = chosen(&employees, prompt.select(Message::PromptEmployeeToUpdate, &names)?)?;

    let titles: Vec<String> = roles.iter().map(|r| r.title.clone()).collect();
    let role = chosen(&roles, prompt.select(Message::PromptNewRole, &titles)?)?;

    employees_db.update_role(employee.id, role.id)?;
    msg_success!(Message::EmployeeRoleUpdated);
    Ok(Outcome::Completed)
}
