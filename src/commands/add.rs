use super::{chosen, Outcome};
use crate::db::{
    db::Db,
    departments::Departments,
    employees::{Employees, NewEmployee},
    roles::{NewRole, Roles},
};
use crate::libs::{messages::Message, prompt::Prompt};
use crate::msg_success;
use anyhow::Result;

pub fn department(db: &Db, prompt: &mut dyn Prompt) -> Result<Outcome> {
    let name = prompt.text(Message::PromptDepartmentName)?;

    Departments::new(db).insert(&name)?;
    msg_success!(Message::DepartmentAdded(name));
    Ok(Outcome::Completed)
}

pub fn role(db: &Db, prompt: &mut dyn Prompt) -> Result<Outcome> {
    let departments = Departments::new(db).list()?;
    if departments.is_empty() {
        return Ok(Outcome::MissingPrerequisite(Message::NoDepartments));
    }

    let title = prompt.text(Message::PromptRoleTitle)?;
    let salary = prompt.number(Message::PromptSalary)?;

    let labels: Vec<String> = departments
        .iter()
        .map(|d| Message::DepartmentChoice(d.name.clone(), d.id).to_string())
        .collect();
    let selection = prompt.select(Message::PromptRoleDepartment, &labels)?;
    let department = chosen(&departments, selection)?;

    let role = NewRole {
        title,
        salary,
        department_id: department.id,
    };
    Roles::new(db).insert(&role)?;
    msg_success!(Message::RoleAdded(role.title));
    Ok(Outcome::Completed)
}

pub fn employee(db: &Db, prompt: &mut dyn Prompt) -> Result<Outcome> {
    let roles = Roles::new(db).options()?;
    let managers = Employees::new(db).options()?;
    if roles.is_empty() {
        return Ok(Outcome::MissingPrerequisite(Message::NoRoles));
    }

    let first_name = prompt.text(Message::PromptFirstName)?;
    let last_name = prompt.text(Message::PromptLastName)?;

    let role_titles: Vec<String> = roles.iter().map(|r| r.title.clone()).collect();
    let role = chosen(&roles, prompt.select(Message::PromptEmployeeRole, &role_titles)?)?;

    // "No Manager" sits at index 0, so managers are offset by one.
    let mut manager_names = vec![Message::NoManager.to_string()];
    manager_names.extend(managers.iter().map(|m| m.full_name()));
    let manager_id = match prompt.select(Message::PromptManager, &manager_names)? {
        0 => None,
        selection => Some(chosen(&managers, selection - 1)?.id),
    };

    let employee = NewEmployee {
        first_name,
        last_name,
        role_id: role.id,
        manager_id,
    };
    Employees::new(db).insert(&employee)?;
    msg_success!(Message::EmployeeAdded(employee.first_name, employee.last_name));
    Ok(Outcome::Completed)
}
