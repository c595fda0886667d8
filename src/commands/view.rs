use super::Outcome;
use crate::db::{db::Db, departments::Departments, employees::Employees, roles::Roles};
use crate::libs::{messages::Message, view::View};
use crate::msg_print;
use anyhow::Result;

pub fn departments(db: &Db) -> Result<Outcome> {
    let departments = Departments::new(db).list()?;

    msg_print!(Message::DepartmentsHeader, true);
    View::departments(&departments).printstd();
    Ok(Outcome::Completed)
}

pub fn roles(db: &Db) -> Result<Outcome> {
    let roles = Roles::new(db).list()?;

    msg_print!(Message::RolesHeader, true);
    View::roles(&roles).printstd();
    Ok(Outcome::Completed)
}

pub fn employees(db: &Db) -> Result<Outcome> {
    let employees = Employees::new(db).list()?;

    msg_print!(Message::EmployeesHeader, true);
    View::employees(&employees).printstd();
    Ok(Outcome::Completed)
}
