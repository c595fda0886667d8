use super::messages::Message;
use crate::db::{departments::Department, employees::Employee, roles::Role};
use prettytable::{row, Table};

/// Console tables for the three "View All" actions.
pub struct View {}

impl View {
    pub fn departments(departments: &[Department]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for department in departments {
            table.add_row(row![department.id, department.name]);
        }

        table
    }

    pub fn roles(roles: &[Role]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "SALARY", "DEPARTMENT"]);
        for role in roles {
            table.add_row(row![role.id, role.title, role.salary, role.department]);
        }

        table
    }

    pub fn employees(employees: &[Employee]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "FIRST NAME", "LAST NAME", "TITLE", "DEPARTMENT", "SALARY", "MANAGER"]);
        for employee in employees {
            let manager = Self::manager_label(employee);
            table.add_row(row![
                employee.id,
                employee.first_name,
                employee.last_name,
                employee.title,
                employee.department,
                employee.salary,
                manager
            ]);
        }

        table
    }

    /// Manager's full name, or the "No Manager" placeholder.
    pub fn manager_label(employee: &Employee) -> String {
        employee.manager.clone().unwrap_or_else(|| Message::NoManager.to_string())
    }
}
