#[derive(Debug, Clone)]
pub enum Message {
    // === MENU MESSAGES ===
    MenuPrompt,
    Farewell,
    ReturningToMenu,
    HandlerFailed(String, String), // prefix, error

    // === DEPARTMENT MESSAGES ===
    DepartmentAdded(String),
    NoDepartments,
    DepartmentChoice(String, i64), // name, id
    DepartmentsHeader,

    // === ROLE MESSAGES ===
    RoleAdded(String),
    NoRoles,
    RolesHeader,

    // === EMPLOYEE MESSAGES ===
    EmployeeAdded(String, String), // first name, last name
    EmployeeRoleUpdated,
    EmployeeNotFound(i64),
    NoEmployees,
    NoManager,
    EmployeesHeader,

    // === PROMPTS ===
    PromptDepartmentName,
    PromptRoleTitle,
    PromptSalary,
    PromptRoleDepartment,
    PromptFirstName,
    PromptLastName,
    PromptEmployeeRole,
    PromptManager,
    PromptEmployeeToUpdate,
    PromptNewRole,
    InvalidSalary,
    NoSelection,

    // === CONFIGURATION MESSAGES ===
    StartupFailed(String),
    DatabaseOpened(String),
    DatabaseOpenFailed(String),
    SchemaReady,
    ExecutingStatement(String),
}
