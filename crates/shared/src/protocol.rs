//! Endpoint paths of the employee REST API, relative to the server base URL.

use crate::domain::EmployeeId;

pub const EMPLOYEES_PATH: &str = "/api/employees";
pub const BATCH_DELETE_PATH: &str = "/api/employees/batch";

pub fn employee_path(id: EmployeeId) -> String {
    format!("{EMPLOYEES_PATH}/{}", id.0)
}

/// Body of `DELETE /api/employees/batch`: the ids as one JSON array.
pub type BatchDeleteRequest = Vec<EmployeeId>;
