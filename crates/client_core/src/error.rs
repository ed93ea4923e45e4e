use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Roster operation a request belongs to, used to name failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListEmployees,
    FetchEmployee,
    CreateEmployee,
    UpdateEmployee,
    DeleteEmployee,
    DeleteEmployees,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::ListEmployees => "list employees",
            Operation::FetchEmployee => "fetch employee",
            Operation::CreateEmployee => "create employee",
            Operation::UpdateEmployee => "update employee",
            Operation::DeleteEmployee => "delete employee",
            Operation::DeleteEmployees => "delete employees",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("{operation} failed: request could not complete: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
    #[error("{operation} failed: server responded with {status}")]
    Status {
        operation: Operation,
        status: StatusCode,
    },
    #[error("{operation} failed: unreadable response body: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
}

impl RosterError {
    pub fn operation(&self) -> Operation {
        match self {
            RosterError::Transport { operation, .. }
            | RosterError::Status { operation, .. }
            | RosterError::Decode { operation, .. } => *operation,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RosterError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
