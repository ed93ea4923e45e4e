//! Commands issued by the roster UI and the events their outcomes produce.
//!
//! Every mutating command that succeeds is followed by a full reload, so the
//! table is always rebuilt from server state rather than patched locally.

use shared::domain::{Employee, EmployeeId};
use tracing::error;

use crate::{form::SaveTarget, status::StatusMessage, RosterApi, RosterError};

pub const LOAD_FAILED: &str = "Error loading employees. Please try again.";
pub const EDIT_LOAD_FAILED: &str = "Error loading employee details. Please try again.";
pub const EMPLOYEE_CREATED: &str = "Employee created successfully";
pub const EMPLOYEE_UPDATED: &str = "Employee updated successfully";
pub const EMPLOYEE_DELETED: &str = "Employee deleted successfully";
pub const DELETE_FAILED: &str = "Error deleting employee. Please try again.";
pub const BATCH_DELETE_FAILED: &str = "Error deleting employees. Please try again.";
pub const CONFIRM_DELETE_ONE: &str = "Are you sure you want to delete this employee?";

pub fn confirm_delete_many(count: usize) -> String {
    format!("Are you sure you want to delete {count} employee(s)?")
}

pub fn batch_deleted(count: usize) -> String {
    format!("Successfully deleted {count} employee(s)")
}

pub fn save_failed(err: &RosterError) -> String {
    format!("Error saving employee: {err}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterCommand {
    Load,
    Save(SaveTarget),
    Edit(EmployeeId),
    Delete(EmployeeId),
    DeleteBatch(Vec<EmployeeId>),
}

impl RosterCommand {
    pub fn name(&self) -> &'static str {
        match self {
            RosterCommand::Load => "load",
            RosterCommand::Save(SaveTarget::Create(_)) => "create",
            RosterCommand::Save(SaveTarget::Update(..)) => "update",
            RosterCommand::Edit(_) => "edit",
            RosterCommand::Delete(_) => "delete",
            RosterCommand::DeleteBatch(_) => "delete_batch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    RosterLoaded(Vec<Employee>),
    RosterLoadFailed,
    EmployeeOpened(Employee),
    FormCleared,
    Status(StatusMessage),
}

pub async fn run_command<A>(api: &A, command: RosterCommand) -> Vec<RosterEvent>
where
    A: RosterApi + ?Sized,
{
    let mut events = Vec::new();
    match command {
        RosterCommand::Load => reload(api, &mut events).await,
        RosterCommand::Save(target) => {
            let outcome = match &target {
                SaveTarget::Create(fields) => {
                    api.create_employee(fields).await.map(|_| EMPLOYEE_CREATED)
                }
                SaveTarget::Update(id, fields) => {
                    api.update_employee(*id, fields).await.map(|_| EMPLOYEE_UPDATED)
                }
            };
            match outcome {
                Ok(text) => {
                    events.push(RosterEvent::Status(StatusMessage::success(text)));
                    events.push(RosterEvent::FormCleared);
                    reload(api, &mut events).await;
                }
                Err(err) => {
                    error!("failed to save employee: {err}");
                    events.push(RosterEvent::Status(StatusMessage::error(save_failed(&err))));
                }
            }
        }
        RosterCommand::Edit(id) => match api.fetch_employee(id).await {
            Ok(employee) => events.push(RosterEvent::EmployeeOpened(employee)),
            Err(err) => {
                error!(employee_id = id.0, "failed to fetch employee: {err}");
                events.push(RosterEvent::Status(StatusMessage::error(EDIT_LOAD_FAILED)));
            }
        },
        RosterCommand::Delete(id) => match api.delete_employee(id).await {
            Ok(()) => {
                events.push(RosterEvent::Status(StatusMessage::success(EMPLOYEE_DELETED)));
                reload(api, &mut events).await;
            }
            Err(err) => {
                error!(employee_id = id.0, "failed to delete employee: {err}");
                events.push(RosterEvent::Status(StatusMessage::error(DELETE_FAILED)));
            }
        },
        RosterCommand::DeleteBatch(ids) => {
            if ids.is_empty() {
                return events;
            }
            match api.delete_employees(&ids).await {
                Ok(()) => {
                    events.push(RosterEvent::Status(StatusMessage::success(batch_deleted(
                        ids.len(),
                    ))));
                }
                Err(err) => {
                    error!(count = ids.len(), "failed to delete employees: {err}");
                    events.push(RosterEvent::Status(StatusMessage::error(
                        BATCH_DELETE_FAILED,
                    )));
                }
            }
            // Resynchronize either way; the server decides what was actually removed.
            reload(api, &mut events).await;
        }
    }
    events
}

async fn reload<A>(api: &A, events: &mut Vec<RosterEvent>)
where
    A: RosterApi + ?Sized,
{
    match api.list_employees().await {
        Ok(employees) => events.push(RosterEvent::RosterLoaded(employees)),
        Err(err) => {
            error!("failed to load employees: {err}");
            events.push(RosterEvent::RosterLoadFailed);
            events.push(RosterEvent::Status(StatusMessage::error(LOAD_FAILED)));
        }
    }
}

/// How a delete is confirmed before it is issued.
pub enum Confirmation<'a> {
    /// Blocking yes/no question answered before the call returns.
    Prompt(&'a mut dyn ConfirmPrompt),
    /// Opens the confirmation dialog; the answer arrives later.
    Dialog,
}

pub trait ConfirmPrompt {
    fn confirm(&mut self, question: &str) -> bool;
}

/// Answers every prompt with the same value.
pub struct FixedAnswer(pub bool);

impl ConfirmPrompt for FixedAnswer {
    fn confirm(&mut self, _question: &str) -> bool {
        self.0
    }
}

#[cfg(test)]
#[path = "tests/workflow_tests.rs"]
mod tests;
