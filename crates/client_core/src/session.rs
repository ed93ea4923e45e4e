use std::time::Instant;

use shared::domain::EmployeeId;

use crate::{
    form::EmployeeForm,
    roster::RosterTable,
    status::{StatusBanner, StatusMessage},
    workflow::{confirm_delete_many, run_command, Confirmation, CONFIRM_DELETE_ONE},
    RosterApi, RosterCommand, RosterEvent,
};

/// A delete waiting for the user to answer the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDeletion {
    Single(EmployeeId),
    Batch(Vec<EmployeeId>),
}

impl PendingDeletion {
    pub fn question(&self) -> String {
        match self {
            PendingDeletion::Single(_) => CONFIRM_DELETE_ONE.to_string(),
            PendingDeletion::Batch(ids) => confirm_delete_many(ids.len()),
        }
    }

    /// Narrows the deletion to ids still rendered; `None` once nothing is left.
    fn retain_rendered(self, roster: &RosterTable) -> Option<Self> {
        match self {
            PendingDeletion::Single(id) => roster.row(id).map(|_| PendingDeletion::Single(id)),
            PendingDeletion::Batch(ids) => {
                let ids: Vec<_> = ids
                    .into_iter()
                    .filter(|id| roster.row(*id).is_some())
                    .collect();
                (!ids.is_empty()).then_some(PendingDeletion::Batch(ids))
            }
        }
    }

    fn into_command(self) -> RosterCommand {
        match self {
            PendingDeletion::Single(id) => RosterCommand::Delete(id),
            PendingDeletion::Batch(ids) => RosterCommand::DeleteBatch(ids),
        }
    }
}

/// All UI state of the roster screen, owned by whoever renders it.
#[derive(Debug, Clone, Default)]
pub struct RosterViewModel {
    pub roster: RosterTable,
    pub form: EmployeeForm,
    pub status: StatusBanner,
    pending: Option<PendingDeletion>,
}

impl RosterViewModel {
    pub fn apply(&mut self, event: RosterEvent, now: Instant) {
        match event {
            RosterEvent::RosterLoaded(employees) => {
                self.roster.replace_rows(employees);
                self.pending = self
                    .pending
                    .take()
                    .and_then(|pending| pending.retain_rendered(&self.roster));
            }
            RosterEvent::RosterLoadFailed => self.roster.mark_load_failed(),
            RosterEvent::EmployeeOpened(employee) => self.form.populate(&employee),
            RosterEvent::FormCleared => self.form.reset(),
            RosterEvent::Status(message) => self.status.show(message, now),
        }
    }

    pub fn apply_all(&mut self, events: impl IntoIterator<Item = RosterEvent>, now: Instant) {
        for event in events {
            self.apply(event, now);
        }
    }

    pub fn show_message(&mut self, message: StatusMessage, now: Instant) {
        self.status.show(message, now);
    }

    pub fn submit_form(&self) -> RosterCommand {
        RosterCommand::Save(self.form.submit())
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    /// Forgets everything shown for the previous server: rows, selection, form
    /// and any open confirmation. The banner is kept.
    pub fn switch_server(&mut self) {
        self.roster = RosterTable::default();
        self.form.reset();
        self.pending = None;
    }

    /// Modal-visibility flag: the deletion awaiting a dialog answer, if any.
    pub fn pending_deletion(&self) -> Option<&PendingDeletion> {
        self.pending.as_ref()
    }

    pub fn request_delete(
        &mut self,
        id: EmployeeId,
        confirmation: Confirmation<'_>,
    ) -> Option<RosterCommand> {
        self.confirm_or_defer(PendingDeletion::Single(id), confirmation)
    }

    /// Batch delete of the checked rows. With nothing checked no prompt or dialog appears.
    pub fn request_batch_delete(
        &mut self,
        confirmation: Confirmation<'_>,
    ) -> Option<RosterCommand> {
        let ids = self.roster.selected_ids();
        if ids.is_empty() {
            return None;
        }
        self.confirm_or_defer(PendingDeletion::Batch(ids), confirmation)
    }

    pub fn confirm_pending(&mut self) -> Option<RosterCommand> {
        self.pending.take().map(PendingDeletion::into_command)
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    fn confirm_or_defer(
        &mut self,
        deletion: PendingDeletion,
        confirmation: Confirmation<'_>,
    ) -> Option<RosterCommand> {
        match confirmation {
            Confirmation::Prompt(prompt) => prompt
                .confirm(&deletion.question())
                .then(|| deletion.into_command()),
            Confirmation::Dialog => {
                self.pending = Some(deletion);
                None
            }
        }
    }
}

/// Couples an api with a view-model for hosts that can await in place.
pub struct RosterSession<A> {
    api: A,
    pub view: RosterViewModel,
}

impl<A: RosterApi> RosterSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            view: RosterViewModel::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn dispatch(&mut self, command: RosterCommand) {
        tracing::debug!(command = command.name(), "dispatching roster command");
        let events = run_command(&self.api, command).await;
        self.view.apply_all(events, Instant::now());
    }

    pub async fn load(&mut self) {
        self.dispatch(RosterCommand::Load).await;
    }

    pub async fn save(&mut self) {
        let command = self.view.submit_form();
        self.dispatch(command).await;
    }

    pub async fn edit(&mut self, id: EmployeeId) {
        self.dispatch(RosterCommand::Edit(id)).await;
    }

    /// Returns whether a request was issued.
    pub async fn delete(&mut self, id: EmployeeId, confirmation: Confirmation<'_>) -> bool {
        match self.view.request_delete(id, confirmation) {
            Some(command) => {
                self.dispatch(command).await;
                true
            }
            None => false,
        }
    }

    /// Returns whether a request was issued.
    pub async fn delete_selected(&mut self, confirmation: Confirmation<'_>) -> bool {
        match self.view.request_batch_delete(confirmation) {
            Some(command) => {
                self.dispatch(command).await;
                true
            }
            None => false,
        }
    }

    pub async fn confirm_pending(&mut self) -> bool {
        match self.view.confirm_pending() {
            Some(command) => {
                self.dispatch(command).await;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
