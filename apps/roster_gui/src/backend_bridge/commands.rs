//! Backend commands queued from UI to backend worker.

use client_core::RosterCommand;

pub enum BackendCommand {
    Roster(RosterCommand),
    /// Point the worker at another server and reload from it.
    SetServer { server_url: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Roster(cmd) => cmd.name(),
            BackendCommand::SetServer { .. } => "set_server",
        }
    }
}
