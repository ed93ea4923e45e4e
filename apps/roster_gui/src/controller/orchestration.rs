//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};

/// Never blocks the UI thread; a full or closed queue comes back as an error to show.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), UiError> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(UiError::from_message(
            UiErrorContext::CommandQueue,
            "UI command queue is full; please retry",
        )),
        Err(TrySendError::Disconnected(_)) => Err(UiError::from_message(
            UiErrorContext::CommandQueue,
            "Backend command processor disconnected; restart the application",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::UiErrorCategory;
    use client_core::RosterCommand;
    use crossbeam_channel::bounded;

    #[test]
    fn queues_command_when_there_is_room() {
        let (tx, rx) = bounded(1);
        dispatch_backend_command(&tx, BackendCommand::Roster(RosterCommand::Load))
            .expect("queued");
        assert!(matches!(
            rx.try_recv(),
            Ok(BackendCommand::Roster(RosterCommand::Load))
        ));
    }

    #[test]
    fn full_queue_is_reported_instead_of_blocking() {
        let (tx, _rx) = bounded(1);
        dispatch_backend_command(&tx, BackendCommand::Roster(RosterCommand::Load))
            .expect("first fits");
        let err = dispatch_backend_command(&tx, BackendCommand::Roster(RosterCommand::Load))
            .expect_err("second overflows");
        assert!(err.message().contains("full"));
        assert_eq!(err.category(), UiErrorCategory::Transport);
    }

    #[test]
    fn stopped_worker_is_reported() {
        let (tx, rx) = bounded::<BackendCommand>(1);
        drop(rx);
        let err = dispatch_backend_command(
            &tx,
            BackendCommand::SetServer {
                server_url: "http://127.0.0.1:9".into(),
            },
        )
        .expect_err("disconnected");
        assert!(err.message().contains("disconnected"));
    }
}
