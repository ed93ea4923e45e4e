//! Runtime bridge between UI command queue and backend event intake.

use std::{thread, time::Duration};

use client_core::{run_command, ClientSettings, HttpRosterClient, RosterCommand};
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    settings: ClientSettings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let timeout = settings.request_timeout();
            let mut client = match HttpRosterClient::from_settings(&settings) {
                Ok(client) => client,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("backend worker startup failure: http client: {err}"),
                    )));
                    tracing::error!("failed to build roster http client: {err}");
                    return;
                }
            };
            tracing::info!(server_url = client.server_url(), "backend worker ready");

            // The loop ends once the UI drops its sender.
            while let Ok(cmd) = cmd_rx.recv() {
                let command = match cmd {
                    BackendCommand::Roster(command) => command,
                    BackendCommand::SetServer { server_url } => {
                        match rebuild_client(&server_url, timeout) {
                            Ok(rebuilt) => {
                                client = rebuilt;
                                forward(
                                    &ui_tx,
                                    UiEvent::ServerChanged(client.server_url().to_string()),
                                );
                                RosterCommand::Load
                            }
                            Err(err) => {
                                forward(
                                    &ui_tx,
                                    UiEvent::Error(UiError::from_message(
                                        UiErrorContext::ServerSettings,
                                        format!("invalid server url: {err:#}"),
                                    )),
                                );
                                continue;
                            }
                        }
                    }
                };

                let name = command.name();
                let events = run_command(&client, command).await;
                tracing::debug!(command = name, events = events.len(), "backend command finished");
                forward(&ui_tx, UiEvent::Roster(events));
            }
            tracing::info!("ui command queue closed; backend worker stopping");
        });
    });
}

fn rebuild_client(server_url: &str, timeout: Duration) -> anyhow::Result<HttpRosterClient> {
    let settings = ClientSettings {
        request_timeout_secs: timeout.as_secs(),
        ..ClientSettings::default()
    }
    .with_server_url(server_url)?;
    HttpRosterClient::from_settings(&settings)
}

fn forward(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    match ui_tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            tracing::warn!("ui event queue is full; dropping backend event");
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::debug!("ui event queue disconnected");
        }
    }
}
