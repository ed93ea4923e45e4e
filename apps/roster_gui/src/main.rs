mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{load_settings, ClientSettings};
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{app::StartupConfig, RosterGuiApp};

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the server URL from roster.toml / environment.
    #[arg(long)]
    server_url: Option<String>,
}

fn resolve_settings(args: &Args) -> (ClientSettings, Option<String>) {
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("failed to load roster settings, using defaults: {err:#}");
            return (
                ClientSettings::default(),
                Some(format!("Settings error, using defaults: {err:#}")),
            );
        }
    };

    let Some(server_url) = args.server_url.as_deref() else {
        return (settings, None);
    };
    match settings.clone().with_server_url(server_url) {
        Ok(settings) => (settings, None),
        Err(err) => {
            tracing::error!("ignoring --server-url: {err:#}");
            (settings, Some(format!("Ignoring --server-url: {err:#}")))
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();
    let (settings, startup_error) = resolve_settings(&args);
    let startup = StartupConfig {
        server_url: settings.server_url.clone(),
        startup_error,
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Roster")
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([820.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Employee Roster",
        options,
        Box::new(|_cc| Ok(Box::new(RosterGuiApp::new(cmd_tx, ui_rx, startup)))),
    )
}
