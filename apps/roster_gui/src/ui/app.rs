use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use client_core::{status::StatusMessage, RosterCommand, RosterEvent, RosterViewModel};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::panels;

const IDLE_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub server_url: String,
    /// Settings problem to surface once the window is up.
    pub startup_error: Option<String>,
}

pub struct RosterGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    view: RosterViewModel,
    server_url: String,
    server_url_input: String,
    last_refreshed: Option<DateTime<Local>>,
}

impl RosterGuiApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            view: RosterViewModel::default(),
            server_url_input: startup.server_url.clone(),
            server_url: startup.server_url,
            last_refreshed: None,
        };
        if let Some(err) = startup.startup_error {
            app.view.show_message(StatusMessage::error(err), Instant::now());
        }
        app.dispatch(BackendCommand::Roster(RosterCommand::Load));
        app
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.show_ui_error(&err);
        }
    }

    fn dispatch_roster(&mut self, command: Option<RosterCommand>) {
        if let Some(command) = command {
            self.dispatch(BackendCommand::Roster(command));
        }
    }

    fn show_ui_error(&mut self, err: &UiError) {
        tracing::error!(context = ?err.context(), "{}", err.message());
        self.view
            .show_message(StatusMessage::error(err.banner_text()), Instant::now());
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            let now = Instant::now();
            match event {
                UiEvent::Roster(events) => {
                    for event in events {
                        if matches!(event, RosterEvent::RosterLoaded(_)) {
                            self.last_refreshed = Some(Local::now());
                        }
                        self.view.apply(event, now);
                    }
                }
                UiEvent::ServerChanged(server_url) => {
                    self.server_url_input = server_url.clone();
                    self.server_url = server_url;
                    self.last_refreshed = None;
                    self.view.switch_server();
                }
                UiEvent::Error(err) => self.show_ui_error(&err),
            }
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("roster_nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Employee Roster");
                ui.separator();
                if ui.button("Employee List").clicked() {
                    self.dispatch(BackendCommand::Roster(RosterCommand::Load));
                }
                if ui.button("Add Employee").clicked() {
                    self.view.reset_form();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Connect").clicked() {
                        let server_url = self.server_url_input.trim().to_string();
                        self.dispatch(BackendCommand::SetServer { server_url });
                    }
                    ui.add(
                        egui::TextEdit::singleline(&mut self.server_url_input)
                            .desired_width(220.0)
                            .hint_text("http://host:port"),
                    );
                    ui.label("Server");
                });
            });

            let refreshed = self
                .last_refreshed
                .map(|at| at.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "never".to_string());
            ui.small(format!("{} - last refreshed {refreshed}", self.server_url));
        });
    }
}

impl eframe::App for RosterGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_top_bar(ctx);

        let form_command = egui::SidePanel::right("employee_form_panel")
            .resizable(false)
            .default_width(320.0)
            .show(ctx, |ui| panels::show_employee_form(ui, &mut self.view))
            .inner;

        let now = Instant::now();
        let table_command = egui::CentralPanel::default()
            .show(ctx, |ui| {
                panels::show_status_banner(ui, &mut self.view.status, now);
                ui.add_space(6.0);
                panels::show_roster_table(ui, &mut self.view)
            })
            .inner;

        let dialog_command = panels::show_confirm_dialog(ctx, &mut self.view);

        self.dispatch_roster(form_command);
        self.dispatch_roster(table_command);
        self.dispatch_roster(dialog_command);

        let repaint_in = self
            .view
            .status
            .next_transition_in(Instant::now())
            .map_or(IDLE_REPAINT_INTERVAL, |next| next.min(IDLE_REPAINT_INTERVAL));
        ctx.request_repaint_after(repaint_in);
    }
}
