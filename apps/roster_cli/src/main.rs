use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use client_core::{
    config::settings_file_or_default,
    load_settings_from,
    status::StatusSeverity,
    workflow::{ConfirmPrompt, Confirmation, FixedAnswer},
    HttpRosterClient, RosterSession,
};
use shared::domain::EmployeeId;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(name = "roster", about = "Manage employee records on a roster server")]
struct Args {
    /// Overrides the server URL from roster.toml / environment.
    #[arg(long, global = true)]
    server_url: Option<String>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every employee.
    List,
    /// Print one employee.
    Show { id: i64 },
    /// Create an employee.
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Change fields of an existing employee; omitted fields keep their value.
    Update {
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Delete several employees in one batch request.
    DeleteBatch {
        #[arg(required = true)]
        ids: Vec<i64>,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(ClapArgs, Debug, Default)]
struct FieldArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    department: Option<String>,
}

impl FieldArgs {
    fn apply_to(self, fields: &mut shared::domain::EmployeeFields) {
        if let Some(v) = self.first_name {
            fields.first_name = v;
        }
        if let Some(v) = self.last_name {
            fields.last_name = v;
        }
        if let Some(v) = self.email {
            fields.email = v;
        }
        if let Some(v) = self.department {
            fields.department = v;
        }
    }
}

/// Asks on stdout and reads the answer from stdin.
struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        print!("{question} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

fn confirmation<'a>(
    yes: bool,
    fixed: &'a mut FixedAnswer,
    stdin: &'a mut StdinPrompt,
) -> Confirmation<'a> {
    if yes {
        Confirmation::Prompt(fixed)
    } else {
        Confirmation::Prompt(stdin)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let settings_path = settings_file_or_default(args.config);
    let mut settings = load_settings_from(&settings_path, |name| std::env::var(name).ok())
        .context("failed to load roster client settings")?;
    if let Some(server_url) = args.server_url.as_deref() {
        settings = settings.with_server_url(server_url)?;
    }
    tracing::debug!(server_url = %settings.server_url, "using roster server");

    let client = HttpRosterClient::from_settings(&settings)?;
    let mut session = RosterSession::new(client);
    let mut fixed = FixedAnswer(true);
    let mut stdin = StdinPrompt;

    match args.command {
        Command::List => {
            session.load().await;
            if session.view.roster.has_loaded() {
                render::print_roster(&session.view.roster);
            }
        }
        Command::Show { id } => {
            session.edit(EmployeeId(id)).await;
            if session.view.form.employee_id.is_some() {
                render::print_form(&session.view.form);
            }
        }
        Command::Add { fields } => {
            fields.apply_to(&mut session.view.form.fields);
            session.save().await;
            render::print_roster(&session.view.roster);
        }
        Command::Update { id, fields } => {
            session.edit(EmployeeId(id)).await;
            if session.view.form.employee_id == Some(EmployeeId(id)) {
                fields.apply_to(&mut session.view.form.fields);
                session.save().await;
                render::print_roster(&session.view.roster);
            }
        }
        Command::Delete { id, yes } => {
            session.load().await;
            if let Some(report) = render::format_load_failure(&session.view) {
                eprintln!("{report}");
                return Ok(ExitCode::FAILURE);
            }
            if session.view.roster.row(EmployeeId(id)).is_none() {
                eprintln!("no employee with id {id} in the current roster");
                return Ok(ExitCode::FAILURE);
            }
            if !session
                .delete(EmployeeId(id), confirmation(yes, &mut fixed, &mut stdin))
                .await
            {
                println!("Cancelled.");
                return Ok(ExitCode::SUCCESS);
            }
            render::print_roster(&session.view.roster);
        }
        Command::DeleteBatch { ids, yes } => {
            session.load().await;
            if let Some(report) = render::format_load_failure(&session.view) {
                eprintln!("{report}");
                return Ok(ExitCode::FAILURE);
            }
            for id in ids {
                if !session.view.roster.set_selected(EmployeeId(id), true)
                    && !session.view.roster.is_selected(EmployeeId(id))
                {
                    tracing::warn!(employee_id = id, "id not in current roster; skipping");
                }
            }
            if session.view.roster.selection_indicator().is_none() {
                eprintln!("none of the given ids are in the current roster");
                return Ok(ExitCode::FAILURE);
            }
            if !session
                .delete_selected(confirmation(yes, &mut fixed, &mut stdin))
                .await
            {
                println!("Cancelled.");
                return Ok(ExitCode::SUCCESS);
            }
            render::print_roster(&session.view.roster);
        }
    }

    Ok(match session.view.status.message() {
        Some(message) => {
            render::print_status(message);
            if message.severity == StatusSeverity::Error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        None => ExitCode::SUCCESS,
    })
}
