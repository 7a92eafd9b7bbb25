//! Interactive task logging and report creation.
//!
//! Prompts for tasks until the user submits an empty name, then persists
//! the session as a report through the report store and prints the
//! generated end-of-day email as a preview.

use crate::{
    db::reports::Reports,
    libs::{
        config::Config,
        email,
        messages::Message,
        report::{TaskEntry, STATUS_OPTIONS},
    },
    msg_bail_anyhow, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report date: 'today' or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Client profile key; defaults to the configured current profile
    #[arg(short, long)]
    client: Option<String>,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let date = parse_date(&args.date)?;

    let client_key = args.client.unwrap_or_else(|| config.current_client_profile.clone());
    let client_name = match config.clients.get(&client_key) {
        Some(name) => name.clone(),
        None => msg_bail_anyhow!(Message::UnknownClientProfile(client_key)),
    };

    let tasks = collect_tasks()?;
    if tasks.is_empty() {
        msg_warning!(Message::NoTasksLogged);
        return Ok(());
    }

    let report_id = Reports::new()?.save(date, &client_name, &client_key, &config.reporter_name, &tasks)?;

    // Email preview for the saved session.
    let date_str = date.format("%Y-%m-%d").to_string();
    msg_print!(email::subject(&config.reporter_name, &date_str), true);
    msg_print!(email::body(&client_name, &tasks, &config.reporter_name));

    msg_success!(Message::ReportSaved(report_id), true);
    Ok(())
}

fn collect_tasks() -> Result<Vec<TaskEntry>> {
    let mut tasks = Vec::new();

    loop {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskName.to_string())
            .allow_empty(true)
            .interact_text()?;
        if name.trim().is_empty() {
            break;
        }

        let time: f64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTime.to_string())
            .validate_with(|input: &f64| if *input > 0.0 { Ok(()) } else { Err("time must be positive") })
            .interact_text()?;

        let status_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskStatus.to_string())
            .items(&STATUS_OPTIONS)
            .default(0)
            .interact()?;

        tasks.push(TaskEntry::new(name.trim(), time, STATUS_OPTIONS[status_index]));
    }

    Ok(tasks)
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.to_lowercase() == "today" {
        Ok(Local::now().date_naive())
    } else {
        Ok(NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?)
    }
}
