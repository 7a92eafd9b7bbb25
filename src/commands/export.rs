//! Data export command: JSON backup of the full report set, or CSV.
//!
//! JSON export is the backup document consumed by `import` and must stay
//! lossless with respect to it. CSV export comes in two shapes: every
//! matching task across reports, or a single report's tasks when `--report`
//! is given.

use crate::{
    db::reports::Reports,
    libs::{backup, config::Config, csv, messages::Message, report::ReportFilter},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// JSON backup document, restorable through `import`
    Json,
    /// Comma-separated task rows
    Csv,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: ExportFormat,

    /// Custom output file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Restrict the CSV export to a single report id
    #[arg(short, long)]
    report: Option<i64>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let reports = Reports::new()?.fetch(&ReportFilter::default())?;

    let (content, default_name) = match args.format {
        ExportFormat::Json => {
            let document = backup::export(&reports)?;
            let name = format!("eod-reports-backup-{}.json", Local::now().format("%Y-%m-%d"));
            (document, name)
        }
        ExportFormat::Csv => match args.report {
            Some(id) => {
                let report = match reports.iter().find(|report| report.report.id == Some(id)) {
                    Some(report) => report,
                    None => msg_bail_anyhow!(Message::ReportNotFound(id)),
                };
                let date_str = report.report.date.format("%Y-%m-%d").to_string();
                (csv::single_report(&date_str, &report.tasks), Config::read()?.csv_file_path)
            }
            None => (csv::multi_report(&reports), csv::multi_report_filename(None, None, None)),
        },
    };

    let output_path = args.output.unwrap_or_else(|| PathBuf::from(default_name));
    fs::write(&output_path, content)?;

    msg_success!(Message::ExportCompleted(output_path.display().to_string()));
    Ok(())
}
