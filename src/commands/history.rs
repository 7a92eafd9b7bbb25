//! Report history browsing with optional filters and CSV export.

use crate::{
    db::reports::Reports,
    libs::{csv, messages::Message, report::ReportFilter, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Only show reports for this client key
    #[arg(short, long)]
    client: Option<String>,

    /// Only show reports dated on or after this date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// Only show reports dated on or before this date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<String>,

    /// Also write the matching tasks to a CSV file
    #[arg(long)]
    csv: bool,
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let filter = ReportFilter {
        client_key: args.client.clone(),
        start_date: parse_opt_date(&args.from)?,
        end_date: parse_opt_date(&args.to)?,
    };

    let reports = Reports::new()?.fetch(&filter)?;
    if reports.is_empty() {
        msg_info!(Message::NoReportsFound);
        return Ok(());
    }

    msg_print!(Message::ReportsHeader(reports.len()), true);
    View::reports(&reports).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    if args.csv {
        let filename = csv::multi_report_filename(args.client.as_deref(), args.from.as_deref(), args.to.as_deref());
        fs::write(&filename, csv::multi_report(&reports))?;
        msg_success!(Message::ExportCompleted(filename));
    }

    Ok(())
}

fn parse_opt_date(date_str: &Option<String>) -> Result<Option<NaiveDate>> {
    match date_str {
        Some(date_str) => Ok(Some(NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?)),
        None => Ok(None),
    }
}
