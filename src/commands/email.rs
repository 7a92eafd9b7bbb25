//! Prints the end-of-day email for a saved report.

use crate::{
    db::reports::Reports,
    libs::{email, messages::Message, report::ReportFilter},
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EmailArgs {
    /// Report id; defaults to the most recent report
    #[arg(short, long)]
    id: Option<i64>,
}

pub fn cmd(args: EmailArgs) -> Result<()> {
    let reports = Reports::new()?.fetch(&ReportFilter::default())?;
    if reports.is_empty() {
        msg_info!(Message::NoReportsFound);
        return Ok(());
    }

    let report = match args.id {
        Some(id) => match reports.iter().find(|report| report.report.id == Some(id)) {
            Some(report) => report,
            None => msg_bail_anyhow!(Message::ReportNotFound(id)),
        },
        // Reports come back ordered by date descending.
        None => &reports[0],
    };

    let date_str = report.report.date.format("%Y-%m-%d").to_string();
    msg_print!(email::subject(&report.report.reporter_name, &date_str), true);
    msg_print!(email::body(&report.client_name, &report.tasks, &report.report.reporter_name));

    Ok(())
}
