use super::formatter::format_time_value;
use super::report::ReportWithTasks;
use crate::db::clients::Client;
use prettytable::{row, Table};
use std::error::Error;

pub struct View {}

impl View {
    pub fn reports(reports: &[ReportWithTasks]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "CLIENT", "REPORTER", "HOURS", "TASKS"]);
        for report in reports {
            table.add_row(row![
                report.report.id.unwrap_or(0),
                report.report.date.format("%Y-%m-%d"),
                report.client_name,
                report.report.reporter_name,
                format_time_value(report.report.total_hours),
                report.tasks.len()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn clients(clients: &[Client]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["KEY", "NAME"]);
        for client in clients {
            table.add_row(row![client.key, client.name]);
        }
        table.printstd();

        Ok(())
    }
}
