//! CSV rendering for single- and multi-report exports.
//!
//! Fields are comma-joined verbatim with no quoting or escaping, so a task
//! name containing a comma produces a malformed row. This matches the
//! long-standing export format consumed by downstream spreadsheets; fixing
//! it would change the on-disk format for existing users.

use crate::libs::formatter::format_time_value;
use crate::libs::report::{ReportWithTasks, TaskEntry};

const SINGLE_REPORT_HEADER: &str = "Date (EST),Task Name,Time Spent,Status";
const MULTI_REPORT_HEADER: &str = "Date,Client,Task Name,Time Spent,Status";

/// Renders the tasks of a single report, one row per task, all rows
/// carrying the supplied date.
pub fn single_report(date: &str, tasks: &[TaskEntry]) -> String {
    let mut rows = vec![SINGLE_REPORT_HEADER.to_string()];
    for task in tasks {
        rows.push(format!("{},{},{},{}", date, task.name, format_time_value(task.time), task.status));
    }
    rows.join("\n")
}

/// Renders every task of every supplied report, annotated with the report
/// date and resolved client name.
pub fn multi_report(reports: &[ReportWithTasks]) -> String {
    let mut rows = vec![MULTI_REPORT_HEADER.to_string()];
    for report in reports {
        let date = report.report.date.format("%Y-%m-%d").to_string();
        for task in &report.tasks {
            rows.push(format!(
                "{},{},{},{},{}",
                date,
                report.client_name,
                task.name,
                format_time_value(task.time),
                task.status
            ));
        }
    }
    rows.join("\n")
}

/// Derives the multi-report export filename from the active filters,
/// e.g. `all_tasks_acme_2024-01-01_to_2024-01-31.csv`.
pub fn multi_report_filename(client_key: Option<&str>, start_date: Option<&str>, end_date: Option<&str>) -> String {
    let mut filename = String::from("all_tasks");
    if let Some(client) = client_key {
        filename.push_str(&format!("_{}", client));
    }
    match (start_date, end_date) {
        (Some(start), Some(end)) => filename.push_str(&format!("_{}_to_{}", start, end)),
        (Some(start), None) => filename.push_str(&format!("_from_{}", start)),
        (None, Some(end)) => filename.push_str(&format!("_until_{}", end)),
        (None, None) => {}
    }
    filename.push_str(".csv");
    filename
}
