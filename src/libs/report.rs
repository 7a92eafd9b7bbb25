//! Domain types shared between the report store, the backup codec and the
//! formatting helpers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task statuses offered by the interactive logger. Stored as plain strings,
/// so imported reports may carry values outside this list.
pub const STATUS_OPTIONS: [&str; 7] = ["Completed", "In Progress", "On Hold", "Pending Review", "Cancelled", "Blocked", "Deferred"];

/// A single logged unit of work. Owned by exactly one report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskEntry {
    pub name: String,
    /// Time spent in decimal hours. Must be positive to be persisted.
    pub time: f64,
    pub status: String,
}

impl TaskEntry {
    pub fn new(name: &str, time: f64, status: &str) -> Self {
        TaskEntry {
            name: name.to_string(),
            time,
            status: status.to_string(),
        }
    }
}

/// A persisted report row. `total_hours` is fixed at save time as the sum of
/// the child task times; reports are append-only, so it is never recomputed.
#[derive(Debug, Clone)]
pub struct Report {
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub client_key: String,
    pub reporter_name: String,
    pub total_hours: f64,
}

/// A report joined with its tasks and the resolved client display name.
/// This is the shape every read path returns.
#[derive(Debug, Clone)]
pub struct ReportWithTasks {
    pub report: Report,
    pub client_name: String,
    pub tasks: Vec<TaskEntry>,
}

/// Optional constraints for report retrieval. Omitted filters impose no
/// constraint; the date window is inclusive on both ends.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub client_key: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Sums task times into the report's aggregate hours.
pub fn total_hours(tasks: &[TaskEntry]) -> f64 {
    tasks.iter().map(|task| task.time).sum()
}
