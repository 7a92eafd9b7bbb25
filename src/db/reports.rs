//! Report store: CRUD and filtered retrieval over reports and their tasks.
//!
//! `save` owns the multi-step write shape: client upsert, report insert,
//! task batch insert. The steps commit independently rather than inside one
//! transaction, preserving the contract of the backing store this layer was
//! built against. A task-insert failure therefore leaves an orphaned report
//! with zero tasks behind; callers surface the error and do not retry.
//!
//! Reports are append-only once saved. There is no task-edit path, so the
//! `total_hours` recorded at save time is never recomputed.

use super::clients::Clients;
use super::db::Db;
use super::tasks::Tasks;
use crate::libs::error::StoreError;
use crate::libs::report::{total_hours, Report, ReportFilter, ReportWithTasks, TaskEntry};
use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Connection};

pub(crate) const SCHEMA_REPORTS: &str = "CREATE TABLE IF NOT EXISTS reports (
    id INTEGER NOT NULL PRIMARY KEY,
    date TEXT NOT NULL,
    client_key TEXT NOT NULL,
    reporter_name TEXT NOT NULL,
    total_hours REAL NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";
const INSERT_REPORT: &str = "INSERT INTO reports (date, client_key, reporter_name, total_hours) VALUES (?1, ?2, ?3, ?4)";
const SELECT_REPORTS: &str = "SELECT id, date, client_key, reporter_name, total_hours FROM reports";
const ORDER_BY_DATE: &str = "ORDER BY date DESC";
const DELETE_REPORT: &str = "DELETE FROM reports WHERE id = ?1";

pub struct Reports {
    pub conn: Connection,
}

impl Reports {
    pub fn new() -> Result<Reports, StoreError> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_REPORTS, [])?;
        db.conn.execute(super::tasks::SCHEMA_TASKS, [])?;

        Ok(Reports { conn: db.conn })
    }

    /// Persists a completed task-logging session as a report.
    ///
    /// Steps, each committing independently: upsert the client through the
    /// registry, compute `total_hours` from the task times, insert the
    /// report row, batch-insert the task rows. Returns the new report id.
    pub fn save(&mut self, date: NaiveDate, client_name: &str, client_key: &str, reporter_name: &str, tasks: &[TaskEntry]) -> Result<i64, StoreError> {
        if tasks.is_empty() {
            return Err(StoreError::Validation("a report requires at least one task".to_string()));
        }
        if let Some(task) = tasks.iter().find(|task| !(task.time > 0.0)) {
            return Err(StoreError::Validation(format!("task '{}' has a non-positive time", task.name)));
        }

        Clients::new()?.upsert(client_key, client_name)?;

        let report_id = self.insert_row(date, client_key, reporter_name, total_hours(tasks))?;
        Tasks::new()?.insert_batch(report_id, tasks)?;

        Ok(report_id)
    }

    /// Inserts a bare report row and returns its id. Used by `save` and by
    /// the backup import path, which carries its own precomputed total and
    /// tolerates an empty task list.
    pub fn insert_row(&mut self, date: NaiveDate, client_key: &str, reporter_name: &str, total_hours: f64) -> Result<i64, StoreError> {
        let date_str = date.format("%Y-%m-%d").to_string();
        self.conn.execute(INSERT_REPORT, params![date_str, client_key, reporter_name, total_hours])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetches reports matching every supplied filter, newest first, each
    /// joined with its tasks and resolved client display name. An empty
    /// result is a valid outcome, not an error.
    pub fn fetch(&mut self, filter: &ReportFilter) -> Result<Vec<ReportWithTasks>, StoreError> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut query_params: Vec<String> = Vec::new();

        if let Some(client_key) = &filter.client_key {
            conditions.push("client_key = ?");
            query_params.push(client_key.clone());
        }
        if let Some(start_date) = &filter.start_date {
            conditions.push("date >= ?");
            query_params.push(start_date.format("%Y-%m-%d").to_string());
        }
        if let Some(end_date) = &filter.end_date {
            conditions.push("date <= ?");
            query_params.push(end_date.format("%Y-%m-%d").to_string());
        }

        let sql = if conditions.is_empty() {
            format!("{} {}", SELECT_REPORTS, ORDER_BY_DATE)
        } else {
            format!("{} WHERE {} {}", SELECT_REPORTS, conditions.join(" AND "), ORDER_BY_DATE)
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let report_iter = stmt.query_map(params_from_iter(query_params.iter()), |row| {
            let date_str: String = row.get(1)?;
            Ok(Report {
                id: Some(row.get(0)?),
                date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_default(),
                client_key: row.get(2)?,
                reporter_name: row.get(3)?,
                total_hours: row.get(4)?,
            })
        })?;
        let mut reports = Vec::new();
        for report in report_iter {
            reports.push(report?);
        }
        drop(stmt);

        if reports.is_empty() {
            return Ok(Vec::new());
        }

        let client_map = Clients::new()?.map()?;
        let report_ids: Vec<i64> = reports.iter().filter_map(|report| report.id).collect();
        let mut tasks_by_report = Tasks::new()?.fetch_for_reports(&report_ids)?;

        Ok(reports
            .into_iter()
            .map(|report| {
                let tasks = report.id.and_then(|id| tasks_by_report.remove(&id)).unwrap_or_default();
                let client_name = client_map.get(&report.client_key).cloned().unwrap_or_else(|| report.client_key.clone());
                ReportWithTasks { report, client_name, tasks }
            })
            .collect())
    }

    /// Deletes a report; child tasks go with it via the cascade. Deleting an
    /// unknown id is indistinguishable from success.
    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        self.conn.execute(DELETE_REPORT, params![id])?;
        Ok(())
    }
}
