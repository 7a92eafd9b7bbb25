use super::db::Db;
use super::reports::SCHEMA_REPORTS;
use crate::libs::error::StoreError;
use crate::libs::report::TaskEntry;
use rusqlite::{params, params_from_iter, Connection};
use std::collections::HashMap;

pub(crate) const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    report_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    time REAL NOT NULL,
    status TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (report_id) REFERENCES reports(id) ON DELETE CASCADE
);";
const INSERT_TASK: &str = "INSERT INTO tasks (report_id, name, time, status) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TASKS: &str = "SELECT report_id, name, time, status FROM tasks";
const WHERE_REPORT_ID: &str = "WHERE report_id IN";

/// Persisted task rows. Tasks exist only as children of a report; deleting
/// the parent report cascades here.
pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks, StoreError> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_REPORTS, [])?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Inserts one row per task, all bound to the given report id. Rows
    /// commit one by one; a failure partway through leaves the earlier rows
    /// in place.
    pub fn insert_batch(&mut self, report_id: i64, tasks: &[TaskEntry]) -> Result<(), StoreError> {
        for task in tasks {
            self.conn.execute(INSERT_TASK, params![report_id, task.name, task.time, task.status])?;
        }
        Ok(())
    }

    /// Fetches the tasks for the given report ids, grouped by report id.
    pub fn fetch_for_reports(&mut self, report_ids: &[i64]) -> Result<HashMap<i64, Vec<TaskEntry>>, StoreError> {
        let mut grouped: HashMap<i64, Vec<TaskEntry>> = HashMap::new();
        if report_ids.is_empty() {
            return Ok(grouped);
        }

        let placeholders = vec!["?"; report_ids.len()].join(", ");
        let mut stmt = self.conn.prepare(&format!("{} {} ({})", SELECT_TASKS, WHERE_REPORT_ID, placeholders))?;
        let task_iter = stmt.query_map(params_from_iter(report_ids.iter()), |row| {
            Ok((
                row.get::<_, i64>(0)?,
                TaskEntry {
                    name: row.get(1)?,
                    time: row.get(2)?,
                    status: row.get(3)?,
                },
            ))
        })?;
        for task in task_iter {
            let (report_id, entry) = task?;
            grouped.entry(report_id).or_default().push(entry);
        }
        Ok(grouped)
    }
}
