//! Backup codec: whole-dataset export and best-effort import.
//!
//! The backup document is a JSON array of report records. Canonical field
//! names are snake_case, but older exports used camelCase for some fields,
//! so deserialization accepts both spellings and normalizes them onto one
//! record shape here, before any business logic runs.
//!
//! Import never overwrites: each record becomes a freshly inserted report
//! with a new id. Per-record failures are collected and skipped so that as
//! much of a backup as possible is recovered; only a document whose
//! top-level shape is wrong fails the whole call, with zero writes.

use crate::db::{clients::Clients, reports::Reports, tasks::Tasks};
use crate::libs::error::StoreError;
use crate::libs::report::{ReportWithTasks, TaskEntry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One report in the portable backup document.
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupRecord {
    pub date: String,
    #[serde(alias = "clientKey")]
    pub client_key: String,
    #[serde(alias = "clientName", default)]
    pub client_name: String,
    #[serde(alias = "reporterName")]
    pub reporter_name: String,
    #[serde(alias = "totalHours")]
    pub total_hours: f64,
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,
}

/// Outcome of a best-effort import: ids of the reports created plus the
/// records that were skipped and why.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub succeeded: Vec<i64>,
    pub failed: Vec<ImportFailure>,
}

#[derive(Debug)]
pub struct ImportFailure {
    pub record: Value,
    pub reason: String,
}

/// Serializes every report into the backup document. Lossless with respect
/// to `import_records` except for report ids, which import reassigns.
pub fn export(reports: &[ReportWithTasks]) -> Result<String, StoreError> {
    let records: Vec<BackupRecord> = reports
        .iter()
        .map(|report| BackupRecord {
            date: report.report.date.format("%Y-%m-%d").to_string(),
            client_key: report.report.client_key.clone(),
            client_name: report.client_name.clone(),
            reporter_name: report.report.reporter_name.clone(),
            total_hours: report.report.total_hours,
            tasks: report.tasks.clone(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Validates the top-level document shape. Anything but a JSON array fails
/// with a validation error before any write happens.
pub fn parse_document(document: &str) -> Result<Vec<Value>, StoreError> {
    let parsed: Value = serde_json::from_str(document).map_err(|e| StoreError::Validation(e.to_string()))?;
    match parsed {
        Value::Array(records) => Ok(records),
        _ => Err(StoreError::Validation("backup document is not a sequence of reports".to_string())),
    }
}

/// Imports the given records one by one: re-upsert the client, insert a new
/// report row, insert its tasks. A failed record is captured in the outcome
/// and the loop continues with the next one.
pub fn import_records(records: Vec<Value>) -> Result<ImportOutcome, StoreError> {
    let mut outcome = ImportOutcome::default();

    for value in records {
        match import_record(&value) {
            Ok(report_id) => outcome.succeeded.push(report_id),
            Err(err) => outcome.failed.push(ImportFailure {
                record: value,
                reason: err.to_string(),
            }),
        }
    }

    Ok(outcome)
}

fn import_record(value: &Value) -> Result<i64, StoreError> {
    let record: BackupRecord = serde_json::from_value(value.clone()).map_err(|e| StoreError::Validation(e.to_string()))?;
    let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").map_err(|e| StoreError::Validation(format!("bad date '{}': {}", record.date, e)))?;

    // Records from registries that never stored a display name fall back to
    // the key itself.
    let client_name = if record.client_name.is_empty() { &record.client_key } else { &record.client_name };
    Clients::new()?.upsert(&record.client_key, client_name)?;

    let report_id = Reports::new()?.insert_row(date, &record.client_key, &record.reporter_name, record.total_hours)?;
    Tasks::new()?.insert_batch(report_id, &record.tasks)?;

    Ok(report_id)
}
