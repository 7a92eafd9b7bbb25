//! Database layer for the eodlog application.
//!
//! Provides the data persistence layer built on SQLite: the local client
//! registry, the report store and its child task rows. Schemas are created
//! lazily on first use; foreign keys are switched on so deleting a report
//! cascades to its tasks.

/// Core database connection and initialization module.
pub mod db;

/// Local client registry keyed on a short stable client key.
pub mod clients;

/// Report store: CRUD and filtered retrieval over saved reports.
pub mod reports;

/// Task rows owned by their parent reports.
pub mod tasks;
