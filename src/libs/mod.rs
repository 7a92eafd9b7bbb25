/// Backup codec for whole-dataset export and import.
pub mod backup;

/// Local configuration with explicit load/save lifecycle.
pub mod config;

/// CSV rendering for single- and multi-report exports.
pub mod csv;

/// Platform-specific application data directory resolution.
pub mod data_storage;

/// End-of-day email subject and body generation.
pub mod email;

/// Error kinds shared across the persistence and sync layers.
pub mod error;

/// Text formatting helpers for durations, times and status emoji.
pub mod formatter;

/// User-facing message catalog and display macros.
pub mod messages;

/// Domain types for reports, tasks and retrieval filters.
pub mod report;

/// Terminal table rendering.
pub mod view;
