//! # Eodlog - End-of-Day report logger
//!
//! A command-line utility for logging daily tasks, generating end-of-day
//! report emails and CSV exports, and keeping client profiles in sync with
//! a remote store.
//!
//! ## Features
//!
//! - **Task Logging**: Interactive end-of-day task entry per client profile
//! - **Report History**: Filtered browsing of saved reports
//! - **Email Generation**: Formatted report emails with per-task durations
//! - **Data Export**: JSON backup and CSV exports, with lossless re-import
//! - **Client Sync**: Push local client profiles to a shared remote store
//!
//! ## Usage
//!
//! ```rust,no_run
//! use eodlog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
