//! Backup import command.
//!
//! Validates the document shape up front, then restores records
//! best-effort: a bad record is reported and skipped, the rest import.

use crate::{
    db::clients::Clients,
    libs::{backup, config::Config, messages::Message},
    msg_error_anyhow, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to a JSON backup file produced by `export`
    #[arg(required = true)]
    file: PathBuf,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let document = fs::read_to_string(&args.file).map_err(|_| msg_error_anyhow!(Message::ImportReadFailed(args.file.display().to_string())))?;
    let records = backup::parse_document(&document)?;
    let outcome = backup::import_records(records)?;

    for failure in &outcome.failed {
        msg_warning!(Message::ImportRecordSkipped(failure.reason.clone()));
    }
    msg_success!(Message::ImportCompleted {
        succeeded: outcome.succeeded.len(),
        failed: outcome.failed.len(),
    });

    // Imported clients land in the local registry; mirror them into the
    // config shadow so the profile picker sees them.
    let mut config = Config::read()?;
    for client in Clients::new()?.fetch()? {
        config.clients.entry(client.key).or_insert(client.name);
    }
    config.save()?;

    Ok(())
}
