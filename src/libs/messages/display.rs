//! Display implementation for eodlog application messages.
//!
//! All user-facing text lives in this one place, keeping wording consistent
//! across commands and making the `Message` enum the single source of truth
//! for terminal output.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::PromptReporterName => "Your name (signed under report emails)".to_string(),
            Message::PromptWorkMode => "Work mode".to_string(),
            Message::PromptCsvFilePath => "Default CSV export path".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptRemoteApiUrl => "Remote store API URL".to_string(),
            Message::PromptRemoteApiKey => "Remote store API key".to_string(),
            Message::ConfigModuleRemote => "Remote store".to_string(),

            // === REPORT MESSAGES ===
            Message::PromptTaskName => "Task name (leave empty to finish)".to_string(),
            Message::PromptTaskTime => "Time spent in hours".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptAddAnotherTask => "Add another task?".to_string(),
            Message::ReportSaved(id) => format!("Report saved with id {}", id),
            Message::ReportDeleted(id) => format!("Report {} deleted", id),
            Message::ReportNotFound(id) => format!("Report {} not found", id),
            Message::NoTasksLogged => "No tasks were logged, nothing to save".to_string(),
            Message::NoReportsFound => "No reports match the given filters".to_string(),
            Message::ReportsHeader(count) => format!("📋 {} report(s)", count),
            Message::UnknownClientProfile(key) => format!("Client profile '{}' is not in the local registry", key),
            Message::ClientsHeader(count) => format!("👥 {} client profile(s)", count),
            Message::NoClientsConfigured => "No client profiles configured yet".to_string(),

            // === EXPORT / IMPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export written to {}", path),
            Message::ImportCompleted { succeeded, failed } => {
                format!("Import finished: {} report(s) imported, {} skipped", succeeded, failed)
            }
            Message::ImportRecordSkipped(reason) => format!("Skipped record: {}", reason),
            Message::ImportReadFailed(path) => format!("Could not read backup file {}", path),

            // === SYNC MESSAGES ===
            Message::RemoteNotConfigured => "Remote store is not configured, run 'eodlog init' first".to_string(),
            Message::CheckingConnection => "Checking remote store connectivity...".to_string(),
            Message::RemoteConnected => "Remote store is reachable".to_string(),
            Message::RemoteDisconnected => "Remote store is unreachable".to_string(),
            Message::SyncBlockedOffline => "Skipping client sync while the remote store is unreachable".to_string(),
            Message::ClientsSynced { pushed, inserted, updated } => {
                format!("Pushed {} client(s) to the remote store ({} new, {} updated)", pushed, inserted, updated)
            }
            Message::SyncFailed(reason) => format!("Client sync failed: {}", reason),
        };
        write!(f, "{}", text)
    }
}
