#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptReporterName,
    PromptWorkMode,
    PromptCsvFilePath,
    PromptSelectModules,
    PromptRemoteApiUrl,
    PromptRemoteApiKey,
    ConfigModuleRemote,

    // === REPORT MESSAGES ===
    PromptTaskName,
    PromptTaskTime,
    PromptTaskStatus,
    PromptAddAnotherTask,
    ReportSaved(i64),
    ReportDeleted(i64),
    ReportNotFound(i64),
    NoTasksLogged,
    NoReportsFound,
    ReportsHeader(usize),
    UnknownClientProfile(String),
    ClientsHeader(usize),
    NoClientsConfigured,

    // === EXPORT / IMPORT MESSAGES ===
    ExportCompleted(String),
    ImportCompleted { succeeded: usize, failed: usize },
    ImportRecordSkipped(String),
    ImportReadFailed(String),

    // === SYNC MESSAGES ===
    RemoteNotConfigured,
    CheckingConnection,
    RemoteConnected,
    RemoteDisconnected,
    SyncBlockedOffline,
    ClientsSynced { pushed: usize, inserted: usize, updated: usize },
    SyncFailed(String),
}
