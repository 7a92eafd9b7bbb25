//! Local configuration management.
//!
//! The configuration is a single JSON document stored in the platform data
//! directory and loaded through an explicit `read()` / `save()` lifecycle.
//! Every field carries a default, so files written by older versions load
//! cleanly: missing fields are backfilled rather than failing the parse.
//!
//! The `clients` map is a locally cached shadow of the remote client
//! registry. It is independently mutable and only reconciled with the remote
//! store on an explicit `sync` command.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use eodlog::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.reporter_name = "Jane Doe".to_string();
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::remote::RemoteConfig;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Key of the client profile seeded into every fresh configuration.
pub const DEFAULT_CLIENT_KEY: &str = "default";
const DEFAULT_CLIENT_NAME: &str = "Valued Client";

/// A configurable module offered by the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Work schedule declared by the reporter. Only affects display; the report
/// store does not validate hours against it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub enum WorkMode {
    #[default]
    #[serde(rename = "Full-Time")]
    FullTime,
    #[serde(rename = "Part-Time")]
    PartTime,
}

impl WorkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::FullTime => "Full-Time",
            WorkMode::PartTime => "Part-Time",
        }
    }
}

/// Root configuration document.
///
/// Per-field `serde(default)` attributes implement the merge-over-defaults
/// load: a config file from an older schema simply leaves the new fields at
/// their defaults.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default)]
    pub work_mode: WorkMode,

    /// Default path for single-report CSV exports.
    #[serde(default = "default_csv_file_path")]
    pub csv_file_path: String,

    /// Name signed under generated report emails.
    #[serde(default = "default_reporter_name")]
    pub reporter_name: String,

    /// Key into `clients` selecting the profile new reports are logged under.
    #[serde(default = "default_client_key")]
    pub current_client_profile: String,

    /// Local client registry shadow: key to display name.
    #[serde(default = "default_clients")]
    pub clients: BTreeMap<String, String>,

    /// Remote store connection parameters. Absent until the user runs the
    /// setup wizard and enables the remote module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

fn default_csv_file_path() -> String {
    "task_log.csv".to_string()
}

fn default_reporter_name() -> String {
    "Your Name".to_string()
}

fn default_client_key() -> String {
    DEFAULT_CLIENT_KEY.to_string()
}

fn default_clients() -> BTreeMap<String, String> {
    let mut clients = BTreeMap::new();
    clients.insert(DEFAULT_CLIENT_KEY.to_string(), DEFAULT_CLIENT_NAME.to_string());
    clients
}

impl Default for Config {
    fn default() -> Self {
        Config {
            work_mode: WorkMode::default(),
            csv_file_path: default_csv_file_path(),
            reporter_name: default_reporter_name(),
            current_client_profile: default_client_key(),
            clients: default_clients(),
            remote: None,
        }
    }
}

impl Config {
    /// Reads the configuration file, returning defaults if none exists.
    ///
    /// Missing fields are backfilled from defaults during deserialization,
    /// and the seeded default client profile is reinstated if a stored file
    /// dropped it.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let mut config: Config = serde_json::from_str(&config_str)?;
        config
            .clients
            .entry(DEFAULT_CLIENT_KEY.to_string())
            .or_insert_with(|| DEFAULT_CLIENT_NAME.to_string());
        Ok(config)
    }

    /// Persists the configuration as pretty-printed JSON. Called after every
    /// mutation; there is no implicit save-on-drop.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard, pre-filling prompts with the
    /// current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        config.reporter_name = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptReporterName.to_string())
            .default(config.reporter_name.clone())
            .interact_text()?;

        let work_modes = [WorkMode::FullTime, WorkMode::PartTime];
        let selected_mode = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWorkMode.to_string())
            .items(&work_modes.iter().map(|mode| mode.as_str()).collect::<Vec<_>>())
            .default(if config.work_mode == WorkMode::PartTime { 1 } else { 0 })
            .interact()?;
        config.work_mode = work_modes[selected_mode];

        config.csv_file_path = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCsvFilePath.to_string())
            .default(config.csv_file_path.clone())
            .interact_text()?;

        let modules = vec![RemoteConfig::module()];
        let selected_modules = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_modules {
            if modules[selection].key == "remote" {
                config.remote = Some(RemoteConfig::init(&config.remote)?);
            }
        }

        Ok(config)
    }
}
