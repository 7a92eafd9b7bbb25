//! Remote store client for the client registry sync and connectivity probe.
//!
//! Talks to a PostgREST-style endpoint exposing the `clients` table. Only
//! the client registry crosses this boundary: report rows live in the local
//! store and are moved in bulk through the backup codec instead.
//!
//! The connectivity probe is a minimal one-row read. Its result is a status
//! flag used to gate sync messaging; it never blocks local writes, and a
//! probe failure downgrades to `Disconnected` rather than surfacing an
//! error.

use crate::libs::config::ConfigModule;
use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

const CLIENTS_PATH: &str = "rest/v1/clients";

/// Connection parameters for the remote store, stored in the local config.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RemoteConfig {
    /// Base URL of the remote store, e.g. `https://xyz.supabase.co`.
    pub api_url: String,
    /// API key sent as both the `apikey` header and a bearer token.
    pub api_key: String,
}

impl RemoteConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "remote".to_string(),
            name: Message::ConfigModuleRemote.to_string(),
        }
    }

    pub fn init(config: &Option<RemoteConfig>) -> Result<Self> {
        let current = config.clone().unwrap_or(RemoteConfig {
            api_url: String::new(),
            api_key: String::new(),
        });
        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRemoteApiUrl.to_string())
            .default(current.api_url)
            .interact_text()?;
        let api_key: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRemoteApiKey.to_string())
            .default(current.api_key)
            .interact_text()?;
        Ok(RemoteConfig { api_url, api_key })
    }
}

/// Result of the connectivity probe. `Checking` is the initial state before
/// the first probe resolves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConnectionStatus {
    Checking,
    Connected,
    Disconnected,
}

/// Summary of one client registry push.
#[derive(Debug, Clone, Copy)]
pub struct SyncReport {
    pub pushed: usize,
    pub inserted: usize,
    pub updated: usize,
}

#[derive(Serialize)]
struct ClientPayload<'a> {
    key: &'a str,
    name: &'a str,
}

#[derive(Deserialize)]
struct ClientKeyRow {
    key: String,
}

pub struct RemoteStore {
    client: Client,
    config: RemoteConfig,
}

impl RemoteStore {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn headers(&self) -> Result<HeaderMap, StoreError> {
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&self.config.api_key).map_err(|e| StoreError::Sync(e.to_string()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.config.api_key)).map_err(|e| StoreError::Sync(e.to_string()))?;
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }

    fn clients_url(&self) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), CLIENTS_PATH)
    }

    /// Reads the keys currently stored remotely. Used to report how many of
    /// a pushed batch were new versus updated.
    pub async fn fetch_client_keys(&self) -> Result<HashSet<String>, StoreError> {
        let res = self
            .client
            .get(self.clients_url())
            .headers(self.headers()?)
            .query(&[("select", "key")])
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(StoreError::Sync(format!("remote read failed with status {}", res.status())));
        }
        let rows: Vec<ClientKeyRow> = res.json().await?;
        Ok(rows.into_iter().map(|row| row.key).collect())
    }

    /// Pushes the supplied registry as one upsert batch keyed on `key`,
    /// last write wins. The batch either succeeds as a whole or the call
    /// fails; there is no partial-success reporting.
    pub async fn sync_clients(&self, clients: &BTreeMap<String, String>) -> Result<SyncReport, StoreError> {
        let existing_keys = self.fetch_client_keys().await?;

        let payload: Vec<ClientPayload> = clients.iter().map(|(key, name)| ClientPayload { key, name }).collect();
        if payload.is_empty() {
            return Ok(SyncReport {
                pushed: 0,
                inserted: 0,
                updated: 0,
            });
        }

        let mut headers = self.headers()?;
        headers.insert("prefer", HeaderValue::from_static("resolution=merge-duplicates"));

        let res = self
            .client
            .post(self.clients_url())
            .headers(headers)
            .query(&[("on_conflict", "key")])
            .json(&payload)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(StoreError::Sync(format!("remote upsert failed with status {}", res.status())));
        }

        let inserted = clients.keys().filter(|key| !existing_keys.contains(*key)).count();
        Ok(SyncReport {
            pushed: payload.len(),
            inserted,
            updated: payload.len() - inserted,
        })
    }

    /// Probes the remote store with a one-row read and classifies the
    /// result. Failures are logged and downgraded to `Disconnected`.
    pub async fn ping(&self) -> ConnectionStatus {
        let headers = match self.headers() {
            Ok(headers) => headers,
            Err(err) => {
                msg_debug!(format!("connectivity probe skipped: {}", err));
                return ConnectionStatus::Disconnected;
            }
        };
        let res = self
            .client
            .get(self.clients_url())
            .headers(headers)
            .query(&[("select", "key"), ("limit", "1")])
            .send()
            .await;
        match res {
            Ok(res) if res.status().is_success() => ConnectionStatus::Connected,
            Ok(res) => {
                msg_debug!(format!("connectivity probe got status {}", res.status()));
                ConnectionStatus::Disconnected
            }
            Err(err) => {
                msg_debug!(format!("connectivity probe failed: {}", err));
                ConnectionStatus::Disconnected
            }
        }
    }
}
