//! Pushes the local client registry shadow to the remote store.
//!
//! Probes connectivity first and skips the push when the remote store is
//! unreachable. The probe only gates this command's messaging; local
//! writes elsewhere never wait on it.

use crate::{
    api::remote::{ConnectionStatus, RemoteStore},
    libs::{config::Config, messages::Message},
    msg_bail_anyhow, msg_info, msg_success, msg_warning,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let remote_config = match &config.remote {
        Some(remote_config) => remote_config,
        None => msg_bail_anyhow!(Message::RemoteNotConfigured),
    };

    let remote = RemoteStore::new(remote_config);

    msg_info!(Message::CheckingConnection);
    match remote.ping().await {
        ConnectionStatus::Connected => msg_info!(Message::RemoteConnected),
        _ => {
            msg_warning!(Message::RemoteDisconnected);
            msg_warning!(Message::SyncBlockedOffline);
            return Ok(());
        }
    }

    let report = match remote.sync_clients(&config.clients).await {
        Ok(report) => report,
        Err(err) => msg_bail_anyhow!(Message::SyncFailed(err.to_string())),
    };
    msg_success!(Message::ClientsSynced {
        pushed: report.pushed,
        inserted: report.inserted,
        updated: report.updated,
    });

    Ok(())
}
