//! Lists the client profiles available for report logging.

use crate::{
    db::clients::Client,
    libs::{config::Config, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    if config.clients.is_empty() {
        msg_info!(Message::NoClientsConfigured);
        return Ok(());
    }

    let clients: Vec<Client> = config
        .clients
        .iter()
        .map(|(key, name)| Client {
            key: key.clone(),
            name: name.clone(),
        })
        .collect();

    msg_print!(Message::ClientsHeader(clients.len()), true);
    View::clients(&clients).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    Ok(())
}
