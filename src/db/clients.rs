//! Local client registry.
//!
//! Maps a short stable key to a display name. Writes go through an upsert
//! keyed on `key` with last-write-wins semantics, mirroring the remote
//! registry contract. Clients are never hard-deleted by the normal flow;
//! `remove` only affects this local registry and is never propagated to the
//! remote store.

use super::db::Db;
use crate::libs::error::StoreError;
use rusqlite::{params, Connection};
use std::collections::{BTreeMap, HashMap};

const SCHEMA_CLIENTS: &str = "CREATE TABLE IF NOT EXISTS clients (
    key TEXT NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";
const UPSERT_CLIENT: &str = "INSERT INTO clients (key, name) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET name = excluded.name";
const SELECT_CLIENTS: &str = "SELECT key, name FROM clients ORDER BY key";
const DELETE_CLIENT: &str = "DELETE FROM clients WHERE key = ?1";

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub key: String,
    pub name: String,
}

pub struct Clients {
    pub conn: Connection,
}

impl Clients {
    pub fn new() -> Result<Clients, StoreError> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_CLIENTS, [])?;

        Ok(Clients { conn: db.conn })
    }

    /// Inserts or updates a single client, keyed on `key`.
    pub fn upsert(&mut self, key: &str, name: &str) -> Result<(), StoreError> {
        self.conn.execute(UPSERT_CLIENT, params![key, name])?;
        Ok(())
    }

    /// Upserts every supplied `(key, name)` pair. Each statement commits
    /// independently; this is not a transaction.
    pub fn upsert_many(&mut self, clients: &BTreeMap<String, String>) -> Result<(), StoreError> {
        for (key, name) in clients {
            self.upsert(key, name)?;
        }
        Ok(())
    }

    pub fn fetch(&mut self) -> Result<Vec<Client>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_CLIENTS)?;
        let client_iter = stmt.query_map([], |row| {
            Ok(Client {
                key: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        let mut clients = Vec::new();
        for client in client_iter {
            clients.push(client?);
        }
        Ok(clients)
    }

    /// Key-to-name lookup used to resolve display names on report reads.
    pub fn map(&mut self) -> Result<HashMap<String, String>, StoreError> {
        Ok(self.fetch()?.into_iter().map(|client| (client.key, client.name)).collect())
    }

    /// Removes a client from the local registry only.
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.conn.execute(DELETE_CLIENT, params![key])?;
        Ok(())
    }
}
