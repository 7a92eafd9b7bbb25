//! Remote store integration.
//!
//! The only remote surface eodlog talks to: a relational store exposing the
//! shared `clients` table. Local client definitions are pushed on demand
//! with upsert semantics, and a lightweight probe classifies connectivity
//! for UI messaging.

pub mod remote;

pub use remote::{ConnectionStatus, RemoteConfig, RemoteStore, SyncReport};
