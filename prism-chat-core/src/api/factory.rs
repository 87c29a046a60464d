// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client Factory
//!
//! Explicit construction point for the two client roles. Built once at
//! application startup and passed by reference to whatever composes the
//! application; there is no process-wide registry.

use crate::network::scheduler::Scheduler;
use crate::network::transport::{Transport, TransportConfig};
use crate::router::EventHandlers;

use super::chat_client::ChatClient;
use super::roles::{
    ClientSimulator, OperatorConsole, OperatorHandlers, SimulatorHandlers, DEFAULT_ADMIN_NAME,
    OPERATOR_CONNECTION_ID,
};

/// Builds chat clients against one backend.
#[derive(Debug, Clone)]
pub struct ClientFactory {
    base_url: String,
}

impl ClientFactory {
    /// Creates a factory for the given backend base URL
    /// (e.g. `ws://localhost:8000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientFactory {
            base_url: base_url.into(),
        }
    }

    /// The backend base URL this factory connects to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the transport config for a connection identity.
    pub fn config_for(&self, connection_id: &str) -> TransportConfig {
        TransportConfig {
            connection_id: connection_id.to_string(),
            base_url: self.base_url.clone(),
            ..Default::default()
        }
    }

    /// Creates a generic client with an arbitrary identity and handler set.
    pub fn chat_client<T, S, H>(
        &self,
        transport: T,
        scheduler: S,
        connection_id: &str,
        handlers: H,
    ) -> ChatClient<T, S, H>
    where
        T: Transport,
        S: Scheduler,
        H: EventHandlers,
    {
        ChatClient::connect(transport, scheduler, self.config_for(connection_id), handlers)
    }

    /// Creates the operator console, connected as `"admin"`.
    pub fn operator_console<T, S>(
        &self,
        transport: T,
        scheduler: S,
        handlers: OperatorHandlers,
    ) -> OperatorConsole<T, S>
    where
        T: Transport,
        S: Scheduler,
    {
        OperatorConsole::connect(
            transport,
            scheduler,
            self.config_for(OPERATOR_CONNECTION_ID),
            handlers,
            DEFAULT_ADMIN_NAME,
        )
    }

    /// Creates a simulated end-user client, connected as `"client_{id}"`.
    pub fn client_simulator<T, S>(
        &self,
        transport: T,
        scheduler: S,
        client_id: i64,
        client_name: &str,
        handlers: SimulatorHandlers,
    ) -> ClientSimulator<T, S>
    where
        T: Transport,
        S: Scheduler,
    {
        let connection_id = format!("client_{}", client_id);
        ClientSimulator::connect(
            transport,
            scheduler,
            self.config_for(&connection_id),
            client_id,
            client_name,
            handlers,
        )
    }
}

impl Default for ClientFactory {
    fn default() -> Self {
        ClientFactory::new(TransportConfig::default().base_url)
    }
}
