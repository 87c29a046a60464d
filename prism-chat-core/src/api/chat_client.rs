// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Chat Client
//!
//! Composition root: one connection manager feeding one message router.

use tracing::warn;

use crate::network::connection::{ConnectionManager, ConnectionStatus};
use crate::network::event::OutboundEvent;
use crate::network::scheduler::Scheduler;
use crate::network::transport::{ConnectionState, Transport, TransportConfig};
use crate::router::{EventHandlers, MessageRouter};

/// Generic duplex chat client.
///
/// Owns the connection lifecycle and routes every inbound frame, in delivery
/// order, to the supplied handler set. Connects immediately on construction;
/// the embedding application drives it by calling [`ChatClient::poll`] from
/// its event loop.
///
/// # Example
///
/// ```ignore
/// use prism_chat_core::api::ChatClient;
/// use prism_chat_core::network::{SystemScheduler, TransportConfig, WebSocketTransport};
/// use prism_chat_core::router::DefaultHandlers;
///
/// let config = TransportConfig::for_connection("client_7");
/// let mut client = ChatClient::connect(
///     WebSocketTransport::new(),
///     SystemScheduler::new(),
///     config,
///     DefaultHandlers,
/// );
/// loop {
///     client.poll();
/// }
/// ```
pub struct ChatClient<T: Transport, S: Scheduler, H: EventHandlers> {
    connection: ConnectionManager<T, S>,
    router: MessageRouter<H>,
}

impl<T: Transport, S: Scheduler, H: EventHandlers> ChatClient<T, S, H> {
    /// Creates the client and immediately opens the channel.
    pub fn connect(transport: T, scheduler: S, config: TransportConfig, handlers: H) -> Self {
        let mut connection = ConnectionManager::new(transport, scheduler, config);
        connection.connect();
        ChatClient {
            connection,
            router: MessageRouter::new(handlers),
        }
    }

    /// Runs one event-loop tick: pumps the connection and routes every
    /// inbound frame.
    pub fn poll(&mut self) {
        for raw in self.connection.poll() {
            self.router.route_frame(&raw);
        }
    }

    /// Serializes and transmits one event.
    ///
    /// Returns `false` when the connection is not ready; the event is
    /// dropped, not queued.
    pub fn send(&mut self, event: &OutboundEvent) -> bool {
        let frame = match serde_json::to_string(event) {
            Ok(frame) => frame,
            Err(e) => {
                warn!(error = %e, "failed to serialize outbound event");
                return false;
            }
        };
        self.connection.send_frame(&frame)
    }

    /// Sends a message as a simulated end-user client.
    pub fn send_client_message(&mut self, client_id: i64, client_name: &str, message: &str) -> bool {
        self.send(&OutboundEvent::new_client_message(
            client_id,
            client_name,
            message,
        ))
    }

    /// Sends an operator reply into a conversation.
    pub fn send_admin_response(
        &mut self,
        conversation_id: i64,
        message: &str,
        admin_name: &str,
    ) -> bool {
        self.send(&OutboundEvent::admin_response(
            conversation_id,
            message,
            admin_name,
        ))
    }

    /// Subscribes this connection to a conversation's broadcasts.
    pub fn join_conversation(&mut self, conversation_id: i64) -> bool {
        self.send(&OutboundEvent::join_conversation(conversation_id))
    }

    /// Sends this participant's typing state.
    pub fn send_typing_indicator(
        &mut self,
        conversation_id: i64,
        is_typing: bool,
        sender_name: &str,
    ) -> bool {
        self.send(&OutboundEvent::typing_indicator(
            conversation_id,
            is_typing,
            sender_name,
        ))
    }

    /// Requests the most recent messages of a conversation.
    pub fn get_conversation_history(&mut self, conversation_id: i64, limit: u32) -> bool {
        self.send(&OutboundEvent::get_conversation_history(
            conversation_id,
            limit,
        ))
    }

    /// Closes the channel; the connection is terminal afterwards.
    pub fn disconnect(&mut self) {
        self.connection.disconnect();
    }

    /// Pure read of the connection state.
    pub fn status(&self) -> ConnectionStatus {
        self.connection.status()
    }

    /// Returns true if connected and ready.
    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    /// Returns the current connection state.
    pub fn state(&self) -> ConnectionState {
        self.connection.state()
    }

    /// Invoked after each successful open.
    pub fn set_on_connect(&mut self, callback: impl FnMut() + Send + 'static) {
        self.connection.set_on_connect(callback);
    }

    /// Invoked on every observed connection loss and on explicit disconnect.
    pub fn set_on_disconnect(&mut self, callback: impl FnMut() + Send + 'static) {
        self.connection.set_on_disconnect(callback);
    }

    /// Invoked on transport errors; these never change connection state.
    pub fn set_on_error(&mut self, callback: impl FnMut(&str) + Send + 'static) {
        self.connection.set_on_error(callback);
    }

    /// Registers the type-agnostic observer invoked once per decoded event.
    pub fn set_observer(
        &mut self,
        observer: impl FnMut(&crate::network::event::InboundEvent) + Send + 'static,
    ) {
        self.router.set_observer(observer);
    }

    /// Returns a reference to the handler set.
    pub fn handlers(&self) -> &H {
        self.router.handlers()
    }

    /// Returns a mutable reference to the handler set.
    pub fn handlers_mut(&mut self) -> &mut H {
        self.router.handlers_mut()
    }

    /// Returns a reference to the connection manager.
    pub fn connection(&self) -> &ConnectionManager<T, S> {
        &self.connection
    }

    /// Returns a mutable reference to the connection manager.
    pub fn connection_mut(&mut self) -> &mut ConnectionManager<T, S> {
        &mut self.connection
    }
}
