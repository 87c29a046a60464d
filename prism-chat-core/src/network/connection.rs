// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Connection Manager
//!
//! Owns one channel's lifecycle: connect, detect loss, schedule reconnects
//! with bounded linear backoff, expose send/disconnect, and report state
//! transitions through caller-registered callbacks.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::scheduler::Scheduler;
use super::transport::{ConnectionState, Transport, TransportConfig, TransportEvent};

type LifecycleCallback = Box<dyn FnMut() + Send>;
type ErrorCallback = Box<dyn FnMut(&str) + Send>;

/// Snapshot of the connection for status displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub is_connected: bool,
    pub connection_id: String,
    pub reconnect_attempts: u32,
}

/// Connection manager with automatic reconnection.
///
/// Maintains at most one live channel per logical connection identity and
/// keeps it alive across transient failures. Reconnection is driven
/// exclusively by close events; transport errors are surfaced through
/// `on_error` without touching the state machine. After
/// `max_reconnect_attempts` consecutive failures, or an explicit
/// [`ConnectionManager::disconnect`], the connection is terminally `Closed`.
///
/// # Example
///
/// ```ignore
/// use prism_chat_core::network::{ConnectionManager, MockTransport, SystemScheduler, TransportConfig};
///
/// let config = TransportConfig::for_connection("client_7");
/// let mut conn = ConnectionManager::new(MockTransport::new(), SystemScheduler::new(), config);
/// conn.connect();
/// loop {
///     for frame in conn.poll() {
///         // route the frame
///     }
/// }
/// ```
pub struct ConnectionManager<T: Transport, S: Scheduler> {
    transport: T,
    scheduler: S,
    config: TransportConfig,
    state: ConnectionState,
    reconnect_attempts: u32,
    on_connect: Option<LifecycleCallback>,
    on_disconnect: Option<LifecycleCallback>,
    on_error: Option<ErrorCallback>,
}

impl<T: Transport, S: Scheduler> ConnectionManager<T, S> {
    /// Creates a new connection manager. Call `connect` to open the channel.
    pub fn new(transport: T, scheduler: S, config: TransportConfig) -> Self {
        ConnectionManager {
            transport,
            scheduler,
            config,
            state: ConnectionState::Disconnected,
            reconnect_attempts: 0,
            on_connect: None,
            on_disconnect: None,
            on_error: None,
        }
    }

    /// Opens a new channel to the derived endpoint.
    ///
    /// Does not block: completion is observed as an open event in [`poll`].
    /// Any previous channel handle is discarded first, so exactly one handle
    /// is live at a time. A no-op once the connection is terminally closed.
    ///
    /// [`poll`]: ConnectionManager::poll
    pub fn connect(&mut self) {
        if self.state == ConnectionState::Closed {
            debug!(
                connection_id = %self.config.connection_id,
                "connect ignored on terminal connection"
            );
            return;
        }

        // Drop the previous handle and its queued events before re-binding.
        let _ = self.transport.disconnect();
        self.state = ConnectionState::Connecting;
        info!(endpoint = %self.config.endpoint_url(), "opening channel");

        if let Err(e) = self.transport.connect(&self.config) {
            // Mirrors the channel's own failure sequence: error, then close.
            let message = e.to_string();
            self.emit_error(&message);
            self.handle_close();
        }
    }

    /// Runs one event-loop tick: fires a due reconnect timer and drains the
    /// transport's pending events. Returns inbound frames in delivery order.
    pub fn poll(&mut self) -> Vec<String> {
        if self.scheduler.fire_if_due()
            && matches!(self.state, ConnectionState::Reconnecting { .. })
        {
            self.connect();
        }

        let mut frames = Vec::new();
        while let Some(event) = self.transport.poll() {
            match event {
                TransportEvent::Opened => self.handle_open(),
                TransportEvent::Frame(raw) => frames.push(raw),
                TransportEvent::Closed => self.handle_close(),
                TransportEvent::Failed(message) => self.emit_error(&message),
            }
        }
        frames
    }

    /// Transmits one frame if the connection is ready.
    ///
    /// Returns `false` without queuing when the connection is not in the
    /// `Connected` state or the channel is not ready to send: the frame is
    /// dropped, not retried.
    pub fn send_frame(&mut self, frame: &str) -> bool {
        if self.state != ConnectionState::Connected || !self.transport.is_open() {
            debug!(
                connection_id = %self.config.connection_id,
                "channel not connected, dropping outbound frame"
            );
            return false;
        }
        match self.transport.send(frame) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "send failed, dropping outbound frame");
                false
            }
        }
    }

    /// Closes the channel and marks the connection terminal.
    ///
    /// Suppresses any reconnect a subsequently observed close event would
    /// otherwise schedule.
    pub fn disconnect(&mut self) {
        self.scheduler.cancel();
        let _ = self.transport.disconnect();
        if self.state != ConnectionState::Closed {
            self.state = ConnectionState::Closed;
            info!(
                connection_id = %self.config.connection_id,
                "channel closed by request"
            );
            if let Some(callback) = self.on_disconnect.as_mut() {
                callback();
            }
        }
    }

    /// Pure read of the current state.
    pub fn status(&self) -> ConnectionStatus {
        ConnectionStatus {
            is_connected: self.state == ConnectionState::Connected,
            connection_id: self.config.connection_id.clone(),
            reconnect_attempts: self.reconnect_attempts,
        }
    }

    /// Returns the current connection state.
    pub fn state(&self) -> ConnectionState {
        self.state.clone()
    }

    /// Returns true if connected and ready.
    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// Returns the current reconnect attempt count.
    pub fn reconnect_attempts(&self) -> u32 {
        self.reconnect_attempts
    }

    /// Returns the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Invoked after each successful open.
    pub fn set_on_connect(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_connect = Some(Box::new(callback));
    }

    /// Invoked on every observed connection loss and on explicit disconnect.
    pub fn set_on_disconnect(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_disconnect = Some(Box::new(callback));
    }

    /// Invoked on transport errors. Errors never change connection state.
    pub fn set_on_error(&mut self, callback: impl FnMut(&str) + Send + 'static) {
        self.on_error = Some(Box::new(callback));
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns a mutable reference to the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Returns a mutable reference to the scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn handle_open(&mut self) {
        self.scheduler.cancel();
        self.state = ConnectionState::Connected;
        self.reconnect_attempts = 0;
        info!(connection_id = %self.config.connection_id, "channel open");
        if let Some(callback) = self.on_connect.as_mut() {
            callback();
        }
    }

    fn handle_close(&mut self) {
        if self.state == ConnectionState::Closed {
            // Late close of a defunct channel after an explicit disconnect.
            debug!("ignoring close event on terminal connection");
            return;
        }

        if let Some(callback) = self.on_disconnect.as_mut() {
            callback();
        }

        if self.reconnect_attempts >= self.config.max_reconnect_attempts {
            self.scheduler.cancel();
            self.state = ConnectionState::Closed;
            warn!(
                connection_id = %self.config.connection_id,
                attempts = self.reconnect_attempts,
                "retry limit reached, giving up"
            );
            return;
        }

        self.reconnect_attempts += 1;
        self.state = ConnectionState::Reconnecting {
            attempt: self.reconnect_attempts,
        };
        let delay = Duration::from_millis(
            self.config.reconnect_base_delay_ms * u64::from(self.reconnect_attempts),
        );
        info!(
            attempt = self.reconnect_attempts,
            max = self.config.max_reconnect_attempts,
            delay_ms = delay.as_millis() as u64,
            "scheduling reconnect"
        );
        self.scheduler.schedule(delay);
    }

    fn emit_error(&mut self, message: &str) {
        warn!(error = %message, "transport error");
        if let Some(callback) = self.on_error.as_mut() {
            callback(message);
        }
    }
}
