//! Transport Trait
//!
//! Platform-agnostic abstraction for the full-duplex channel to the backend.

use super::error::NetworkError;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, NetworkError>;

/// Connection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected to any server.
    Disconnected,
    /// Connection in progress; completion arrives as an `Opened` event.
    Connecting,
    /// Connected and ready.
    Connected,
    /// Connection lost, a retry is scheduled.
    Reconnecting { attempt: u32 },
    /// Terminal: explicit disconnect or retry exhaustion. No automatic
    /// transition leaves this state.
    Closed,
}

impl ConnectionState {
    /// Returns true if no further automatic transition can occur.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ConnectionState::Closed)
    }
}

/// Lifecycle and data events reported by a transport.
///
/// These mirror the four events of the underlying channel: open, message,
/// close, error. A transport never reports an error by failing `poll`; it
/// turns failures into `Failed` or `Closed` events instead.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    /// The channel finished opening and is ready to send.
    Opened,
    /// One inbound text frame, in delivery order.
    Frame(String),
    /// The channel closed (peer close, or broken connection).
    Closed,
    /// A transport-level error that did not close the channel.
    Failed(String),
}

/// Configuration for transport connections.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Caller-supplied connection identity (`"admin"`, `"client_{id}"`).
    pub connection_id: String,
    /// Scheme://host:port of the backend.
    pub base_url: String,
    /// Full endpoint URL, bypassing derivation from `connection_id`.
    pub endpoint_override: Option<String>,
    /// Connection timeout in milliseconds.
    pub connect_timeout_ms: u64,
    /// Read/write timeout in milliseconds.
    pub io_timeout_ms: u64,
    /// Maximum reconnection attempts before the connection turns terminal.
    pub max_reconnect_attempts: u32,
    /// Base delay for linear backoff (milliseconds); attempt N waits N * base.
    pub reconnect_base_delay_ms: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            connection_id: String::new(),
            base_url: "ws://localhost:8000".into(),
            endpoint_override: None,
            connect_timeout_ms: 10_000,
            io_timeout_ms: 30_000,
            max_reconnect_attempts: 5,
            reconnect_base_delay_ms: 1_000,
        }
    }
}

impl TransportConfig {
    /// Creates a config for the given connection identity.
    pub fn for_connection(connection_id: &str) -> Self {
        TransportConfig {
            connection_id: connection_id.to_string(),
            ..Default::default()
        }
    }

    /// Creates a config that connects to an explicit endpoint URL.
    pub fn with_endpoint(url: &str) -> Self {
        TransportConfig {
            endpoint_override: Some(url.to_string()),
            ..Default::default()
        }
    }

    /// The endpoint address: the override if supplied, otherwise
    /// `{base_url}/api/chat/ws/{connection_id}`.
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint_override {
            Some(url) => url.clone(),
            None => format!(
                "{}/api/chat/ws/{}",
                self.base_url.trim_end_matches('/'),
                self.connection_id
            ),
        }
    }
}

/// Transport trait for the duplex channel.
///
/// Abstracts the underlying mechanism (WebSocket in production, a scripted
/// mock in tests). The interface is synchronous and poll-driven: `connect`
/// starts an attempt, and everything that happens to the channel afterwards
/// is observed through `poll`.
pub trait Transport: Send {
    /// Starts a connection attempt against `config.endpoint_url()`.
    ///
    /// Success of the attempt is reported asynchronously as
    /// [`TransportEvent::Opened`]; an immediate failure is returned here.
    fn connect(&mut self, config: &TransportConfig) -> TransportResult<()>;

    /// Closes the channel and discards its queued events.
    ///
    /// Safe to call even if not connected.
    fn disconnect(&mut self) -> TransportResult<()>;

    /// Returns true if the channel reports a ready-to-send status.
    fn is_open(&self) -> bool;

    /// Transmits one text frame.
    ///
    /// Returns an error if not connected or the write fails.
    fn send(&mut self, frame: &str) -> TransportResult<()>;

    /// Returns the next pending event, if any (non-blocking).
    fn poll(&mut self) -> Option<TransportEvent>;
}
