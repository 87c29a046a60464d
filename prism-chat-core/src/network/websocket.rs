// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! WebSocket Transport
//!
//! Real transport implementation using tungstenite. Frames are JSON text,
//! one object per frame; binary frames are accepted as UTF-8 JSON for
//! backends that send them. Supports both native-tls and rustls backends.

use std::collections::VecDeque;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

#[cfg(all(feature = "network-native-tls", not(feature = "network-rustls")))]
use native_tls::TlsConnector;

#[cfg(feature = "network-rustls")]
use rustls::pki_types::ServerName;
#[cfg(feature = "network-rustls")]
use std::sync::Arc;

use tungstenite::client::IntoClientRequest;
use tungstenite::stream::MaybeTlsStream;
use tungstenite::{Message, WebSocket};

use super::error::NetworkError;
use super::transport::{Transport, TransportConfig, TransportEvent, TransportResult};

/// WebSocket transport for the chat backend.
///
/// Supports both ws:// (plaintext) and wss:// (TLS) endpoints.
///
/// # Example
///
/// ```ignore
/// use prism_chat_core::network::{Transport, TransportConfig, WebSocketTransport};
///
/// let mut transport = WebSocketTransport::new();
/// let config = TransportConfig::for_connection("admin");
/// transport.connect(&config)?;
/// ```
pub struct WebSocketTransport {
    socket: Option<WebSocket<MaybeTlsStream<TcpStream>>>,
    pending: VecDeque<TransportEvent>,
    open: bool,
}

impl WebSocketTransport {
    /// Creates a new WebSocket transport.
    pub fn new() -> Self {
        WebSocketTransport {
            socket: None,
            pending: VecDeque::new(),
            open: false,
        }
    }

    /// Parses a WebSocket URL into host, port, and TLS flag.
    fn parse_url(url: &str) -> Result<(String, u16, bool), NetworkError> {
        let is_tls = url.starts_with("wss://");
        let url_without_scheme = url
            .strip_prefix("wss://")
            .or_else(|| url.strip_prefix("ws://"))
            .ok_or_else(|| {
                NetworkError::ConnectionFailed(
                    "Invalid URL scheme (expected ws:// or wss://)".into(),
                )
            })?;

        // Split host:port/path
        let host_port = url_without_scheme
            .split('/')
            .next()
            .unwrap_or(url_without_scheme);

        let (host, port) = if let Some(colon_pos) = host_port.rfind(':') {
            let host = &host_port[..colon_pos];
            let port_str = &host_port[colon_pos + 1..];
            let port: u16 = port_str.parse().map_err(|_| {
                NetworkError::ConnectionFailed(format!("Invalid port: {}", port_str))
            })?;
            (host.to_string(), port)
        } else {
            let default_port = if is_tls { 443 } else { 80 };
            (host_port.to_string(), default_port)
        };

        Ok((host, port, is_tls))
    }

    /// Create a TLS stream using native-tls
    #[cfg(all(feature = "network-native-tls", not(feature = "network-rustls")))]
    fn create_tls_stream(
        host: &str,
        tcp_stream: TcpStream,
    ) -> Result<MaybeTlsStream<TcpStream>, NetworkError> {
        let connector = TlsConnector::new()
            .map_err(|e| NetworkError::ConnectionFailed(format!("TLS error: {}", e)))?;
        let tls_stream = connector
            .connect(host, tcp_stream)
            .map_err(|e| NetworkError::ConnectionFailed(format!("TLS handshake failed: {}", e)))?;
        Ok(MaybeTlsStream::NativeTls(tls_stream))
    }

    /// Create a TLS stream using rustls
    #[cfg(feature = "network-rustls")]
    fn create_tls_stream(
        host: &str,
        tcp_stream: TcpStream,
    ) -> Result<MaybeTlsStream<TcpStream>, NetworkError> {
        let mut root_store = rustls::RootCertStore::empty();
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        let config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let server_name: ServerName<'_> = host.try_into().map_err(|_| {
            NetworkError::ConnectionFailed(format!("Invalid server name: {}", host))
        })?;

        let tls_conn = rustls::ClientConnection::new(Arc::new(config), server_name.to_owned())
            .map_err(|e| NetworkError::ConnectionFailed(format!("TLS setup failed: {}", e)))?;

        let tls_stream = rustls::StreamOwned::new(tls_conn, tcp_stream);
        Ok(MaybeTlsStream::Rustls(tls_stream))
    }

    /// Drops the socket and reports the channel as closed.
    fn channel_closed(&mut self) -> Option<TransportEvent> {
        self.open = false;
        self.socket = None;
        Some(TransportEvent::Closed)
    }
}

impl Default for WebSocketTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for WebSocketTransport {
    fn connect(&mut self, config: &TransportConfig) -> TransportResult<()> {
        let url = config.endpoint_url();
        let (host, port, is_tls) = Self::parse_url(&url)?;
        let addr = format!("{}:{}", host, port);

        let sock_addr = addr
            .to_socket_addrs()
            .map_err(|e| NetworkError::ConnectionFailed(e.to_string()))?
            .next()
            .ok_or_else(|| {
                NetworkError::ConnectionFailed(format!("could not resolve {}", addr))
            })?;

        let tcp_stream = TcpStream::connect_timeout(
            &sock_addr,
            Duration::from_millis(config.connect_timeout_ms),
        )
        .map_err(|e| NetworkError::ConnectionFailed(e.to_string()))?;

        tcp_stream
            .set_read_timeout(Some(Duration::from_millis(config.io_timeout_ms)))
            .map_err(|e| NetworkError::ConnectionFailed(e.to_string()))?;
        tcp_stream
            .set_write_timeout(Some(Duration::from_millis(config.io_timeout_ms)))
            .map_err(|e| NetworkError::ConnectionFailed(e.to_string()))?;

        // Wrap in TLS if needed
        let stream: MaybeTlsStream<TcpStream> = if is_tls {
            Self::create_tls_stream(&host, tcp_stream)?
        } else {
            MaybeTlsStream::Plain(tcp_stream)
        };

        // WebSocket handshake - use IntoClientRequest for proper HTTP/1.1 request
        let request = url.as_str().into_client_request().map_err(|e| {
            NetworkError::ConnectionFailed(format!("Invalid WebSocket request: {}", e))
        })?;

        let (socket, _response) = tungstenite::client(request, stream).map_err(|e| {
            NetworkError::ConnectionFailed(format!("WebSocket handshake failed: {}", e))
        })?;

        self.socket = Some(socket);
        self.open = true;
        // Open completion flows through the event path like every other
        // lifecycle transition.
        self.pending.push_back(TransportEvent::Opened);

        Ok(())
    }

    fn disconnect(&mut self) -> TransportResult<()> {
        if let Some(mut socket) = self.socket.take() {
            let _ = socket.close(None); // Ignore errors on close
        }
        self.open = false;
        self.pending.clear();
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open && self.socket.is_some()
    }

    fn send(&mut self, frame: &str) -> TransportResult<()> {
        let socket = self.socket.as_mut().ok_or(NetworkError::NotConnected)?;

        socket
            .send(Message::Text(frame.to_string()))
            .map_err(|e| {
                if matches!(
                    e,
                    tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed
                ) {
                    self.open = false;
                    NetworkError::ConnectionClosed
                } else {
                    NetworkError::SendFailed(e.to_string())
                }
            })?;

        // Flush to ensure the frame is on the wire
        socket
            .flush()
            .map_err(|e| NetworkError::SendFailed(format!("Flush failed: {}", e)))?;

        Ok(())
    }

    fn poll(&mut self) -> Option<TransportEvent> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }

        let socket = self.socket.as_mut()?;
        match socket.read() {
            Ok(Message::Text(text)) => Some(TransportEvent::Frame(text)),
            Ok(Message::Binary(data)) => match String::from_utf8(data) {
                Ok(text) => Some(TransportEvent::Frame(text)),
                Err(_) => Some(TransportEvent::Failed("non-UTF-8 binary frame".into())),
            },
            Ok(Message::Ping(payload)) => {
                // Respond to ping with pong
                let _ = socket.send(Message::Pong(payload));
                None
            }
            Ok(Message::Pong(_)) | Ok(Message::Frame(_)) => None,
            Ok(Message::Close(_)) => self.channel_closed(),
            Err(tungstenite::Error::Io(ref e))
                if e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::TimedOut =>
            {
                // No message available (timeout)
                None
            }
            Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => {
                self.channel_closed()
            }
            Err(e) => Some(TransportEvent::Failed(e.to_string())),
        }
    }
}
