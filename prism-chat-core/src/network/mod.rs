//! Network + Transport Layer
//!
//! Provides the channel abstraction and connection lifecycle engine for the
//! chat backend.
//!
//! # Architecture
//!
//! The network layer consists of:
//! - **Transport trait**: platform-agnostic interface for the duplex channel
//! - **Event types**: typed JSON wire protocol
//! - **Scheduler**: injectable reconnect timer
//! - **Connection manager**: loss detection and bounded linear-backoff
//!   reconnection
//!
//! # Example
//!
//! ```ignore
//! use prism_chat_core::network::{ConnectionManager, SystemScheduler, TransportConfig, WebSocketTransport};
//!
//! let config = TransportConfig::for_connection("client_7");
//! let mut conn = ConnectionManager::new(WebSocketTransport::new(), SystemScheduler::new(), config);
//! conn.connect();
//! for frame in conn.poll() {
//!     // route the frame
//! }
//! ```

pub mod connection;
pub mod error;
pub mod event;
pub mod mock;
pub mod scheduler;
pub mod transport;

#[cfg(any(feature = "network-native-tls", feature = "network-rustls"))]
pub mod websocket;

// Error types
pub use error::NetworkError;

// Wire event types
pub use event::{
    ActiveConversations, AdminResponse, ChatMessage, ConnectionEstablished, ConversationHistory,
    ConversationStatus, ConversationSummary, InboundEvent, NewMessage, OutboundEvent, SenderKind,
    ServerError, TypingIndicator,
};

// Transport abstraction
pub use transport::{ConnectionState, Transport, TransportConfig, TransportEvent, TransportResult};

// Reconnect scheduling
pub use scheduler::{ManualScheduler, Scheduler, SystemScheduler};

// Mock transport for testing
pub use mock::MockTransport;

// WebSocket transport for production
#[cfg(any(feature = "network-native-tls", feature = "network-rustls"))]
pub use websocket::WebSocketTransport;

// Connection management
pub use connection::{ConnectionManager, ConnectionStatus};
