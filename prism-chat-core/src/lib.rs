// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Prism Chat Core Library
//!
//! Persistent, auto-reconnecting duplex client for the Prism Chat backend.
//! Two components carry the core:
//!
//! - **ConnectionManager**: owns one channel's lifecycle - connect, detect
//!   loss, reconnect with bounded linear backoff, send, disconnect.
//! - **MessageRouter**: classifies inbound frames by their `type`
//!   discriminant and dispatches each to exactly one handler.
//!
//! Role-specific clients (the operator console and the simulated end-user
//! client) override individual handlers without touching connection logic.
//! Rendering and notification side effects are supplied by the embedding
//! application as callbacks.

pub mod api;
pub mod network;
pub mod router;

pub use api::{
    ChatClient, ClientFactory, ClientSimulator, OperatorConsole, OperatorHandlers,
    SimulatorHandlers,
};
pub use network::{
    ChatMessage, ConnectionManager, ConnectionState, ConnectionStatus, InboundEvent,
    ManualScheduler, MockTransport, NetworkError, OutboundEvent, Scheduler, SystemScheduler,
    Transport, TransportConfig, TransportEvent, TransportResult,
};
#[cfg(any(feature = "network-native-tls", feature = "network-rustls"))]
pub use network::WebSocketTransport;
pub use router::{DefaultHandlers, EventHandlers, MessageRouter};
