// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network Error Types

use thiserror::Error;

/// Errors produced by the transport layer.
///
/// Nothing in the connection core propagates these to callers of the polling
/// path; they terminate in a state transition, a dropped frame, or a boolean
/// return. Transports surface them from `connect`/`disconnect`/`send`.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Could not establish the channel.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Operation requires an open channel.
    #[error("not connected")]
    NotConnected,

    /// The channel was closed by the peer.
    #[error("connection closed")]
    ConnectionClosed,

    /// The channel is open but the frame could not be transmitted.
    #[error("send failed: {0}")]
    SendFailed(String),

    /// A frame that cannot be represented on the wire.
    #[error("invalid frame: {0}")]
    InvalidFrame(String),
}
