// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wire Event Types
//!
//! Typed JSON events exchanged with the chat backend. Every frame is one JSON
//! object carrying a `type` string discriminant; outbound events additionally
//! carry an ISO-8601 `timestamp` stamped at construction.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Events sent to the backend.
///
/// Immutable once constructed; ownership transfers to the transport on send.
/// Use the constructors below rather than building variants directly so the
/// timestamp is stamped consistently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundEvent {
    /// A message typed by a simulated end-user client.
    NewClientMessage {
        client_id: i64,
        client_name: String,
        message: String,
        timestamp: String,
    },
    /// An operator reply into a specific conversation.
    AdminResponse {
        conversation_id: i64,
        message: String,
        admin_name: String,
        timestamp: String,
    },
    /// Subscribes this connection to a conversation's broadcasts.
    JoinConversation {
        conversation_id: i64,
        timestamp: String,
    },
    /// Typing state for the named sender within a conversation.
    TypingIndicator {
        conversation_id: i64,
        is_typing: bool,
        sender_name: String,
        timestamp: String,
    },
    /// Requests the most recent messages of a conversation.
    GetConversationHistory {
        conversation_id: i64,
        limit: u32,
        timestamp: String,
    },
}

impl OutboundEvent {
    pub fn new_client_message(
        client_id: i64,
        client_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        OutboundEvent::NewClientMessage {
            client_id,
            client_name: client_name.into(),
            message: message.into(),
            timestamp: now_timestamp(),
        }
    }

    pub fn admin_response(
        conversation_id: i64,
        message: impl Into<String>,
        admin_name: impl Into<String>,
    ) -> Self {
        OutboundEvent::AdminResponse {
            conversation_id,
            message: message.into(),
            admin_name: admin_name.into(),
            timestamp: now_timestamp(),
        }
    }

    pub fn join_conversation(conversation_id: i64) -> Self {
        OutboundEvent::JoinConversation {
            conversation_id,
            timestamp: now_timestamp(),
        }
    }

    pub fn typing_indicator(
        conversation_id: i64,
        is_typing: bool,
        sender_name: impl Into<String>,
    ) -> Self {
        OutboundEvent::TypingIndicator {
            conversation_id,
            is_typing,
            sender_name: sender_name.into(),
            timestamp: now_timestamp(),
        }
    }

    pub fn get_conversation_history(conversation_id: i64, limit: u32) -> Self {
        OutboundEvent::GetConversationHistory {
            conversation_id,
            limit,
            timestamp: now_timestamp(),
        }
    }
}

/// Events received from the backend.
///
/// Parsed once per frame; ownership is local to the dispatch call. Unknown
/// discriminants decode to [`InboundEvent::Unknown`] so new backend message
/// kinds never break older clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundEvent {
    ConnectionEstablished(ConnectionEstablished),
    NewMessage(NewMessage),
    AdminResponse(AdminResponse),
    TypingIndicator(TypingIndicator),
    ActiveConversations(ActiveConversations),
    ConversationHistory(ConversationHistory),
    Error(ServerError),
    #[serde(other)]
    Unknown,
}

/// Welcome frame sent by the backend right after the channel opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionEstablished {
    #[serde(default)]
    pub connection_id: Option<String>,
    pub message: String,
}

/// A client message broadcast to every connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    #[serde(default)]
    pub conversation_id: Option<i64>,
    pub client_id: i64,
    pub client_name: String,
    pub message: ChatMessage,
}

/// An operator reply broadcast into a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminResponse {
    #[serde(default)]
    pub conversation_id: Option<i64>,
    pub message: ChatMessage,
}

/// Typing state of another participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingIndicator {
    pub conversation_id: i64,
    pub is_typing: bool,
    pub sender: String,
}

/// Snapshot of the conversations currently in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveConversations {
    #[serde(default)]
    pub conversations: Vec<ConversationSummary>,
}

/// Reply to a history request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationHistory {
    #[serde(default)]
    pub conversation_id: Option<i64>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Server-side failure report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerError {
    pub message: String,
}

/// A single stored message, as broadcast and as returned in history replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub id: Option<i64>,
    pub content: String,
    pub sender: String,
    pub timestamp: String,
    pub message_type: SenderKind,
    /// Set on the system message that hands a conversation to a human.
    #[serde(default)]
    pub is_derivation: bool,
}

/// Who authored a message. Wire values follow the backend's storage enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SenderKind {
    #[serde(rename = "cliente")]
    Client,
    #[serde(rename = "ia")]
    Ai,
    #[serde(rename = "humano")]
    Human,
    #[serde(rename = "sistema")]
    System,
}

/// One entry of an `active_conversations` snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub conversation_id: i64,
    pub client_id: i64,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub status: Option<ConversationStatus>,
    #[serde(default)]
    pub last_message: Option<String>,
}

/// Conversation lifecycle state. Wire values follow the backend's storage enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationStatus {
    #[serde(rename = "ia_respondiendo")]
    AiResponding,
    #[serde(rename = "esperando_humano")]
    AwaitingHuman,
    #[serde(rename = "finalizada")]
    Finished,
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
