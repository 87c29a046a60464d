//! Handler Extension Point
//!
//! One overridable handler per inbound discriminant. The defaults do nothing;
//! role-specialized clients implement the trait and override the subset they
//! care about. The router performs its own trace logging before invoking a
//! handler, so overrides always run after the base behavior.

use crate::network::event::{
    ActiveConversations, AdminResponse, ConnectionEstablished, ConversationHistory, NewMessage,
    ServerError, TypingIndicator,
};

/// Per-discriminant handlers for inbound events.
///
/// Single-level behavioral specialization: exactly one override point per
/// discriminant, no hierarchy.
pub trait EventHandlers: Send {
    /// The backend's welcome frame after the channel opens.
    fn on_connection_established(&mut self, _event: &ConnectionEstablished) {}

    /// A client message broadcast to every connection.
    fn on_new_message(&mut self, _event: &NewMessage) {}

    /// An operator reply broadcast into a conversation.
    fn on_admin_response(&mut self, _event: &AdminResponse) {}

    /// Another participant's typing state changed.
    fn on_typing_indicator(&mut self, _event: &TypingIndicator) {}

    /// Snapshot of conversations currently in progress.
    fn on_active_conversations(&mut self, _event: &ActiveConversations) {}

    /// Reply to a history request.
    fn on_conversation_history(&mut self, _event: &ConversationHistory) {}

    /// Server-side failure report.
    fn on_server_error(&mut self, _event: &ServerError) {}
}

/// All-defaults handler set.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHandlers;

impl EventHandlers for DefaultHandlers {}
