//! Role Specializations
//!
//! The operator console and the simulated end-user client sit atop the same
//! connection/router pair, differing only in which handlers they override and
//! which outbound conveniences they expose. Rendering and notification side
//! effects stay outside the core: roles carry caller-supplied callback slots
//! and do nothing when a slot is empty.

use crate::network::event::{
    ActiveConversations, AdminResponse, ChatMessage, ConversationHistory, ConversationSummary,
    NewMessage, ServerError, TypingIndicator,
};
use crate::network::connection::ConnectionStatus;
use crate::network::scheduler::Scheduler;
use crate::network::transport::{Transport, TransportConfig};
use crate::router::EventHandlers;

use super::chat_client::ChatClient;

/// Connection identity of the operator console.
pub const OPERATOR_CONNECTION_ID: &str = "admin";

/// Display name used for operator replies when none is configured.
pub const DEFAULT_ADMIN_NAME: &str = "Administrador";

/// History page size requested when opening a conversation.
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

/// Handler overrides for the operator console.
///
/// Every slot is an externally supplied side effect; unset slots fall back to
/// the default (nothing).
#[derive(Default)]
pub struct OperatorHandlers {
    /// Notification side effect for incoming client messages (sound,
    /// desktop notification).
    pub notify: Option<Box<dyn FnMut(&NewMessage) + Send>>,
    /// Message display, for both client messages and operator replies.
    pub render: Option<Box<dyn FnMut(&ChatMessage) + Send>>,
    /// Typing state display.
    pub typing: Option<Box<dyn FnMut(&TypingIndicator) + Send>>,
    /// Conversation list display.
    pub conversations: Option<Box<dyn FnMut(&[ConversationSummary]) + Send>>,
    /// History display when a conversation is opened.
    pub history: Option<Box<dyn FnMut(&[ChatMessage]) + Send>>,
    /// Server error display.
    pub error_banner: Option<Box<dyn FnMut(&str) + Send>>,
}

impl EventHandlers for OperatorHandlers {
    fn on_new_message(&mut self, event: &NewMessage) {
        if let Some(notify) = self.notify.as_mut() {
            notify(event);
        }
        if let Some(render) = self.render.as_mut() {
            render(&event.message);
        }
    }

    fn on_admin_response(&mut self, event: &AdminResponse) {
        if let Some(render) = self.render.as_mut() {
            render(&event.message);
        }
    }

    fn on_typing_indicator(&mut self, event: &TypingIndicator) {
        if let Some(typing) = self.typing.as_mut() {
            typing(event);
        }
    }

    fn on_active_conversations(&mut self, event: &ActiveConversations) {
        if let Some(conversations) = self.conversations.as_mut() {
            conversations(&event.conversations);
        }
    }

    fn on_conversation_history(&mut self, event: &ConversationHistory) {
        if let Some(history) = self.history.as_mut() {
            history(&event.messages);
        }
    }

    fn on_server_error(&mut self, event: &ServerError) {
        if let Some(error_banner) = self.error_banner.as_mut() {
            error_banner(&event.message);
        }
    }
}

/// Handler overrides for the simulated end-user client.
#[derive(Default)]
pub struct SimulatorHandlers {
    /// Message display for broadcasts reaching this client.
    pub render: Option<Box<dyn FnMut(&ChatMessage) + Send>>,
    /// Typing state display.
    pub typing: Option<Box<dyn FnMut(&TypingIndicator) + Send>>,
    /// Server error display.
    pub error_banner: Option<Box<dyn FnMut(&str) + Send>>,
}

impl EventHandlers for SimulatorHandlers {
    fn on_new_message(&mut self, event: &NewMessage) {
        if let Some(render) = self.render.as_mut() {
            render(&event.message);
        }
    }

    fn on_admin_response(&mut self, event: &AdminResponse) {
        if let Some(render) = self.render.as_mut() {
            render(&event.message);
        }
    }

    fn on_typing_indicator(&mut self, event: &TypingIndicator) {
        if let Some(typing) = self.typing.as_mut() {
            typing(event);
        }
    }

    fn on_server_error(&mut self, event: &ServerError) {
        if let Some(error_banner) = self.error_banner.as_mut() {
            error_banner(&event.message);
        }
    }
}

/// Operator (admin) console client.
///
/// Connects as `"admin"`, tracks the conversation currently on screen, and
/// shapes operator replies. Opening a conversation requests its history and
/// joins its broadcast group.
pub struct OperatorConsole<T: Transport, S: Scheduler> {
    client: ChatClient<T, S, OperatorHandlers>,
    admin_name: String,
    current_conversation: Option<i64>,
}

impl<T: Transport, S: Scheduler> OperatorConsole<T, S> {
    /// Creates the console and immediately opens the channel.
    pub fn connect(
        transport: T,
        scheduler: S,
        config: TransportConfig,
        handlers: OperatorHandlers,
        admin_name: &str,
    ) -> Self {
        OperatorConsole {
            client: ChatClient::connect(transport, scheduler, config, handlers),
            admin_name: admin_name.to_string(),
            current_conversation: None,
        }
    }

    /// Switches to a conversation: fetches its history and joins it.
    pub fn open_conversation(&mut self, conversation_id: i64) -> bool {
        self.current_conversation = Some(conversation_id);
        let fetched = self
            .client
            .get_conversation_history(conversation_id, DEFAULT_HISTORY_LIMIT);
        let joined = self.client.join_conversation(conversation_id);
        fetched && joined
    }

    /// Sends a reply into the currently open conversation.
    ///
    /// Returns `false` when no conversation is open or the send is dropped.
    pub fn send_response(&mut self, message: &str) -> bool {
        let Some(conversation_id) = self.current_conversation else {
            return false;
        };
        self.client
            .send_admin_response(conversation_id, message, &self.admin_name)
    }

    /// Sends the operator's typing state for the open conversation.
    pub fn set_typing(&mut self, is_typing: bool) -> bool {
        let Some(conversation_id) = self.current_conversation else {
            return false;
        };
        self.client
            .send_typing_indicator(conversation_id, is_typing, &self.admin_name)
    }

    /// The conversation currently on screen, if any.
    pub fn current_conversation(&self) -> Option<i64> {
        self.current_conversation
    }

    /// Runs one event-loop tick.
    pub fn poll(&mut self) {
        self.client.poll();
    }

    /// Closes the channel; the connection is terminal afterwards.
    pub fn disconnect(&mut self) {
        self.client.disconnect();
    }

    /// Pure read of the connection state.
    pub fn status(&self) -> ConnectionStatus {
        self.client.status()
    }

    /// Returns a reference to the underlying client.
    pub fn client(&self) -> &ChatClient<T, S, OperatorHandlers> {
        &self.client
    }

    /// Returns a mutable reference to the underlying client.
    pub fn client_mut(&mut self) -> &mut ChatClient<T, S, OperatorHandlers> {
        &mut self.client
    }
}

/// Simulated end-user client.
///
/// Connects as `"client_{client_id}"` and shapes end-user messages.
pub struct ClientSimulator<T: Transport, S: Scheduler> {
    client: ChatClient<T, S, SimulatorHandlers>,
    client_id: i64,
    client_name: String,
}

impl<T: Transport, S: Scheduler> ClientSimulator<T, S> {
    /// Creates the simulator and immediately opens the channel.
    pub fn connect(
        transport: T,
        scheduler: S,
        config: TransportConfig,
        client_id: i64,
        client_name: &str,
        handlers: SimulatorHandlers,
    ) -> Self {
        ClientSimulator {
            client: ChatClient::connect(transport, scheduler, config, handlers),
            client_id,
            client_name: client_name.to_string(),
        }
    }

    /// Sends a message as this client.
    pub fn send_message(&mut self, message: &str) -> bool {
        self.client
            .send_client_message(self.client_id, &self.client_name, message)
    }

    /// Sends this client's typing state within a conversation.
    pub fn set_typing(&mut self, conversation_id: i64, is_typing: bool) -> bool {
        self.client
            .send_typing_indicator(conversation_id, is_typing, &self.client_name)
    }

    pub fn client_id(&self) -> i64 {
        self.client_id
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Runs one event-loop tick.
    pub fn poll(&mut self) {
        self.client.poll();
    }

    /// Closes the channel; the connection is terminal afterwards.
    pub fn disconnect(&mut self) {
        self.client.disconnect();
    }

    /// Pure read of the connection state.
    pub fn status(&self) -> ConnectionStatus {
        self.client.status()
    }

    /// Returns a reference to the underlying client.
    pub fn client(&self) -> &ChatClient<T, S, SimulatorHandlers> {
        &self.client
    }

    /// Returns a mutable reference to the underlying client.
    pub fn client_mut(&mut self) -> &mut ChatClient<T, S, SimulatorHandlers> {
        &mut self.client
    }
}
