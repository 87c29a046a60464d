//! Message Router
//!
//! Decodes each inbound frame and dispatches it to exactly one handler based
//! on the `type` discriminant, with safe fallback for unrecognized types.

mod handlers;

pub use handlers::{DefaultHandlers, EventHandlers};

use tracing::{debug, warn};

use crate::network::event::InboundEvent;

type Observer = Box<dyn FnMut(&InboundEvent) + Send>;

/// Routes decoded inbound events to a handler set.
///
/// Decode failures drop the frame with a local diagnostic; they never reach
/// the handlers or affect connection state. After the per-type dispatch, an
/// optional type-agnostic observer is invoked once with the decoded event.
pub struct MessageRouter<H: EventHandlers> {
    handlers: H,
    observer: Option<Observer>,
}

impl<H: EventHandlers> MessageRouter<H> {
    /// Creates a router around the given handler set.
    pub fn new(handlers: H) -> Self {
        MessageRouter {
            handlers,
            observer: None,
        }
    }

    /// Registers the generic observer, invoked after every dispatch
    /// regardless of discriminant.
    pub fn set_observer(&mut self, observer: impl FnMut(&InboundEvent) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Returns a reference to the handler set.
    pub fn handlers(&self) -> &H {
        &self.handlers
    }

    /// Returns a mutable reference to the handler set.
    pub fn handlers_mut(&mut self) -> &mut H {
        &mut self.handlers
    }

    /// Parses one raw frame and dispatches it.
    pub fn route_frame(&mut self, raw: &str) {
        match serde_json::from_str::<InboundEvent>(raw) {
            Ok(event) => self.dispatch(event),
            Err(e) => debug!(error = %e, "dropping frame that failed to decode"),
        }
    }

    /// Dispatches one decoded event to exactly one handler.
    pub fn dispatch(&mut self, event: InboundEvent) {
        match &event {
            InboundEvent::ConnectionEstablished(ev) => {
                debug!(message = %ev.message, "connection established");
                self.handlers.on_connection_established(ev);
            }
            InboundEvent::NewMessage(ev) => {
                debug!(client_id = ev.client_id, "new client message");
                self.handlers.on_new_message(ev);
            }
            InboundEvent::AdminResponse(ev) => {
                debug!(conversation_id = ?ev.conversation_id, "admin response");
                self.handlers.on_admin_response(ev);
            }
            InboundEvent::TypingIndicator(ev) => {
                debug!(
                    conversation_id = ev.conversation_id,
                    is_typing = ev.is_typing,
                    "typing indicator"
                );
                self.handlers.on_typing_indicator(ev);
            }
            InboundEvent::ActiveConversations(ev) => {
                debug!(count = ev.conversations.len(), "active conversations");
                self.handlers.on_active_conversations(ev);
            }
            InboundEvent::ConversationHistory(ev) => {
                debug!(count = ev.messages.len(), "conversation history");
                self.handlers.on_conversation_history(ev);
            }
            InboundEvent::Error(ev) => {
                warn!(message = %ev.message, "server error");
                self.handlers.on_server_error(ev);
            }
            InboundEvent::Unknown => {
                // Not an error: newer backends may emit kinds we do not know.
                warn!("ignoring message with unrecognized type");
            }
        }

        if let Some(observer) = self.observer.as_mut() {
            observer(&event);
        }
    }
}
