//! Tests for api::ChatClient

use std::sync::{Arc, Mutex};

use prism_chat_core::api::ChatClient;
use prism_chat_core::network::*;
use prism_chat_core::router::{DefaultHandlers, EventHandlers};
use serde_json::Value;

#[derive(Default)]
struct CountingHandlers {
    new_messages: u32,
    errors: u32,
}

impl EventHandlers for CountingHandlers {
    fn on_new_message(&mut self, _event: &NewMessage) {
        self.new_messages += 1;
    }

    fn on_server_error(&mut self, _event: &ServerError) {
        self.errors += 1;
    }
}

fn client() -> ChatClient<MockTransport, ManualScheduler, DefaultHandlers> {
    ChatClient::connect(
        MockTransport::new(),
        ManualScheduler::new(),
        TransportConfig::for_connection("client_7"),
        DefaultHandlers,
    )
}

fn connected_client() -> ChatClient<MockTransport, ManualScheduler, DefaultHandlers> {
    let mut client = client();
    client.poll();
    assert!(client.is_connected());
    client
}

fn sent_json(client: &ChatClient<MockTransport, ManualScheduler, DefaultHandlers>) -> Vec<Value> {
    client
        .connection()
        .transport()
        .sent_frames()
        .iter()
        .map(|frame| serde_json::from_str(frame).unwrap())
        .collect()
}

#[test]
fn test_client_auto_connects_on_construction() {
    let client = client();
    assert_eq!(client.connection().transport().connect_attempts(), 1);
    assert_eq!(client.state(), ConnectionState::Connecting);
}

#[test]
fn test_client_derives_endpoint_from_connection_id() {
    let client = client();
    let config = client.connection().transport().last_config().unwrap();
    assert_eq!(
        config.endpoint_url(),
        "ws://localhost:8000/api/chat/ws/client_7"
    );
}

#[test]
fn test_client_honors_endpoint_override() {
    let client = ChatClient::connect(
        MockTransport::new(),
        ManualScheduler::new(),
        TransportConfig::with_endpoint("wss://chat.example.com/socket"),
        DefaultHandlers,
    );
    let config = client.connection().transport().last_config().unwrap();
    assert_eq!(config.endpoint_url(), "wss://chat.example.com/socket");
}

#[test]
fn test_send_before_connected_drops_event() {
    let mut client = client(); // open event not processed yet
    assert!(!client.send_client_message(7, "Carlos", "hola"));
    assert!(client.connection().transport().sent_frames().is_empty());
}

#[test]
fn test_send_transmits_serialized_event() {
    let mut client = connected_client();
    let event = OutboundEvent::admin_response(3, "Claro", "Administrador");

    assert!(client.send(&event));

    let frames = client.connection().transport().sent_frames();
    assert_eq!(frames.len(), 1);
    let sent: Value = serde_json::from_str(&frames[0]).unwrap();
    assert_eq!(sent, serde_json::to_value(&event).unwrap());
}

#[test]
fn test_convenience_senders_shape_the_wire() {
    let mut client = connected_client();

    assert!(client.send_client_message(7, "Carlos", "hola"));
    assert!(client.join_conversation(3));
    assert!(client.send_typing_indicator(3, true, "Carlos"));
    assert!(client.get_conversation_history(3, 50));

    let sent = sent_json(&client);
    assert_eq!(sent.len(), 4);
    assert_eq!(sent[0]["type"], "new_client_message");
    assert_eq!(sent[0]["client_id"], 7);
    assert_eq!(sent[1]["type"], "join_conversation");
    assert_eq!(sent[1]["conversation_id"], 3);
    assert_eq!(sent[2]["type"], "typing_indicator");
    assert_eq!(sent[2]["is_typing"], true);
    assert_eq!(sent[3]["type"], "get_conversation_history");
    assert_eq!(sent[3]["limit"], 50);
}

#[test]
fn test_poll_routes_frames_to_handlers() {
    let mut client = ChatClient::connect(
        MockTransport::new(),
        ManualScheduler::new(),
        TransportConfig::for_connection("admin"),
        CountingHandlers::default(),
    );
    client.poll();

    client.connection_mut().transport_mut().push_frame(
        r#"{"type":"new_message","client_id":7,"client_name":"Carlos","message":{"content":"Hola","sender":"Carlos","timestamp":"2026-08-06T10:00:01.000Z","message_type":"cliente"}}"#,
    );
    client
        .connection_mut()
        .transport_mut()
        .push_frame(r#"{"type":"error","message":"boom"}"#);
    client.poll();

    assert_eq!(client.handlers().new_messages, 1);
    assert_eq!(client.handlers().errors, 1);
}

#[test]
fn test_lifecycle_callbacks_fire_through_client() {
    let log = Arc::new(Mutex::new(Vec::<&'static str>::new()));

    let mut client = client();
    let sink = Arc::clone(&log);
    client.set_on_connect(move || sink.lock().unwrap().push("connect"));
    let sink = Arc::clone(&log);
    client.set_on_disconnect(move || sink.lock().unwrap().push("disconnect"));

    client.poll(); // processes the open event
    client.connection_mut().transport_mut().close_channel();
    client.poll();

    assert_eq!(log.lock().unwrap().as_slice(), ["connect", "disconnect"]);
}

#[test]
fn test_observer_receives_decoded_events() {
    let observed = Arc::new(Mutex::new(0u32));

    let mut client = connected_client();
    let counter = Arc::clone(&observed);
    client.set_observer(move |_| *counter.lock().unwrap() += 1);

    client
        .connection_mut()
        .transport_mut()
        .push_frame(r#"{"type":"error","message":"boom"}"#);
    client.poll();

    assert_eq!(*observed.lock().unwrap(), 1);
}

#[test]
fn test_disconnect_is_terminal_at_client_level() {
    let mut client = connected_client();
    client.disconnect();

    assert_eq!(client.state(), ConnectionState::Closed);
    assert!(!client.status().is_connected);
    assert!(!client.send_client_message(7, "Carlos", "hola"));
}

#[test]
fn test_status_exposes_connection_identity() {
    let client = connected_client();
    let status = client.status();
    assert!(status.is_connected);
    assert_eq!(status.connection_id, "client_7");
    assert_eq!(status.reconnect_attempts, 0);
}
