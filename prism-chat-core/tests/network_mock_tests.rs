//! Tests for network::mock

use prism_chat_core::network::*;

#[test]
fn test_mock_transport_connect_opens_channel() {
    let mut transport = MockTransport::new();
    assert!(!transport.is_open());

    transport
        .connect(&TransportConfig::for_connection("client_1"))
        .unwrap();
    assert!(transport.is_open());
    assert_eq!(transport.poll(), Some(TransportEvent::Opened));
    assert_eq!(transport.poll(), None);
}

#[test]
fn test_mock_transport_manual_open_queues_nothing() {
    let mut transport = MockTransport::with_manual_open();
    transport
        .connect(&TransportConfig::for_connection("client_1"))
        .unwrap();

    assert!(!transport.is_open());
    assert_eq!(transport.poll(), None);

    transport.open_channel();
    assert!(transport.is_open());
    assert_eq!(transport.poll(), Some(TransportEvent::Opened));
}

#[test]
fn test_mock_transport_frames_polled_in_order() {
    let mut transport = MockTransport::new();
    transport
        .connect(&TransportConfig::for_connection("client_1"))
        .unwrap();
    let _ = transport.poll(); // Opened

    transport.push_frame(r#"{"type":"error","message":"first"}"#);
    transport.push_frame(r#"{"type":"error","message":"second"}"#);

    assert_eq!(
        transport.poll(),
        Some(TransportEvent::Frame(
            r#"{"type":"error","message":"first"}"#.to_string()
        ))
    );
    assert_eq!(
        transport.poll(),
        Some(TransportEvent::Frame(
            r#"{"type":"error","message":"second"}"#.to_string()
        ))
    );
    assert_eq!(transport.poll(), None);
}

#[test]
fn test_mock_transport_send_tracks_frames() {
    let mut transport = MockTransport::new();
    transport
        .connect(&TransportConfig::for_connection("client_1"))
        .unwrap();

    transport.send(r#"{"type":"join_conversation"}"#).unwrap();

    assert_eq!(transport.sent_frames().len(), 1);
    assert_eq!(transport.sent_frames()[0], r#"{"type":"join_conversation"}"#);
}

#[test]
fn test_mock_transport_send_without_open_fails() {
    let mut transport = MockTransport::with_manual_open();
    let result = transport.send("{}");
    assert!(matches!(result, Err(NetworkError::NotConnected)));
    assert!(transport.sent_frames().is_empty());
}

#[test]
fn test_mock_transport_fail_next_connects() {
    let mut transport = MockTransport::new();
    transport.fail_next_connects(1);

    let config = TransportConfig::for_connection("client_1");
    let result = transport.connect(&config);
    assert!(matches!(result, Err(NetworkError::ConnectionFailed(_))));
    assert!(!transport.is_open());

    // Next attempt succeeds again
    transport.connect(&config).unwrap();
    assert!(transport.is_open());
    assert_eq!(transport.connect_attempts(), 2);
}

#[test]
fn test_mock_transport_disconnect_clears_queued_events() {
    let mut transport = MockTransport::new();
    transport
        .connect(&TransportConfig::for_connection("client_1"))
        .unwrap();
    transport.push_frame(r#"{"type":"error","message":"stale"}"#);

    transport.disconnect().unwrap();
    assert!(!transport.is_open());
    assert_eq!(transport.poll(), None);
}

#[test]
fn test_mock_transport_close_channel() {
    let mut transport = MockTransport::new();
    transport
        .connect(&TransportConfig::for_connection("client_1"))
        .unwrap();
    let _ = transport.poll(); // Opened

    transport.close_channel();
    assert!(!transport.is_open());
    assert_eq!(transport.poll(), Some(TransportEvent::Closed));
}

#[test]
fn test_mock_transport_records_last_config() {
    let mut transport = MockTransport::new();
    transport
        .connect(&TransportConfig::for_connection("client_7"))
        .unwrap();

    let config = transport.last_config().unwrap();
    assert_eq!(config.connection_id, "client_7");
    assert_eq!(
        config.endpoint_url(),
        "ws://localhost:8000/api/chat/ws/client_7"
    );
}

#[test]
fn test_mock_transport_clear_sent() {
    let mut transport = MockTransport::new();
    transport
        .connect(&TransportConfig::for_connection("client_1"))
        .unwrap();

    transport.send("{}").unwrap();
    assert_eq!(transport.sent_frames().len(), 1);

    transport.clear_sent();
    assert!(transport.sent_frames().is_empty());
}
