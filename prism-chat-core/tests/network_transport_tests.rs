//! Tests for network::transport

use prism_chat_core::network::*;

#[test]
fn test_transport_config_defaults() {
    let config = TransportConfig::default();

    assert!(config.connection_id.is_empty());
    assert_eq!(config.base_url, "ws://localhost:8000");
    assert_eq!(config.endpoint_override, None);
    assert_eq!(config.connect_timeout_ms, 10_000);
    assert_eq!(config.io_timeout_ms, 30_000);
    assert_eq!(config.max_reconnect_attempts, 5);
    assert_eq!(config.reconnect_base_delay_ms, 1_000);
}

#[test]
fn test_endpoint_derivation_from_connection_id() {
    let config = TransportConfig::for_connection("admin");
    assert_eq!(config.endpoint_url(), "ws://localhost:8000/api/chat/ws/admin");

    let config = TransportConfig::for_connection("client_7");
    assert_eq!(
        config.endpoint_url(),
        "ws://localhost:8000/api/chat/ws/client_7"
    );
}

#[test]
fn test_endpoint_derivation_trims_trailing_slash() {
    let config = TransportConfig {
        base_url: "wss://chat.example.com/".into(),
        connection_id: "admin".into(),
        ..Default::default()
    };
    assert_eq!(
        config.endpoint_url(),
        "wss://chat.example.com/api/chat/ws/admin"
    );
}

#[test]
fn test_endpoint_override_wins() {
    let mut config = TransportConfig::with_endpoint("wss://chat.example.com/socket");
    config.connection_id = "admin".into();
    assert_eq!(config.endpoint_url(), "wss://chat.example.com/socket");
}

#[test]
fn test_connection_state_terminal() {
    assert!(ConnectionState::Closed.is_terminal());
    assert!(!ConnectionState::Disconnected.is_terminal());
    assert!(!ConnectionState::Connecting.is_terminal());
    assert!(!ConnectionState::Connected.is_terminal());
    assert!(!ConnectionState::Reconnecting { attempt: 3 }.is_terminal());
}
