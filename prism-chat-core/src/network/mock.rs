// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mock Transport
//!
//! Scripted transport for deterministic tests: channel events are queued by
//! the test, transmitted frames are captured for inspection.

use std::collections::VecDeque;

use super::error::NetworkError;
use super::transport::{Transport, TransportConfig, TransportEvent, TransportResult};

/// In-memory transport with scripted events and captured sends.
#[derive(Default)]
pub struct MockTransport {
    open: bool,
    auto_open: bool,
    fail_connects: u32,
    connect_attempts: u32,
    events: VecDeque<TransportEvent>,
    sent: Vec<String>,
    last_config: Option<TransportConfig>,
}

impl MockTransport {
    /// Creates a mock whose `connect` immediately queues an `Opened` event.
    pub fn new() -> Self {
        MockTransport {
            auto_open: true,
            ..Default::default()
        }
    }

    /// Creates a mock whose channel only opens via [`MockTransport::open_channel`].
    pub fn with_manual_open() -> Self {
        MockTransport {
            auto_open: false,
            ..Default::default()
        }
    }

    /// Controls whether `connect` queues an `Opened` event on success.
    pub fn set_auto_open(&mut self, auto_open: bool) {
        self.auto_open = auto_open;
    }

    /// Makes the next `count` connect attempts fail immediately.
    pub fn fail_next_connects(&mut self, count: u32) {
        self.fail_connects = count;
    }

    /// Queues an arbitrary transport event.
    pub fn push_event(&mut self, event: TransportEvent) {
        self.events.push_back(event);
    }

    /// Queues one inbound text frame.
    pub fn push_frame(&mut self, raw: &str) {
        self.events.push_back(TransportEvent::Frame(raw.to_string()));
    }

    /// Marks the channel open and queues the `Opened` event.
    pub fn open_channel(&mut self) {
        self.open = true;
        self.events.push_back(TransportEvent::Opened);
    }

    /// Marks the channel closed and queues the `Closed` event.
    pub fn close_channel(&mut self) {
        self.open = false;
        self.events.push_back(TransportEvent::Closed);
    }

    /// Frames transmitted through this transport, in send order.
    pub fn sent_frames(&self) -> &[String] {
        &self.sent
    }

    /// Clears the captured sends.
    pub fn clear_sent(&mut self) {
        self.sent.clear();
    }

    /// Number of `connect` calls observed, including failed ones.
    pub fn connect_attempts(&self) -> u32 {
        self.connect_attempts
    }

    /// The config passed to the most recent `connect` call.
    pub fn last_config(&self) -> Option<&TransportConfig> {
        self.last_config.as_ref()
    }
}

impl Transport for MockTransport {
    fn connect(&mut self, config: &TransportConfig) -> TransportResult<()> {
        self.connect_attempts += 1;
        self.last_config = Some(config.clone());

        if self.fail_connects > 0 {
            self.fail_connects -= 1;
            return Err(NetworkError::ConnectionFailed(
                "simulated connect failure".into(),
            ));
        }

        if self.auto_open {
            self.open = true;
            self.events.push_back(TransportEvent::Opened);
        }
        Ok(())
    }

    fn disconnect(&mut self) -> TransportResult<()> {
        self.open = false;
        self.events.clear();
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn send(&mut self, frame: &str) -> TransportResult<()> {
        if !self.open {
            return Err(NetworkError::NotConnected);
        }
        self.sent.push(frame.to_string());
        Ok(())
    }

    fn poll(&mut self) -> Option<TransportEvent> {
        self.events.pop_front()
    }
}
