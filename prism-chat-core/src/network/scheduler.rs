//! Reconnect Scheduling
//!
//! Injectable timer abstraction so the reconnect algorithm can be driven
//! deterministically in tests, without real wall-clock waits. The connection
//! manager keeps at most one pending reconnect, so the scheduler holds a
//! single slot: arming it replaces any pending timer.

use std::time::{Duration, Instant};

/// Single-slot delay timer.
pub trait Scheduler: Send {
    /// Arms the timer to fire after `delay`, replacing any pending timer.
    fn schedule(&mut self, delay: Duration);

    /// Cancels any pending timer.
    fn cancel(&mut self);

    /// Returns true if a timer is armed and has not fired yet.
    fn is_pending(&self) -> bool;

    /// Returns true exactly once when the armed timer has elapsed.
    fn fire_if_due(&mut self) -> bool;
}

/// Wall-clock scheduler for production polling loops.
#[derive(Debug, Default)]
pub struct SystemScheduler {
    deadline: Option<Instant>,
}

impl SystemScheduler {
    pub fn new() -> Self {
        SystemScheduler { deadline: None }
    }
}

impl Scheduler for SystemScheduler {
    fn schedule(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    fn fire_if_due(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Virtual-clock scheduler for deterministic tests.
///
/// Time only moves when [`ManualScheduler::advance`] is called, and the last
/// requested delay is recorded so tests can assert the backoff schedule.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    deadline: Option<Duration>,
    last_delay: Option<Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        ManualScheduler::default()
    }

    /// Moves the virtual clock forward.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// The delay passed to the most recent `schedule` call.
    pub fn last_scheduled_delay(&self) -> Option<Duration> {
        self.last_delay
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) {
        self.deadline = Some(self.now + delay);
        self.last_delay = Some(delay);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    fn fire_if_due(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if self.now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
