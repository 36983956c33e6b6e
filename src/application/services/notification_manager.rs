//! Notice queue driven by the UI tick.

use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::notification::DEFAULT_NOTICE_DURATION;
use crate::domain::{Notification, NotificationLevel};

/// Queue of notices, shown one at a time.
#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    default_duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

impl NotificationManager {
    /// Creates an empty queue whose notices last `default_duration`.
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
        }
    }

    /// Queues a notice with the manager's duration.
    pub fn push(&mut self, notification: Notification) {
        self.queue
            .push_back(notification.with_duration(self.default_duration));
    }

    /// Queues an informational notice.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notification::new(NotificationLevel::Info, message));
    }

    /// Queues a warning notice.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(Notification::new(NotificationLevel::Warn, message));
    }

    /// Starts the front notice's clock and drops it once expired.
    pub fn tick(&mut self) {
        if let Some(front) = self.queue.front_mut() {
            front.mark_displayed();
            if front.is_expired() {
                self.queue.pop_front();
                if let Some(next) = self.queue.front_mut() {
                    next.mark_displayed();
                }
            }
        }
    }

    /// Drops every queued notice.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Notice currently on screen.
    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.queue.front()
    }

    /// Whether any notice is queued.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.queue.is_empty()
    }
}
