use std::time::{Duration, Instant};

/// Default on-screen lifetime of a notice.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Informational.
    Info,
    /// Something went wrong but the app keeps going.
    Warn,
}

/// Transient message shown over the current screen.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Text shown to the user.
    pub message: String,
    /// First time the notice was drawn.
    pub displayed_at: Option<Instant>,
    /// How long the notice stays after its first draw.
    pub duration: Duration,
}

impl Notification {
    /// Creates a notice with the default duration.
    #[must_use]
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            displayed_at: None,
            duration: DEFAULT_NOTICE_DURATION,
        }
    }

    /// Creates an informational notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    /// Creates a warning notice.
    #[must_use]
    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warn, message)
    }

    /// Overrides the on-screen duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Expiry counts from the first draw, not from creation.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.displayed_at
            .is_some_and(|start| start.elapsed() > self.duration)
    }

    /// Starts the expiry clock on the first call.
    pub fn mark_displayed(&mut self) {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(Instant::now());
        }
    }
}
