//! Splash-to-list startup sequence.

use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, Sleep, sleep};
use tracing::{debug, info};

use crate::domain::ports::PreferencesPort;

/// How long the splash stays up when the host has no native splash.
pub const SPLASH_DELAY: Duration = Duration::from_millis(2000);

/// Phase of the startup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupPhase {
    /// The splash is up.
    Splashing,
    /// The list may be shown.
    Ready,
}

/// What the host must apply before drawing the list for the first time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupOutcome {
    /// Stored dark mode flag, read at the transition.
    pub dark_mode: bool,
}

/// Drives the `Splashing -> Ready` transition.
///
/// When the host draws its own splash the transition is immediate. Otherwise
/// a timer holds the splash for [`SPLASH_DELAY`]. The timer is owned by the
/// sequencer, so cancelling or dropping the sequencer disarms it.
pub struct StartupSequencer {
    preferences: Arc<dyn PreferencesPort>,
    native_splash: bool,
    delay: Duration,
    phase: StartupPhase,
    timer: Option<Pin<Box<Sleep>>>,
}

impl StartupSequencer {
    /// Creates a sequencer in the splash phase with the default delay.
    #[must_use]
    pub fn new(preferences: Arc<dyn PreferencesPort>, native_splash: bool) -> Self {
        Self {
            preferences,
            native_splash,
            delay: SPLASH_DELAY,
            phase: StartupPhase::Splashing,
            timer: None,
        }
    }

    /// Overrides the splash delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> StartupPhase {
        self.phase
    }

    /// Whether the splash timer is running.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Enters the splash phase.
    ///
    /// Returns the outcome right away when the host has a native splash;
    /// otherwise arms the timer and returns `None`.
    pub fn begin(&mut self) -> Option<StartupOutcome> {
        if self.phase == StartupPhase::Ready {
            return None;
        }

        if self.native_splash {
            debug!("Native splash available, skipping delay");
            return Some(self.transition());
        }

        debug!(delay_ms = self.delay.as_millis(), "Holding splash screen");
        self.timer = Some(Box::pin(sleep(self.delay)));
        None
    }

    /// Waits for the splash timer and transitions to ready.
    ///
    /// Never resolves while no timer is armed, so it can sit in a
    /// `select!` for the whole lifetime of the app.
    pub async fn wait_ready(&mut self) -> StartupOutcome {
        match self.timer.as_mut() {
            Some(timer) => timer.as_mut().await,
            None => std::future::pending().await,
        }
        self.timer = None;
        self.transition()
    }

    /// Disarms the splash timer without transitioning.
    pub fn cancel(&mut self) {
        if self.timer.take().is_some() {
            debug!("Splash timer cancelled");
        }
    }

    /// Deadline of the armed timer.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.as_ref().map(|timer| timer.deadline())
    }

    fn transition(&mut self) -> StartupOutcome {
        self.phase = StartupPhase::Ready;
        let outcome = StartupOutcome {
            dark_mode: self.preferences.is_dark_mode(),
        };
        info!(dark_mode = outcome.dark_mode, "Startup complete");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockPreferences;
    use crate::domain::settings::AppSettings;

    fn preferences(dark_mode: bool) -> Arc<dyn PreferencesPort> {
        Arc::new(MockPreferences::with_settings(AppSettings {
            dark_mode,
            ..AppSettings::default()
        }))
    }

    #[tokio::test(start_paused = true)]
    async fn test_native_splash_is_immediate() {
        let mut sequencer = StartupSequencer::new(preferences(true), true);
        let started = Instant::now();

        let outcome = sequencer.begin();

        assert_eq!(outcome, Some(StartupOutcome { dark_mode: true }));
        assert_eq!(sequencer.phase(), StartupPhase::Ready);
        assert!(!sequencer.is_armed());
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_without_native_splash() {
        let mut sequencer = StartupSequencer::new(preferences(false), false);
        let started = Instant::now();

        assert!(sequencer.begin().is_none());
        assert_eq!(sequencer.phase(), StartupPhase::Splashing);
        assert_eq!(sequencer.deadline(), Some(started + SPLASH_DELAY));

        let outcome = sequencer.wait_ready().await;

        assert_eq!(outcome, StartupOutcome { dark_mode: false });
        assert_eq!(sequencer.phase(), StartupPhase::Ready);
        assert!(started.elapsed() >= SPLASH_DELAY);
        assert!(started.elapsed() < SPLASH_DELAY + Duration::from_millis(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_ready_before_delay() {
        let mut sequencer = StartupSequencer::new(preferences(false), false);
        sequencer.begin();

        let early = tokio::time::timeout(
            SPLASH_DELAY - Duration::from_millis(1),
            sequencer.wait_ready(),
        )
        .await;

        assert!(early.is_err());
        assert_eq!(sequencer.phase(), StartupPhase::Splashing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_disarms_timer() {
        let mut sequencer = StartupSequencer::new(preferences(false), false);
        sequencer.begin();
        sequencer.cancel();

        let result =
            tokio::time::timeout(SPLASH_DELAY * 2, sequencer.wait_ready()).await;

        assert!(result.is_err());
        assert_eq!(sequencer.phase(), StartupPhase::Splashing);
        assert!(!sequencer.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_theme_read_at_transition() {
        let prefs = Arc::new(MockPreferences::new());
        let mut sequencer = StartupSequencer::new(prefs.clone(), false);
        sequencer.begin();

        prefs.set_dark_mode(true);
        let outcome = sequencer.wait_ready().await;

        assert!(outcome.dark_mode);
    }

    #[tokio::test]
    async fn test_begin_after_ready_is_noop() {
        let mut sequencer = StartupSequencer::new(preferences(false), true);
        assert!(sequencer.begin().is_some());
        assert!(sequencer.begin().is_none());
    }
}
