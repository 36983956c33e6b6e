use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

const LOGO_TEXT: &str = "
░█████▄  ░██ ░██  ░██ ░█████▄  ░███████ ░██   ░██
░██  ░██ ░██ ░██ ░██  ░██  ░██ ░██       ░██ ░██
░█████▀  ░██ ░█████   ░██  ░██ ░█████     ░███
░██      ░██ ░██ ░██  ░██  ░██ ░██       ░██ ░██
░██      ░██ ░██  ░██ ░█████▀  ░███████ ░██   ░██";

/// Progress of the splash animation.
#[derive(Debug, Default)]
pub struct LoadingState {
    /// Startup finished; the outro may play.
    pub ready: bool,
    /// The intro effect has run to completion.
    pub intro_finished: bool,
    /// The outro has finished; the splash can be replaced.
    pub animation_complete: bool,
}

/// Animated logo shown while startup completes.
pub struct SplashScreen {
    intro_effect: Effect,
    outro_effect: Effect,
    subtitle: String,
    style: Style,
    /// Animation progress.
    pub state: LoadingState,
    pending_duration: Duration,
}

impl SplashScreen {
    /// Creates a splash with `subtitle` under the logo.
    #[must_use]
    pub fn new(subtitle: impl Into<String>) -> Self {
        let intro_effect = fx::coalesce((800, Interpolation::CircOut));
        let outro_effect = fx::dissolve((600, Interpolation::CircIn));

        Self {
            intro_effect,
            outro_effect,
            subtitle: subtitle.into(),
            style: Style::default(),
            state: LoadingState::default(),
            pending_duration: Duration::ZERO,
        }
    }

    /// Sets the text style.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Adds elapsed time, consumed by the next render.
    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    /// Lets the outro play once the intro is done.
    pub fn set_ready(&mut self) {
        self.state.ready = true;
    }
}

impl Widget for &mut SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut text = Text::from(LOGO_TEXT.trim_matches('\n'));
        text.push_line(Line::default());
        text.push_line(Line::raw(self.subtitle.clone()));
        let text = text.centered();

        let text_width = u16::try_from(text.lines.iter().map(Line::width).max().unwrap_or(0))
            .unwrap_or(0);
        let text_height = u16::try_from(text.lines.len()).unwrap_or(0);

        let x = area.x + (area.width.saturating_sub(text_width)) / 2;
        let y = area.y + (area.height.saturating_sub(text_height)) / 2;
        let center_area = Rect::new(
            x,
            y,
            text_width.min(area.width),
            text_height.min(area.height),
        );

        Paragraph::new(text).style(self.style).render(center_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if !self.state.intro_finished {
            let overflow = self.intro_effect.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.state.intro_finished = true;
            }
        } else if self.state.ready {
            let overflow = self.outro_effect.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.state.animation_complete = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(splash: &mut SplashScreen, elapsed: Duration) {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        splash.tick(elapsed);
        splash.render(area, &mut buf);
    }

    #[test]
    fn test_outro_waits_for_ready() {
        let mut splash = SplashScreen::new("Guía de campo");

        frame(&mut splash, Duration::from_millis(900));
        assert!(splash.state.intro_finished);

        frame(&mut splash, Duration::from_secs(2));
        assert!(!splash.state.animation_complete);

        splash.set_ready();
        frame(&mut splash, Duration::from_millis(700));
        assert!(splash.state.animation_complete);
    }

    #[test]
    fn test_renders_subtitle() {
        let mut splash = SplashScreen::new("Guía de campo");
        frame(&mut splash, Duration::from_millis(900));

        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        splash.render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Guía de campo"));
    }
}
