use super::adapter::ColorConverter;
use crate::infrastructure::config::ThemeMode;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const LIGHT_BACKGROUND: Color = Color::Rgb(250, 248, 242);
const LIGHT_FOREGROUND: Color = Color::Rgb(30, 30, 30);
const DARK_BACKGROUND: Color = Color::Rgb(22, 24, 28);
const DARK_FOREGROUND: Color = Color::Rgb(225, 225, 225);

/// Styles for every screen, derived from the mode and one accent color.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Light or dark.
    pub mode: ThemeMode,
    /// Accent color the other styles derive from.
    pub accent: Color,
    /// Background and body text.
    pub base_style: Style,
    /// Headings and checked marks.
    pub title_style: Style,
    /// Focused borders.
    pub border_style: Style,
    /// Highlighted grid cell.
    pub selection_style: Style,
    /// Captions, hints and unfocused borders.
    pub dimmed_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(ThemeMode::Light, "#D94A38")
    }
}

impl Theme {
    /// Builds the theme from a color name or hex code; unknown colors fall back to red.
    #[must_use]
    pub fn for_mode(mode: ThemeMode, accent_color_str: &str) -> Self {
        Self::from_color(mode, parse_color(accent_color_str))
    }

    /// Builds the theme from a parsed accent color.
    #[must_use]
    pub fn from_color(mode: ThemeMode, accent: Color) -> Self {
        let (background, foreground) = if mode.is_dark() {
            (DARK_BACKGROUND, DARK_FOREGROUND)
        } else {
            (LIGHT_BACKGROUND, LIGHT_FOREGROUND)
        };

        let mut selection_bg_hsl = ColorConverter::to_hsl(accent);
        if mode.is_dark() {
            selection_bg_hsl.l = 0.25;
            selection_bg_hsl.s = 0.4;
        } else {
            selection_bg_hsl.l = 0.85;
            selection_bg_hsl.s = 0.6;
        }
        let selection_bg = ColorConverter::to_ratatui(selection_bg_hsl);

        let dimmed = if mode.is_dark() {
            Color::Gray
        } else {
            Color::DarkGray
        };

        Self {
            mode,
            accent,
            base_style: Style::default().fg(foreground).bg(background),
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(accent),
            selection_style: Style::default()
                .bg(selection_bg)
                .fg(foreground)
                .add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(dimmed),
        }
    }

    /// Whether the dark palette is active.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Foreground for a sprite tint in this mode.
    #[must_use]
    pub fn sprite_color(&self, tint: (u8, u8, u8)) -> Color {
        ColorConverter::sprite_tint(tint, self.is_dark())
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Red,
    }
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1].repeat(2), 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[1..2].repeat(2), 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[2..3].repeat(2), 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else {
        Err(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#D94A38"), Color::Rgb(217, 74, 56));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("Invalid"), Color::Red);
    }

    #[test]
    fn test_modes_differ_in_background() {
        let light = Theme::for_mode(ThemeMode::Light, "#D94A38");
        let dark = Theme::for_mode(ThemeMode::Dark, "#D94A38");

        assert_eq!(light.base_style.bg, Some(LIGHT_BACKGROUND));
        assert_eq!(dark.base_style.bg, Some(DARK_BACKGROUND));
        assert_eq!(light.accent, dark.accent);
        assert!(dark.is_dark());
        assert!(!light.is_dark());
    }
}
