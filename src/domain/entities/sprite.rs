/// Renderable terminal asset behind an [`ImageRef`](super::ImageRef).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    /// Rows of the drawing, top to bottom.
    pub art: &'static [&'static str],
    /// Foreground tint as RGB.
    pub tint: (u8, u8, u8),
}

impl Sprite {
    /// Creates a sprite from its rows and tint.
    #[must_use]
    pub const fn new(art: &'static [&'static str], tint: (u8, u8, u8)) -> Self {
        Self { art, tint }
    }

    /// Height in rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.art.len()
    }

    /// Width of the widest row in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.art
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
    }
}
