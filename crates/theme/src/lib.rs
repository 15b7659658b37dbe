pub mod colors;
pub mod style;

pub use colors::{Hue, Palette};
pub use crossterm::style::Color;
pub use style::Glyphs;

/// Everything that decides how a gauge looks, independent of its geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub glyphs:  Glyphs,
}

impl Theme {
    /// Colour for a charge level, chosen by [`Hue::for_percent`].
    pub fn color_for(&self, percent: i32) -> Color {
        self.palette.color(Hue::for_percent(percent))
    }
}
