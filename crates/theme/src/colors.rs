use crossterm::style::Color;

/// Charge bands used to pick the gauge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hue {
    /// Below [`Hue::MID_FROM`] percent.
    Low,
    /// From [`Hue::MID_FROM`] up to (not including) [`Hue::HIGH_FROM`].
    Mid,
    /// [`Hue::HIGH_FROM`] percent and above.
    High,
}

impl Hue {
    pub const MID_FROM:  i32 = 20;
    pub const HIGH_FROM: i32 = 60;

    /// Band for a charge level. Out-of-range values fall into the nearest band.
    pub fn for_percent(percent: i32) -> Self {
        if percent < Self::MID_FROM {
            Self::Low
        } else if percent < Self::HIGH_FROM {
            Self::Mid
        } else {
            Self::High
        }
    }
}

/// Terminal colours for each [`Hue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub low:  Color,
    pub mid:  Color,
    pub high: Color,
}

impl Palette {
    pub fn color(&self, hue: Hue) -> Color {
        match hue {
            Hue::Low  => self.low,
            Hue::Mid  => self.mid,
            Hue::High => self.high,
        }
    }
}

impl Default for Palette {
    /// The basic 8-colour ANSI red / yellow / green.
    fn default() -> Self {
        Self {
            low:  Color::DarkRed,
            mid:  Color::DarkYellow,
            high: Color::DarkGreen,
        }
    }
}
