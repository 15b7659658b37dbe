//! Terminal drawing for voltix.
//!
//! - [`gauge`]  builds the fixed-size battery icon and its info column
//! - [`layout`] centres the finished block in the terminal
//! - [`time`]   formats the remaining-time field
//!
//! [`Renderer`] ties them together and writes styled lines to any
//! [`std::io::Write`] sink.

pub mod gauge;
pub mod layout;
pub mod time;

pub use layout::terminal_width;
pub use time::format_time;

use crossterm::{
    queue,
    style::{Print, ResetColor, SetForegroundColor},
};
use std::io::Write;
use voltix_core::{BatteryReading, Result};
use voltix_theme::Theme;

/// Draws one reading, centred for a fixed terminal width.
#[derive(Debug, Clone)]
pub struct Renderer {
    theme:      Theme,
    term_width: u16,
    colored:    bool,
}

impl Renderer {
    pub fn new(theme: Theme, term_width: u16) -> Self {
        Self {
            theme,
            term_width,
            colored: true,
        }
    }

    /// Disable to emit plain text without ANSI colour sequences.
    #[must_use]
    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// The centred block as plain lines, without styling.
    pub fn lines(&self, reading: &BatteryReading) -> Vec<String> {
        let block = gauge::compose(reading, &self.theme.glyphs);
        layout::center_block(&block, usize::from(self.term_width))
    }

    /// Write the block to `out`, every line in the charge-level colour.
    pub fn render<W: Write>(&self, reading: &BatteryReading, out: &mut W) -> Result<()> {
        let color = self.theme.color_for(reading.percent);

        for line in self.lines(reading) {
            if self.colored {
                queue!(out, SetForegroundColor(color), Print(line), ResetColor, Print('\n'))?;
            } else {
                queue!(out, Print(line), Print('\n'))?;
            }
        }

        out.flush()?;
        Ok(())
    }
}
