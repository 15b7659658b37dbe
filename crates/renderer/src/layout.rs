use std::io;
use unicode_width::UnicodeWidthStr;

/// Columns assumed when the terminal size cannot be queried.
pub const FALLBACK_WIDTH: u16 = 80;

/// Current terminal width in columns, or [`FALLBACK_WIDTH`] when stdout is
/// not a terminal.
///
/// The size is never queried for redirected output: crossterm would fall back
/// to the controlling tty and centre a file for a window it never reaches.
pub fn terminal_width(stdout_is_terminal: bool) -> u16 {
    if !stdout_is_terminal {
        tracing::debug!("stdout is not a terminal; assuming {FALLBACK_WIDTH} columns");
        return FALLBACK_WIDTH;
    }
    width_from(true, crossterm::terminal::size())
}

/// Pick the centring width from a terminal check and a size query result.
pub fn width_from(stdout_is_terminal: bool, size: io::Result<(u16, u16)>) -> u16 {
    if !stdout_is_terminal {
        return FALLBACK_WIDTH;
    }
    match size {
        Ok((cols, _)) if cols > 0 => cols,
        Ok(_) => FALLBACK_WIDTH,
        Err(e) => {
            tracing::debug!("terminal size unavailable ({e}); assuming {FALLBACK_WIDTH} columns");
            FALLBACK_WIDTH
        }
    }
}

/// Shift the whole block right so its widest line is centred in `term_width`.
///
/// Every line gets the same left padding, so columns inside the block stay
/// aligned. Blocks wider than the terminal are left unpadded.
pub fn center_block(lines: &[String], term_width: usize) -> Vec<String> {
    let widest = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    let pad = " ".repeat(term_width.saturating_sub(widest) / 2);
    lines.iter().map(|l| format!("{pad}{l}")).collect()
}
