use voltix_core::BatteryReading;
use voltix_theme::Glyphs;

use crate::time::format_time;

/// Interior width of the gauge in character cells.
pub const WIDTH: usize = 28;
/// Interior height of the gauge in rows.
pub const HEIGHT: usize = 9;
/// Spacing between the gauge and the info column.
const GUTTER: &str = "   ";
/// Index of the interior row that carries the percentage overlay.
pub const OVERLAY_ROW: usize = 2 + HEIGHT / 2;

/// Number of filled columns for a charge level, clamped to `0..=WIDTH`.
pub fn fill_columns(percent: i32) -> usize {
    let cols = i64::from(percent) * WIDTH as i64 / 100;
    cols.clamp(0, WIDTH as i64) as usize
}

/// The gauge alone: cap, top border, [`HEIGHT`] interior rows, bottom border.
///
/// Every line is `WIDTH + 2` cells wide.
pub fn gauge_lines(percent: i32, glyphs: &Glyphs) -> Vec<String> {
    let mut lines = Vec::with_capacity(HEIGHT + 3);

    let cap_len = WIDTH - WIDTH / 3;
    let cap = format!(
        "{}{}",
        " ".repeat((WIDTH - cap_len) / 2),
        glyphs.cap.to_string().repeat(cap_len)
    );
    lines.push(center(&cap, WIDTH + 2));

    let border = glyphs.horizontal.to_string().repeat(WIDTH);
    lines.push(format!("{}{border}{}", glyphs.top_left, glyphs.top_right));

    let filled = fill_columns(percent);
    let row = format!(
        "{v}{}{}{v}",
        glyphs.fill.to_string().repeat(filled),
        glyphs.empty.to_string().repeat(WIDTH - filled),
        v = glyphs.vertical,
    );
    lines.extend(std::iter::repeat(row).take(HEIGHT));

    lines.push(format!("{}{border}{}", glyphs.bottom_left, glyphs.bottom_right));

    let label = format!("{percent}%");
    lines[OVERLAY_ROW] = overlay(&lines[OVERLAY_ROW], &label);

    lines
}

/// The three info lines shown beside the gauge.
pub fn info_lines(reading: &BatteryReading) -> [String; 3] {
    [
        format!("Status : {}", reading.status),
        format!("Charge : {}%", reading.percent),
        format!(
            "Time   : {}",
            format_time(reading.secs_left, Some(&reading.status))
        ),
    ]
}

/// Gauge with the info column attached to its first lines.
pub fn compose(reading: &BatteryReading, glyphs: &Glyphs) -> Vec<String> {
    let info = info_lines(reading);
    gauge_lines(reading.percent, glyphs)
        .into_iter()
        .enumerate()
        .map(|(i, line)| match info.get(i) {
            Some(text) => format!("{line}{GUTTER}{text}"),
            None => line,
        })
        .collect()
}

/// Write `label` into `row` so it sits centred within the interior.
fn overlay(row: &str, label: &str) -> String {
    let mut cells: Vec<char> = row.chars().collect();
    let start = 1 + WIDTH.saturating_sub(label.chars().count()) / 2;
    for (i, ch) in label.chars().enumerate() {
        if let Some(cell) = cells.get_mut(start + i) {
            *cell = ch;
        }
    }
    cells.into_iter().collect()
}

/// Pad `text` to `width` cells. Odd padding puts the extra cell on the right,
/// except when `width` is odd too.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2 + (pad & width & 1);
    format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
}
