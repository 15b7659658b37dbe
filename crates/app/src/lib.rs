//! Command handler for `voltix`.
//!
//! Wires the pieces together for a single run:
//! - battery sources (power manager, then sysfs)
//! - simulated overrides from the command line
//! - the gauge renderer, writing to stdout

pub mod args;

pub use args::{Cli, ColorChoice};

use std::io::{self, IsTerminal, Write};
use tracing::info;
use voltix_core::{BatteryReading, Overrides, Result};
use voltix_renderer::{terminal_width, Renderer};
use voltix_system::{BatterySource, FallbackChain};
use voltix_theme::Theme;

/// Read the host battery, apply the command-line overrides and print the gauge.
pub fn run(cli: &Cli) -> Result<()> {
    let source = FallbackChain::system();

    let stdout = io::stdout();
    let is_terminal = stdout.is_terminal();
    let colored = cli.color.enabled(is_terminal);
    let renderer = Renderer::new(Theme::default(), terminal_width(is_terminal)).with_color(colored);

    let mut out = stdout.lock();
    show(cli.overrides(), &source, &renderer, &mut out)?;
    Ok(())
}

/// One pass: acquire, merge, render. Returns the reading that was drawn.
pub fn show<S, W>(
    overrides: Overrides,
    source: &S,
    renderer: &Renderer,
    out: &mut W,
) -> Result<BatteryReading>
where
    S: BatterySource + ?Sized,
    W: Write,
{
    let base = source.read().unwrap_or_else(|| {
        info!("no battery detected; using defaults");
        BatteryReading::default()
    });

    let reading = overrides.apply(base);
    info!(
        percent = reading.percent,
        status = %reading.status,
        secs_left = ?reading.secs_left,
        "rendering battery gauge"
    );

    renderer.render(&reading, out)?;
    Ok(reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crossterm::style::SetForegroundColor;
    use voltix_renderer::gauge;
    use voltix_theme::Color;

    struct Fixed(Option<BatteryReading>);

    impl BatterySource for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn read(&self) -> Option<BatteryReading> {
            self.0.clone()
        }
    }

    fn run_with(args: &[&str], source: &Fixed, width: u16) -> (BatteryReading, String) {
        let cli = Cli::try_parse_from(std::iter::once("voltix").chain(args.iter().copied())).unwrap();
        let renderer = Renderer::new(Theme::default(), width).with_color(cli.color.enabled(false));
        let mut out = Vec::new();
        let reading = show(cli.overrides(), source, &renderer, &mut out).unwrap();
        (reading, String::from_utf8(out).unwrap())
    }

    #[test]
    fn simulated_low_battery_end_to_end() {
        let (reading, text) = run_with(
            &["--level", "15", "--status", "Discharging", "--secs", "120", "--color", "always"],
            &Fixed(None),
            80,
        );

        assert_eq!(reading, BatteryReading::new(15, "Discharging", Some(120)));
        assert!(text.contains("Status : Discharging"));
        assert!(text.contains("Charge : 15%"));
        assert!(text.contains("Time   : 0:02:00"));

        let red = SetForegroundColor(Color::DarkRed).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.iter().all(|l| l.starts_with(&red)));

        for row in &lines[2..2 + gauge::HEIGHT] {
            assert_eq!(row.chars().filter(|c| *c == '█').count(), 4, "{row:?}");
        }
        assert!(lines[gauge::OVERLAY_ROW].contains("15%"));
    }

    #[test]
    fn no_battery_no_overrides_shows_defaults() {
        let (reading, text) = run_with(&["--color", "never"], &Fixed(None), 80);

        assert_eq!(reading, BatteryReading::default());
        assert!(text.contains("Status : Unknown"));
        assert!(text.contains("Charge : 50%"));
        assert!(text.contains("Time   : Unknown"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn level_override_keeps_sensed_status_and_time() {
        let sensed = Fixed(Some(BatteryReading::new(40, "Discharging", Some(600))));
        let (reading, text) = run_with(&["--level", "75", "--color", "never"], &sensed, 80);

        assert_eq!(reading, BatteryReading::new(75, "Discharging", Some(600)));
        assert!(text.contains("Charge : 75%"));
        assert!(text.contains("Time   : 0:10:00"));
    }

    #[test]
    fn charging_status_override_hides_unknown_time() {
        let sensed = Fixed(Some(BatteryReading::new(40, "Discharging", None)));
        let (_, text) = run_with(&["-s", "charging", "--color", "never"], &sensed, 80);
        assert!(text.contains("Time   : Charging..."));
    }

    #[test]
    fn output_is_stable_for_same_width() {
        let args = ["-l", "64", "-s", "Full", "--color", "always"];
        let (_, first) = run_with(&args, &Fixed(None), 132);
        let (_, second) = run_with(&args, &Fixed(None), 132);
        assert_eq!(first, second);
    }
}
