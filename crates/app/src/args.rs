use clap::{Parser, ValueEnum};
use voltix_core::Overrides;

/// 🔋 Display ASCII battery and system power info.
///
/// Every option replaces the matching value read from the system, which
/// makes it possible to preview the gauge on machines without a battery.
#[derive(Debug, Clone, Parser)]
#[command(name = "voltix", version, about)]
pub struct Cli {
    /// Simulated battery level (0-100)
    #[arg(short = 'l', long, allow_negative_numbers = true)]
    pub level: Option<i32>,

    /// Simulated battery status (Charging/Discharging)
    #[arg(short = 's', long, allow_hyphen_values = true)]
    pub status: Option<String>,

    /// Simulated remaining time (in seconds)
    #[arg(short = 't', long = "secs", allow_negative_numbers = true)]
    pub secs: Option<i64>,

    /// When to colour the gauge
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            percent:   self.level,
            status:    self.status.clone(),
            secs_left: self.secs,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self, stdout_is_terminal: bool) -> bool {
        match self {
            Self::Auto   => stdout_is_terminal,
            Self::Always => true,
            Self::Never  => false,
        }
    }
}
