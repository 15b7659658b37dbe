/// Charge level shown when no source produced a reading.
pub const DEFAULT_PERCENT: i32 = 50;
/// Status text shown when no source produced a reading.
pub const DEFAULT_STATUS: &str = "Unknown";

/// One snapshot of battery state, fully populated and ready to render.
///
/// `percent` is deliberately not clamped here: out-of-range values flow
/// through to the text and colour selection untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryReading {
    /// Charge level, nominally 0–100.
    pub percent: i32,
    /// Free-form charging state as reported by the OS ("Charging", "Full", …).
    pub status: String,
    /// Estimated seconds remaining. `None` or negative = unknown.
    pub secs_left: Option<i64>,
}

impl BatteryReading {
    pub fn new(percent: i32, status: impl Into<String>, secs_left: Option<i64>) -> Self {
        Self {
            percent,
            status: status.into(),
            secs_left,
        }
    }
}

impl Default for BatteryReading {
    fn default() -> Self {
        Self::new(DEFAULT_PERCENT, DEFAULT_STATUS, None)
    }
}

/// Case-insensitive check for a status beginning with "charg".
pub fn status_is_charging(status: &str) -> bool {
    status
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("charg"))
}

/// Simulated values supplied on the command line.
///
/// Each present field replaces the matching base field unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub percent:   Option<i32>,
    pub status:    Option<String>,
    pub secs_left: Option<i64>,
}

impl Overrides {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.percent.is_none() && self.status.is_none() && self.secs_left.is_none()
    }

    /// Overlay the simulated fields onto `base`.
    #[must_use]
    pub fn apply(self, mut base: BatteryReading) -> BatteryReading {
        if let Some(percent) = self.percent {
            base.percent = percent;
        }
        if let Some(status) = self.status {
            base.status = status;
        }
        if let Some(secs) = self.secs_left {
            base.secs_left = Some(secs);
        }
        base
    }
}
