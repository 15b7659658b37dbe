use starship_battery::{units::time::second, Manager, State};
use voltix_core::{BatteryReading, Result, VoltixError};

use crate::BatterySource;

/// Battery state from the platform power-management facility
/// (UPower-style sysfs on Linux, IOKit on macOS, `GetSystemPowerStatus` on Windows).
#[derive(Debug, Default, Clone, Copy)]
pub struct ManagerSource;

impl ManagerSource {
    pub fn new() -> Self {
        Self
    }

    fn query(&self) -> Result<Option<BatteryReading>> {
        let manager = Manager::new().map_err(|e| VoltixError::unavailable(e.to_string()))?;
        let mut batteries = manager
            .batteries()
            .map_err(|e| VoltixError::unavailable(e.to_string()))?;

        let battery = batteries.find_map(|b| match b {
            Ok(b) => Some(b),
            Err(e) => {
                tracing::debug!("skipping unreadable battery: {e}");
                None
            }
        });

        Ok(battery.map(|b| {
            reading_from(
                b.state_of_charge().value,
                b.state(),
                b.time_to_empty().map(|t| t.get::<second>()),
            )
        }))
    }
}

impl BatterySource for ManagerSource {
    fn name(&self) -> &str {
        "power-manager"
    }

    fn read(&self) -> Option<BatteryReading> {
        self.query().unwrap_or_else(|e| {
            tracing::debug!("{e}");
            None
        })
    }
}

/// Mains power is considered connected unless the battery is draining.
///
/// `Unknown` is what Linux reports as "Not charging", i.e. on AC with a charge
/// threshold reached.
fn is_plugged(state: State) -> bool {
    !matches!(state, State::Discharging | State::Empty)
}

/// Collapse the facility's view into a reading.
///
/// `charge` is the 0.0–1.0 state of charge. The status is reduced to
/// "Charging"/"Discharging" by plug state, and no time estimate is reported
/// while plugged in.
fn reading_from(charge: f32, state: State, time_to_empty: Option<f32>) -> BatteryReading {
    let percent = (charge * 100.0).round_ties_even() as i32;

    if is_plugged(state) {
        return BatteryReading::new(percent, "Charging", None);
    }

    let secs_left = time_to_empty
        .filter(|t| t.is_finite() && *t >= 0.0)
        .map(|t| t as i64);

    BatteryReading::new(percent, "Discharging", secs_left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugged_states_read_as_charging_without_time() {
        for state in [State::Charging, State::Full, State::Unknown] {
            let r = reading_from(0.8, state, Some(1200.0));
            assert_eq!(r, BatteryReading::new(80, "Charging", None));
        }
    }

    #[test]
    fn unplugged_states_read_as_discharging() {
        for state in [State::Discharging, State::Empty] {
            assert_eq!(reading_from(0.31, state, None).status, "Discharging");
        }
    }

    #[test]
    fn time_to_empty_is_truncated_to_whole_seconds() {
        let r = reading_from(0.5, State::Discharging, Some(5400.9));
        assert_eq!(r.secs_left, Some(5400));
    }

    #[test]
    fn unknown_time_is_absent() {
        assert_eq!(reading_from(0.5, State::Discharging, None).secs_left, None);
        assert_eq!(reading_from(0.5, State::Discharging, Some(f32::INFINITY)).secs_left, None);
        assert_eq!(reading_from(0.5, State::Discharging, Some(-1.0)).secs_left, None);
    }

    #[test]
    fn percent_rounds_half_to_even() {
        assert_eq!(reading_from(0.125, State::Discharging, None).percent, 12);
        assert_eq!(reading_from(0.375, State::Discharging, None).percent, 38);
        assert_eq!(reading_from(0.436, State::Discharging, None).percent, 44);
        assert_eq!(reading_from(1.0, State::Full, None).percent, 100);
    }
}
