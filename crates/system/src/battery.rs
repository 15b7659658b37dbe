use std::{
    fs,
    path::{Path, PathBuf},
};

use voltix_core::{state::DEFAULT_STATUS, BatteryReading, Result, VoltixError};

use crate::BatterySource;

/// Where the Linux kernel exposes power-supply devices.
pub const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

/// Read battery state from the sysfs power-supply interface.
///
/// Never reports a time estimate; `secs_left` is always `None`.
#[derive(Debug, Clone)]
pub struct SysfsSource {
    root: PathBuf,
}

impl SysfsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Device directories in whatever order the OS enumerates them.
    ///
    /// `read_dir` order is filesystem-dependent, so on machines with several
    /// supplies the chosen device may differ between kernels.
    fn devices(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.root)?;
        Ok(entries.flatten().map(|e| e.path()).collect())
    }
}

impl Default for SysfsSource {
    fn default() -> Self {
        Self::new(POWER_SUPPLY_ROOT)
    }
}

impl BatterySource for SysfsSource {
    fn name(&self) -> &str {
        "sysfs"
    }

    fn read(&self) -> Option<BatteryReading> {
        match self.devices() {
            Ok(devices) => select_reading(devices),
            Err(e) => {
                tracing::debug!("cannot list '{}': {e}", self.root.display());
                None
            }
        }
    }
}

/// Pick the first usable device from an ordered list of device directories.
///
/// A directory is a candidate when its name starts with "bat" (any case) or
/// it carries a `capacity` file. Candidates whose capacity is missing or
/// unparseable are skipped and the scan continues.
pub fn select_reading<I>(devices: I) -> Option<BatteryReading>
where
    I: IntoIterator<Item = PathBuf>,
{
    devices
        .into_iter()
        .filter(|dir| is_candidate(dir))
        .find_map(|dir| match read_device(&dir) {
            Ok(reading) => Some(reading),
            Err(e) => {
                tracing::debug!("skipping '{}': {e}", dir.display());
                None
            }
        })
}

fn is_candidate(dir: &Path) -> bool {
    let named_battery = dir
        .file_name()
        .is_some_and(|n| n.to_string_lossy().to_ascii_lowercase().starts_with("bat"));

    named_battery || dir.join("capacity").exists()
}

fn read_device(dir: &Path) -> Result<BatteryReading> {
    let capacity = read_attr(dir, "capacity")?;
    let percent = capacity
        .parse::<i32>()
        .map_err(|_| VoltixError::Malformed {
            attribute: "capacity",
            value: capacity.clone(),
        })?;

    let status = read_attr(dir, "status")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_STATUS.to_string());

    Ok(BatteryReading::new(percent, status, None))
}

fn read_attr(dir: &Path, name: &str) -> Result<String> {
    Ok(fs::read_to_string(dir.join(name))?.trim().to_string())
}
