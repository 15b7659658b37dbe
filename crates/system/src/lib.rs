pub mod battery;
pub mod manager;

pub use battery::SysfsSource;
pub use manager::ManagerSource;

use voltix_core::BatteryReading;

/// Anything that can produce a [`BatteryReading`] from the host.
///
/// `None` means "this source has nothing to offer"; callers move on to the
/// next source. Implementations must never panic on missing hardware.
pub trait BatterySource {
    /// Short identifier used in log output, e.g. `"sysfs"`.
    fn name(&self) -> &str;

    fn read(&self) -> Option<BatteryReading>;
}

impl<S: BatterySource + ?Sized> BatterySource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read(&self) -> Option<BatteryReading> {
        (**self).read()
    }
}

/// Tries each source in order and returns the first reading produced.
///
/// Later sources are never consulted once an earlier one succeeds.
pub struct FallbackChain {
    sources: Vec<Box<dyn BatterySource>>,
}

impl FallbackChain {
    pub fn new(sources: Vec<Box<dyn BatterySource>>) -> Self {
        Self { sources }
    }

    /// The host chain: power-management facility first, then sysfs.
    pub fn system() -> Self {
        Self::new(vec![
            Box::new(ManagerSource::new()),
            Box::new(SysfsSource::default()),
        ])
    }
}

impl BatterySource for FallbackChain {
    fn name(&self) -> &str {
        "fallback"
    }

    fn read(&self) -> Option<BatteryReading> {
        self.sources.iter().find_map(|source| {
            let reading = source.read();
            match &reading {
                Some(r) => tracing::debug!(source = source.name(), ?r, "battery source answered"),
                None => tracing::debug!(source = source.name(), "battery source unavailable"),
            }
            reading
        })
    }
}
