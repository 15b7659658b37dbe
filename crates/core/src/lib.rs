pub mod error;
pub mod state;

pub use error::{Result, VoltixError};
pub use state::{BatteryReading, Overrides};
