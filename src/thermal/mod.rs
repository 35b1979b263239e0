//! Thermal zone polling for Linux systems
//!
//! This module reads the kernel's thermal class (`/sys/class/thermal` by default).
//! Every `thermal_zone*` entry exposes a `temp` file in millidegrees Celsius and,
//! usually, a `type` file naming the sensor.
//!
//! # Examples
//!
//! ```no_run
//! use sysfs_thermal::thermal::SensorReader;
//!
//! let reader = SensorReader::new();
//! for reading in &reader.poll().unwrap() {
//!     println!("{}: {:.1}°C", reading.zone(), reading.celsius());
//! }
//! ```

/// Thermal polling constants
pub mod constants;

mod reader;
mod source;
mod types;

pub use reader::*;
pub use source::*;
pub use types::*;
