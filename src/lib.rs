#![doc(html_root_url = "https://docs.rs/sysfs-thermal/0.1.0")]
//! Sysfs Thermal - A Rust library for polling Linux thermal zone temperatures
//!
//! This crate reads the kernel's thermal class (`/sys/class/thermal`) directly
//! through the filesystem and renders the readings as text for whatever surface
//! wants them: a terminal, a log line, a GUI label or a metrics exporter.
//!
//! # Features
//!
//! - **Polling**: One synchronous pass over every `thermal_zone*` entry, sorted by name
//! - **Units**: Raw millidegrees kept alongside Celsius and Fahrenheit values
//! - **Reports**: Flat text, tables, detailed tables and JSON
//! - **Configuration**: Alternative sensor roots for containers, chroots and tests
//!
//! # Examples
//!
//! ```no_run
//! use sysfs_thermal::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let reader = SensorReader::new();
//!     let readings = reader.poll()?;
//!     print!("{}", Reporter::new().format(&readings, ReportMode::Table));
//!
//!     // A refresh is just another poll.
//!     print!("{}", reader.refresh(ReportMode::FlatText)?);
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! A poll either returns a reading for every zone or fails as a whole:
//!
//! ```rust
//! use sysfs_thermal::prelude::*;
//!
//! let reader = SensorReader::with_config(ThermalConfig::with_root("/does/not/exist")).unwrap();
//! match reader.poll() {
//!     Err(e) if e.is_unavailable() => println!("no thermal data: {}", e),
//!     Err(e) => panic!("unexpected error: {}", e),
//!     Ok(_) => unreachable!(),
//! }
//! ```

pub mod error;
pub mod report;
pub mod thermal;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::report::{ReportMode, Reporter, Table, TableRow};
    pub use crate::thermal::{Reading, ReadingSet, SensorReader, ThermalConfig, ThermalLevel, ThermalZone};
    pub use crate::Error;
    pub use crate::Result;
}
