//! Text reports over a [`ReadingSet`]
//!
//! Reporting never touches the filesystem: it renders whatever set it is handed,
//! so a refresh is simply another poll followed by another call here.
//!
//! # Examples
//!
//! ```
//! use sysfs_thermal::report::{ReportMode, Reporter};
//! use sysfs_thermal::thermal::{Reading, ReadingSet, ThermalZone};
//!
//! let readings = ReadingSet::new(vec![Reading::new(ThermalZone::new("thermal_zone0"), 45000)]);
//! let text = Reporter::new().format(&readings, ReportMode::FlatText);
//! assert_eq!(text, "45000\n");
//! ```

mod table;

pub use table::{Table, TableRow};

use table::{HEADER_INDEX, HEADER_TEMPERATURE, HEADER_ZONE, INDEX_WIDTH, ZONE_WIDTH};

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::thermal::constants::DEFAULT_FULL_SCALE_CELSIUS;
use crate::thermal::ReadingSet;

const TEMP_WIDTH: usize = 16;
const KIND_WIDTH: usize = 16;
const LEVEL_WIDTH: usize = 9;

/// Output layout of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Raw millidegree values, one per line
    FlatText,
    /// Index, zone and Celsius value per row
    #[default]
    Table,
    /// Table rows extended with zone type, thermal level and scale percentage
    Detailed,
}

impl std::str::FromStr for ReportMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "flat" | "flat_text" | "text" => Ok(ReportMode::FlatText),
            "table" => Ok(ReportMode::Table),
            "detailed" => Ok(ReportMode::Detailed),
            other => Err(crate::Error::invalid_config(format!("unknown report mode: {}", other))),
        }
    }
}

/// Renders readings as text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reporter {
    full_scale_celsius: f64,
}

impl Reporter {
    pub fn new() -> Self {
        Self { full_scale_celsius: DEFAULT_FULL_SCALE_CELSIUS }
    }

    /// Reporter whose detailed mode measures percentages against `full_scale_celsius`
    pub fn with_full_scale(full_scale_celsius: f64) -> Self {
        Self { full_scale_celsius }
    }

    /// Render `readings` in the requested layout
    ///
    /// An empty set is not an error: flat text comes back empty and tables
    /// carry only their header.
    pub fn format(&self, readings: &ReadingSet, mode: ReportMode) -> String {
        match mode {
            ReportMode::FlatText => flat_text(readings),
            ReportMode::Table => Self::table(readings).to_string(),
            ReportMode::Detailed => self.detailed(readings),
        }
    }

    /// Structured rows for presentation layers that bind data directly
    pub fn table(readings: &ReadingSet) -> Table {
        Table::from_readings(readings)
    }

    /// Serialize the readings as a JSON array
    pub fn to_json(readings: &ReadingSet) -> Result<String> {
        Ok(serde_json::to_string_pretty(readings)?)
    }

    fn detailed(&self, readings: &ReadingSet) -> String {
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{:<INDEX_WIDTH$} {:<ZONE_WIDTH$} {:<TEMP_WIDTH$} {:<KIND_WIDTH$} {:<LEVEL_WIDTH$} Scale",
            HEADER_INDEX, HEADER_ZONE, HEADER_TEMPERATURE, "Type", "Level"
        );

        for (row, reading) in Self::table(readings).rows.iter().zip(readings) {
            let percent = reading.scale_fraction(self.full_scale_celsius) * 100.0;
            let _ = writeln!(
                out,
                "{:<INDEX_WIDTH$} {:<ZONE_WIDTH$} {:<TEMP_WIDTH$} {:<KIND_WIDTH$} {:<LEVEL_WIDTH$} {:>3.0}%",
                row.index,
                row.zone,
                row.celsius,
                reading.zone().kind_or_unknown(),
                reading.level().to_string(),
                percent
            );
        }

        let _ = writeln!(out, "{} zones found", readings.len());
        out
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

fn flat_text(readings: &ReadingSet) -> String {
    readings.iter().fold(String::new(), |mut out, reading| {
        let _ = writeln!(out, "{}", reading.raw_millidegrees());
        out
    })
}
