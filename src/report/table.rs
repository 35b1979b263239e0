use std::fmt;

use serde::Serialize;

use crate::thermal::ReadingSet;

pub(crate) const INDEX_WIDTH: usize = 4;
pub(crate) const ZONE_WIDTH: usize = 20;

/// Column titles shared by every tabular report
pub(crate) const HEADER_INDEX: &str = "#";
pub(crate) const HEADER_ZONE: &str = "Zone";
pub(crate) const HEADER_TEMPERATURE: &str = "Temperature (°C)";

/// One row of a temperature table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// 1-based position of the reading in its set
    pub index: usize,
    /// Zone identifier
    pub zone: String,
    /// Temperature in Celsius with exactly two decimals
    pub celsius: String,
}

/// Structured table of readings, one row per reading
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn from_readings(readings: &ReadingSet) -> Self {
        let rows = readings
            .iter()
            .enumerate()
            .map(|(i, reading)| TableRow {
                index: i + 1,
                zone: reading.zone().id().to_string(),
                celsius: format!("{:.2}", reading.celsius()),
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<INDEX_WIDTH$} {:<ZONE_WIDTH$} {}", HEADER_INDEX, HEADER_ZONE, HEADER_TEMPERATURE)?;
        for row in &self.rows {
            writeln!(f, "{:<INDEX_WIDTH$} {:<ZONE_WIDTH$} {}", row.index, row.zone, row.celsius)?;
        }
        Ok(())
    }
}
