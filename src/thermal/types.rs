use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::error::{Error, Result};

/// A thermal zone discovered during a single poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThermalZone {
    /// Zone identifier, the last path segment of the zone entry (e.g. `thermal_zone0`)
    id: String,
    /// Contents of the zone's `type` file, if it could be read
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl ThermalZone {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), kind: None }
    }

    pub fn with_kind(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self { id: id.into(), kind: Some(kind.into()) }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Zone type, or `unknown` when the zone did not expose one
    pub fn kind_or_unknown(&self) -> &str {
        self.kind().unwrap_or(UNKNOWN_ZONE_KIND)
    }
}

impl fmt::Display for ThermalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Coarse temperature band of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThermalLevel {
    /// Below 40°C
    Cool,
    /// 40°C up to 60°C
    Warm,
    /// 60°C up to 75°C
    Hot,
    /// 75°C and above
    Critical,
}

impl ThermalLevel {
    pub fn from_celsius(celsius: f64) -> Self {
        if celsius < WARM_THRESHOLD {
            ThermalLevel::Cool
        } else if celsius < HOT_THRESHOLD {
            ThermalLevel::Warm
        } else if celsius < CRITICAL_THRESHOLD {
            ThermalLevel::Hot
        } else {
            ThermalLevel::Critical
        }
    }
}

impl fmt::Display for ThermalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThermalLevel::Cool => write!(f, "cool"),
            ThermalLevel::Warm => write!(f, "warm"),
            ThermalLevel::Hot => write!(f, "hot"),
            ThermalLevel::Critical => write!(f, "critical"),
        }
    }
}

/// A single temperature reading, immutable once constructed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    zone: ThermalZone,
    raw_millidegrees: i64,
    celsius: f64,
}

impl Reading {
    /// Create a reading from the raw sysfs value
    ///
    /// # Examples
    /// ```
    /// use sysfs_thermal::thermal::{Reading, ThermalZone};
    ///
    /// let reading = Reading::new(ThermalZone::new("thermal_zone1"), 50123);
    /// assert_eq!(reading.celsius(), 50.123);
    /// ```
    pub fn new(zone: ThermalZone, raw_millidegrees: i64) -> Self {
        Self { zone, raw_millidegrees, celsius: raw_millidegrees as f64 / MILLIDEGREES_PER_DEGREE }
    }

    pub fn zone(&self) -> &ThermalZone {
        &self.zone
    }

    pub fn raw_millidegrees(&self) -> i64 {
        self.raw_millidegrees
    }

    pub fn celsius(&self) -> f64 {
        self.celsius
    }

    pub fn fahrenheit(&self) -> f64 {
        self.celsius * 9.0 / 5.0 + 32.0
    }

    pub fn level(&self) -> ThermalLevel {
        ThermalLevel::from_celsius(self.celsius)
    }

    /// Fraction of `full_scale` this reading represents, clamped to `[0, 1]`
    pub fn scale_fraction(&self, full_scale: f64) -> f64 {
        if full_scale <= 0.0 {
            return 0.0;
        }
        (self.celsius / full_scale).clamp(0.0, 1.0)
    }
}

/// Ordered readings produced by one poll, in zone discovery order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReadingSet {
    readings: Vec<Reading>,
}

impl ReadingSet {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }

    pub fn as_slice(&self) -> &[Reading] {
        &self.readings
    }

    /// Look up a reading by zone identifier
    pub fn get(&self, zone_id: &str) -> Option<&Reading> {
        self.readings.iter().find(|r| r.zone.id == zone_id)
    }

    /// The reading with the highest raw value; the earliest zone wins ties
    pub fn hottest(&self) -> Option<&Reading> {
        self.readings.iter().reduce(|best, r| if r.raw_millidegrees > best.raw_millidegrees { r } else { best })
    }
}

impl FromIterator<Reading> for ReadingSet {
    fn from_iter<I: IntoIterator<Item = Reading>>(iter: I) -> Self {
        Self { readings: iter.into_iter().collect() }
    }
}

impl IntoIterator for ReadingSet {
    type Item = Reading;
    type IntoIter = std::vec::IntoIter<Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReadingSet {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}

/// Configuration for thermal zone polling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermalConfig {
    /// Directory holding the zone entries
    pub sensor_root: PathBuf,
    /// Entry name prefix that marks a thermal zone
    pub zone_prefix: String,
    /// Whether to read each zone's `type` file
    pub read_zone_type: bool,
    /// Temperature treated as 100% in detailed reports, in degrees Celsius
    pub full_scale_celsius: f64,
}

impl Default for ThermalConfig {
    fn default() -> Self {
        Self {
            sensor_root: PathBuf::from(DEFAULT_SENSOR_ROOT),
            zone_prefix: ZONE_PREFIX.to_string(),
            read_zone_type: true,
            full_scale_celsius: DEFAULT_FULL_SCALE_CELSIUS,
        }
    }
}

impl ThermalConfig {
    /// Default configuration pointed at a different sensor root
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self { sensor_root: root.as_ref().to_path_buf(), ..Self::default() }
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.zone_prefix.is_empty() {
            return Err(Error::invalid_config("zone_prefix must not be empty"));
        }
        if self.full_scale_celsius.is_nan() || self.full_scale_celsius <= 0.0 {
            return Err(Error::invalid_config(format!(
                "full_scale_celsius must be positive, got {}",
                self.full_scale_celsius
            )));
        }
        Ok(())
    }
}
