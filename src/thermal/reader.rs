use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument, trace};

use super::constants::{TEMP_FILE, TYPE_FILE};
use super::source::{SysfsSource, ZoneSource};
use super::types::{Reading, ReadingSet, ThermalConfig, ThermalZone};
use crate::error::{Error, Result};
use crate::report::{ReportMode, Reporter};

/// Polls every thermal zone under a sensor root
///
/// The reader keeps no readings between calls: each [`poll`](SensorReader::poll)
/// enumerates the root again and either returns a reading for every zone it
/// found or fails as a whole.
#[derive(Debug, Clone)]
pub struct SensorReader {
    source: Arc<dyn ZoneSource>,
    config: ThermalConfig,
}

impl SensorReader {
    /// Creates a reader for `/sys/class/thermal`
    pub fn new() -> Self {
        Self { source: Arc::new(SysfsSource), config: ThermalConfig::default() }
    }

    /// Creates a reader with a custom configuration
    pub fn with_config(config: ThermalConfig) -> Result<Self> {
        Self::with_source(config, Arc::new(SysfsSource))
    }

    /// Creates a reader that goes through `source` instead of the filesystem
    pub fn with_source(config: ThermalConfig, source: Arc<dyn ZoneSource>) -> Result<Self> {
        config.validate()?;
        Ok(Self { source, config })
    }

    pub fn config(&self) -> &ThermalConfig {
        &self.config
    }

    /// Read all thermal zones currently present under the sensor root
    ///
    /// Zones are returned in lexical order of their entry names. Each zone's
    /// value is read from its own entry, so a zone that vanishes after
    /// enumeration fails the poll instead of shifting later values.
    #[instrument(level = "debug", skip(self), fields(root = %self.config.sensor_root.display()))]
    pub fn poll(&self) -> Result<ReadingSet> {
        let zones = self.discover_zones()?;
        debug!(zones = zones.len(), "discovered thermal zones");

        let readings = zones
            .into_iter()
            .map(|(id, entry)| self.read_zone(id, &entry))
            .collect::<Result<Vec<_>>>()?;

        Ok(ReadingSet::new(readings))
    }

    /// Poll again and render the result, the whole of a refresh
    pub fn refresh(&self, mode: ReportMode) -> Result<String> {
        let readings = self.poll()?;
        Ok(Reporter::with_full_scale(self.config.full_scale_celsius).format(&readings, mode))
    }

    fn discover_zones(&self) -> Result<Vec<(String, PathBuf)>> {
        let root = &self.config.sensor_root;
        let entries = self.source.list_entries(root).map_err(|e| Error::sensor_unavailable(root, e.to_string()))?;

        let mut zones: Vec<(String, PathBuf)> = entries
            .into_iter()
            .filter_map(|entry| {
                let id = entry.file_name()?.to_string_lossy().into_owned();
                id.starts_with(&self.config.zone_prefix).then_some((id, entry))
            })
            .collect();

        if zones.is_empty() {
            return Err(Error::sensor_unavailable(root, "no thermal zones found"));
        }

        zones.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(zones)
    }

    fn read_zone(&self, id: String, entry: &Path) -> Result<Reading> {
        let temp_path = entry.join(TEMP_FILE);
        let content = self.source.read_value(&temp_path).map_err(|e| Error::sensor_unavailable(&temp_path, e.to_string()))?;
        let raw = parse_millidegrees(&temp_path, &content)?;

        let zone = match self.read_kind(entry) {
            Some(kind) => ThermalZone::with_kind(id, kind),
            None => ThermalZone::new(id),
        };
        trace!(zone = %zone, raw, "read thermal zone");

        Ok(Reading::new(zone, raw))
    }

    fn read_kind(&self, entry: &Path) -> Option<String> {
        if !self.config.read_zone_type {
            return None;
        }
        let kind = self.source.read_value(&entry.join(TYPE_FILE)).ok()?;
        let kind = kind.trim();
        (!kind.is_empty()).then(|| kind.to_string())
    }
}

impl Default for SensorReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a sysfs temperature value, tolerating surrounding whitespace
pub(crate) fn parse_millidegrees(path: &Path, content: &str) -> Result<i64> {
    let trimmed = content.trim();
    trimmed.parse::<i64>().map_err(|_| Error::malformed_value(path, trimmed))
}
