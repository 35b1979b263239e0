/// Default root of the Linux thermal class
pub const DEFAULT_SENSOR_ROOT: &str = "/sys/class/thermal";

/// Name prefix shared by every thermal zone entry
pub const ZONE_PREFIX: &str = "thermal_zone";

/// File holding the current zone temperature in millidegrees Celsius
pub const TEMP_FILE: &str = "temp";

/// File holding the zone type (acpitz, x86_pkg_temp, ...)
pub const TYPE_FILE: &str = "type";

/// Label reported for zones without a readable type file
pub const UNKNOWN_ZONE_KIND: &str = "unknown";

/// Millidegrees per degree Celsius
pub const MILLIDEGREES_PER_DEGREE: f64 = 1000.0;

/// Upper bound of the `Cool` band in degrees Celsius
pub const WARM_THRESHOLD: f64 = 40.0;

/// Upper bound of the `Warm` band in degrees Celsius
pub const HOT_THRESHOLD: f64 = 60.0;

/// Readings at or above this temperature are `Critical`
pub const CRITICAL_THRESHOLD: f64 = 75.0;

/// Default full scale used for percentage rendering, in degrees Celsius
pub const DEFAULT_FULL_SCALE_CELSIUS: f64 = 100.0;
