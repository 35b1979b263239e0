use std::path::PathBuf;

use sysfs_thermal::prelude::*;

use crate::common::TestSensorRootBuilder;

#[test]
fn test_poll_synthetic_root() -> Result<()> {
    let root = TestSensorRootBuilder::new().with_zone("thermal_zone0", 45000).with_zone("thermal_zone1", 50123).build();

    let readings = root.reader().poll()?;
    let pairs: Vec<(&str, f64)> = readings.iter().map(|r| (r.zone().id(), r.celsius())).collect();
    assert_eq!(pairs, vec![("thermal_zone0", 45.0), ("thermal_zone1", 50.123)]);
    Ok(())
}

#[test]
fn test_poll_returns_one_reading_per_zone() -> Result<()> {
    let mut builder = TestSensorRootBuilder::new();
    let values: Vec<i64> = (0..8).map(|i| 20000 + i * 3217).collect();
    for (i, value) in values.iter().enumerate() {
        builder = builder.with_zone(&format!("thermal_zone{}", i), *value);
    }
    let root = builder.build();

    let readings = root.reader().poll()?;
    assert_eq!(readings.len(), values.len());
    for (reading, value) in readings.iter().zip(&values) {
        assert_eq!(reading.raw_millidegrees(), *value);
        assert_eq!(reading.celsius(), *value as f64 / 1000.0);
    }
    Ok(())
}

#[test]
fn test_poll_reads_zone_types() -> Result<()> {
    let root = TestSensorRootBuilder::new()
        .with_typed_zone("thermal_zone0", 38000, "acpitz")
        .with_typed_zone("thermal_zone1", 52000, "x86_pkg_temp")
        .with_zone("thermal_zone2", 30000)
        .build();

    let readings = root.reader().poll()?;
    let kinds: Vec<&str> = readings.iter().map(|r| r.zone().kind_or_unknown()).collect();
    assert_eq!(kinds, vec!["acpitz", "x86_pkg_temp", "unknown"]);
    Ok(())
}

#[test]
fn test_poll_skips_cooling_devices() -> Result<()> {
    let root = TestSensorRootBuilder::new()
        .with_other_entry("cooling_device0")
        .with_zone("thermal_zone0", 41000)
        .with_other_entry("cooling_device1")
        .build();

    let readings = root.reader().poll()?;
    assert_eq!(readings.len(), 1);
    Ok(())
}

#[test]
fn test_missing_root_is_unavailable() {
    let reader = SensorReader::with_config(ThermalConfig::with_root("/nonexistent/sys/class/thermal")).unwrap();
    match reader.poll() {
        Err(Error::SensorUnavailable { path, .. }) => {
            assert_eq!(path, PathBuf::from("/nonexistent/sys/class/thermal"))
        },
        other => panic!("expected SensorUnavailable, got {:?}", other),
    }
}

#[test]
fn test_empty_root_is_unavailable() {
    let root = TestSensorRootBuilder::new().with_other_entry("cooling_device0").build();
    let err = root.reader().poll().unwrap_err();
    assert!(matches!(err, Error::SensorUnavailable { .. }));
}

#[test]
fn test_zone_without_temp_fails_whole_poll() {
    let root = TestSensorRootBuilder::new()
        .with_zone("thermal_zone0", 45000)
        .with_empty_zone("thermal_zone1")
        .with_zone("thermal_zone2", 47000)
        .build();

    match root.reader().poll() {
        Err(Error::SensorUnavailable { path, .. }) => {
            assert_eq!(path, root.zone_path("thermal_zone1").join("temp"))
        },
        other => panic!("expected SensorUnavailable, got {:?}", other),
    }
}

#[test]
fn test_malformed_value_fails_whole_poll() {
    let root = TestSensorRootBuilder::new()
        .with_zone("thermal_zone0", 45000)
        .with_raw_zone("thermal_zone1", "hot")
        .build();

    let err = root.reader().poll().unwrap_err();
    assert!(matches!(err, Error::MalformedValue { ref content, .. } if content == "hot"));
    assert!(err.is_unavailable());
}

#[test]
fn test_repeated_polls_are_identical() -> Result<()> {
    let root = TestSensorRootBuilder::new()
        .with_typed_zone("thermal_zone1", 50123, "x86_pkg_temp")
        .with_typed_zone("thermal_zone0", 45000, "acpitz")
        .build();
    let reader = root.reader();

    let first = reader.poll()?;
    let second = reader.poll()?;
    assert_eq!(first, second);
    assert_eq!(Reporter::to_json(&first)?, Reporter::to_json(&second)?);
    Ok(())
}

#[test]
fn test_poll_reflects_current_state() -> Result<()> {
    let root = TestSensorRootBuilder::new().with_zone("thermal_zone0", 45000).with_zone("thermal_zone1", 46000).build();
    let reader = root.reader();
    assert_eq!(reader.poll()?.len(), 2);

    root.set_temp("thermal_zone0", 61000);
    root.remove_zone("thermal_zone1");

    let readings = reader.poll()?;
    assert_eq!(readings.len(), 1);
    assert_eq!(readings.get("thermal_zone0").map(|r| r.level()), Some(ThermalLevel::Hot));
    assert!(readings.get("thermal_zone1").is_none());
    Ok(())
}
