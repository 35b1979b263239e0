
pub use builders::sysfs::TestSensorRootBuilder;
