pub mod encodings;
pub mod models;

pub mod config;
pub mod errors;
pub mod icon_path;
pub mod interface;
pub mod spec;
pub mod storage;

pub use icon_path::{IconPath, IconPathType, DEFAULT_ICON_PATH};
pub use interface::{BleSensorInterface, RememberedSensorInterface};
pub use spec::SensorSpec;
pub use storage::SensorSpecStore;
