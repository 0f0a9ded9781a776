mod sensor_spec;

pub use sensor_spec::*;
