//! Capability set of a BLE sensor as seen by the spec builder.

/// A connected (or remembered) BLE sensor.
///
/// Implementations are owned by the discovery layer. Values are returned as-is;
/// nothing here trims or validates them.
pub trait BleSensorInterface {
    /// Stable identifier of the device or channel, usually its address.
    fn identifier(&self) -> &str;
    /// Component that interprets this sensor's data.
    fn provider_id(&self) -> &str;
    /// Provider-defined configuration payload.
    fn config(&self) -> &[u8];
    fn name(&self) -> &str;
    fn unit_description(&self) -> &str;
    fn text_description(&self) -> &str;
}

/// Sensor interface reconstructed from a stored spec, usable while the device is away.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RememberedSensorInterface {
    pub identifier: String,
    pub provider_id: String,
    pub config: Vec<u8>,
    pub name: String,
    pub unit_description: String,
    pub text_description: String,
}

impl BleSensorInterface for RememberedSensorInterface {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn provider_id(&self) -> &str {
        &self.provider_id
    }

    fn config(&self) -> &[u8] {
        &self.config
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn unit_description(&self) -> &str {
        &self.unit_description
    }

    fn text_description(&self) -> &str {
        &self.text_description
    }
}
