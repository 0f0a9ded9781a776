use log::debug;

use crate::errors::SpecError;
use crate::icon_path::{IconPath, DEFAULT_ICON_PATH};
use crate::interface::{BleSensorInterface, RememberedSensorInterface};
use crate::models::{BasicSensorAppearance, GadgetInfo, SensorSpecRecord};

/// A persistable description of a sensor: identity, provider configuration and
/// the appearance to show while the device is not connected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SensorSpec {
    proto: SensorSpecRecord,
}

impl SensorSpec {
    pub fn from_proto(proto: SensorSpecRecord) -> Self {
        Self { proto }
    }

    /// Builds a spec from a live BLE sensor interface.
    ///
    /// Every string and the config payload are copied verbatim. Both icon paths
    /// are set to [`DEFAULT_ICON_PATH`].
    pub fn from_ble_sensor_interface<I>(interface: &I) -> Self
    where
        I: BleSensorInterface + ?Sized,
    {
        let icon_path = DEFAULT_ICON_PATH.to_proto();
        let proto = SensorSpecRecord {
            info: Some(GadgetInfo {
                address: interface.identifier().to_string(),
                provider_id: interface.provider_id().to_string(),
                ..Default::default()
            }),
            config: interface.config().to_vec(),
            remembered_appearance: Some(BasicSensorAppearance {
                name: interface.name().to_string(),
                units: interface.unit_description().to_string(),
                short_description: interface.text_description().to_string(),
                icon_path: Some(icon_path.clone()),
                large_icon_path: Some(icon_path),
                ..Default::default()
            }),
        };
        debug!(
            "Built sensor spec for {} (provider {})",
            interface.identifier(),
            interface.provider_id()
        );
        Self { proto }
    }

    pub fn try_from_ble_sensor_interface<I>(interface: Option<&I>) -> Result<Self, SpecError>
    where
        I: BleSensorInterface + ?Sized,
    {
        interface
            .map(Self::from_ble_sensor_interface)
            .ok_or_else(|| SpecError::InvalidInput("no BLE sensor interface given".to_string()))
    }

    pub fn proto(&self) -> &SensorSpecRecord {
        &self.proto
    }

    pub fn into_proto(self) -> SensorSpecRecord {
        self.proto
    }

    pub fn address(&self) -> &str {
        self.proto.info.as_ref().map_or("", |info| info.address.as_str())
    }

    pub fn provider_id(&self) -> &str {
        self.proto.info.as_ref().map_or("", |info| info.provider_id.as_str())
    }

    pub fn config(&self) -> &[u8] {
        &self.proto.config
    }

    pub fn name(&self) -> &str {
        self.appearance().map_or("", |a| a.name.as_str())
    }

    pub fn units(&self) -> &str {
        self.appearance().map_or("", |a| a.units.as_str())
    }

    pub fn short_description(&self) -> &str {
        self.appearance().map_or("", |a| a.short_description.as_str())
    }

    pub fn icon_path(&self) -> Option<IconPath> {
        self.appearance()
            .and_then(|a| a.icon_path.as_ref())
            .map(IconPath::from_proto)
    }

    pub fn large_icon_path(&self) -> Option<IconPath> {
        self.appearance()
            .and_then(|a| a.large_icon_path.as_ref())
            .map(IconPath::from_proto)
    }

    /// Interface that stands in for the device when it is not reachable.
    pub fn remembered_interface(&self) -> RememberedSensorInterface {
        RememberedSensorInterface {
            identifier: self.address().to_string(),
            provider_id: self.provider_id().to_string(),
            config: self.config().to_vec(),
            name: self.name().to_string(),
            unit_description: self.units().to_string(),
            text_description: self.short_description().to_string(),
        }
    }

    fn appearance(&self) -> Option<&BasicSensorAppearance> {
        self.proto.remembered_appearance.as_ref()
    }
}

impl<I: BleSensorInterface> From<&I> for SensorSpec {
    fn from(interface: &I) -> Self {
        Self::from_ble_sensor_interface(interface)
    }
}

impl From<SensorSpecRecord> for SensorSpec {
    fn from(proto: SensorSpecRecord) -> Self {
        Self::from_proto(proto)
    }
}
