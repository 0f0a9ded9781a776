//! Wire schema of a persisted sensor spec.
//!
//! Every message derives both `prost::Message` and serde, so the same record can
//! be written as protobuf, JSON or YAML. Fields not set by the builder keep their
//! protobuf defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SensorSpecRecord {
    #[prost(message, optional, tag = "1")]
    pub info: Option<GadgetInfo>,
    #[prost(bytes = "vec", tag = "2")]
    pub config: Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub remembered_appearance: Option<BasicSensorAppearance>,
}

/// Identity of the device a spec was taken from and the provider that reads it.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GadgetInfo {
    #[prost(string, tag = "1")]
    pub provider_id: String,
    #[prost(string, tag = "2")]
    pub address: String,
    #[prost(string, tag = "3")]
    pub host_id: String,
    #[prost(enumeration = "Platform", tag = "4")]
    #[serde(with = "platform_name")]
    pub platform: i32,
    #[prost(string, tag = "5")]
    pub host_description: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicSensorAppearance {
    #[prost(string, tag = "1")]
    pub locale: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub units: String,
    #[prost(string, tag = "4")]
    pub short_description: String,
    #[prost(message, optional, tag = "5")]
    pub icon_path: Option<IconPath>,
    #[prost(message, optional, tag = "6")]
    pub large_icon_path: Option<IconPath>,
    #[prost(int32, tag = "7")]
    pub points_after_decimal: i32,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconPath {
    #[prost(enumeration = "IconPathType", tag = "1")]
    #[serde(with = "icon_path_type_name")]
    pub path_type: i32,
    #[prost(string, optional, tag = "2")]
    pub path_string: Option<String>,
}

/// Where an icon is resolved from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum IconPathType {
    Builtin = 0,
    External = 1,
    /// Looked up in the catalog of built-in icons by provider and sensor kind.
    Proto = 2,
    MkrsciAndroidBle = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum Platform {
    Android = 0,
    Ios = 1,
}

// Enum fields are written by name; values unknown to this schema stay numeric.
fn serialize_enum<E, S>(value: &i32, serializer: S) -> Result<S::Ok, S::Error>
where
    E: TryFrom<i32> + Serialize,
    S: Serializer,
{
    match E::try_from(*value) {
        Ok(known) => known.serialize(serializer),
        Err(_) => serializer.serialize_i32(*value),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NameOrNumber<E> {
    Name(E),
    Number(i32),
}

fn deserialize_enum<'de, E, D>(deserializer: D) -> Result<i32, D::Error>
where
    E: DeserializeOwned + Into<i32>,
    D: Deserializer<'de>,
{
    Ok(match NameOrNumber::<E>::deserialize(deserializer)? {
        NameOrNumber::Name(known) => known.into(),
        NameOrNumber::Number(value) => value,
    })
}

mod icon_path_type_name {
    use super::*;

    pub fn serialize<S: Serializer>(value: &i32, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_enum::<IconPathType, S>(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        deserialize_enum::<IconPathType, D>(deserializer)
    }
}

mod platform_name {
    use super::*;

    pub fn serialize<S: Serializer>(value: &i32, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_enum::<Platform, S>(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        deserialize_enum::<Platform, D>(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_default_record_is_empty() {
        let record = SensorSpecRecord::default();
        assert!(record.info.is_none());
        assert!(record.config.is_empty());
        assert!(record.remembered_appearance.is_none());
        assert_eq!(record.encoded_len(), 0);
    }

    #[test]
    fn test_icon_path_type_accessor() {
        let mut icon = IconPath::default();
        assert_eq!(icon.path_type(), IconPathType::Builtin);
        icon.set_path_type(IconPathType::Proto);
        assert_eq!(icon.path_type, 2);
        assert_eq!(icon.path_type(), IconPathType::Proto);
    }

    #[test]
    fn test_unknown_icon_path_type_falls_back_to_default() {
        let icon = IconPath { path_type: 42, path_string: None };
        assert_eq!(icon.path_type(), IconPathType::Builtin);
    }

    #[test]
    fn test_json_uses_camel_case_field_names() {
        let record = SensorSpecRecord {
            info: Some(GadgetInfo {
                provider_id: "com.example.accel".to_string(),
                address: "AA:BB".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"providerId\":\"com.example.accel\""));
        assert!(json.contains("\"rememberedAppearance\":null"));
    }

    #[test]
    fn test_json_writes_enum_names() {
        let icon = IconPath { path_type: IconPathType::Proto as i32, path_string: None };
        let json = serde_json::to_string(&icon).unwrap();
        assert_eq!(json, r#"{"pathType":"PROTO","pathString":null}"#);
        assert_eq!(serde_json::from_str::<IconPath>(&json).unwrap(), icon);

        let info = GadgetInfo { platform: Platform::Ios as i32, ..Default::default() };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains(r#""platform":"IOS""#));
        assert_eq!(serde_json::from_str::<GadgetInfo>(&json).unwrap(), info);
    }

    #[test]
    fn test_json_keeps_unknown_enum_values_numeric() {
        let icon = IconPath { path_type: 42, path_string: None };
        let json = serde_json::to_string(&icon).unwrap();
        assert!(json.contains(r#""pathType":42"#));
        assert_eq!(serde_json::from_str::<IconPath>(&json).unwrap().path_type, 42);

        let icon: IconPath = serde_json::from_str(r#"{"pathType": 1}"#).unwrap();
        assert_eq!(icon.path_type(), IconPathType::External);
    }
}
