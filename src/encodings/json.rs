use serde::{Serialize, de::DeserializeOwned};
use super::{Encoder, EncodeError};

pub struct JsonEncoder;

impl<T> Encoder<T> for JsonEncoder
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, value: &T) -> Result<Vec<u8>, EncodeError> {
        serde_json::to_vec_pretty(value).map_err(|e| EncodeError(e.to_string()))
    }

    fn decode(&self, data: &[u8]) -> Result<T, EncodeError> {
        serde_json::from_slice(data).map_err(|e| EncodeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BasicSensorAppearance, GadgetInfo, IconPath, IconPathType, SensorSpecRecord};

    fn accelerometer_record() -> SensorSpecRecord {
        let icon = IconPath { path_type: IconPathType::Proto as i32, path_string: None };
        SensorSpecRecord {
            info: Some(GadgetInfo {
                address: "AA:BB:CC:DD:EE:FF".to_string(),
                provider_id: "com.example.accel".to_string(),
                ..Default::default()
            }),
            config: vec![0x01, 0x02],
            remembered_appearance: Some(BasicSensorAppearance {
                name: "Accelerometer".to_string(),
                units: "m/s²".to_string(),
                short_description: "Measures acceleration".to_string(),
                icon_path: Some(icon.clone()),
                large_icon_path: Some(icon),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_json_encoder_roundtrip() {
        let encoder = JsonEncoder;
        let original = accelerometer_record();
        let json_bytes = encoder.encode(&original).expect("encode failed");
        let json_str = std::str::from_utf8(&json_bytes).unwrap();
        assert!(json_str.contains("\"address\": \"AA:BB:CC:DD:EE:FF\""));
        assert!(json_str.contains("\"units\": \"m/s²\""));
        let decoded: SensorSpecRecord = encoder.decode(&json_bytes).expect("decode failed");
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_json_encoder_fills_missing_fields_with_defaults() {
        let encoder = JsonEncoder;
        let decoded: SensorSpecRecord = encoder
            .decode(br#"{"info": {"address": "AA:BB"}}"#)
            .expect("decode failed");
        let info = decoded.info.unwrap();
        assert_eq!(info.address, "AA:BB");
        assert_eq!(info.provider_id, "");
        assert!(decoded.config.is_empty());
        assert!(decoded.remembered_appearance.is_none());
    }

    #[test]
    fn test_json_encoder_decode_error() {
        let encoder = JsonEncoder;
        let bad_json = b"{ not json: }";
        let result: Result<SensorSpecRecord, _> = encoder.decode(bad_json);
        assert!(result.is_err());
    }
}
