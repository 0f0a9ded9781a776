pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;
pub mod protobuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::SensorSpecRecord;

#[derive(Error, Debug)]
#[error("{0}")]
pub struct EncodeError(pub String);

pub trait Encoder<T> {
    fn encode(&self, value: &T) -> Result<Vec<u8>, EncodeError>;
    fn decode(&self, data: &[u8]) -> Result<T, EncodeError>;
}

/// On-disk format of a persisted sensor spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Json,
    Yaml,
    #[default]
    #[serde(rename = "proto")]
    Protobuf,
}

impl Encoding {
    pub fn extension(&self) -> &'static str {
        match self {
            Encoding::Json => "json",
            Encoding::Yaml => "yaml",
            Encoding::Protobuf => "pb",
        }
    }

    pub fn encoder(&self) -> Result<Box<dyn Encoder<SensorSpecRecord>>, EncodeError> {
        match self {
            Encoding::Json => Ok(Box::new(json::JsonEncoder)),
            #[cfg(feature = "yaml")]
            Encoding::Yaml => Ok(Box::new(yaml::YamlEncoder)),
            #[cfg(not(feature = "yaml"))]
            Encoding::Yaml => Err(EncodeError("yaml support is not enabled".to_string())),
            Encoding::Protobuf => Ok(Box::new(protobuf::ProtobufEncoder::new())),
        }
    }
}
