use super::{EncodeError, Encoder};
use serde::ser::Serialize;
use serde::de::DeserializeOwned;
use serde_yaml::{from_slice, to_string};

pub struct YamlEncoder;

impl<T> Encoder<T> for YamlEncoder
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, value: &T) -> Result<Vec<u8>, EncodeError> {
        to_string(value)
            .map(|s| s.into_bytes())
            .map_err(|e| EncodeError(e.to_string()))
    }

    fn decode(&self, data: &[u8]) -> Result<T, EncodeError> {
        from_slice(data).map_err(|e| EncodeError(e.to_string()))
    }
}
