use prost::Message;
use std::marker::PhantomData;
use super::{Encoder, EncodeError};

pub struct ProtobufEncoder<T> {
    _marker: PhantomData<T>,
}

impl<T> ProtobufEncoder<T> {
    pub fn new() -> Self {
        ProtobufEncoder { _marker: PhantomData }
    }
}

impl<T> Default for ProtobufEncoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Encoder<T> for ProtobufEncoder<T>
where
    T: Message + Default,
{
    fn encode(&self, value: &T) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::with_capacity(value.encoded_len());
        value.encode(&mut buf).map_err(|e| EncodeError(e.to_string()))?;
        Ok(buf)
    }

    fn decode(&self, data: &[u8]) -> Result<T, EncodeError> {
        T::decode(data).map_err(|e| EncodeError(e.to_string()))
    }
}
