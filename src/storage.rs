use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::{get_config, StoreConfig};
use crate::encodings::{Encoder, Encoding};
use crate::errors::StorageError;
use crate::models::SensorSpecRecord;
use crate::spec::SensorSpec;

const FILE_PREFIX: &str = "sensor-";

/// Turns a device address into a file stem, e.g. `AA:BB:CC` -> `sensor-AA%3ABB%3ACC`.
///
/// Distinct addresses always map to distinct stems.
pub fn file_stem_for_address(address: &str) -> String {
    format!("{}{}", FILE_PREFIX, urlencoding::encode(address))
}

/// Directory of remembered sensor specs, one file per device address.
pub struct SensorSpecStore {
    root: PathBuf,
    encoding: Encoding,
    encoder: Box<dyn Encoder<SensorSpecRecord>>,
}

impl SensorSpecStore {
    pub fn new<P: Into<PathBuf>>(root: P, encoding: Encoding) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            encoding,
            encoder: encoding.encoder()?,
        })
    }

    pub fn from_config(config: &StoreConfig) -> Result<Self, StorageError> {
        Self::new(config.store_dir.clone(), config.encoding)
    }

    pub fn from_default_env() -> Result<Self, StorageError> {
        Self::from_config(get_config()?)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Path the spec for `address` is written to.
    pub fn path_for(&self, address: &str) -> PathBuf {
        self.root.join(format!(
            "{}.{}",
            file_stem_for_address(address),
            self.encoding.extension()
        ))
    }

    /// Persists `spec`, replacing anything stored for the same address.
    pub fn remember(&self, spec: &SensorSpec) -> Result<PathBuf, StorageError> {
        let path = self.path_for(spec.address());
        let bytes = self.encoder.encode(spec.proto())?;
        fs::write(&path, bytes)?;
        debug!("Remembered sensor {} at {}", spec.address(), path.display());
        Ok(path)
    }

    /// Returns `None` if no spec is stored for `address`.
    pub fn recall(&self, address: &str) -> Result<Option<SensorSpec>, StorageError> {
        let path = self.path_for(address);
        let spec = match self.read(&path)? {
            Some(spec) => spec,
            None => return Ok(None),
        };
        if spec.address() != address {
            warn!(
                "{} holds sensor {}, not {}",
                path.display(),
                spec.address(),
                address
            );
            return Ok(None);
        }
        Ok(Some(spec))
    }

    /// Returns whether a spec was removed. A file holding another address is left alone.
    pub fn forget(&self, address: &str) -> Result<bool, StorageError> {
        if self.recall(address)?.is_none() {
            return Ok(false);
        }
        match fs::remove_file(self.path_for(address)) {
            Ok(()) => {
                debug!("Forgot sensor {}", address);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// All stored specs, sorted by address.
    pub fn list(&self) -> Result<Vec<SensorSpec>, StorageError> {
        let mut specs = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            let matches_encoding = path
                .extension()
                .map_or(false, |ext| ext == self.encoding.extension());
            if !path.is_file() || !matches_encoding {
                continue;
            }
            match self.read(&path) {
                Ok(Some(spec)) => specs.push(spec),
                Ok(None) => {}
                Err(StorageError::EncodeError(e)) => {
                    warn!("Skipping unreadable sensor spec {}: {}", path.display(), e);
                }
                Err(e) => return Err(e),
            }
        }
        specs.sort_by(|a, b| a.address().cmp(b.address()));
        Ok(specs)
    }

    fn read(&self, path: &Path) -> Result<Option<SensorSpec>, StorageError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record = self.encoder.decode(&bytes)?;
        Ok(Some(SensorSpec::from_proto(record)))
    }
}
