use crate::models;
pub use crate::models::IconPathType;

/// Reference to a display icon, resolved later by the icon catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconPath {
    pub path_type: IconPathType,
    pub path_string: Option<String>,
}

/// Icon assigned to every spec built from a BLE sensor interface.
pub const DEFAULT_ICON_PATH: IconPath = IconPath {
    path_type: IconPathType::Proto,
    path_string: None,
};

impl IconPath {
    pub fn new(path_type: IconPathType, path_string: Option<String>) -> Self {
        Self { path_type, path_string }
    }

    pub fn to_proto(&self) -> models::IconPath {
        models::IconPath {
            path_type: self.path_type as i32,
            path_string: self.path_string.clone(),
        }
    }

    /// Unknown path types decode as `Builtin`.
    pub fn from_proto(m: &models::IconPath) -> Self {
        Self {
            path_type: m.path_type(),
            path_string: m.path_string.clone(),
        }
    }
}

impl Default for IconPath {
    fn default() -> Self {
        DEFAULT_ICON_PATH
    }
}
