use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShootoutError {
    #[error("Invalid config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Schema version mismatch: found {found}, expected {expected}")]
    SchemaVersionMismatch { found: u8, expected: u8 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ShootoutError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ShootoutError::InvalidConfig { field, reason: reason.into() }
    }

    /// Config rejected on content rather than on syntax.
    pub fn is_config_error(&self) -> bool {
        matches!(self, ShootoutError::InvalidConfig { .. } | ShootoutError::UnknownPreset(_))
    }
}

pub type Result<T> = std::result::Result<T, ShootoutError>;
