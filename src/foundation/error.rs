/// Result alias used across the crate.
pub type RaysceneResult<T> = Result<T, RaysceneError>;

/// Error type returned by scene construction and serialization.
#[derive(thiserror::Error, Debug)]
pub enum RaysceneError {
    /// Malformed arity, non-finite or out-of-range input, or a structural rule violation.
    #[error("value error: {0}")]
    Value(String),

    /// A property name outside the capability set of a modifier kind.
    #[error("key error: unknown {kind} property '{key}'")]
    UnknownKey {
        /// Modifier keyword (`pigment`, `finish`, ...).
        kind: &'static str,
        /// Rejected property name.
        key: String,
    },

    /// Serialization was requested for a scene without a camera.
    #[error("scene error: missing camera (a scene needs exactly one camera to serialize)")]
    MissingCamera,

    /// Programming defect inside the serializer, never caused by caller input.
    #[error("internal error: {0}")]
    Internal(String),

    /// Invalid serializer options.
    #[error("config error: {0}")]
    Config(String),

    /// Passthrough for foreign errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RaysceneError {
    /// Build a [`RaysceneError::Value`].
    pub fn value(msg: impl Into<String>) -> Self {
        Self::Value(msg.into())
    }

    /// Build a [`RaysceneError::UnknownKey`].
    pub fn unknown_key(kind: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownKey {
            kind,
            key: key.into(),
        }
    }

    /// Build a [`RaysceneError::Internal`].
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Build a [`RaysceneError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// `true` for caller input errors (value/key/camera), `false` for defects and config.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Value(_) | Self::UnknownKey { .. } | Self::MissingCamera
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
