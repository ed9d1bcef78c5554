//! # Error Types: Structured Error Hierarchy
//!
//! Defines the fatal error types of the processing-formats workspace. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Validation defects are **not** errors. They are plain strings returned
//!   by [`Validate::errors`](crate::validation::Validate::errors) and never
//!   raised.
//! - Decode errors carry the offending JSON shape or timestamp text.
//! - Configuration errors name the setting that could not be parsed.

use thiserror::Error;

/// Top-level error type for the processing-formats workspace.
#[derive(Error, Debug)]
pub enum ProcfmtError {
    /// Encoding or decoding an entity failed.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Loading validation configuration failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Error converting an entity to or from its JSON wire form.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The decode input was not a JSON object.
    #[error("expected a JSON object for {entity}, got {found}")]
    NotAnObject {
        /// Entity being decoded.
        entity: &'static str,
        /// JSON kind actually found (`array`, `string`, ...).
        found: &'static str,
    },

    /// A timestamp string did not parse as RFC 3339.
    #[error("invalid timestamp {text:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        text: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// An entity held a NaN or infinite number, which JSON cannot carry.
    #[error("{entity} holds a non-finite number at {key}")]
    NonFinite {
        /// Entity being encoded.
        entity: &'static str,
        /// Path of the offending key (`Hypocenter.Depth`).
        key: String,
    },

    /// A known key held a value of an incompatible JSON type, or the
    /// document was not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error loading a [`ValidationConfig`](crate::config::ValidationConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An unknown list policy name.
    #[error("unknown list policy {0:?}; expected \"first-invalid\" or \"report-all\"")]
    UnknownListPolicy(String),

    /// The YAML document could not be parsed.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A string did not name any variant of an enumerated wire value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    /// Enumeration being parsed (`source type`, `locator exit code`, ...).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Name of a JSON value's kind, used in [`CodecError::NotAnObject`].
pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Entity;
    use crate::config::ValidationConfig;
    use crate::source::Source;

    fn load(doc: &str, config: &str) -> Result<(Source, ValidationConfig), ProcfmtError> {
        let source = Source::from_json_str(doc)?;
        let config = ValidationConfig::from_yaml_str(config)?;
        Ok((source, config))
    }

    #[test]
    fn test_codec_error_converts() {
        let err = load("[]", "{}").unwrap_err();
        assert!(matches!(err, ProcfmtError::Codec(CodecError::NotAnObject { .. })));
        assert_eq!(
            err.to_string(),
            "codec error: expected a JSON object for Source, got array"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err = load("{}", "list_policy: [1, 2]").unwrap_err();
        assert!(matches!(err, ProcfmtError::Config(ConfigError::Yaml(_))));
        assert!(err.to_string().starts_with("config error: yaml error: "));
    }

    #[test]
    fn test_both_ok() {
        assert!(load(r#"{"AgencyID":"US"}"#, "list_policy: first-invalid").is_ok());
    }

    #[test]
    fn test_unknown_variant_display() {
        let err = UnknownVariant {
            kind: "source type",
            value: "Robot".to_string(),
        };
        assert_eq!(err.to_string(), "unknown source type: \"Robot\"");
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&serde_json::json!(null)), "null");
        assert_eq!(json_kind(&serde_json::json!(1)), "number");
        assert_eq!(json_kind(&serde_json::json!({})), "object");
    }
}
