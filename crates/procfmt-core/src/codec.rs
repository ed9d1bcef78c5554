//! # JSON Codec: Entity Wire Form
//!
//! Every entity converts to and from a generic `serde_json::Value` object.
//! The per-entity key tables are the `serde` attributes on each struct; this
//! module supplies the shared behavior around them.
//!
//! ## Rules
//!
//! 1. **Encode emits only present fields.** Every optional member carries
//!    `skip_serializing_if = "Option::is_none"`, so unset fields produce no
//!    key at all rather than `null`.
//! 2. **Decode reads known keys.** Absent keys stay `None`, unknown keys are
//!    ignored, an explicit `null` is treated as absent.
//! 3. **Checked coercion.** Integers are accepted wherever a float is
//!    expected (serde widens them). Identifier fields that some producers
//!    emit as bare numbers go through [`string_or_number`]. Anything else of
//!    the wrong JSON type is a [`CodecError::Json`], never a panic.
//! 4. **Decode input must be an object.** Arrays, strings, and scalars are
//!    rejected with [`CodecError::NotAnObject`] before field decoding.
//! 5. **Encode refuses non-finite numbers.** JSON has no NaN or infinity and
//!    `serde_json` would write them as `null`, so encoding an entity holding
//!    one fails with [`CodecError::NonFinite`] naming the key.

use std::fmt;

use serde::de::{self, DeserializeOwned, Visitor};
use serde::{Deserializer, Serialize};
use serde_json::Value;

use crate::error::{json_kind, CodecError};
use crate::validation::Validate;

/// Shared JSON and lifecycle operations of every entity.
///
/// Implementations are usually empty (`impl Entity for Site {}`); envelopes
/// override [`reload`](Entity::reload) to reset output-only state.
pub trait Entity: Validate + Serialize + DeserializeOwned + Sized {
    /// Encode as a JSON object containing only present fields.
    fn to_json(&self) -> Result<Value, CodecError> {
        let value = serde_json::to_value(self)?;
        if let Some(key) = null_key(&value) {
            return Err(CodecError::NonFinite {
                entity: Self::CLASS,
                key,
            });
        }
        Ok(value)
    }

    /// Encode as compact JSON text, keys in declaration order.
    fn to_json_string(&self) -> Result<String, CodecError> {
        self.to_json()?;
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from a JSON object.
    fn from_json(value: &Value) -> Result<Self, CodecError> {
        if !value.is_object() {
            return Err(CodecError::NotAnObject {
                entity: Self::CLASS,
                found: json_kind(value),
            });
        }
        Ok(Self::deserialize(value)?)
    }

    /// Decode from JSON text.
    fn from_json_str(text: &str) -> Result<Self, CodecError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    /// Replace every field with those of `fields`.
    fn reload(&mut self, fields: Self) {
        *self = fields;
    }
}

/// Deserialize an optional identifier that may arrive as a string or a number.
///
/// Use with `#[serde(default, deserialize_with = "string_or_number")]`.
/// Integral numbers render without a fraction (`1` → `"1"`, `1.0` → `"1"`).
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdentifierVisitor;

    impl<'de> Visitor<'de> for IdentifierVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            if !v.is_finite() {
                return Err(E::invalid_value(de::Unexpected::Float(v), &self));
            }
            Ok(Some(v.to_string()))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(IdentifierVisitor)
}

/// Path of the first `null` in an encoded entity (`Hypocenter.Depth`,
/// `InputData[2].Affinity`). Entities never emit `null` for an absent field,
/// so any `null` came from a non-finite float.
fn null_key(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => map.iter().find_map(|(k, v)| match v {
            Value::Null => Some(k.clone()),
            nested => null_key(nested).map(|rest| join_path(k, &rest)),
        }),
        Value::Array(items) => items.iter().enumerate().find_map(|(i, v)| match v {
            Value::Null => Some(format!("[{i}]")),
            nested => null_key(nested).map(|rest| join_path(&format!("[{i}]"), &rest)),
        }),
        _ => None,
    }
}

fn join_path(head: &str, rest: &str) -> String {
    if rest.starts_with('[') {
        format!("{head}{rest}")
    } else {
        format!("{head}.{rest}")
    }
}

/// Read the `Type` discriminator of a JSON object, if it is a string.
pub fn discriminator(value: &Value) -> Option<&str> {
    value.get("Type").and_then(Value::as_str)
}
