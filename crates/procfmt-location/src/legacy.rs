//! Migration from the legacy location layout.
//!
//! Older producers emitted the locator output as a `LocationData` object
//! whose pick list lives under `AssociatedData`. The current layout is
//! [`LocationResult`] with `SupportingData`. These adapters rewrite the key
//! and decode through the normal codec, so every other field follows the
//! current rules.

use serde_json::{Map, Value};

use procfmt_core::error::json_kind;
use procfmt_core::{CodecError, Entity};

use crate::request::LocationRequest;
use crate::result::LocationResult;

const LEGACY_PICKS_KEY: &str = "AssociatedData";
const PICKS_KEY: &str = "SupportingData";
const OUTPUT_KEY: &str = "OutputData";

fn object<'v>(value: &'v Value, entity: &'static str) -> Result<&'v Map<String, Value>, CodecError> {
    value.as_object().ok_or(CodecError::NotAnObject {
        entity,
        found: json_kind(value),
    })
}

/// Rename `AssociatedData` to `SupportingData`. A document that already
/// carries `SupportingData` keeps it and the legacy list is dropped.
fn migrate_picks(mut fields: Map<String, Value>) -> Map<String, Value> {
    if let Some(picks) = fields.remove(LEGACY_PICKS_KEY) {
        if fields.contains_key(PICKS_KEY) {
            tracing::debug!(
                legacy = LEGACY_PICKS_KEY,
                current = PICKS_KEY,
                "both pick lists present, keeping current"
            );
        } else {
            fields.insert(PICKS_KEY.to_string(), picks);
        }
    }
    fields
}

/// Decode a legacy `LocationData` document as a [`LocationResult`].
pub fn location_result_from_location_data(value: &Value) -> Result<LocationResult, CodecError> {
    let fields = migrate_picks(object(value, "LocationData")?.clone());
    LocationResult::from_json(&Value::Object(fields))
}

/// Decode a [`LocationRequest`] whose `OutputData` may use the legacy
/// `LocationData` layout.
pub fn location_request_from_legacy(value: &Value) -> Result<LocationRequest, CodecError> {
    let mut fields = object(value, "LocationRequest")?.clone();
    if let Some(output) = fields.remove(OUTPUT_KEY) {
        let migrated = match output {
            Value::Object(map) => Value::Object(migrate_picks(map)),
            other => other,
        };
        fields.insert(OUTPUT_KEY.to_string(), migrated);
    }
    LocationRequest::from_json(&Value::Object(fields))
}
