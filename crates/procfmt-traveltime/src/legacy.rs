//! # Migration from Earlier Travel-Time Layouts
//!
//! Two older layouts are still produced in the field:
//!
//! - **`TravelTimeReciever`** (sic). Same keys as [`TravelTimeReceiver`], but
//!   every branch carries a `Type` and only `TTData` branches are meaningful.
//!   [`receiver_from_reciever`] keeps those and drops the rest.
//!
//! - **Receiver batch.** One document holding a `Source`, session options,
//!   a `Receivers` list, and, once answered, a `Response` list of receivers
//!   with branches. [`requests_from_receiver_batch`] splits it into a
//!   [`TravelTimeSession`] plus one `Standard` [`TravelTimeRequest`] per
//!   receiver.

use serde::Deserialize;
use serde_json::{Map, Value};

use procfmt_core::error::json_kind;
use procfmt_core::{discriminator, CodecError, Entity};

use crate::payload::{TravelTimeMode, TravelTimePayload, STANDARD_TAG};
use crate::receiver::TravelTimeReceiver;
use crate::request::TravelTimeRequest;
use crate::session::TravelTimeSession;
use crate::source::TravelTimeSource;

const BRANCHES_KEY: &str = "Branches";

fn object<'v>(value: &'v Value, entity: &'static str) -> Result<&'v Map<String, Value>, CodecError> {
    value.as_object().ok_or(CodecError::NotAnObject {
        entity,
        found: json_kind(value),
    })
}

/// Decode the misspelled receiver layout, keeping only `TTData` branches.
pub fn receiver_from_reciever(value: &Value) -> Result<TravelTimeReceiver, CodecError> {
    let mut fields = object(value, "TravelTimeReciever")?.clone();
    if let Some(Value::Array(branches)) = fields.get_mut(BRANCHES_KEY) {
        let before = branches.len();
        branches.retain(|b| discriminator(b) == Some(STANDARD_TAG));
        if branches.len() != before {
            tracing::debug!(
                dropped = before - branches.len(),
                kept = branches.len(),
                "dropping receiver branches that are not TTData"
            );
        }
    }
    TravelTimeReceiver::from_json(&Value::Object(fields))
}

#[derive(Deserialize)]
struct BatchLayout {
    #[serde(rename = "Source")]
    source: Option<TravelTimeSource>,
    #[serde(rename = "Receivers")]
    receivers: Option<Vec<TravelTimeReceiver>>,
    #[serde(rename = "EarthModel")]
    earth_model: Option<String>,
    #[serde(rename = "PhaseTypes")]
    phase_types: Option<Vec<String>>,
    #[serde(rename = "ReturnAllPhases")]
    return_all_phases: Option<bool>,
    #[serde(rename = "ReturnBackBranches")]
    return_back_branches: Option<bool>,
    #[serde(rename = "ConvertTectonic")]
    convert_tectonic: Option<bool>,
    #[serde(rename = "Response")]
    response: Option<Vec<TravelTimeReceiver>>,
}

/// One receiver of a batch, as a canonical request.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverRequest {
    /// Receiver `ID` from the batch; the canonical request has no slot for it.
    pub receiver_id: Option<String>,
    pub request: TravelTimeRequest,
}

/// A receiver batch split into canonical parts.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverBatch {
    /// Source position and engine options shared by every receiver.
    pub session: TravelTimeSession,
    /// One `Standard` request per receiver, in batch order.
    pub requests: Vec<ReceiverRequest>,
}

impl From<TravelTimeReceiver> for ReceiverRequest {
    fn from(receiver: TravelTimeReceiver) -> Self {
        let request = TravelTimeRequest {
            mode: Some(TravelTimeMode::Standard.as_str().to_string()),
            distance: receiver.distance,
            elevation: receiver.elevation,
            latitude: receiver.latitude,
            longitude: receiver.longitude,
            data: receiver
                .branches
                .unwrap_or_default()
                .into_iter()
                .map(TravelTimePayload::Standard)
                .collect(),
        };
        Self {
            receiver_id: receiver.id,
            request,
        }
    }
}

/// Split a receiver batch. Answered receivers (`Response`) are preferred
/// over the bare `Receivers` list when both are present.
pub fn requests_from_receiver_batch(value: &Value) -> Result<ReceiverBatch, CodecError> {
    object(value, "TravelTimeRequest")?;
    let batch = BatchLayout::deserialize(value)?;

    let session = TravelTimeSession {
        source_depth: batch.source.as_ref().and_then(|s| s.depth),
        earth_model: batch.earth_model,
        phase_types: batch.phase_types,
        source_latitude: batch.source.as_ref().and_then(|s| s.latitude),
        source_longitude: batch.source.as_ref().and_then(|s| s.longitude),
        return_all_phases: batch.return_all_phases,
        return_back_branches: batch.return_back_branches,
        convert_tectonic: batch.convert_tectonic,
        use_rstt: None,
        is_plot: Some(false),
    };

    let receivers = match (batch.response, batch.receivers) {
        (Some(response), _) if !response.is_empty() => response,
        (_, Some(receivers)) => receivers,
        _ => Vec::new(),
    };
    tracing::debug!(receivers = receivers.len(), "split receiver batch");

    Ok(ReceiverBatch {
        session,
        requests: receivers.into_iter().map(ReceiverRequest::from).collect(),
    })
}
