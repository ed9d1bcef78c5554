//! A receiver in a batch travel-time request, and once answered, the
//! predicted branches at that receiver.
//!
//! A receiver is located either by `Distance` from the source or by an
//! absolute `Latitude`/`Longitude` pair; at least one of the two must be
//! given.
//!
//! Every branch goes out with `"Type": "TTData"`. On decode a branch may
//! omit the tag, but a branch tagged as anything else is a decode error.

use serde::{Deserialize, Serialize};

use procfmt_core::{string_or_number, Defects, Entity, ListDetail, ListField, Validate};

use crate::data::TravelTimeData;
use crate::source::SOURCE_DEPTH_RANGE;

const BRANCHES: ListField = ListField {
    key: "Branches",
    noun: "branch",
    item: "TravelTimeData",
    detail: ListDetail::Summary,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelTimeReceiver {
    /// Caller-chosen receiver identifier, echoed in the response.
    #[serde(
        rename = "ID",
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Degrees from the source, [0, 360].
    #[serde(rename = "Distance", skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(rename = "Elevation", skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
    #[serde(rename = "Latitude", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Predicted phases; absent on a request.
    #[serde(
        rename = "Branches",
        default,
        with = "tagged_branches",
        skip_serializing_if = "Option::is_none"
    )]
    pub branches: Option<Vec<TravelTimeData>>,
}

/// `Branches` in their tagged wire form.
mod tagged_branches {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    use crate::data::TravelTimeData;
    use crate::payload::STANDARD_TAG;

    #[derive(Serialize)]
    #[serde(tag = "Type")]
    enum Tagged<'a> {
        #[serde(rename = "TTData")]
        Standard(&'a TravelTimeData),
    }

    pub fn serialize<S>(
        branches: &Option<Vec<TravelTimeData>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match branches {
            Some(list) => serializer.collect_seq(list.iter().map(Tagged::Standard)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<TravelTimeData>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<Vec<Value>>::deserialize(deserializer)? else {
            return Ok(None);
        };
        raw.iter()
            .enumerate()
            .map(|(i, branch)| {
                match branch.get("Type") {
                    None | Some(Value::Null) => {}
                    Some(Value::String(tag)) if tag == STANDARD_TAG => {}
                    Some(other) => {
                        return Err(D::Error::custom(format!(
                            "branch {i} has Type {other}, expected \"{STANDARD_TAG}\""
                        )));
                    }
                }
                TravelTimeData::deserialize(branch).map_err(D::Error::custom)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

impl TravelTimeReceiver {
    /// Receiver located by distance from the source.
    pub fn at_distance(id: impl Into<String>, distance: f64, elevation: f64) -> Self {
        Self {
            id: Some(id.into()),
            distance: Some(distance),
            elevation: Some(elevation),
            ..Self::default()
        }
    }

    /// Receiver located by absolute position.
    pub fn at_position(id: impl Into<String>, latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            id: Some(id.into()),
            elevation: Some(elevation),
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    pub fn with_branches(mut self, branches: Vec<TravelTimeData>) -> Self {
        self.branches = Some(branches);
        self
    }

    /// `true` when the receiver can be placed relative to a source.
    pub fn is_located(&self) -> bool {
        self.distance.is_some() || (self.latitude.is_some() && self.longitude.is_some())
    }
}

impl Validate for TravelTimeReceiver {
    const CLASS: &'static str = "TravelTimeReceiver";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require_text("ID", &self.id);
        if !self.is_located() {
            defects.missing("Distance or Latitude/Longitude");
        }
        defects.optional_range("Distance", self.distance, 0.0, 360.0);
        defects.require_range(
            "Elevation",
            self.elevation,
            SOURCE_DEPTH_RANGE.0,
            SOURCE_DEPTH_RANGE.1,
        );
        defects.optional_range("Latitude", self.latitude, -90.0, 90.0);
        defects.optional_range("Longitude", self.longitude, -180.0, 180.0);
        defects.optional_list(&BRANCHES, &self.branches);
    }
}

impl Entity for TravelTimeReceiver {}
