//! # Polymorphic Travel-Time Payload
//!
//! A [`TravelTimeRequest`](crate::TravelTimeRequest) carries its answer in a
//! `Data` field whose element type depends on the request mode. Each
//! element names its own kind with an embedded `Type`:
//!
//! | Payload `Type` | Variant | Answers modes |
//! |----------------|---------|---------------|
//! | `TTData` | [`TravelTimePayload::Standard`] | `Standard` |
//! | `TTPlotData` | [`TravelTimePayload::Plot`] | `Plot`, `PlotStatistics` |
//!
//! ## Resolution
//!
//! Each element starts undetermined and is resolved by its own `Type`. An
//! element with no `Type`, an unrecognized `Type`, or that is not an object
//! at all resolves to nothing: it is dropped with a `debug` event, never an
//! error. Whether a resolved payload fits the request mode is a validation
//! question, not a decode one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use procfmt_core::{discriminator, CodecError, Entity, UnknownVariant, Validate, ValidationConfig};

use crate::data::TravelTimeData;
use crate::plot::TravelTimePlotData;

/// Wire `Type` of a standard payload.
pub const STANDARD_TAG: &str = "TTData";

/// Wire `Type` of a plot payload.
pub const PLOT_TAG: &str = "TTPlotData";

/// What a travel-time request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelTimeMode {
    /// One [`TravelTimeData`] per phase at the request geometry.
    Standard,
    /// Travel-time curves.
    Plot,
    /// Travel-time curves with spread and observability.
    PlotStatistics,
}

impl TravelTimeMode {
    /// Every mode, in wire order.
    pub fn all() -> &'static [TravelTimeMode] {
        &[Self::Standard, Self::Plot, Self::PlotStatistics]
    }

    /// Wire string for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Plot => "Plot",
            Self::PlotStatistics => "PlotStatistics",
        }
    }

    /// `true` for the modes answered with plot payloads.
    pub fn expects_plot(&self) -> bool {
        matches!(self, Self::Plot | Self::PlotStatistics)
    }
}

impl fmt::Display for TravelTimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelTimeMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(Self::Standard),
            "Plot" => Ok(Self::Plot),
            "PlotStatistics" => Ok(Self::PlotStatistics),
            other => Err(UnknownVariant {
                kind: "travel-time mode",
                value: other.to_string(),
            }),
        }
    }
}

/// One resolved element of a request's `Data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "Type")]
pub enum TravelTimePayload {
    #[serde(rename = "TTData")]
    Standard(TravelTimeData),
    #[serde(rename = "TTPlotData")]
    Plot(TravelTimePlotData),
}

impl TravelTimePayload {
    /// Wire `Type` of this payload.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Standard(_) => STANDARD_TAG,
            Self::Plot(_) => PLOT_TAG,
        }
    }

    /// Entity name of the carried value.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Standard(_) => TravelTimeData::CLASS,
            Self::Plot(_) => TravelTimePlotData::CLASS,
        }
    }

    /// `true` when this payload answers `mode`.
    pub fn matches(&self, mode: TravelTimeMode) -> bool {
        match self {
            Self::Standard(_) => !mode.expects_plot(),
            Self::Plot(_) => mode.expects_plot(),
        }
    }

    pub fn as_standard(&self) -> Option<&TravelTimeData> {
        match self {
            Self::Standard(data) => Some(data),
            Self::Plot(_) => None,
        }
    }

    pub fn as_plot(&self) -> Option<&TravelTimePlotData> {
        match self {
            Self::Plot(data) => Some(data),
            Self::Standard(_) => None,
        }
    }

    /// Defects of the carried value.
    pub fn errors_with(&self, config: &ValidationConfig) -> Vec<String> {
        match self {
            Self::Standard(data) => data.errors_with(config),
            Self::Plot(data) => data.errors_with(config),
        }
    }

    /// Resolve one element by its embedded `Type`.
    ///
    /// Returns `Ok(None)` for elements that name no known payload. A known
    /// `Type` whose fields are malformed is a [`CodecError`].
    pub fn resolve(value: &Value) -> Result<Option<Self>, CodecError> {
        match discriminator(value) {
            Some(STANDARD_TAG) => Ok(Some(Self::Standard(TravelTimeData::from_json(value)?))),
            Some(PLOT_TAG) => Ok(Some(Self::Plot(TravelTimePlotData::from_json(value)?))),
            other => {
                tracing::debug!(payload_type = ?other, "dropping unrecognized travel-time payload");
                Ok(None)
            }
        }
    }

    /// Resolve a `Data` field given either as one object or as an array.
    pub fn resolve_all(value: &Value) -> Result<Vec<Self>, CodecError> {
        match value {
            Value::Array(items) => {
                let mut resolved = Vec::with_capacity(items.len());
                for item in items {
                    resolved.extend(Self::resolve(item)?);
                }
                Ok(resolved)
            }
            Value::Null => Ok(Vec::new()),
            single => Ok(Self::resolve(single)?.into_iter().collect()),
        }
    }
}

impl From<TravelTimeData> for TravelTimePayload {
    fn from(data: TravelTimeData) -> Self {
        Self::Standard(data)
    }
}

impl From<TravelTimePlotData> for TravelTimePayload {
    fn from(data: TravelTimePlotData) -> Self {
        Self::Plot(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::pg;
    use crate::plot::fixtures::plot;
    use serde_json::json;

    #[test]
    fn test_mode_roundtrip() {
        for mode in TravelTimeMode::all() {
            assert_eq!(mode.as_str().parse::<TravelTimeMode>().unwrap(), *mode);
        }
        let err = "Histogram".parse::<TravelTimeMode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown travel-time mode: \"Histogram\"");
    }

    #[test]
    fn test_encode_embeds_type() {
        let value = serde_json::to_value(TravelTimePayload::from(pg())).unwrap();
        assert_eq!(value["Type"], "TTData");
        assert_eq!(value["Phase"], "Pg");

        let value = serde_json::to_value(TravelTimePayload::from(plot())).unwrap();
        assert_eq!(value["Type"], "TTPlotData");
        assert_eq!(value["MaximumTravelTime"], 12.5);
    }

    // ---- resolution ----

    #[test]
    fn test_resolve_by_type() {
        let standard = serde_json::to_value(TravelTimePayload::from(pg())).unwrap();
        assert_eq!(
            TravelTimePayload::resolve(&standard).unwrap(),
            Some(TravelTimePayload::Standard(pg()))
        );
        let plotted = serde_json::to_value(TravelTimePayload::from(plot())).unwrap();
        assert_eq!(
            TravelTimePayload::resolve(&plotted).unwrap(),
            Some(TravelTimePayload::Plot(plot()))
        );
    }

    #[test]
    fn test_unrecognized_payloads_dropped() {
        for value in [
            json!({"Phase": "Pg"}),
            json!({"Type": "TTHistogram"}),
            json!({"Type": 7}),
            json!("TTData"),
            json!(12),
        ] {
            assert_eq!(TravelTimePayload::resolve(&value).unwrap(), None, "{value}");
        }
    }

    #[test]
    fn test_malformed_known_payload_is_error() {
        assert!(TravelTimePayload::resolve(&json!({"Type": "TTData", "TravelTime": "soon"})).is_err());
    }

    #[test]
    fn test_resolve_all_accepts_object_or_array() {
        let standard = serde_json::to_value(TravelTimePayload::from(pg())).unwrap();
        assert_eq!(TravelTimePayload::resolve_all(&standard).unwrap().len(), 1);

        let list = json!([standard, {"Type": "Other"}, standard]);
        assert_eq!(TravelTimePayload::resolve_all(&list).unwrap().len(), 2);

        assert!(TravelTimePayload::resolve_all(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_matches_mode() {
        let standard = TravelTimePayload::from(pg());
        let plotted = TravelTimePayload::from(plot());
        assert!(standard.matches(TravelTimeMode::Standard));
        assert!(!standard.matches(TravelTimeMode::PlotStatistics));
        assert!(plotted.matches(TravelTimeMode::Plot));
        assert!(plotted.matches(TravelTimeMode::PlotStatistics));
        assert!(!plotted.matches(TravelTimeMode::Standard));
    }
}
