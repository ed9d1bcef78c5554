//! # TravelTimeRequest: Mode-Dispatched Travel-Time Envelope
//!
//! A request names a mode (`Standard`, `Plot`, or `PlotStatistics`) and a
//! receiver geometry. The engine answers by filling `Data` with payloads of
//! the kind the mode calls for.
//!
//! ## Wire Rules
//!
//! - `Data` decodes from a single payload object or an array of them; the
//!   array is canonical and is what encoding writes.
//! - Encoding writes only the payloads that match the mode, and omits
//!   `Data` when none do.
//! - A payload that contradicts the mode still decodes. Validation reports
//!   it as erroneous.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use procfmt_core::{Defects, Entity, ListPolicy, Validate};

use crate::data::TravelTimeData;
use crate::payload::{TravelTimeMode, TravelTimePayload};
use crate::plot::TravelTimePlotData;

fn payloads<'de, D>(deserializer: D) -> Result<Vec<TravelTimePayload>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(value) => TravelTimePayload::resolve_all(&value).map_err(de::Error::custom),
    }
}

/// Travel-time request and, once answered, its response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TravelTimeRequest {
    /// Raw mode string; see [`TravelTimeMode`].
    #[serde(rename = "Type")]
    pub mode: Option<String>,
    /// Source-receiver distance in degrees.
    #[serde(rename = "Distance")]
    pub distance: Option<f64>,
    /// Receiver elevation in meters.
    #[serde(rename = "Elevation")]
    pub elevation: Option<f64>,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
    /// Resolved payloads, in wire order.
    #[serde(rename = "Data", default, deserialize_with = "payloads")]
    pub data: Vec<TravelTimePayload>,
}

impl Serialize for TravelTimeRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire<'a> {
            #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
            mode: Option<&'a str>,
            #[serde(rename = "Distance", skip_serializing_if = "Option::is_none")]
            distance: Option<f64>,
            #[serde(rename = "Elevation", skip_serializing_if = "Option::is_none")]
            elevation: Option<f64>,
            #[serde(rename = "Latitude", skip_serializing_if = "Option::is_none")]
            latitude: Option<f64>,
            #[serde(rename = "Longitude", skip_serializing_if = "Option::is_none")]
            longitude: Option<f64>,
            #[serde(rename = "Data", skip_serializing_if = "Vec::is_empty")]
            data: Vec<&'a TravelTimePayload>,
        }

        Wire {
            mode: self.mode.as_deref(),
            distance: self.distance,
            elevation: self.elevation,
            latitude: self.latitude,
            longitude: self.longitude,
            data: self.answer().collect(),
        }
        .serialize(serializer)
    }
}

impl TravelTimeRequest {
    /// Unanswered request for a receiver at `distance` degrees and
    /// `elevation` meters.
    pub fn new(mode: TravelTimeMode, distance: f64, elevation: f64) -> Self {
        Self {
            mode: Some(mode.as_str().to_string()),
            distance: Some(distance),
            elevation: Some(elevation),
            ..Self::default()
        }
    }

    /// Set the receiver position.
    pub fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Append a payload.
    pub fn with_payload(mut self, payload: impl Into<TravelTimePayload>) -> Self {
        self.data.push(payload.into());
        self
    }

    /// Typed mode, or `None` when absent or unrecognized.
    pub fn mode(&self) -> Option<TravelTimeMode> {
        self.mode.as_deref().and_then(|m| m.parse().ok())
    }

    pub fn set_mode(&mut self, mode: TravelTimeMode) {
        self.mode = Some(mode.as_str().to_string());
    }

    /// Payloads that answer the current mode. Empty when the mode is
    /// absent or unrecognized.
    pub fn answer(&self) -> impl Iterator<Item = &TravelTimePayload> + '_ {
        let mode = self.mode();
        self.data
            .iter()
            .filter(move |p| mode.is_some_and(|m| p.matches(m)))
    }

    /// Every standard payload, whatever the mode.
    pub fn standard_data(&self) -> impl Iterator<Item = &TravelTimeData> + '_ {
        self.data.iter().filter_map(TravelTimePayload::as_standard)
    }

    /// Every plot payload, whatever the mode.
    pub fn plot_data(&self) -> impl Iterator<Item = &TravelTimePlotData> + '_ {
        self.data.iter().filter_map(TravelTimePayload::as_plot)
    }

    fn check_payloads(&self, mode: TravelTimeMode, defects: &mut Defects<'_>) {
        let (wanted, unwanted) = if mode.expects_plot() {
            (TravelTimePlotData::CLASS, TravelTimeData::CLASS)
        } else {
            (TravelTimeData::CLASS, TravelTimePlotData::CLASS)
        };
        let config = defects.config();
        let class = defects.class();

        for (index, payload) in self.data.iter().enumerate() {
            if !payload.matches(mode) || payload.errors_with(config).is_empty() {
                continue;
            }
            match config.list_policy {
                ListPolicy::FirstInvalid => {
                    defects.add(format!("Invalid {wanted} in {class} Class of Type {mode}."));
                    break;
                }
                ListPolicy::ReportAll => defects.add(format!(
                    "Invalid {wanted} in Data[{index}] in {class} Class of Type {mode}."
                )),
            }
        }

        if self.data.iter().any(|p| !p.matches(mode)) {
            defects.add(format!("Erroneous {unwanted} in {class} Class of Type {mode}."));
        }
    }
}

impl Validate for TravelTimeRequest {
    const CLASS: &'static str = "TravelTimeRequest";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require_variant::<TravelTimeMode>("Type", &self.mode);
        defects.require("Distance", &self.distance);
        defects.require("Elevation", &self.elevation);
        defects.optional_range("Latitude", self.latitude, -90.0, 90.0);
        defects.optional_range("Longitude", self.longitude, -180.0, 180.0);
        if let Some(mode) = self.mode() {
            self.check_payloads(mode, defects);
        }
    }
}

impl Entity for TravelTimeRequest {}
