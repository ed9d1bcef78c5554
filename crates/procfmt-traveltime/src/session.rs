//! Session parameters a travel-time engine is primed with before it answers
//! a run of requests for one source.

use serde::{Deserialize, Serialize};

use procfmt_core::{Defects, Entity, Validate};

/// Source depth bounds in kilometers for a session.
pub const SESSION_DEPTH_RANGE: (f64, f64) = (-100.0, 1500.0);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelTimeSession {
    /// Kilometers.
    #[serde(rename = "SourceDepth", skip_serializing_if = "Option::is_none")]
    pub source_depth: Option<f64>,
    #[serde(rename = "EarthModel", skip_serializing_if = "Option::is_none")]
    pub earth_model: Option<String>,
    #[serde(rename = "PhaseTypes", skip_serializing_if = "Option::is_none")]
    pub phase_types: Option<Vec<String>>,
    /// Needed for tectonic conversion and regional models.
    #[serde(rename = "SourceLatitude", skip_serializing_if = "Option::is_none")]
    pub source_latitude: Option<f64>,
    #[serde(rename = "SourceLongitude", skip_serializing_if = "Option::is_none")]
    pub source_longitude: Option<f64>,
    #[serde(rename = "ReturnAllPhases", skip_serializing_if = "Option::is_none")]
    pub return_all_phases: Option<bool>,
    #[serde(rename = "ReturnBackBranches", skip_serializing_if = "Option::is_none")]
    pub return_back_branches: Option<bool>,
    #[serde(rename = "ConvertTectonic", skip_serializing_if = "Option::is_none")]
    pub convert_tectonic: Option<bool>,
    /// Use the regional seismic travel-time model.
    #[serde(rename = "UseRSTT", skip_serializing_if = "Option::is_none")]
    pub use_rstt: Option<bool>,
    /// The session serves plot requests.
    #[serde(rename = "IsPlot", skip_serializing_if = "Option::is_none")]
    pub is_plot: Option<bool>,
}

impl TravelTimeSession {
    pub fn new(source_depth: f64) -> Self {
        Self {
            source_depth: Some(source_depth),
            ..Self::default()
        }
    }

    pub fn with_epicenter(mut self, latitude: f64, longitude: f64) -> Self {
        self.source_latitude = Some(latitude);
        self.source_longitude = Some(longitude);
        self
    }
}

impl Validate for TravelTimeSession {
    const CLASS: &'static str = "TravelTimeSession";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require_range(
            "SourceDepth",
            self.source_depth,
            SESSION_DEPTH_RANGE.0,
            SESSION_DEPTH_RANGE.1,
        );
        defects.optional_range("SourceLatitude", self.source_latitude, -90.0, 90.0);
        defects.optional_range("SourceLongitude", self.source_longitude, -180.0, 180.0);
    }
}

impl Entity for TravelTimeSession {}
