use serde::{Deserialize, Serialize};

use procfmt_core::{Defects, Entity, Validate};

/// Depth bounds in kilometers accepted by the travel-time engines.
pub const SOURCE_DEPTH_RANGE: (f64, f64) = (-100.0, 1000.0);

/// Earthquake position a travel-time calculation starts from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelTimeSource {
    #[serde(rename = "Latitude", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Kilometers.
    #[serde(rename = "Depth", skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

impl TravelTimeSource {
    pub fn new(latitude: f64, longitude: f64, depth: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            depth: Some(depth),
        }
    }
}

impl Validate for TravelTimeSource {
    const CLASS: &'static str = "TravelTimeSource";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require_range("Latitude", self.latitude, -90.0, 90.0);
        defects.require_range("Longitude", self.longitude, -180.0, 180.0);
        defects.require_range("Depth", self.depth, SOURCE_DEPTH_RANGE.0, SOURCE_DEPTH_RANGE.1);
    }
}

impl Entity for TravelTimeSource {}
