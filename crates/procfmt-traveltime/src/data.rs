//! # TravelTimeData: One Phase Arrival Prediction
//!
//! The answer a travel-time engine gives for a single phase at a single
//! source-receiver geometry. All eleven fields are required.
//!
//! The two phase-group identifiers arrive as integers from some producers and
//! as strings from others; both decode to a string.

use serde::{Deserialize, Serialize};

use procfmt_core::{string_or_number, Defects, Entity, Validate};

/// Predicted travel time and derivatives for one phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelTimeData {
    /// Phase code (`Pg`).
    #[serde(rename = "Phase", skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Seconds.
    #[serde(rename = "TravelTime", skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<f64>,
    /// Seconds per degree.
    #[serde(rename = "DistanceDerivative", skip_serializing_if = "Option::is_none")]
    pub distance_derivative: Option<f64>,
    /// Seconds per kilometer.
    #[serde(rename = "DepthDerivative", skip_serializing_if = "Option::is_none")]
    pub depth_derivative: Option<f64>,
    /// Seconds-degrees per kilometer.
    #[serde(rename = "RayDerivative", skip_serializing_if = "Option::is_none")]
    pub ray_derivative: Option<f64>,
    /// Seconds.
    #[serde(rename = "StatisticalSpread", skip_serializing_if = "Option::is_none")]
    pub statistical_spread: Option<f64>,
    /// Relative observability.
    #[serde(rename = "Observability", skip_serializing_if = "Option::is_none")]
    pub observability: Option<f64>,
    #[serde(
        rename = "TeleseismicPhaseGroup",
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub teleseismic_phase_group: Option<String>,
    #[serde(
        rename = "AuxiliaryPhaseGroup",
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub auxiliary_phase_group: Option<String>,
    /// Whether a locator may use this phase.
    #[serde(rename = "LocationUseFlag", skip_serializing_if = "Option::is_none")]
    pub location_use_flag: Option<bool>,
    /// Whether this phase is down-weighted during association.
    #[serde(rename = "AssociationWeightFlag", skip_serializing_if = "Option::is_none")]
    pub association_weight_flag: Option<bool>,
}

/// The numeric part of a [`TravelTimeData`], grouped for construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelTimeFigures {
    pub travel_time: f64,
    pub distance_derivative: f64,
    pub depth_derivative: f64,
    pub ray_derivative: f64,
    pub statistical_spread: f64,
    pub observability: f64,
}

impl TravelTimeData {
    /// Fully-populated prediction.
    pub fn new(
        phase: impl Into<String>,
        figures: TravelTimeFigures,
        teleseismic_phase_group: impl Into<String>,
        auxiliary_phase_group: impl Into<String>,
        location_use_flag: bool,
        association_weight_flag: bool,
    ) -> Self {
        Self {
            phase: Some(phase.into()),
            travel_time: Some(figures.travel_time),
            distance_derivative: Some(figures.distance_derivative),
            depth_derivative: Some(figures.depth_derivative),
            ray_derivative: Some(figures.ray_derivative),
            statistical_spread: Some(figures.statistical_spread),
            observability: Some(figures.observability),
            teleseismic_phase_group: Some(teleseismic_phase_group.into()),
            auxiliary_phase_group: Some(auxiliary_phase_group.into()),
            location_use_flag: Some(location_use_flag),
            association_weight_flag: Some(association_weight_flag),
        }
    }
}

impl Validate for TravelTimeData {
    const CLASS: &'static str = "TravelTimeData";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require_text("Phase", &self.phase);
        defects.require("TravelTime", &self.travel_time);
        defects.require("DistanceDerivative", &self.distance_derivative);
        defects.require("DepthDerivative", &self.depth_derivative);
        defects.require("RayDerivative", &self.ray_derivative);
        defects.require("StatisticalSpread", &self.statistical_spread);
        defects.require("Observability", &self.observability);
        defects.require_text("TeleseismicPhaseGroup", &self.teleseismic_phase_group);
        defects.require_text("AuxiliaryPhaseGroup", &self.auxiliary_phase_group);
        defects.require("LocationUseFlag", &self.location_use_flag);
        defects.require("AssociationWeightFlag", &self.association_weight_flag);
    }
}

impl Entity for TravelTimeData {}


#[cfg(test)]
mod tests {
    use super::fixtures::pg;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_integer_phase_groups() {
        let data = TravelTimeData::from_json(&json!({
            "LocationUseFlag": true, "DistanceDerivative": 1.2, "DepthDerivative": 3.45,
            "AssociationWeightFlag": true, "Type": "TTData", "TeleseismicPhaseGroup": 1,
            "Phase": "Pg", "RayDerivative": 5.67, "AuxiliaryPhaseGroup": 1,
            "Observability": 0.34, "StatisticalSpread": 1.5, "TravelTime": 22.456
        }))
        .unwrap();
        assert_eq!(data, pg());
        assert!(data.is_valid());
    }

    #[test]
    fn test_string_phase_groups_accepted() {
        let mut value = pg().to_json().unwrap();
        value["TeleseismicPhaseGroup"] = json!("2");
        let data = TravelTimeData::from_json(&value).unwrap();
        assert_eq!(data.teleseismic_phase_group.as_deref(), Some("2"));
    }

    #[test]
    fn test_encode_has_no_type() {
        assert!(pg().to_json().unwrap().get("Type").is_none());
    }

    #[test]
    fn test_boolean_phase_group_rejected() {
        let mut value = pg().to_json().unwrap();
        value["AuxiliaryPhaseGroup"] = json!(true);
        assert!(TravelTimeData::from_json(&value).is_err());
    }

    // ---- validation ----

    #[test]
    fn test_every_field_required() {
        let errors = TravelTimeData::default().errors();
        assert_eq!(errors.len(), 11);
        assert_eq!(errors[0], "No Phase in TravelTimeData Class.");
        assert_eq!(errors[10], "No AssociationWeightFlag in TravelTimeData Class.");
    }

    #[test]
    fn test_empty_phase() {
        let mut data = pg();
        data.phase = Some(String::new());
        assert_eq!(data.errors(), vec!["Empty Phase in TravelTimeData Class."]);
    }
}
