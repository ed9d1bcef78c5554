//! Travel-time plot trees: plot data owns branches, each branch owns an
//! ordered list of samples along distance.

use serde::{Deserialize, Serialize};

use procfmt_core::{Defects, Entity, ListDetail, ListField, Validate};

const SAMPLES: ListField = ListField {
    key: "Samples",
    noun: "sample",
    item: "TravelTimePlotDataSample",
    detail: ListDetail::Summary,
};

const BRANCHES: ListField = ListField {
    key: "Branches",
    noun: "branch",
    item: "TravelTimePlotDataBranch",
    detail: ListDetail::Summary,
};

/// One point on a travel-time curve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelTimePlotDataSample {
    /// Degrees.
    #[serde(rename = "Distance", skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Seconds.
    #[serde(rename = "TravelTime", skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<f64>,
    #[serde(rename = "StatisticalSpread", skip_serializing_if = "Option::is_none")]
    pub statistical_spread: Option<f64>,
    #[serde(rename = "Observability", skip_serializing_if = "Option::is_none")]
    pub observability: Option<f64>,
    #[serde(rename = "RayParameter", skip_serializing_if = "Option::is_none")]
    pub ray_parameter: Option<f64>,
}

impl TravelTimePlotDataSample {
    pub fn new(distance: f64, travel_time: f64) -> Self {
        Self {
            distance: Some(distance),
            travel_time: Some(travel_time),
            ..Self::default()
        }
    }

    /// Set the statistics a `PlotStatistics` request asks for.
    pub fn with_statistics(mut self, statistical_spread: f64, observability: f64) -> Self {
        self.statistical_spread = Some(statistical_spread);
        self.observability = Some(observability);
        self
    }
}

impl Validate for TravelTimePlotDataSample {
    const CLASS: &'static str = "TravelTimePlotDataSample";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require("Distance", &self.distance);
        defects.require("TravelTime", &self.travel_time);
    }
}

impl Entity for TravelTimePlotDataSample {}

/// The curve of a single phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelTimePlotDataBranch {
    #[serde(rename = "Phase", skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Samples in increasing distance.
    #[serde(rename = "Samples", skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<TravelTimePlotDataSample>>,
}

impl TravelTimePlotDataBranch {
    pub fn new(phase: impl Into<String>, samples: Vec<TravelTimePlotDataSample>) -> Self {
        Self {
            phase: Some(phase.into()),
            samples: Some(samples),
        }
    }
}

impl Validate for TravelTimePlotDataBranch {
    const CLASS: &'static str = "TravelTimePlotDataBranch";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require_text("Phase", &self.phase);
        defects.optional_list(&SAMPLES, &self.samples);
    }
}

impl Entity for TravelTimePlotDataBranch {}

/// Every requested phase curve, bounded by a maximum travel time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelTimePlotData {
    /// Seconds.
    #[serde(rename = "MaximumTravelTime", skip_serializing_if = "Option::is_none")]
    pub maximum_travel_time: Option<f64>,
    #[serde(rename = "Branches", skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<TravelTimePlotDataBranch>>,
}

impl TravelTimePlotData {
    pub fn new(maximum_travel_time: f64, branches: Vec<TravelTimePlotDataBranch>) -> Self {
        Self {
            maximum_travel_time: Some(maximum_travel_time),
            branches: Some(branches),
        }
    }

    /// Branch for `phase`, if present.
    pub fn branch(&self, phase: &str) -> Option<&TravelTimePlotDataBranch> {
        self.branches
            .as_deref()?
            .iter()
            .find(|b| b.phase.as_deref() == Some(phase))
    }
}

impl Validate for TravelTimePlotData {
    const CLASS: &'static str = "TravelTimePlotData";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require("MaximumTravelTime", &self.maximum_travel_time);
        defects.optional_list(&BRANCHES, &self.branches);
    }
}

impl Entity for TravelTimePlotData {}
