//! Error ellipsoid of a location solution: three principal axes plus the
//! summary projections bulletin systems report.

use serde::{Deserialize, Serialize};

use procfmt_core::{Defects, Entity, Validate};

/// One principal axis of the error ellipsoid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorEllipseAxis {
    /// Semi-axis length in kilometers.
    #[serde(rename = "Error", skip_serializing_if = "Option::is_none")]
    pub error: Option<f64>,
    /// Degrees clockwise from north.
    #[serde(rename = "Azimuth", skip_serializing_if = "Option::is_none")]
    pub azimuth: Option<f64>,
    /// Degrees down from horizontal.
    #[serde(rename = "Dip", skip_serializing_if = "Option::is_none")]
    pub dip: Option<f64>,
}

impl ErrorEllipseAxis {
    /// Fully-populated axis.
    pub fn new(error: f64, azimuth: f64, dip: f64) -> Self {
        Self {
            error: Some(error),
            azimuth: Some(azimuth),
            dip: Some(dip),
        }
    }
}

impl Validate for ErrorEllipseAxis {
    const CLASS: &'static str = "ErrorEllipseAxis";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require("Error", &self.error);
        defects.require("Azimuth", &self.azimuth);
        defects.require("Dip", &self.dip);
    }
}

impl Entity for ErrorEllipseAxis {}

/// Three-axis error ellipsoid with its horizontal and vertical summaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorEllipse {
    /// Largest axis.
    #[serde(rename = "E0", skip_serializing_if = "Option::is_none")]
    pub e0: Option<ErrorEllipseAxis>,
    /// Intermediate axis.
    #[serde(rename = "E1", skip_serializing_if = "Option::is_none")]
    pub e1: Option<ErrorEllipseAxis>,
    /// Smallest axis.
    #[serde(rename = "E2", skip_serializing_if = "Option::is_none")]
    pub e2: Option<ErrorEllipseAxis>,
    /// Kilometers.
    #[serde(rename = "MaximumHorizontalProjection", skip_serializing_if = "Option::is_none")]
    pub maximum_horizontal_projection: Option<f64>,
    /// Kilometers.
    #[serde(rename = "MaximumVerticalProjection", skip_serializing_if = "Option::is_none")]
    pub maximum_vertical_projection: Option<f64>,
    /// Kilometers.
    #[serde(rename = "EquivalentHorizontalRadius", skip_serializing_if = "Option::is_none")]
    pub equivalent_horizontal_radius: Option<f64>,
}

impl ErrorEllipse {
    /// Fully-populated ellipse.
    pub fn new(
        axes: [ErrorEllipseAxis; 3],
        maximum_horizontal_projection: f64,
        maximum_vertical_projection: f64,
        equivalent_horizontal_radius: f64,
    ) -> Self {
        let [e0, e1, e2] = axes;
        Self {
            e0: Some(e0),
            e1: Some(e1),
            e2: Some(e2),
            maximum_horizontal_projection: Some(maximum_horizontal_projection),
            maximum_vertical_projection: Some(maximum_vertical_projection),
            equivalent_horizontal_radius: Some(equivalent_horizontal_radius),
        }
    }
}

impl Validate for ErrorEllipse {
    const CLASS: &'static str = "ErrorEllipse";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require_child("E0", &self.e0);
        defects.require_child("E1", &self.e1);
        defects.require_child("E2", &self.e2);
        defects.require("MaximumHorizontalProjection", &self.maximum_horizontal_projection);
        defects.require("MaximumVerticalProjection", &self.maximum_vertical_projection);
        defects.require("EquivalentHorizontalRadius", &self.equivalent_horizontal_radius);
    }
}

impl Entity for ErrorEllipse {}
