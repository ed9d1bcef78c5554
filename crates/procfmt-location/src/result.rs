//! # LocationResult: Locator Output Envelope
//!
//! The solution a locator returns: the hypocenter, the picks that support
//! it (with their output fields populated), and a tail of optional summary
//! statistics.
//!
//! ## CSV Summary
//!
//! [`LocationResult::to_csv`] renders the fixed-column line bulk reporting
//! tools ingest:
//!
//! ```text
//! ID,Latitude,Longitude,Depth,EpochSeconds,RMS,MinimumDistance,Gap,NumberOfAssociatedPhases,0.0,0.0,
//! ```
//!
//! Every column is comma-terminated. Floats use six decimals. Absent values
//! render as `0.0` (floats) or `0` (the count); an absent ID renders as
//! `null`. The two trailing columns are reserved for magnitude and detection
//! time and are always `0.0`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use procfmt_core::{Defects, Entity, ListDetail, ListField, Source, UnknownVariant, Validate};

use crate::ellipse::ErrorEllipse;
use crate::hypocenter::Hypocenter;
use crate::pick::Pick;

const SUPPORTING_DATA: ListField = ListField {
    key: "SupportingData",
    noun: "pick",
    item: "Pick",
    detail: ListDetail::Inline,
};

/// How the locator finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocatorExitCode {
    /// Converged.
    Success,
    /// The starting location was already optimal.
    DidNotMove,
    /// Converged but the error estimates could not be computed.
    ErrorsNotComputed,
    /// Did not converge.
    Failed,
    /// Exit status not reported.
    Unknown,
}

impl LocatorExitCode {
    /// Every exit code, in wire order.
    pub fn all() -> &'static [LocatorExitCode] {
        &[
            Self::Success,
            Self::DidNotMove,
            Self::ErrorsNotComputed,
            Self::Failed,
            Self::Unknown,
        ]
    }

    /// Wire string for this exit code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::DidNotMove => "DidNotMove",
            Self::ErrorsNotComputed => "ErrorsNotComputed",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for LocatorExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocatorExitCode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Success" => Ok(Self::Success),
            "DidNotMove" => Ok(Self::DidNotMove),
            "ErrorsNotComputed" => Ok(Self::ErrorsNotComputed),
            "Failed" => Ok(Self::Failed),
            "Unknown" => Ok(Self::Unknown),
            other => Err(UnknownVariant {
                kind: "locator exit code",
                value: other.to_string(),
            }),
        }
    }
}

/// Locator output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    /// Event identifier echoed from the request.
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Producer of this solution.
    #[serde(rename = "Source", skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// The solution.
    #[serde(rename = "Hypocenter", skip_serializing_if = "Option::is_none")]
    pub hypocenter: Option<Hypocenter>,
    /// Picks used or considered, with output fields populated.
    #[serde(rename = "SupportingData", skip_serializing_if = "Option::is_none")]
    pub supporting_data: Option<Vec<Pick>>,
    #[serde(rename = "NumberOfAssociatedStations", skip_serializing_if = "Option::is_none")]
    pub number_of_associated_stations: Option<i64>,
    #[serde(rename = "NumberOfAssociatedPhases", skip_serializing_if = "Option::is_none")]
    pub number_of_associated_phases: Option<i64>,
    #[serde(rename = "NumberOfUsedStations", skip_serializing_if = "Option::is_none")]
    pub number_of_used_stations: Option<i64>,
    #[serde(rename = "NumberOfUsedPhases", skip_serializing_if = "Option::is_none")]
    pub number_of_used_phases: Option<i64>,
    /// Largest azimuthal gap in degrees, [0, 360].
    #[serde(rename = "Gap", skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    /// Largest gap with any single station removed, [0, 360].
    #[serde(rename = "SecondaryGap", skip_serializing_if = "Option::is_none")]
    pub secondary_gap: Option<f64>,
    /// Distance to the closest station in degrees, non-negative.
    #[serde(rename = "MinimumDistance", skip_serializing_if = "Option::is_none")]
    pub minimum_distance: Option<f64>,
    /// Residual root mean square in seconds.
    #[serde(rename = "RMS", skip_serializing_if = "Option::is_none")]
    pub rms: Option<f64>,
    /// Summary quality flag.
    #[serde(rename = "Quality", skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(rename = "BayesianDepth", skip_serializing_if = "Option::is_none")]
    pub bayesian_depth: Option<f64>,
    #[serde(rename = "BayesianRange", skip_serializing_if = "Option::is_none")]
    pub bayesian_range: Option<f64>,
    #[serde(rename = "DepthImportance", skip_serializing_if = "Option::is_none")]
    pub depth_importance: Option<f64>,
    /// Raw exit code string; see [`LocatorExitCode`].
    #[serde(rename = "LocatorExitCode", skip_serializing_if = "Option::is_none")]
    pub locator_exit_code: Option<String>,
    #[serde(rename = "ErrorEllipse", skip_serializing_if = "Option::is_none")]
    pub error_ellipse: Option<ErrorEllipse>,
}

impl LocationResult {
    /// Result with a hypocenter and its supporting picks.
    pub fn new(hypocenter: Hypocenter, supporting_data: Vec<Pick>) -> Self {
        Self {
            hypocenter: Some(hypocenter),
            supporting_data: Some(supporting_data),
            ..Self::default()
        }
    }

    /// Typed exit code, or `None` when absent or unrecognized.
    pub fn exit_code(&self) -> Option<LocatorExitCode> {
        self.locator_exit_code.as_deref().and_then(|s| s.parse().ok())
    }

    /// Set the exit code.
    pub fn set_exit_code(&mut self, code: LocatorExitCode) {
        self.locator_exit_code = Some(code.as_str().to_string());
    }

    /// One-line CSV summary for bulk reporting.
    pub fn to_csv(&self) -> String {
        fn float(value: Option<f64>) -> String {
            value.map_or_else(|| "0.0".to_string(), |v| format!("{v:.6}"))
        }

        let hypo = self.hypocenter.as_ref();
        let mut line = String::new();
        line.push_str(self.id.as_deref().unwrap_or("null"));
        line.push(',');
        for column in [
            float(hypo.and_then(|h| h.latitude)),
            float(hypo.and_then(|h| h.longitude)),
            float(hypo.and_then(|h| h.depth)),
            float(hypo.and_then(|h| h.time).map(|t| t.epoch_secs_f64())),
            float(self.rms),
            float(self.minimum_distance),
            float(self.gap),
            self.number_of_associated_phases
                .map_or_else(|| "0".to_string(), |n| n.to_string()),
            "0.0".to_string(),
            "0.0".to_string(),
        ] {
            line.push_str(&column);
            line.push(',');
        }
        line
    }
}

impl Validate for LocationResult {
    const CLASS: &'static str = "LocationResult";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require_child("Hypocenter", &self.hypocenter);
        defects.require_list(&SUPPORTING_DATA, &self.supporting_data);
        defects.optional_range("Gap", self.gap, 0.0, 360.0);
        defects.optional_range("SecondaryGap", self.secondary_gap, 0.0, 360.0);
        defects.optional_at_least("MinimumDistance", self.minimum_distance, 0.0);
        defects.optional_variant::<LocatorExitCode>("LocatorExitCode", &self.locator_exit_code);
        defects.optional_child("ErrorEllipse", &self.error_ellipse);
        defects.optional_child("Source", &self.source);
    }
}

impl Entity for LocationResult {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipse::ErrorEllipseAxis;
    use crate::site::Site;
    use procfmt_core::{SourceType, Timestamp};

    fn origin() -> Timestamp {
        Timestamp::parse("2015-12-28T21:32:24.017Z").unwrap()
    }

    fn pick(id: &str) -> Pick {
        Pick::new(
            id,
            Site::new("BOZ", "US", 45.59697, -111.62967, 1589.0),
            Source::new("US", "TestAuthor", SourceType::Unknown),
            origin(),
        )
        .with_phases("P", "P")
        .with_weighting(1.2, 0.45, true)
    }

    fn result() -> LocationResult {
        let mut r = LocationResult::new(
            Hypocenter::new(40.3344, -121.44, origin(), 32.44),
            vec![pick("1"), pick("2")],
        );
        r.id = Some("12345678".into());
        r.gap = Some(33.67);
        r.secondary_gap = Some(33.67);
        r.minimum_distance = Some(2.14);
        r.rms = Some(3.8);
        r.number_of_associated_phases = Some(22);
        r.set_exit_code(LocatorExitCode::Success);
        r.error_ellipse = Some(ErrorEllipse::new(
            [
                ErrorEllipseAxis::new(40.3344, -121.44, 32.44),
                ErrorEllipseAxis::new(12.5, 22.64, 2.44),
                ErrorEllipseAxis::new(12.5, 22.64, 2.44),
            ],
            1.984,
            1.984,
            1.984,
        ));
        r
    }

    #[test]
    fn test_valid_result() {
        assert!(result().is_valid(), "{:?}", result().errors());
        assert_eq!(result().exit_code(), Some(LocatorExitCode::Success));
    }

    #[test]
    fn test_exit_code_roundtrip() {
        for code in LocatorExitCode::all() {
            assert_eq!(code.as_str().parse::<LocatorExitCode>().unwrap(), *code);
        }
        assert!("Crashed".parse::<LocatorExitCode>().is_err());
    }

    // ---- validation ----

    #[test]
    fn test_missing_hypocenter_and_picks() {
        assert_eq!(
            LocationResult::default().errors(),
            vec![
                "No Hypocenter in LocationResult Class.",
                "No pick data in LocationResult Class.",
            ]
        );
    }

    #[test]
    fn test_gap_boundaries() {
        for gap in [0.0, 360.0] {
            let mut r = result();
            r.gap = Some(gap);
            r.secondary_gap = Some(gap);
            assert!(r.is_valid());
        }
        let mut r = result();
        r.gap = Some(-0.0001);
        r.secondary_gap = Some(360.0001);
        assert_eq!(
            r.errors(),
            vec![
                "Gap in LocationResult Class not in the range of 0 to 360.",
                "SecondaryGap in LocationResult Class not in the range of 0 to 360.",
            ]
        );
    }

    #[test]
    fn test_negative_minimum_distance() {
        let mut r = result();
        r.minimum_distance = Some(-1.0);
        assert_eq!(
            r.errors(),
            vec!["MinimumDistance in LocationResult Class is not greater than 0."]
        );
    }

    #[test]
    fn test_invalid_exit_code_and_children() {
        let mut r = result();
        r.locator_exit_code = Some("Crashed".into());
        r.error_ellipse = Some(ErrorEllipse::default());
        r.source = Some(Source::default());
        assert_eq!(
            r.errors(),
            vec![
                "Invalid LocatorExitCode in LocationResult Class.",
                "Invalid ErrorEllipse in LocationResult Class.",
                "Invalid Source in LocationResult Class.",
            ]
        );
    }

    #[test]
    fn test_invalid_supporting_pick_is_detailed() {
        let mut r = result();
        let mut bad = pick("3");
        bad.use_flag = None;
        r.supporting_data = Some(vec![pick("1"), bad]);
        assert_eq!(
            r.errors(),
            vec!["Invalid Pick in SupportingData in LocationResult Class: No Use in Pick Class."]
        );
    }

    // ---- csv ----

    #[test]
    fn test_csv_full() {
        assert_eq!(
            result().to_csv(),
            "12345678,40.334400,-121.440000,32.440000,1451338344.017000,\
             3.800000,2.140000,33.670000,22,0.0,0.0,"
        );
    }

    #[test]
    fn test_csv_absent_values() {
        let r = LocationResult::new(Hypocenter::new(1.0, 2.0, origin(), 3.0), vec![]);
        assert_eq!(
            r.to_csv(),
            "null,1.000000,2.000000,3.000000,1451338344.017000,0.0,0.0,0.0,0,0.0,0.0,"
        );
    }

    #[test]
    fn test_csv_without_hypocenter() {
        assert_eq!(
            LocationResult::default().to_csv(),
            "null,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0,0.0,0.0,"
        );
    }
}
