use serde::{Deserialize, Serialize};

use procfmt_core::{Defects, Entity, Timestamp, Validate};

/// Depth bounds in kilometers shared by hypocenters and location requests.
pub const DEPTH_RANGE: (f64, f64) = (-100.0, 1500.0);

/// Earthquake origin: position, time, and optional one-sigma errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hypocenter {
    /// Degrees, [-90, 90].
    #[serde(rename = "Latitude", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Degrees, [-180, 180].
    #[serde(rename = "Longitude", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Origin time.
    #[serde(rename = "Time", skip_serializing_if = "Option::is_none")]
    pub time: Option<Timestamp>,
    /// Kilometers, [-100, 1500].
    #[serde(rename = "Depth", skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    /// Kilometers.
    #[serde(rename = "LatitudeError", skip_serializing_if = "Option::is_none")]
    pub latitude_error: Option<f64>,
    /// Kilometers.
    #[serde(rename = "LongitudeError", skip_serializing_if = "Option::is_none")]
    pub longitude_error: Option<f64>,
    /// Seconds.
    #[serde(rename = "TimeError", skip_serializing_if = "Option::is_none")]
    pub time_error: Option<f64>,
    /// Kilometers.
    #[serde(rename = "DepthError", skip_serializing_if = "Option::is_none")]
    pub depth_error: Option<f64>,
}

impl Hypocenter {
    /// Hypocenter with position and time, no error estimates.
    pub fn new(latitude: f64, longitude: f64, time: Timestamp, depth: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            time: Some(time),
            depth: Some(depth),
            ..Self::default()
        }
    }

    /// Set all four error estimates.
    pub fn with_errors(
        mut self,
        latitude_error: f64,
        longitude_error: f64,
        time_error: f64,
        depth_error: f64,
    ) -> Self {
        self.latitude_error = Some(latitude_error);
        self.longitude_error = Some(longitude_error);
        self.time_error = Some(time_error);
        self.depth_error = Some(depth_error);
        self
    }
}

impl Validate for Hypocenter {
    const CLASS: &'static str = "Hypocenter";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require_range("Latitude", self.latitude, -90.0, 90.0);
        defects.require_range("Longitude", self.longitude, -180.0, 180.0);
        defects.require("Time", &self.time);
        defects.require_range("Depth", self.depth, DEPTH_RANGE.0, DEPTH_RANGE.1);
    }
}

impl Entity for Hypocenter {}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn origin() -> Timestamp {
        Timestamp::parse("2015-12-28T21:32:24.017Z").unwrap()
    }

    proptest! {
        /// Any in-range position is valid.
        #[test]
        fn in_range_is_valid(
            lat in -90.0f64..=90.0,
            lon in -180.0f64..=180.0,
            depth in -100.0f64..=1500.0,
        ) {
            prop_assert!(Hypocenter::new(lat, lon, origin(), depth).is_valid());
        }

        /// Any latitude beyond the poles is reported, and only that.
        #[test]
        fn out_of_range_latitude_reported(lat in prop_oneof![-1.0e4f64..-90.0001, 90.0001f64..1.0e4]) {
            let errors = Hypocenter::new(lat, 0.0, origin(), 10.0).errors();
            prop_assert_eq!(errors, vec!["Latitude in Hypocenter Class not in the range of -90 to 90.".to_string()]);
        }

        /// Valid hypocenters survive an encode/decode cycle unchanged.
        #[test]
        fn roundtrip(
            lat in -90.0f64..=90.0,
            lon in -180.0f64..=180.0,
            depth in -100.0f64..=1500.0,
            millis in 0i64..4_000_000_000_000,
        ) {
            let hypo = Hypocenter::new(lat, lon, Timestamp::from_epoch_millis(millis).unwrap(), depth);
            let text = hypo.to_json_string().unwrap();
            prop_assert_eq!(Hypocenter::from_json_str(&text).unwrap(), hypo);
        }
    }
}
