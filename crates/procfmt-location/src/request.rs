//! # LocationRequest: Locator Input Envelope
//!
//! Everything a locator needs to compute a solution: a starting source
//! position and time, the input picks, and optional control flags. After the
//! locator runs, `OutputData` carries its [`LocationResult`].
//!
//! `EarthModel` and `SlabResolution` default to `ak135` and `2spd` both at
//! construction and when a decoded document omits them. A request whose
//! model field was cleared to `None` therefore encodes without the key and
//! decodes back with the default filled in; it is the one field pair that
//! does not survive a round trip unchanged.

use serde::{Deserialize, Serialize};

use procfmt_core::{
    string_or_number, Defects, Entity, ListDetail, ListField, Source, Timestamp, Validate,
};

use crate::hypocenter::DEPTH_RANGE;
use crate::pick::Pick;
use crate::result::LocationResult;

/// Earth model used when a request names none.
pub const DEFAULT_EARTH_MODEL: &str = "ak135";

/// Slab model resolution used when a request names none.
pub const DEFAULT_SLAB_RESOLUTION: &str = "2spd";

const INPUT_DATA: ListField = ListField {
    key: "InputData",
    noun: "input",
    item: "Pick",
    detail: ListDetail::Inline,
};

fn default_earth_model() -> Option<String> {
    Some(DEFAULT_EARTH_MODEL.to_string())
}

fn default_slab_resolution() -> Option<String> {
    Some(DEFAULT_SLAB_RESOLUTION.to_string())
}

/// Locator input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRequest {
    /// Event identifier. Some producers send a bare integer.
    #[serde(
        rename = "ID",
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Requesting system.
    #[serde(rename = "Source", skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Locator flavor (`RayLoc`).
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub locator_type: Option<String>,
    #[serde(
        rename = "EarthModel",
        default = "default_earth_model",
        skip_serializing_if = "Option::is_none"
    )]
    pub earth_model: Option<String>,
    #[serde(
        rename = "SlabResolution",
        default = "default_slab_resolution",
        skip_serializing_if = "Option::is_none"
    )]
    pub slab_resolution: Option<String>,
    /// Starting origin time.
    #[serde(rename = "SourceOriginTime", skip_serializing_if = "Option::is_none")]
    pub source_origin_time: Option<Timestamp>,
    /// Starting latitude in degrees.
    #[serde(rename = "SourceLatitude", skip_serializing_if = "Option::is_none")]
    pub source_latitude: Option<f64>,
    /// Starting longitude in degrees.
    #[serde(rename = "SourceLongitude", skip_serializing_if = "Option::is_none")]
    pub source_longitude: Option<f64>,
    /// Starting depth in kilometers.
    #[serde(rename = "SourceDepth", skip_serializing_if = "Option::is_none")]
    pub source_depth: Option<f64>,
    /// Picks to locate with.
    #[serde(rename = "InputData", skip_serializing_if = "Option::is_none")]
    pub input_data: Option<Vec<Pick>>,
    #[serde(rename = "IsLocationNew", skip_serializing_if = "Option::is_none")]
    pub is_location_new: Option<bool>,
    #[serde(rename = "IsLocationHeld", skip_serializing_if = "Option::is_none")]
    pub is_location_held: Option<bool>,
    #[serde(rename = "IsDepthHeld", skip_serializing_if = "Option::is_none")]
    pub is_depth_held: Option<bool>,
    #[serde(rename = "IsBayesianDepth", skip_serializing_if = "Option::is_none")]
    pub is_bayesian_depth: Option<bool>,
    #[serde(rename = "BayesianDepth", skip_serializing_if = "Option::is_none")]
    pub bayesian_depth: Option<f64>,
    #[serde(rename = "BayesianSpread", skip_serializing_if = "Option::is_none")]
    pub bayesian_spread: Option<f64>,
    /// Use singular value decomposition in the inversion.
    #[serde(rename = "UseSVD", skip_serializing_if = "Option::is_none")]
    pub use_svd: Option<bool>,
    /// Locator answer; absent on a fresh request.
    #[serde(rename = "OutputData", skip_serializing_if = "Option::is_none")]
    pub output_data: Option<LocationResult>,
}

impl Default for LocationRequest {
    fn default() -> Self {
        Self {
            id: None,
            source: None,
            locator_type: None,
            earth_model: default_earth_model(),
            slab_resolution: default_slab_resolution(),
            source_origin_time: None,
            source_latitude: None,
            source_longitude: None,
            source_depth: None,
            input_data: None,
            is_location_new: None,
            is_location_held: None,
            is_depth_held: None,
            is_bayesian_depth: None,
            bayesian_depth: None,
            bayesian_spread: None,
            use_svd: None,
            output_data: None,
        }
    }
}

impl LocationRequest {
    /// Request with a starting hypothesis and input picks.
    pub fn new(
        origin_time: Timestamp,
        latitude: f64,
        longitude: f64,
        depth: f64,
        input_data: Vec<Pick>,
    ) -> Self {
        Self {
            source_origin_time: Some(origin_time),
            source_latitude: Some(latitude),
            source_longitude: Some(longitude),
            source_depth: Some(depth),
            input_data: Some(input_data),
            ..Self::default()
        }
    }

    /// `true` once a locator answer is attached.
    pub fn is_answered(&self) -> bool {
        self.output_data.is_some()
    }
}

impl Validate for LocationRequest {
    const CLASS: &'static str = "LocationRequest";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require_range("SourceLatitude", self.source_latitude, -90.0, 90.0);
        defects.require_range("SourceLongitude", self.source_longitude, -180.0, 180.0);
        defects.require("SourceOriginTime", &self.source_origin_time);
        defects.require_range("SourceDepth", self.source_depth, DEPTH_RANGE.0, DEPTH_RANGE.1);
        defects.require_list(&INPUT_DATA, &self.input_data);
        defects.optional_child("OutputData", &self.output_data);
        defects.optional_child("Source", &self.source);
    }
}

impl Entity for LocationRequest {
    /// A reloaded request is a new question, so any previous answer is
    /// discarded along with the old fields.
    fn reload(&mut self, fields: Self) {
        *self = Self {
            output_data: None,
            ..fields
        };
    }
}
