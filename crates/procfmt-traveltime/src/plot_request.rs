//! # TravelTimePlotRequest: Curve Request for One Source
//!
//! Asks an engine for travel-time curves from one [`TravelTimeSource`]. The
//! engine answers by filling `Response` with one branch per phase.

use serde::{Deserialize, Serialize};

use procfmt_core::{Defects, Entity, ListDetail, ListField, Validate};

use crate::plot::TravelTimePlotDataBranch;
use crate::source::TravelTimeSource;

const RESPONSE: ListField = ListField {
    key: "Response",
    noun: "response",
    item: "TravelTimePlotDataBranch",
    detail: ListDetail::Summary,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelTimePlotRequest {
    #[serde(rename = "Source", skip_serializing_if = "Option::is_none")]
    pub source: Option<TravelTimeSource>,
    /// Earth model name; engines default to `AK135` when absent.
    #[serde(rename = "EarthModel", skip_serializing_if = "Option::is_none")]
    pub earth_model: Option<String>,
    /// Phase codes wanted; all phases when absent.
    #[serde(rename = "PhaseTypes", skip_serializing_if = "Option::is_none")]
    pub phase_types: Option<Vec<String>>,
    #[serde(rename = "ReturnAllPhases", skip_serializing_if = "Option::is_none")]
    pub return_all_phases: Option<bool>,
    /// Return every arrival of every phase, not just the first.
    #[serde(rename = "ReturnBackBranches", skip_serializing_if = "Option::is_none")]
    pub return_back_branches: Option<bool>,
    /// Convert tectonic phase codes to their regional equivalents.
    #[serde(rename = "ConvertTectonic", skip_serializing_if = "Option::is_none")]
    pub convert_tectonic: Option<bool>,
    /// Curves; absent on a request.
    #[serde(rename = "Response", skip_serializing_if = "Option::is_none")]
    pub response: Option<Vec<TravelTimePlotDataBranch>>,
}

impl TravelTimePlotRequest {
    pub fn new(source: TravelTimeSource) -> Self {
        Self {
            source: Some(source),
            ..Self::default()
        }
    }

    pub fn with_phase_types<I, S>(mut self, phase_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phase_types = Some(phase_types.into_iter().map(Into::into).collect());
        self
    }

    /// `true` once an engine has attached curves.
    pub fn is_answered(&self) -> bool {
        self.response.as_ref().is_some_and(|r| !r.is_empty())
    }
}

impl Validate for TravelTimePlotRequest {
    const CLASS: &'static str = "TravelTimePlotRequest";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require_child("Source", &self.source);
        defects.optional_list(&RESPONSE, &self.response);
    }
}

impl Entity for TravelTimePlotRequest {
    /// Reloading asks a new question, so curves from a previous answer are
    /// discarded.
    fn reload(&mut self, fields: Self) {
        *self = Self {
            response: None,
            ..fields
        };
    }
}
