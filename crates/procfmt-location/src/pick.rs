//! # Pick: A Phase Arrival Observation
//!
//! A pick is built by the submitter with its input fields only. The locator
//! returns a copy with the output fields (`LocatedPhase`, `Residual`,
//! `Distance`, `Azimuth`, `Weight`, `Importance`) filled in. Output fields
//! are optional and never required for validity.

use serde::{Deserialize, Serialize};

use procfmt_core::{Defects, Entity, Source, Timestamp, Validate};

use crate::site::Site;

/// One arrival observed at one site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    /// Pick identifier, unique within the submitting system.
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Where the arrival was observed.
    #[serde(rename = "Site", skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    /// Who made the pick.
    #[serde(rename = "Source", skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    /// Arrival time.
    #[serde(rename = "Time", skip_serializing_if = "Option::is_none")]
    pub time: Option<Timestamp>,
    /// Association affinity, larger is stickier.
    #[serde(rename = "Affinity", skip_serializing_if = "Option::is_none")]
    pub affinity: Option<f64>,
    /// Pick quality in seconds.
    #[serde(rename = "Quality", skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
    /// Whether the locator may use this pick.
    #[serde(rename = "Use", skip_serializing_if = "Option::is_none")]
    pub use_flag: Option<bool>,
    /// Phase code assigned by the picker.
    #[serde(rename = "PickedPhase", skip_serializing_if = "Option::is_none")]
    pub picked_phase: Option<String>,
    /// Phase code assigned by the associator.
    #[serde(rename = "AssociatedPhase", skip_serializing_if = "Option::is_none")]
    pub associated_phase: Option<String>,
    /// Phase code assigned by the locator (output).
    #[serde(rename = "LocatedPhase", skip_serializing_if = "Option::is_none")]
    pub located_phase: Option<String>,
    /// Travel-time residual in seconds (output).
    #[serde(rename = "Residual", skip_serializing_if = "Option::is_none")]
    pub residual: Option<f64>,
    /// Source-receiver distance in degrees (output).
    #[serde(rename = "Distance", skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Receiver azimuth from the source in degrees (output).
    #[serde(rename = "Azimuth", skip_serializing_if = "Option::is_none")]
    pub azimuth: Option<f64>,
    /// Weight used in the inversion (output).
    #[serde(rename = "Weight", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Data importance to the solution (output).
    #[serde(rename = "Importance", skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
}

impl Pick {
    /// Pick with identity, site, source, and time set.
    pub fn new(id: impl Into<String>, site: Site, source: Source, time: Timestamp) -> Self {
        Self {
            id: Some(id.into()),
            site: Some(site),
            source: Some(source),
            time: Some(time),
            ..Self::default()
        }
    }

    /// Set the picked and associated phase codes.
    pub fn with_phases(
        mut self,
        picked_phase: impl Into<String>,
        associated_phase: impl Into<String>,
    ) -> Self {
        self.picked_phase = Some(picked_phase.into());
        self.associated_phase = Some(associated_phase.into());
        self
    }

    /// Set affinity, quality, and the use flag.
    pub fn with_weighting(mut self, affinity: f64, quality: f64, use_flag: bool) -> Self {
        self.affinity = Some(affinity);
        self.quality = Some(quality);
        self.use_flag = Some(use_flag);
        self
    }

    /// `true` when any locator output field is set.
    pub fn has_solution(&self) -> bool {
        self.located_phase.is_some()
            || self.residual.is_some()
            || self.distance.is_some()
            || self.azimuth.is_some()
            || self.weight.is_some()
            || self.importance.is_some()
    }

    /// Copy of this pick with every locator output field cleared.
    pub fn without_solution(&self) -> Self {
        Self {
            located_phase: None,
            residual: None,
            distance: None,
            azimuth: None,
            weight: None,
            importance: None,
            ..self.clone()
        }
    }
}

impl Validate for Pick {
    const CLASS: &'static str = "Pick";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require_text("ID", &self.id);
        defects.require_child("Site", &self.site);
        defects.require_child("Source", &self.source);
        defects.require("Time", &self.time);
        defects.require("Affinity", &self.affinity);
        defects.require("Quality", &self.quality);
        defects.require("Use", &self.use_flag);
        defects.require_text("PickedPhase", &self.picked_phase);
        defects.require_text("AssociatedPhase", &self.associated_phase);
        defects.optional_text("LocatedPhase", &self.located_phase);
    }
}

impl Entity for Pick {}
