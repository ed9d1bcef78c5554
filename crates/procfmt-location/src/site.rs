//! Station descriptor: the network/station/channel/location code quartet
//! plus the station's geographic position.

use serde::{Deserialize, Serialize};

use procfmt_core::{Defects, Entity, Validate};

/// A seismic station channel and where it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Station code (`BOZ`).
    #[serde(rename = "Station", skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    /// Channel code (`BHZ`).
    #[serde(rename = "Channel", skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Network code (`US`).
    #[serde(rename = "Network", skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Location code (`00`).
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Degrees, [-90, 90].
    #[serde(rename = "Latitude", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Degrees, [-180, 180].
    #[serde(rename = "Longitude", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Meters above the WGS84 datum.
    #[serde(rename = "Elevation", skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

impl Site {
    /// Site with every required field set and no channel or location code.
    pub fn new(
        station: impl Into<String>,
        network: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation: f64,
    ) -> Self {
        Self {
            station: Some(station.into()),
            network: Some(network.into()),
            latitude: Some(latitude),
            longitude: Some(longitude),
            elevation: Some(elevation),
            ..Self::default()
        }
    }

    /// Set the channel code.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Set the location code.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// `NET.STA.CHA.LOC` with `--` for absent codes.
    pub fn scnl(&self) -> String {
        let part = |code: &Option<String>| code.clone().unwrap_or_else(|| "--".to_string());
        format!(
            "{}.{}.{}.{}",
            part(&self.network),
            part(&self.station),
            part(&self.channel),
            part(&self.location)
        )
    }
}

impl Validate for Site {
    const CLASS: &'static str = "Site";

    fn check(&self, defects: &mut Defects<'_>) {
        defects.require_text("Station", &self.station);
        defects.require_text("Network", &self.network);
        defects.require_range("Latitude", self.latitude, -90.0, 90.0);
        defects.require_range("Longitude", self.longitude, -180.0, 180.0);
        defects.require("Elevation", &self.elevation);
    }
}

impl Entity for Site {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn boz() -> Site {
        Site::new("BOZ", "US", 45.59697, -111.62967, 1589.0)
            .with_channel("BHZ")
            .with_location("00")
    }

    #[test]
    fn test_decode_fixture() {
        let site = Site::from_json(&json!({
            "Station": "BOZ", "Channel": "BHZ", "Network": "US", "Location": "00",
            "Latitude": 45.59697, "Longitude": -111.62967, "Elevation": 1589.0
        }))
        .unwrap();
        assert_eq!(site, boz());
        assert!(site.is_valid());
    }

    #[test]
    fn test_optional_codes_omitted() {
        let site = Site::new("BOZ", "US", 45.0, -111.0, 1589.0);
        let value = site.to_json().unwrap();
        assert!(value.get("Channel").is_none());
        assert!(value.get("Location").is_none());
        assert!(site.is_valid());
    }

    #[test]
    fn test_scnl() {
        assert_eq!(boz().scnl(), "US.BOZ.BHZ.00");
        assert_eq!(Site::new("BOZ", "US", 0.0, 0.0, 0.0).scnl(), "US.BOZ.--.--");
    }

    // ---- validation ----

    #[test]
    fn test_empty_site_reports_required_fields() {
        assert_eq!(
            Site::default().errors(),
            vec![
                "No Station in Site Class.",
                "No Network in Site Class.",
                "No Latitude in Site Class.",
                "No Longitude in Site Class.",
                "No Elevation in Site Class.",
            ]
        );
    }

    #[test]
    fn test_empty_codes() {
        let mut site = boz();
        site.station = Some(String::new());
        site.network = Some(String::new());
        assert_eq!(
            site.errors(),
            vec!["Empty Station in Site Class.", "Empty Network in Site Class."]
        );
    }

    #[test]
    fn test_ranges() {
        let mut site = boz();
        site.latitude = Some(90.0001);
        site.longitude = Some(-180.0001);
        assert_eq!(
            site.errors(),
            vec![
                "Latitude in Site Class not in the range of -90 to 90.",
                "Longitude in Site Class not in the range of -180 to 180.",
            ]
        );
    }
}
