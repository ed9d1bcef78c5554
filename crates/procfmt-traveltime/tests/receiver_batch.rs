//! A receiver batch split into requests, answered by an engine, and
//! written back out in the canonical layout.

use serde_json::json;

use procfmt_core::{Entity, Validate};
use procfmt_traveltime::legacy::requests_from_receiver_batch;
use procfmt_traveltime::{
    TravelTimeData, TravelTimeError, TravelTimeFigures, TravelTimeMode, TravelTimePlotRequest,
    TravelTimeRequest, TravelTimeService,
};

/// Travel time grows linearly with distance; plot requests are refused.
struct LinearEngine {
    seconds_per_degree: f64,
}

impl TravelTimeService for LinearEngine {
    fn travel_times(&self, request: &TravelTimeRequest) -> Result<TravelTimeRequest, TravelTimeError> {
        if request.mode() != Some(TravelTimeMode::Standard) {
            return Err(TravelTimeError::new("only standard requests are supported"));
        }
        let distance = request
            .distance
            .ok_or_else(|| TravelTimeError::new("receiver has no distance"))?;
        let figures = TravelTimeFigures {
            travel_time: distance * self.seconds_per_degree,
            distance_derivative: self.seconds_per_degree,
            depth_derivative: 0.0,
            ray_derivative: 0.0,
            statistical_spread: 1.0,
            observability: 1.0,
        };
        let mut answered = request.clone();
        answered.data.clear();
        Ok(answered.with_payload(TravelTimeData::new("P", figures, "1", "1", true, true)))
    }

    fn plot_travel_times(
        &self,
        _request: &TravelTimePlotRequest,
    ) -> Result<TravelTimePlotRequest, TravelTimeError> {
        Err(TravelTimeError::new("plot curves are not supported"))
    }
}

fn batch() -> serde_json::Value {
    json!({
        "Source": {"Latitude": 45.905, "Longitude": -112.778, "Depth": 15.0},
        "EarthModel": "AK135", "PhaseTypes": ["P"],
        "Receivers": [
            {"ID": "1", "Distance": 10.0, "Elevation": 0.0},
            {"ID": "2", "Distance": 20.0, "Elevation": 150.0},
            {"ID": 3, "Latitude": 46.0, "Longitude": -112.0, "Elevation": 10.0}
        ]
    })
}

#[test]
fn batch_answers_located_receivers() {
    let engine = LinearEngine { seconds_per_degree: 13.5 };
    let split = requests_from_receiver_batch(&batch()).unwrap();
    assert!(split.session.is_valid(), "{:?}", split.session.errors());
    assert_eq!(split.requests.len(), 3);

    let mut answered = Vec::new();
    let mut failed = Vec::new();
    for entry in &split.requests {
        match engine.travel_times(&entry.request) {
            Ok(request) => answered.push((entry.receiver_id.clone(), request)),
            Err(e) => failed.push((entry.receiver_id.clone(), e)),
        }
    }

    assert_eq!(answered.len(), 2);
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].0.as_deref(), Some("3"));
    assert_eq!(
        failed[0].1.to_string(),
        "travel-time computation failed: receiver has no distance"
    );

    let (id, request) = &answered[1];
    assert_eq!(id.as_deref(), Some("2"));
    assert!(request.is_valid(), "{:?}", request.errors());
    let encoded = request.to_json().unwrap();
    assert_eq!(encoded["Type"], "Standard");
    assert_eq!(encoded["Data"][0]["Type"], "TTData");
    assert_eq!(encoded["Data"][0]["TravelTime"], json!(270.0));
}

#[test]
fn batch_requests_without_distance_report_it() {
    let split = requests_from_receiver_batch(&batch()).unwrap();
    let located = &split.requests[2].request;
    assert_eq!(located.latitude, Some(46.0));
    assert_eq!(located.errors(), vec!["No Distance in TravelTimeRequest Class."]);
}
