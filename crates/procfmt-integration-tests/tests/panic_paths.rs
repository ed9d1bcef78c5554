//! # Panic Path Assault
//!
//! Malformed documents must come back as `Err` or as defects, never as a
//! panic. Inputs here are the shapes seen from misbehaving producers.

use serde_json::{json, Value};

use procfmt_core::{CodecError, Entity, Timestamp, Validate};
use procfmt_location::legacy::{location_request_from_legacy, location_result_from_location_data};
use procfmt_location::{ErrorEllipse, Hypocenter, LocationRequest, LocationResult, Pick, Site};
use procfmt_traveltime::legacy::{receiver_from_reciever, requests_from_receiver_batch};
use procfmt_traveltime::{
    TravelTimeData, TravelTimePayload, TravelTimePlotData, TravelTimePlotRequest,
    TravelTimeReceiver, TravelTimeRequest, TravelTimeSession,
};

fn non_objects() -> Vec<Value> {
    vec![
        json!(null),
        json!(true),
        json!(42),
        json!(-1.5),
        json!("Pick"),
        json!([]),
        json!([{"ID": "1"}]),
    ]
}

fn assert_rejects_non_objects<T: Entity + std::fmt::Debug>() {
    for value in non_objects() {
        match T::from_json(&value) {
            Err(CodecError::NotAnObject { entity, .. }) => assert_eq!(entity, T::CLASS),
            other => panic!("{} accepted {value}: {other:?}", T::CLASS),
        }
    }
}

// =========================================================================
// Non-object documents
// =========================================================================

#[test]
fn every_entity_rejects_non_objects() {
    assert_rejects_non_objects::<Site>();
    assert_rejects_non_objects::<Pick>();
    assert_rejects_non_objects::<Hypocenter>();
    assert_rejects_non_objects::<ErrorEllipse>();
    assert_rejects_non_objects::<LocationRequest>();
    assert_rejects_non_objects::<LocationResult>();
    assert_rejects_non_objects::<TravelTimeData>();
    assert_rejects_non_objects::<TravelTimePlotData>();
    assert_rejects_non_objects::<TravelTimeRequest>();
    assert_rejects_non_objects::<TravelTimeReceiver>();
    assert_rejects_non_objects::<TravelTimeSession>();
    assert_rejects_non_objects::<TravelTimePlotRequest>();
}

#[test]
fn legacy_converters_reject_non_objects() {
    for value in non_objects() {
        assert!(location_result_from_location_data(&value).is_err(), "{value}");
        assert!(location_request_from_legacy(&value).is_err(), "{value}");
        assert!(receiver_from_reciever(&value).is_err(), "{value}");
        assert!(requests_from_receiver_batch(&value).is_err(), "{value}");
    }
}

#[test]
fn empty_object_decodes_and_reports() {
    let pick = Pick::from_json(&json!({})).unwrap();
    assert!(!pick.is_valid());
    let request = TravelTimeRequest::from_json(&json!({})).unwrap();
    assert_eq!(request.errors()[0], "No Type in TravelTimeRequest Class.");
}

// =========================================================================
// Wrong field types
// =========================================================================

#[test]
fn string_where_number_expected() {
    let err = Hypocenter::from_json(&json!({"Latitude": "forty"})).unwrap_err();
    assert!(matches!(err, CodecError::Json(_)));
}

#[test]
fn object_where_list_expected() {
    let err = LocationRequest::from_json(&json!({"InputData": {"ID": "1"}})).unwrap_err();
    assert!(matches!(err, CodecError::Json(_)));
}

#[test]
fn number_where_timestamp_expected() {
    assert!(Pick::from_json(&json!({"Time": 1451338344017i64})).is_err());
}

#[test]
fn garbage_timestamp() {
    for text in ["", "yesterday", "2015-13-45T99:99:99Z", "2015-12-28 21:32:24"] {
        assert!(Hypocenter::from_json(&json!({"Time": text})).is_err(), "{text:?}");
    }
}

#[test]
fn boolean_where_identifier_expected() {
    assert!(Pick::from_json(&json!({"ID": true})).is_err());
}

#[test]
fn truncated_text() {
    assert!(Pick::from_json_str(r#"{"ID":"1","Site":{"Station":"BOZ""#).is_err());
    assert!(Pick::from_json_str("").is_err());
}

// =========================================================================
// Polymorphic payloads
// =========================================================================

#[test]
fn payload_junk_is_dropped_not_fatal() {
    let request = TravelTimeRequest::from_json(&json!({
        "Type": "Standard", "Distance": 1.0, "Elevation": 0.0,
        "Data": [null, 7, "TTData", {"Type": "Mystery"}, {"Type": 3}]
    }))
    .unwrap();
    assert!(request.data.is_empty());
}

#[test]
fn known_tag_with_bad_fields_is_an_error() {
    let value = json!({"Type": "TTData", "TravelTime": "fast"});
    assert!(TravelTimePayload::resolve(&value).is_err());
    assert!(TravelTimeRequest::from_json(&json!({"Type": "Standard", "Data": value})).is_err());
}

#[test]
fn unknown_mode_is_a_defect() {
    let request = TravelTimeRequest::from_json(&json!({
        "Type": "Sideways", "Distance": 1.0, "Elevation": 0.0
    }))
    .unwrap();
    assert_eq!(request.mode(), None);
    assert_eq!(request.errors(), vec!["Invalid Type in TravelTimeRequest Class."]);
    assert!(request.to_json().is_ok());
}

// =========================================================================
// Extreme values
// =========================================================================

#[test]
fn deep_unknown_nesting_is_ignored() {
    let mut nested = json!("leaf");
    for _ in 0..64 {
        nested = json!({"nested": nested});
    }
    let site = Site::from_json(&json!({"Station": "BOZ", "Extra": nested})).unwrap();
    assert_eq!(site.station.as_deref(), Some("BOZ"));
}

#[test]
fn huge_lists_validate() {
    let pick = Pick::from_json(&json!({"ID": "1"})).unwrap();
    let request = LocationRequest {
        input_data: Some(vec![pick; 10_000]),
        ..LocationRequest::default()
    };
    let errors = request.errors();
    assert_eq!(
        errors
            .iter()
            .filter(|e| e.starts_with("Invalid Pick in InputData"))
            .count(),
        1
    );
}

#[test]
fn csv_of_empty_result() {
    assert_eq!(
        LocationResult::default().to_csv(),
        "null,0.0,0.0,0.0,0.0,0.0,0.0,0.0,0,0.0,0.0,"
    );
}

#[test]
fn non_finite_numbers_refuse_to_encode() {
    let time = Timestamp::parse("2015-12-28T21:32:24.017Z").unwrap();
    let result = LocationResult::new(Hypocenter::new(40.0, -121.0, time, f64::NAN), vec![]);
    match result.to_json() {
        Err(CodecError::NonFinite { entity, key }) => {
            assert_eq!(entity, "LocationResult");
            assert_eq!(key, "Hypocenter.Depth");
        }
        other => panic!("encoded a NaN depth: {other:?}"),
    }
    assert!(result.to_json_string().is_err());

    let mut pick = Pick::from_json(&json!({"ID": "1"})).unwrap();
    pick.affinity = Some(f64::INFINITY);
    let result = LocationResult::new(Hypocenter::new(40.0, -121.0, time, 10.0), vec![pick]);
    match result.to_json() {
        Err(CodecError::NonFinite { key, .. }) => assert_eq!(key, "SupportingData[0].Affinity"),
        other => panic!("encoded an infinite affinity: {other:?}"),
    }
}
