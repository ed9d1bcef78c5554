//! # Travel-Time Engine Interface
//!
//! Engines answer a request by returning the same request type with its
//! response populated. A failure is reported as a [`TravelTimeError`] rather
//! than a partially-filled answer.

use thiserror::Error;

use crate::plot_request::TravelTimePlotRequest;
use crate::request::TravelTimeRequest;

type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A travel-time engine could not answer.
#[derive(Error, Debug)]
#[error("travel-time computation failed: {message}")]
pub struct TravelTimeError {
    pub message: String,
    #[source]
    pub cause: Option<Cause>,
}

impl TravelTimeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }
}

/// A travel-time engine.
pub trait TravelTimeService: Send + Sync {
    /// Answer a mode-dispatched request by filling its `Data`.
    fn travel_times(&self, request: &TravelTimeRequest) -> Result<TravelTimeRequest, TravelTimeError>;

    /// Answer a curve request by filling its `Response`.
    fn plot_travel_times(
        &self,
        request: &TravelTimePlotRequest,
    ) -> Result<TravelTimePlotRequest, TravelTimeError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::pg;
    use crate::payload::TravelTimeMode;
    use crate::plot::fixtures::pg_branch;
    use crate::source::TravelTimeSource;
    use procfmt_core::Validate;
    use std::error::Error as _;

    /// Answers every standard request with one canned phase.
    struct CannedEngine;

    impl TravelTimeService for CannedEngine {
        fn travel_times(
            &self,
            request: &TravelTimeRequest,
        ) -> Result<TravelTimeRequest, TravelTimeError> {
            match request.mode() {
                Some(TravelTimeMode::Standard) => Ok(request.clone().with_payload(pg())),
                Some(mode) => Err(TravelTimeError::new(format!("{mode} not supported"))),
                None => Err(TravelTimeError::new("no mode")),
            }
        }

        fn plot_travel_times(
            &self,
            request: &TravelTimePlotRequest,
        ) -> Result<TravelTimePlotRequest, TravelTimeError> {
            let mut answered = request.clone();
            answered.response = Some(vec![pg_branch()]);
            Ok(answered)
        }
    }

    #[test]
    fn test_engine_answers_standard() {
        let engine: &dyn TravelTimeService = &CannedEngine;
        let request = TravelTimeRequest::new(TravelTimeMode::Standard, 12.45, 5280.5);
        let answered = engine.travel_times(&request).unwrap();
        assert_eq!(answered.standard_data().count(), 1);
        assert!(answered.is_valid());
    }

    #[test]
    fn test_engine_rejects_plot_mode() {
        let request = TravelTimeRequest::new(TravelTimeMode::Plot, 12.45, 5280.5);
        let err = CannedEngine.travel_times(&request).unwrap_err();
        assert_eq!(err.to_string(), "travel-time computation failed: Plot not supported");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_engine_answers_plot() {
        let request = TravelTimePlotRequest::new(TravelTimeSource::new(45.905, -112.778, 15.0));
        let answered = CannedEngine.plot_travel_times(&request).unwrap();
        assert!(answered.is_answered());
        assert!(answered.is_valid());
    }

    #[test]
    fn test_error_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "ak135.hed");
        let err = TravelTimeError::with_source("model missing", io);
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("ak135.hed"));
    }
}
