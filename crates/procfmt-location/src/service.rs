//! # Locator Interface
//!
//! The seam between these formats and an actual location engine. Engines
//! implement [`LocationService`]; callers hand it a validated
//! [`LocationRequest`] and receive a [`LocationResult`].
//!
//! Implementations must be `Send + Sync` so one engine can serve
//! concurrent callers.

use thiserror::Error;

use crate::request::LocationRequest;
use crate::result::LocationResult;

type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A locator could not produce a solution.
#[derive(Error, Debug)]
#[error("location failed: {message}")]
pub struct LocationError {
    /// What went wrong, in the engine's words.
    pub message: String,
    /// Underlying failure, when there is one.
    #[source]
    pub cause: Option<Cause>,
}

impl LocationError {
    /// Failure with a message only.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Failure wrapping an underlying error.
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

/// An earthquake location engine.
pub trait LocationService: Send + Sync {
    /// Compute a solution for `request`.
    fn locate(&self, request: &LocationRequest) -> Result<LocationResult, LocationError>;
}
