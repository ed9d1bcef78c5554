//! # procfmt-traveltime: Travel-Time Formats
//!
//! Entities exchanged with a seismic travel-time engine, plus the
//! [`TravelTimeService`] trait an engine implements.
//!
//! ## Requests
//!
//! - [`TravelTimeRequest`]: one receiver geometry and a mode. The answer
//!   arrives as polymorphic [`TravelTimePayload`]s (see [`payload`]).
//! - [`TravelTimePlotRequest`]: one [`TravelTimeSource`]; the answer is a
//!   list of [`TravelTimePlotDataBranch`] curves.
//! - [`TravelTimeSession`]: engine options for a run of requests.
//!
//! ## Legacy Layouts
//!
//! The [`legacy`] module converts the misspelled receiver layout and the
//! receiver-batch request layout into the types above.

pub mod data;
pub mod legacy;
pub mod payload;
pub mod plot;
pub mod plot_request;
pub mod receiver;
pub mod request;
pub mod service;
pub mod session;
pub mod source;

pub use data::{TravelTimeData, TravelTimeFigures};
pub use payload::{TravelTimeMode, TravelTimePayload, PLOT_TAG, STANDARD_TAG};
pub use plot::{TravelTimePlotData, TravelTimePlotDataBranch, TravelTimePlotDataSample};
pub use plot_request::TravelTimePlotRequest;
pub use receiver::TravelTimeReceiver;
pub use request::TravelTimeRequest;
pub use service::{TravelTimeError, TravelTimeService};
pub use session::{TravelTimeSession, SESSION_DEPTH_RANGE};
pub use source::{TravelTimeSource, SOURCE_DEPTH_RANGE};
