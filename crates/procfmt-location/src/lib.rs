//! # procfmt-location: Earthquake Location Formats
//!
//! Entities exchanged between an association system and an earthquake
//! locator, plus the [`LocationService`] trait a locator implements.
//!
//! ## Entity Tree
//!
//! ```text
//! LocationRequest
//! ├── Source
//! ├── InputData: [Pick]
//! │   ├── Site
//! │   └── Source
//! └── OutputData: LocationResult
//!     ├── Hypocenter
//!     ├── SupportingData: [Pick]
//!     └── ErrorEllipse
//!         └── E0 / E1 / E2: ErrorEllipseAxis
//! ```
//!
//! Every entity implements [`procfmt_core::Entity`] (JSON codec and reload)
//! and [`procfmt_core::Validate`] (defect reporting).
//!
//! ## Legacy Layout
//!
//! The [`legacy`] module decodes the older `LocationData`/`AssociatedData`
//! layout into the current types.

pub mod ellipse;
pub mod hypocenter;
pub mod legacy;
pub mod pick;
pub mod request;
pub mod result;
pub mod service;
pub mod site;

pub use ellipse::{ErrorEllipse, ErrorEllipseAxis};
pub use hypocenter::{Hypocenter, DEPTH_RANGE};
pub use pick::Pick;
pub use request::{LocationRequest, DEFAULT_EARTH_MODEL, DEFAULT_SLAB_RESOLUTION};
pub use result::{LocationResult, LocatorExitCode};
pub use service::{LocationError, LocationService};
pub use site::Site;
