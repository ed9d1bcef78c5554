//! # procfmt-core: Foundational Types for Seismic Processing Formats
//!
//! This crate is the base of the processing-formats workspace. It defines
//! the pieces every entity shares: the wire timestamp, the JSON codec
//! contract, and the validation engine. The `procfmt-location` and
//! `procfmt-traveltime` crates build their entities on top of it.
//!
//! ## Key Design Principles
//!
//! 1. **Validation defects are data.** [`Validate::errors`] returns an ordered
//!    list of human-readable strings. An entity with defects is still a
//!    usable value; it is simply not fit to hand to a processing service.
//!
//! 2. **Every field is optional in memory.** Requiredness is a validation
//!    rule, not a type-level constraint, so partially-populated documents
//!    decode, re-encode, and report exactly what is missing.
//!
//! 3. **One timestamp format.** [`Timestamp`] renders UTC with millisecond
//!    precision and a `Z` suffix, so all entities agree on the wire.
//!
//! 4. **Checked coercion.** Decoding never narrows with an unchecked cast.
//!    Integers widen to floats, numeric identifiers become strings, and
//!    everything else of the wrong type is a [`CodecError`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `procfmt-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod codec;
pub mod config;
pub mod error;
pub mod source;
pub mod temporal;
pub mod validation;

// Re-export primary types for ergonomic imports.
pub use codec::{discriminator, string_or_number, Entity};
pub use config::{ListPolicy, ValidationConfig, LIST_POLICY_ENV};
pub use error::{CodecError, ConfigError, ProcfmtError, UnknownVariant};
pub use source::{Source, SourceType};
pub use temporal::Timestamp;
pub use validation::{Defects, ListDetail, ListField, Validate};
