//! # Temporal Types: UTC Millisecond Timestamps
//!
//! Defines `Timestamp`, the single date type every entity uses on the wire.
//! All pick times, origin times, and hypocenter times are rendered as
//! ISO 8601 in UTC with exactly three fractional digits and a `Z` suffix:
//!
//! ```text
//! 2015-12-28T21:32:24.017Z
//! ```
//!
//! Sub-millisecond precision is truncated at construction, so an encoded
//! timestamp always decodes back to an equal value.
//!
//! Decoding is lenient about offsets: producers that emit `+00:00` or a
//! local offset are converted to UTC. Encoding is strict and always emits `Z`.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CodecError;

/// A UTC timestamp, truncated to millisecond precision.
///
/// # Construction
///
/// - [`Timestamp::now()`]: current UTC time, truncated.
/// - [`Timestamp::from_utc()`]: from a `DateTime<Utc>`, truncating sub-milliseconds.
/// - [`Timestamp::parse()`]: from an RFC 3339 string with any offset.
/// - [`Timestamp::from_epoch_millis()`]: from Unix epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to milliseconds.
    pub fn now() -> Self {
        Self(truncate_to_millis(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating
    /// sub-millisecond components.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_millis(dt))
    }

    /// Parse an RFC 3339 / ISO 8601 string.
    ///
    /// Any offset is accepted and converted to UTC.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidTimestamp`] if the string is not valid
    /// RFC 3339.
    pub fn parse(s: &str) -> Result<Self, CodecError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| CodecError::InvalidTimestamp {
            text: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(truncate_to_millis(dt.with_timezone(&Utc))))
    }

    /// Create a timestamp from Unix epoch milliseconds.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, CodecError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| CodecError::InvalidTimestamp {
                text: millis.to_string(),
                reason: "epoch milliseconds out of range".to_string(),
            })
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Unix epoch milliseconds.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Unix epoch seconds with millisecond fraction.
    pub fn epoch_secs_f64(&self) -> f64 {
        self.epoch_millis() as f64 * 0.001
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS.sssZ`.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_utc(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ISO 8601 timestamp string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
                Timestamp::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }
}

/// Truncate a `DateTime<Utc>` to millisecond precision.
fn truncate_to_millis(dt: DateTime<Utc>) -> DateTime<Utc> {
    let nanos = dt.nanosecond();
    // Leap-second representations carry nanos >= 1e9; keep the extra second.
    let truncated = nanos - nanos % 1_000_000;
    dt.with_nanosecond(truncated).unwrap_or(dt)
}
