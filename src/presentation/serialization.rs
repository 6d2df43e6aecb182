/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Serialization helpers shared by the API models
//!
//! - [`Timestamp`]: dates that arrive either as RFC 3339 strings or as epoch seconds
//! - [`double_option`]: fields that must distinguish "omit" from explicit `null`
//! - [`comma_separated`]: list filters encoded as `a,b,c` in query strings
//! - [`null_as_empty_vec`]: arrays the API sometimes sends as `null`

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A point in time as reported by the API
///
/// Most endpoints use RFC 3339 strings, while a few (rate limits, some
/// webhook payloads) use integer epoch seconds. Both are accepted; the value
/// is always written back as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Builds a timestamp from epoch seconds
    #[must_use]
    pub fn from_unix(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Timestamp)
    }

    /// Current time
    #[must_use]
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Epoch seconds of this timestamp
    #[must_use]
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an RFC 3339 date string or epoch seconds")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Timestamp, E> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(Timestamp(dt.with_timezone(&Utc)));
        }
        value
            .parse::<i64>()
            .ok()
            .and_then(Timestamp::from_unix)
            .ok_or_else(|| E::custom(format!("invalid timestamp: {value}")))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Timestamp, E> {
        Timestamp::from_unix(value)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {value}")))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Timestamp, E> {
        let secs = i64::try_from(value)
            .map_err(|_| E::custom(format!("timestamp out of range: {value}")))?;
        self.visit_i64(secs)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Timestamp, E> {
        self.visit_i64(value.trunc() as i64)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

/// (De)serializes `Option<Option<T>>` fields
///
/// Outer `None` means the field is left out (pair it with
/// `skip_serializing_if = "Option::is_none"`), `Some(None)` is sent as an
/// explicit `null` and `Some(Some(v))` as the value itself.
pub mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serializes the inner option, writing `null` for `Some(None)`
    pub fn serialize<S, T>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    /// A present field, even `null`, becomes `Some(_)`; pair with `#[serde(default)]`
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

/// Serializes a list of strings as a single comma separated value
#[allow(clippy::ptr_arg)]
pub fn comma_separated<S: Serializer>(values: &Vec<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&values.join(","))
}

/// Deserializes `null` as an empty vector
pub fn null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
