//! Serde codecs for the API's epoch-second timestamps.
//!
//! The API transmits every date as a signed 64-bit count of seconds
//! since the Unix epoch, negative for pre-1970 dates. These modules plug
//! into `#[serde(with = ...)]` on `DateTime<Utc>` fields.
//!
//! See: <https://api.stackexchange.com/docs/dates>

use chrono::{DateTime, Utc};

fn from_epoch<E: serde::de::Error>(secs: i64) -> Result<DateTime<Utc>, E> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| E::custom(format!("epoch seconds out of range: {secs}")))
}

/// Codec for required timestamp fields.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.timestamp())
    }

    /// # Errors
    ///
    /// Fails when the wire value is not an integer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::from_epoch(i64::deserialize(deserializer)?)
    }
}

/// Codec for optional timestamp fields.
///
/// Decodes absent or `null` values to `None`; pair with
/// `#[serde(default)]` so missing keys are tolerated, and with
/// `skip_serializing_if = "Option::is_none"` to omit unset fields on the
/// way out.
pub mod epoch_seconds_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_i64(dt.timestamp()),
            None => serializer.serialize_none(),
        }
    }

    /// # Errors
    ///
    /// Fails when the wire value is present but not an integer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<i64>::deserialize(deserializer)?
            .map(super::from_epoch)
            .transpose()
    }
}
